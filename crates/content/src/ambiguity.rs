use syntax_core::model::{GradeScale, QuestionBank, QuestionBankError, QuestionDraft, TreeNode};

/// Hero blurb for the ambiguity page, rendered as markdown.
pub const INTRO: &str = "\
A grammar is **ambiguous** when the same sentence can be derived in more \
than one way, producing *multiple distinct syntax trees*.

Compilers need exactly one reading of every program, so ambiguity has to be \
designed out, usually with precedence and associativity rules.";

/// One reading of an ambiguous expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub title: &'static str,
    pub tree: TreeNode,
    pub meaning: &'static str,
    pub result: Option<&'static str>,
}

/// An ambiguous expression with its competing syntax trees.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbiguityCase {
    pub expression: &'static str,
    pub description: &'static str,
    pub interpretations: Vec<Interpretation>,
}

#[must_use]
pub fn cases() -> Vec<AmbiguityCase> {
    vec![
        AmbiguityCase {
            expression: "id + id * id",
            description: "Ambiguity in operator precedence",
            interpretations: vec![
                Interpretation {
                    title: "Reading 1: (id + id) * id",
                    tree: TreeNode::branch(
                        "mult1",
                        "*",
                        vec![
                            TreeNode::branch(
                                "plus1",
                                "+",
                                vec![TreeNode::leaf("id1", "id"), TreeNode::leaf("id2", "id")],
                            ),
                            TreeNode::leaf("id3", "id"),
                        ],
                    ),
                    meaning: "Add first, then multiply",
                    result: Some("With id = 2: (2 + 2) * 2 = 8"),
                },
                Interpretation {
                    title: "Reading 2: id + (id * id)",
                    tree: TreeNode::branch(
                        "plus2",
                        "+",
                        vec![
                            TreeNode::leaf("id4", "id"),
                            TreeNode::branch(
                                "mult2",
                                "*",
                                vec![TreeNode::leaf("id5", "id"), TreeNode::leaf("id6", "id")],
                            ),
                        ],
                    ),
                    meaning: "Multiply first, then add",
                    result: Some("With id = 2: 2 + (2 * 2) = 6"),
                },
            ],
        },
        AmbiguityCase {
            expression: "a - b - c",
            description: "Ambiguity in associativity",
            interpretations: vec![
                Interpretation {
                    title: "Left associative: (a - b) - c",
                    tree: TreeNode::branch(
                        "sub1",
                        "-",
                        vec![
                            TreeNode::branch(
                                "sub_inner1",
                                "-",
                                vec![TreeNode::leaf("a1", "a"), TreeNode::leaf("b1", "b")],
                            ),
                            TreeNode::leaf("c1", "c"),
                        ],
                    ),
                    meaning: "Subtract left to right",
                    result: Some("With a=10, b=3, c=2: (10 - 3) - 2 = 5"),
                },
                Interpretation {
                    title: "Right associative: a - (b - c)",
                    tree: TreeNode::branch(
                        "sub2",
                        "-",
                        vec![
                            TreeNode::leaf("a2", "a"),
                            TreeNode::branch(
                                "sub_inner2",
                                "-",
                                vec![TreeNode::leaf("b2", "b"), TreeNode::leaf("c2", "c")],
                            ),
                        ],
                    ),
                    meaning: "Subtract right to left",
                    result: Some("With a=10, b=3, c=2: 10 - (3 - 2) = 9"),
                },
            ],
        },
    ]
}

//
// ─── DANGLING ELSE ─────────────────────────────────────────────────────────────
//

/// The ambiguous statement the walkthrough is built around.
pub const DANGLING_ELSE_CODE: &str = "if (x > 0) if (y > 0) print('A') else print('B')";

/// One resolution of the dangling else, with a step-by-step execution trace
/// for x = 1, y = -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInterpretation {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub execution: &'static [&'static str],
    pub result: &'static str,
}

#[must_use]
pub fn dangling_else_interpretations() -> [CodeInterpretation; 2] {
    [
        CodeInterpretation {
            title: "Reading 1: else bound to the inner if",
            description: "The else belongs to the second if (if y > 0)",
            code: "if (x > 0) {\n    if (y > 0)\n        print('A')\n    else\n        print('B')\n}",
            execution: &[
                "x > 0? True → enter the first if",
                "y > 0? False → take the inner if's else",
                "Run: print('B')",
                "Result: B is printed",
            ],
            result: "B",
        },
        CodeInterpretation {
            title: "Reading 2: else bound to the outer if",
            description: "The else belongs to the first if (if x > 0)",
            code: "if (x > 0) {\n    if (y > 0)\n        print('A')\n} else {\n    print('B')\n}",
            execution: &[
                "x > 0? True → enter the first if",
                "y > 0? False → skip print('A')",
                "Leave the inner if; no else taken",
                "Result: nothing is printed",
            ],
            result: "Nothing",
        },
    ]
}

/// The ambiguity quiz: ten questions, one of them open-ended.
///
/// # Errors
///
/// Returns a `QuestionBankError` if any bundled question fails validation.
pub fn quiz() -> Result<QuestionBank, QuestionBankError> {
    QuestionBank::new(
        "Ambiguity Quiz",
        vec![
            QuestionDraft::multiple_choice(
                "What is an ambiguous grammar?",
                &[
                    "A grammar where one sentence can have multiple syntax trees",
                    "A grammar with many production rules",
                    "A grammar that is hard to understand",
                    "A grammar without terminal symbols",
                ],
                0,
                "A grammar is ambiguous when the same sentence can be derived in more \
                 than one way, producing multiple distinct syntax trees.",
            ),
            QuestionDraft::open_ended(
                "Give an example of an ambiguous sentence:",
                "Classic example: 'a + b * c' can be read as '(a + b) * c' or \
                 'a + (b * c)' without precedence rules.",
            ),
            QuestionDraft::multiple_choice(
                "How is ambiguity resolved in arithmetic expressions?",
                &[
                    "By defining precedence and associativity rules",
                    "By removing operators from the grammar",
                    "By using only one kind of operator",
                    "By ignoring the problem",
                ],
                0,
                "Precedence rules (*, / before +, -) and associativity (left to \
                 right) remove the ambiguity from arithmetic expressions.",
            ),
            QuestionDraft::multiple_choice(
                "What is the classic 'dangling else' problem?",
                &[
                    "An else can attach to more than one if in nested conditionals",
                    "An else without a matching if",
                    "An if without a mandatory else",
                    "An else with broken syntax",
                ],
                0,
                "In 'if (a) if (b) X else Y' the else can attach to either if, \
                 creating ambiguity about which condition guards it.",
            ),
            QuestionDraft::multiple_choice(
                "How does precedence help resolve ambiguity?",
                &[
                    "It decides which operator wins when building the tree",
                    "It removes unnecessary operators",
                    "It simplifies the grammar",
                    "It speeds up compilation",
                ],
                0,
                "Precedence establishes a hierarchy: higher-precedence operators end \
                 up lower in the syntax tree and are evaluated first.",
            ),
            QuestionDraft::multiple_choice(
                "Distinguish syntactic from semantic ambiguity:",
                &[
                    "Syntactic: multiple structures; semantic: multiple meanings",
                    "Syntactic: grammar errors; semantic: logic errors",
                    "Syntactic: compile time; semantic: run time",
                    "There is no practical difference",
                ],
                0,
                "Syntactic ambiguity produces multiple trees for the same code. \
                 Semantic ambiguity is syntactically valid code with more than one \
                 possible meaning.",
            ),
            QuestionDraft::multiple_choice(
                "Can ambiguity be removed from every grammar?",
                &[
                    "Not always – some languages are inherently ambiguous",
                    "Yes, always",
                    "No, never",
                    "Only for simple grammars",
                ],
                0,
                "Some formal languages are inherently ambiguous: no unambiguous CFG \
                 exists for them. Most programming languages, though, can be \
                 expressed without ambiguity.",
            ),
            QuestionDraft::multiple_choice(
                "What can happen in a compiler built on an ambiguous grammar?",
                &[
                    "Unpredictable behavior or failed compilation",
                    "Faster compilation",
                    "Better code optimization",
                    "Nothing, it works normally",
                ],
                0,
                "A compiler over an ambiguous grammar may pick different readings of \
                 the same code, causing inconsistent behavior or compile errors.",
            ),
            QuestionDraft::multiple_choice(
                "Why do programming languages avoid ambiguous grammars?",
                &[
                    "To guarantee a single, predictable reading of every program",
                    "To make typing easier",
                    "To reduce file sizes",
                    "To increase execution speed",
                ],
                0,
                "Unambiguous languages guarantee every program has exactly one \
                 reading, which predictable, reliable software depends on.",
            ),
            QuestionDraft::multiple_choice(
                "Name a compiler technique for avoiding ambiguity:",
                &[
                    "Defining operator precedence and associativity",
                    "Using only simple tokens",
                    "Removing recursion from the grammar",
                    "Reducing the number of rules",
                ],
                0,
                "Defining precedence (which operator wins) and associativity \
                 (evaluation order among equals) is the most common way to resolve \
                 ambiguity.",
            ),
        ],
        GradeScale::new(
            8,
            "Outstanding! Ambiguity holds no secrets for you! 🌟",
            6,
            "Nice work! You can spot an ambiguous grammar! 🔍",
            "Keep at it! Ambiguity trips everyone up at first! 💪",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_content_validates() {
        let bank = quiz().expect("bundled ambiguity quiz is valid");
        assert_eq!(bank.len(), 10);
        assert_eq!(bank.multiple_choice_count(), 9);
    }

    #[test]
    fn every_case_offers_at_least_two_readings() {
        for case in cases() {
            assert!(
                case.interpretations.len() >= 2,
                "{} needs competing readings",
                case.expression
            );
        }
    }

    #[test]
    fn dangling_else_readings_disagree() {
        let [first, second] = dangling_else_interpretations();
        assert_ne!(first.result, second.result);
        assert_eq!(first.execution.len(), second.execution.len());
    }
}
