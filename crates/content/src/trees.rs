use syntax_core::model::{GradeScale, QuestionBank, QuestionBankError, QuestionDraft, TreeNode};

use crate::topics::Highlight;

/// Hero blurb for the trees page, rendered as markdown.
pub const INTRO: &str = "\
The **syntax tree** (or derivation tree) is the hierarchical representation \
showing how a sentence is derived from a grammar.

There are *two main kinds*:

- **CST**: concrete syntax tree, showing every detailed derivation step
- **AST**: abstract syntax tree, the simplified version compilers work with";

/// The expression both example trees are built from.
pub const EXAMPLE_EXPRESSION: &str = "(a + b) * c";

/// AST for `(a + b) * c`: the parentheses disappear into the hierarchy.
#[must_use]
pub fn example_ast() -> TreeNode {
    TreeNode::branch(
        "mult",
        "*",
        vec![
            TreeNode::branch(
                "plus",
                "+",
                vec![TreeNode::leaf("a", "a"), TreeNode::leaf("b", "b")],
            ),
            TreeNode::leaf("c", "c"),
        ],
    )
}

/// CST for the same expression under the E/T/F grammar, parentheses and all.
#[must_use]
pub fn example_cst() -> TreeNode {
    TreeNode::branch(
        "e0",
        "E",
        vec![TreeNode::branch(
            "t0",
            "T",
            vec![
                TreeNode::branch(
                    "t1",
                    "T",
                    vec![TreeNode::branch(
                        "f0",
                        "F",
                        vec![
                            TreeNode::leaf("lp", "("),
                            TreeNode::branch(
                                "e1",
                                "E",
                                vec![
                                    TreeNode::branch("e2", "E", vec![TreeNode::leaf("a", "a")]),
                                    TreeNode::leaf("plus", "+"),
                                    TreeNode::branch("t2", "T", vec![TreeNode::leaf("b", "b")]),
                                ],
                            ),
                            TreeNode::leaf("rp", ")"),
                        ],
                    )],
                ),
                TreeNode::leaf("star", "*"),
                TreeNode::branch("f1", "F", vec![TreeNode::leaf("c", "c")]),
            ],
        )],
    )
}

/// Bullet facts shown on one side of the CST/AST comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeFacts {
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub node_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonExample {
    pub expression: &'static str,
    pub cst: TreeFacts,
    pub ast: TreeFacts,
}

#[must_use]
pub fn comparisons() -> [ComparisonExample; 2] {
    [
        ComparisonExample {
            expression: "a + b * c",
            cst: TreeFacts {
                description: "Concrete syntax tree – keeps EVERY detail",
                details: &[
                    "Includes all non-terminal symbols",
                    "Shows each derivation step",
                    "Carries redundant information",
                    "Larger memory footprint",
                ],
                node_count: 15,
            },
            ast: TreeFacts {
                description: "Abstract syntax tree – keeps the ESSENTIALS",
                details: &[
                    "Drops unnecessary information",
                    "Simplified structure",
                    "Optimized for compilation",
                    "Smaller memory footprint",
                ],
                node_count: 5,
            },
        },
        ComparisonExample {
            expression: "(x + y) * z",
            cst: TreeFacts {
                description: "CST – includes parentheses and every symbol",
                details: &[
                    "The '(' and ')' tokens appear in the tree",
                    "Intermediate symbols are preserved",
                    "Complete grammar structure",
                    "Useful for code formatting",
                ],
                node_count: 13,
            },
            ast: TreeFacts {
                description: "AST – precedence is implicit in the structure",
                details: &[
                    "Parentheses removed (precedence lives in the hierarchy)",
                    "Only operators and operands",
                    "Structure optimized for evaluation",
                    "The basis for optimizations",
                ],
                node_count: 5,
            },
        },
    ]
}

#[must_use]
pub fn importance() -> [Highlight; 4] {
    [
        Highlight {
            icon: "🧠",
            title: "Semantic Analysis",
            blurb: "Fundamental for understanding what the code means",
        },
        Highlight {
            icon: "⚙️",
            title: "Compilers",
            blurb: "Used to organize and execute code",
        },
        Highlight {
            icon: "🚀",
            title: "Optimization",
            blurb: "Help optimize expressions",
        },
        Highlight {
            icon: "🔄",
            title: "Transformation",
            blurb: "Essential for turning code into machine language",
        },
    ]
}

/// The syntax-tree quiz.
///
/// # Errors
///
/// Returns a `QuestionBankError` if any bundled question fails validation.
pub fn quiz() -> Result<QuestionBank, QuestionBankError> {
    QuestionBank::new(
        "Syntax Tree Quiz",
        vec![
            QuestionDraft::multiple_choice(
                "What is a syntax tree?",
                &[
                    "A hierarchical representation of how a sentence is derived",
                    "A list of tokens from the code",
                    "The set of rules of the grammar",
                    "A data structure for storing variables",
                ],
                0,
                "The syntax tree is the hierarchical representation showing how a \
                 sentence is derived from a grammar.",
            ),
            QuestionDraft::multiple_choice(
                "What distinguishes a concrete syntax tree from an abstract one?",
                &[
                    "The CST shows every detail, the AST is simplified",
                    "The CST is smaller, the AST is bigger",
                    "CSTs are for interpreters, ASTs for compilers",
                    "There is no practical difference",
                ],
                0,
                "A CST (concrete syntax tree) keeps every detailed step, while an AST \
                 (abstract syntax tree) is a simplified version focused on the logical \
                 structure.",
            ),
            QuestionDraft::multiple_choice(
                "Which tree (CST or AST) do compilers use most?",
                &[
                    "The AST – it is leaner and more efficient",
                    "The CST – it carries more information",
                    "Both equally",
                    "It depends on the language",
                ],
                0,
                "Compilers mostly use the AST because it is leaner, uses less memory, \
                 and keeps only the information needed for interpretation and \
                 optimization.",
            ),
            QuestionDraft::multiple_choice(
                "Picture the tree for 'a + b * c'. Which operator sits at the root?",
                &[
                    "+ (addition sits at the root)",
                    "* (multiplication sits at the root)",
                    "a (the first operand)",
                    "c (the last operand)",
                ],
                0,
                "Addition (+) sits at the root because it has lower precedence. \
                 Multiplication (*) binds tighter and becomes a subtree: (+) at the \
                 root, with 'a' on the left and (*) on the right holding 'b' and 'c'.",
            ),
            QuestionDraft::multiple_choice(
                "Which operator appears higher in the tree: + or *?",
                &[
                    "+ appears higher (lower precedence)",
                    "* appears higher (higher precedence)",
                    "Both at the same level",
                    "It depends on the expression",
                ],
                0,
                "The + operator appears higher in the tree because it has lower \
                 precedence. Lower-precedence operators sit closer to the root.",
            ),
            QuestionDraft::multiple_choice(
                "How do trees relate to the rules of the grammar?",
                &[
                    "Each tree node represents one rule application",
                    "Trees are independent of the rules",
                    "Rules destroy the trees",
                    "There is no direct relation",
                ],
                0,
                "Each internal node of the syntax tree represents the application of \
                 one production rule; the tree is built by following those rules.",
            ),
            QuestionDraft::multiple_choice(
                "If an expression is ambiguous, how many trees can be generated?",
                &[
                    "Multiple trees (2 or more)",
                    "Always exactly one tree",
                    "No tree at all",
                    "Exactly two trees",
                ],
                0,
                "Ambiguous expressions can produce multiple distinct syntax trees, \
                 each representing one possible reading of the expression.",
            ),
            QuestionDraft::multiple_choice(
                "How does a syntax tree help with error detection?",
                &[
                    "If no tree can be built, there is a syntax error",
                    "By counting the number of nodes",
                    "By checking the color of the nodes",
                    "By measuring the height of the tree",
                ],
                0,
                "If the parser cannot build a valid tree for the code, that signals a \
                 syntax error: the code does not follow the grammar.",
            ),
            QuestionDraft::multiple_choice(
                "Why is the syntax tree considered hierarchical?",
                &[
                    "It organizes elements into precedence levels",
                    "It has many leaves",
                    "It is colorful",
                    "It grows vertically",
                ],
                0,
                "It is hierarchical because it organizes the code into levels that \
                 respect operator precedence and grammar structure, with clear \
                 parent/child dependencies.",
            ),
            QuestionDraft::multiple_choice(
                "What happens after the AST is built in a compiler?",
                &[
                    "Semantic analysis and code generation",
                    "The process ends",
                    "It goes back to lexical analysis",
                    "It is discarded immediately",
                ],
                0,
                "After building the AST, the compiler performs semantic analysis \
                 (types, scopes), optimizations, and finally machine-code generation.",
            ),
        ],
        GradeScale::new(
            8,
            "Exceptional! You are a syntax-tree expert! 🌟",
            6,
            "Very good! You have a solid base! 🌿",
            "Keep studying! Trees are fundamental! 🌱",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_content_validates() {
        let bank = quiz().expect("bundled tree quiz is valid");
        assert_eq!(bank.len(), 10);
        assert_eq!(bank.multiple_choice_count(), 10);
    }

    #[test]
    fn ast_is_smaller_than_cst() {
        assert!(example_ast().node_count() < example_cst().node_count());
        assert_eq!(example_ast().node_count(), 5);
    }

    #[test]
    fn example_trees_are_finite_literals() {
        assert_eq!(example_ast().height(), 2);
        assert!(example_cst().height() > example_ast().height());
    }
}
