use syntax_core::derivation::ProductionRule;
use syntax_core::model::{GradeScale, QuestionBank, QuestionBankError, QuestionDraft};

use crate::topics::Highlight;

/// Hero blurb for the grammar page, rendered as markdown.
pub const INTRO: &str = "\
A **Context-Free Grammar (CFG)** is a set of production rules that define \
the structure of a language.

They are called *\"context-free\"* because a substitution can be applied \
independently of the context in which the symbol appears.";

/// The classic expression grammar driven by the production visualizer.
#[must_use]
pub fn expression_rules() -> Vec<ProductionRule> {
    vec![
        ProductionRule::new("E", &["E", "+", "T"], "Expression with addition"),
        ProductionRule::new("T", &["T", "*", "F"], "Term with multiplication"),
        ProductionRule::new("F", &["(", "E", ")"], "Parenthesized factor"),
        ProductionRule::new("F", &["id"], "Identifier"),
    ]
}

/// A static rule-listing card with sample derivable strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarExample {
    pub title: &'static str,
    pub rules: &'static [&'static str],
    pub caption: &'static str,
    pub notes: &'static [&'static str],
}

#[must_use]
pub fn rule_examples() -> [GrammarExample; 2] {
    [
        GrammarExample {
            title: "Example 1 – Simple Expressions",
            rules: &["E → E + E", "E → E * E", "E → (E)", "E → id"],
            caption: "Can generate:",
            notes: &["id + id", "(id * id) + id"],
        },
        GrammarExample {
            title: "Example 2 – IF Structure",
            rules: &["S → if (E) S else S", "S → statement", "E → condition"],
            caption: "Typical control structure",
            notes: &["Defines how conditional statements are built"],
        },
    ]
}

#[must_use]
pub fn importance() -> [Highlight; 4] {
    [
        Highlight {
            icon: "🏗️",
            title: "Language Definition",
            blurb: "Allow formal languages such as programming languages to be defined",
        },
        Highlight {
            icon: "🔍",
            title: "Syntax Analysis",
            blurb: "Used in the parsing phase of compilers",
        },
        Highlight {
            icon: "✅",
            title: "Code Validation",
            blurb: "Decide whether a piece of code is valid or not",
        },
        Highlight {
            icon: "⚠️",
            title: "Ambiguity Prevention",
            blurb: "Badly designed grammars can introduce ambiguities",
        },
    ]
}

/// The grammar quiz: ten questions, one of them open-ended.
///
/// # Errors
///
/// Returns a `QuestionBankError` if any bundled question fails validation;
/// the test below keeps that from shipping.
pub fn quiz() -> Result<QuestionBank, QuestionBankError> {
    QuestionBank::new(
        "Context-Free Grammar Quiz",
        vec![
            QuestionDraft::multiple_choice(
                "What does \"context-free\" mean in a grammar?",
                &[
                    "Rules can be applied regardless of the surrounding context",
                    "The grammar has no context at all",
                    "All rules are free to use",
                    "Context is optional",
                ],
                0,
                "\"Context-free\" means substitutions can be applied independently of \
                 the context in which the symbol appears.",
            ),
            QuestionDraft::multiple_choice(
                "What is the difference between terminals and non-terminals?",
                &[
                    "Terminals are final, non-terminals can be expanded",
                    "Terminals are variables, non-terminals are constants",
                    "Terminals are optional, non-terminals are required",
                    "There is no difference",
                ],
                0,
                "Terminals are the final symbols of the language, while non-terminals \
                 (variables) can be expanded using production rules.",
            ),
            QuestionDraft::open_ended(
                "Give an example of a production rule from a CFG:",
                "Example: E → E + E (an expression can be two expressions added together).",
            ),
            QuestionDraft::multiple_choice(
                "What is the role of the start symbol in a grammar?",
                &[
                    "It is the starting point for every derivation",
                    "It is the most important symbol",
                    "It is optional in the grammar",
                    "It marks the end of the grammar",
                ],
                0,
                "The start symbol (S) is the starting point for every derivation in \
                 the grammar.",
            ),
            QuestionDraft::multiple_choice(
                "Where are CFGs used in compilers?",
                &[
                    "In syntax analysis (parsing)",
                    "Only in lexical analysis",
                    "In code optimization",
                    "In code generation",
                ],
                0,
                "CFGs are fundamental to the syntax-analysis phase of compilers, \
                 checking that code follows the expected structure.",
            ),
            QuestionDraft::multiple_choice(
                "Can a CFG describe code indentation (as in Python)?",
                &[
                    "No, indentation is context-sensitive",
                    "Yes, easily",
                    "Only with special modifications",
                    "Only in specific cases",
                ],
                0,
                "CFGs cannot describe indentation because it is context-sensitive: \
                 its meaning depends on the preceding indentation level.",
            ),
            QuestionDraft::multiple_choice(
                "What happens if a grammar generates two trees for the same expression?",
                &[
                    "The grammar is ambiguous",
                    "The grammar is correct",
                    "That is impossible",
                    "It is an advantage",
                ],
                0,
                "When a grammar can generate multiple syntax trees for the same input \
                 it is ambiguous, which can cause interpretation problems.",
            ),
            QuestionDraft::multiple_choice(
                "How does a CFG differ from a regular grammar?",
                &[
                    "CFGs are more powerful and allow nested recursion",
                    "CFGs are simpler",
                    "CFGs are less widely used",
                    "There is no practical difference",
                ],
                0,
                "CFGs are strictly more powerful than regular grammars and can express \
                 nested structures such as balanced parentheses.",
            ),
            QuestionDraft::multiple_choice(
                "Why are CFGs important in the study of programming languages?",
                &[
                    "They formally define the syntax and structure of languages",
                    "Only for academic purposes",
                    "For performance optimization",
                    "For debugging",
                ],
                0,
                "CFGs formally define the syntax and structure of programming \
                 languages, enabling compilers and interpreters to be built.",
            ),
            QuestionDraft::multiple_choice(
                "Which of the following is a property of CFGs?",
                &[
                    "They can express recursive languages",
                    "They only handle finite languages",
                    "They do not allow nesting",
                    "They are limited to simple expressions",
                ],
                0,
                "CFGs can express recursive languages and nested structures, which \
                 makes them a good fit for real programming languages.",
            ),
        ],
        GradeScale::new(
            7,
            "Excellent! You have mastered context-free grammars! 🌟",
            5,
            "Good work! Keep studying to sharpen up! 📚",
            "Keep practicing! The theory is the foundation! 💪",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_content_validates() {
        let bank = quiz().expect("bundled grammar quiz is valid");
        assert_eq!(bank.len(), 10);
        assert_eq!(bank.multiple_choice_count(), 9);
    }

    #[test]
    fn expression_grammar_starts_from_e() {
        let rules = expression_rules();
        assert_eq!(rules[0].left, "E");
        assert_eq!(rules[0].rhs_label(), "E + T");
    }
}
