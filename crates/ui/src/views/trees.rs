use dioxus::prelude::*;

use crate::components::{CstAstComparison, Quiz, TreeVisualizer};
use crate::vm::markdown_to_html;

#[component]
pub fn TreesView() -> Element {
    let intro_html = use_memo(|| markdown_to_html(content::trees::INTRO));
    let quiz_bank = use_memo(content::trees::quiz);

    rsx! {
        div { class: "page topic-page topic-page--trees",
            header { class: "hero",
                span { class: "hero-icon", "🌳" }
                h2 { class: "hero-title", "Syntax Tree" }
                p { class: "hero-subtitle",
                    "See how compilers structure code hierarchically"
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 What it is" }
                div { class: "section-grid",
                    div { class: "prose", dangerous_inner_html: "{intro_html}" }
                    div { class: "card preview-card",
                        h4 { "Visual example:" }
                        p { class: "mono expression-text", "{content::trees::EXAMPLE_EXPRESSION}" }
                        div { class: "mini-tree",
                            div { class: "mini-tree-row",
                                span { class: "mini-node mini-node--root", "*" }
                            }
                            div { class: "mini-tree-row",
                                span { class: "mini-node", "+" }
                                span { class: "mini-node", "c" }
                            }
                            div { class: "mini-tree-row mini-tree-row--leaves",
                                span { class: "mini-node mini-node--leaf", "a" }
                                span { class: "mini-node mini-node--leaf", "b" }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Interactive visualizer" }
                TreeVisualizer {
                    title: "🎯 Tree for: (a + b) * c",
                    expression: content::trees::EXAMPLE_EXPRESSION.to_string(),
                    ast: content::trees::example_ast(),
                    cst: Some(content::trees::example_cst()),
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 CST vs AST" }
                CstAstComparison {}
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Why it matters" }
                div { class: "highlight-grid",
                    for item in content::trees::importance() {
                        div { class: "card highlight-card", key: "{item.title}",
                            span { class: "highlight-icon", "{item.icon}" }
                            h4 { "{item.title}" }
                            p { "{item.blurb}" }
                        }
                    }
                }
                div { class: "card keypoint-card",
                    h4 { "💡 Key point" }
                    p {
                        strong {
                            "Without syntax trees it would be impossible to turn code into something the machine understands."
                        }
                        " They are the bridge between a language's syntax and a program's meaning."
                    }
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Quiz: test your knowledge" }
                match &*quiz_bank.read() {
                    Ok(bank) => rsx! {
                        Quiz { bank: bank.clone() }
                    },
                    Err(_) => rsx! {
                        p { class: "view-error", "Something went wrong. Please try again." }
                    },
                }
            }
        }
    }
}
