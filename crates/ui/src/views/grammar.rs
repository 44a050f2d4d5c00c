use dioxus::prelude::*;

use crate::components::{ProductionVisualizer, Quiz};
use crate::vm::markdown_to_html;

#[component]
pub fn GrammarView() -> Element {
    let intro_html = use_memo(|| markdown_to_html(content::grammar::INTRO));
    let quiz_bank = use_memo(content::grammar::quiz);

    rsx! {
        div { class: "page topic-page topic-page--grammar",
            header { class: "hero",
                span { class: "hero-icon", "📝" }
                h2 { class: "hero-title", "Context-Free Grammar" }
                p { class: "hero-subtitle",
                    "Explore the fundamental rules that define the structure of programming languages"
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 What it is" }
                div { class: "section-grid",
                    div { class: "prose", dangerous_inner_html: "{intro_html}" }
                    div { class: "card formal-card",
                        h4 { "Formal definition:" }
                        p { class: "mono formal-tuple", "G = (V, Σ, R, S)" }
                        ul { class: "formal-legend",
                            li {
                                strong { "V" }
                                " = set of variables (non-terminals)"
                            }
                            li {
                                strong { "Σ" }
                                " = set of terminal symbols"
                            }
                            li {
                                strong { "R" }
                                " = set of production rules"
                            }
                            li {
                                strong { "S" }
                                " = start symbol"
                            }
                        }
                    }
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Worked examples" }
                ProductionVisualizer {
                    title: "🎯 Interactive Visualizer – Arithmetic Expressions",
                    rules: content::grammar::expression_rules(),
                }
                div { class: "example-grid",
                    for example in content::grammar::rule_examples() {
                        div { class: "card example-card", key: "{example.title}",
                            h4 { "{example.title}" }
                            div { class: "rule-list",
                                for rule in example.rules {
                                    p { class: "mono", "{rule}" }
                                }
                            }
                            p { class: "example-caption", "{example.caption}" }
                            ul {
                                for note in example.notes {
                                    li { "{note}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Why it matters" }
                div { class: "highlight-grid",
                    for item in content::grammar::importance() {
                        div { class: "card highlight-card", key: "{item.title}",
                            span { class: "highlight-icon", "{item.icon}" }
                            h4 { "{item.title}" }
                            p { "{item.blurb}" }
                        }
                    }
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Interactive quiz" }
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
