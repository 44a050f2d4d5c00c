use dioxus::prelude::*;

use crate::components::{AmbiguityVisualizer, DanglingElseDemo, Quiz};
use crate::vm::markdown_to_html;

#[component]
pub fn AmbiguityView() -> Element {
    let intro_html = use_memo(|| markdown_to_html(content::ambiguity::INTRO));
    let quiz_bank = use_memo(content::ambiguity::quiz);

    rsx! {
        div { class: "page topic-page topic-page--ambiguity",
            header { class: "hero",
                span { class: "hero-icon", "🤔" }
                h2 { class: "hero-title", "Ambiguity" }
                p { class: "hero-subtitle",
                    "Understand when a grammar allows more than one reading of the same code"
                }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 What it is" }
                div { class: "prose prose--narrow", dangerous_inner_html: "{intro_html}" }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 Competing trees" }
                AmbiguityVisualizer { cases: content::ambiguity::cases() }
            }

            section { class: "section",
                h3 { class: "section-title", "🔹 The dangling else" }
                DanglingElseDemo {}
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
