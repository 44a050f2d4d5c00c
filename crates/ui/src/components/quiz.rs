use dioxus::prelude::*;

use syntax_core::model::QuestionBank;
use syntax_core::quiz::QuizEngine;

use crate::vm::{map_active, map_completed};

/// The interactive quiz card. One instance owns one `QuizEngine`; the
/// engine is dropped with the component, so nothing leaks across pages.
#[component]
pub fn Quiz(bank: QuestionBank) -> Element {
    let bank_for_engine = bank.clone();
    let mut engine = use_signal(move || QuizEngine::new(bank_for_engine));

    let completed = engine.read().is_completed();
    if completed {
        let vm = map_completed(&engine.read());
        return rsx! {
            div { class: "card quiz-card quiz-card--complete",
                span { class: "quiz-complete-icon", "🎉" }
                h3 { class: "quiz-complete-title", "{vm.title}" }
                p { class: "quiz-complete-score", "{vm.score_label}" }
                p { class: "quiz-complete-message", "{vm.message}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| engine.write().restart(),
                    "🔄 Try Again"
                }
            }
        };
    }

    let vm = map_active(&engine.read());
    let options = vm.options.clone();

    rsx! {
        div { class: "card quiz-card",
            div { class: "quiz-progress",
                div { class: "quiz-progress-labels",
                    span { "{vm.progress_label}" }
                    span { "{vm.score_label}" }
                }
                div { class: "quiz-progress-track",
                    div {
                        class: "quiz-progress-fill",
                        style: "width: {vm.progress_percent}%;",
                    }
                }
            }

            h3 { class: "quiz-prompt", "{vm.prompt}" }

            if vm.is_multiple_choice {
                div { class: "quiz-options",
                    for (index, option) in options.iter().enumerate() {
                        button {
                            key: "{option.letter}",
                            class: if option.selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                            r#type: "button",
                            onclick: move |_| engine.write().select_answer(index),
                            span { class: "quiz-option-letter", "{option.letter}." }
                            "{option.text}"
                        }
                    }
                }
            } else {
                textarea {
                    class: "quiz-open-answer",
                    placeholder: "Type your answer here...",
                    value: "{vm.open_answer}",
                    oninput: move |evt| engine.write().set_open_answer(evt.value()),
                }
            }

            if let Some(explanation_html) = vm.explanation_html.as_deref() {
                div { class: "quiz-explanation",
                    h4 { "💡 Explanation:" }
                    div { class: "prose", dangerous_inner_html: "{explanation_html}" }
                }
            }

            div { class: "quiz-actions",
                if vm.explanation_html.is_none() {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: !vm.can_reveal,
                        onclick: move |_| engine.write().reveal_explanation(),
                        "💡 Show Explanation"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !vm.can_advance,
                        onclick: move |_| engine.write().advance(),
                        "{vm.advance_label}"
                    }
                }
            }
        }
    }
}
