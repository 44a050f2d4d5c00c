use std::time::Duration;

use dioxus::prelude::*;

use syntax_core::derivation::{Derivation, ProductionRule};

/// Fixed delay before an applied rule lands in the derivation list.
const APPLY_DELAY: Duration = Duration::from_millis(500);

/// Interactive derivation stepper: click a rule, watch the sentential form
/// appear one beat later. The pending apply task dies with the component.
#[component]
pub fn ProductionVisualizer(title: String, rules: Vec<ProductionRule>) -> Element {
    let rules_for_derivation = rules.clone();
    let mut derivation = use_signal(move || Derivation::for_rules(&rules_for_derivation));
    let mut animating = use_signal(|| false);

    let rules_for_apply = rules.clone();
    let apply = use_callback(move |index: usize| {
        if animating() {
            return;
        }
        let Some(rule) = rules_for_apply.get(index).cloned() else {
            return;
        };
        animating.set(true);
        spawn(async move {
            tokio::time::sleep(APPLY_DELAY).await;
            derivation.write().apply(&rule);
            animating.set(false);
        });
    });

    let steps = derivation.read().steps().to_vec();
    let applied = derivation.read().applied();
    let total_steps = rules.len() + 1;

    rsx! {
        div { class: "card production-visualizer",
            h3 { "{title}" }

            div { class: "production-rules",
                h4 { "Production rules:" }
                for (index, rule) in rules.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if applied == index { "production-rule production-rule--current" } else { "production-rule" },
                        span { class: "mono production-rule-left", "{rule.left} →" }
                        span { class: "mono production-rule-right", "{rule.rhs_label()}" }
                        button {
                            class: "btn btn-secondary production-apply",
                            r#type: "button",
                            disabled: animating(),
                            onclick: move |_| apply.call(index),
                            "Apply"
                        }
                    }
                }
            }

            div { class: "production-derivation",
                h4 { "Derivation:" }
                div { class: "derivation-steps",
                    for (index, step) in steps.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if index + 1 == steps.len() { "derivation-step derivation-step--latest" } else { "derivation-step" },
                            if index > 0 {
                                span { class: "derivation-arrow", "⇒" }
                            }
                            span { class: "mono", "{step}" }
                        }
                    }
                }
            }

            div { class: "production-controls",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: animating(),
                    onclick: move |_| derivation.write().reset(),
                    "🔄 Reset"
                }
                span { class: "production-step-label", "Step: {applied + 1} / {total_steps}" }
            }
        }
    }
}
