use dioxus::prelude::*;

use content::ambiguity::AmbiguityCase;

use crate::components::TreeCanvas;

/// Shows an ambiguous expression's competing syntax trees, either one at a
/// time or side by side.
#[component]
pub fn AmbiguityVisualizer(cases: Vec<AmbiguityCase>) -> Element {
    let mut current_case = use_signal(|| 0_usize);
    let mut selected = use_signal(|| 0_usize);
    let mut compare = use_signal(|| false);

    let Some(case) = cases.get(current_case()).cloned() else {
        return rsx! {};
    };
    let interpretation = case
        .interpretations
        .get(selected())
        .cloned()
        .or_else(|| case.interpretations.first().cloned());

    rsx! {
        div { class: "ambiguity-viz",
            div { class: "ambiguity-viz-header",
                h3 { "⚠️ Ambiguity Visualizer" }
                div { class: "ambiguity-case-selector",
                    for index in 0..cases.len() {
                        button {
                            key: "{index}",
                            class: if current_case() == index { "btn btn-primary" } else { "btn btn-secondary" },
                            r#type: "button",
                            onclick: move |_| {
                                current_case.set(index);
                                selected.set(0);
                                compare.set(false);
                            },
                            "Case {index + 1}"
                        }
                    }
                }
            }

            div { class: "expression-box expression-box--warning",
                h4 { "Ambiguous expression:" }
                p { class: "mono expression-text", "{case.expression}" }
                p { class: "expression-note", "{case.description}" }
            }

            div { class: "ambiguity-controls",
                for (index, option) in case.interpretations.iter().enumerate() {
                    button {
                        key: "{option.title}",
                        class: if selected() == index && !compare() { "btn btn-primary" } else { "btn btn-secondary" },
                        r#type: "button",
                        onclick: move |_| {
                            selected.set(index);
                            compare.set(false);
                        },
                        "{option.title}"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| compare.toggle(),
                    if compare() { "👁️ Individual" } else { "🔄 Compare" }
                }
            }

            if compare() {
                div { class: "ambiguity-compare-grid",
                    for option in case.interpretations.iter() {
                        div { class: "card ambiguity-reading", key: "{option.title}",
                            h4 { "{option.title}" }
                            p { "{option.meaning}" }
                            if let Some(result) = option.result {
                                p { class: "mono ambiguity-result", "= {result}" }
                            }
                            div { class: "tree-scroll tree-scroll--compact",
                                TreeCanvas { tree: option.tree.clone() }
                            }
                        }
                    }
                }
            } else {
                if let Some(option) = interpretation {
                    div { class: "card ambiguity-reading",
                        h4 { "{option.title}" }
                        p { "{option.meaning}" }
                        if let Some(result) = option.result {
                            p { class: "mono ambiguity-result", "Result: {result}" }
                        }
                        div { class: "tree-scroll",
                            TreeCanvas { tree: option.tree.clone() }
                        }
                    }
                }
            }

            div { class: "card ambiguity-problem",
                h4 { "⚠️ Why ambiguity is a problem" }
                p {
                    "The same expression produces "
                    strong { "multiple syntax trees" }
                    ", leaving the reading of the code uncertain."
                }
                p {
                    strong { "Consequence: " }
                    "the compiler cannot know which reading to use and may generate wrong code or fail outright."
                }
            }
        }
    }
}
