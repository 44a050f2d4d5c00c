use dioxus::prelude::*;

use content::trees::comparisons;

/// Side-by-side CST/AST comparison with a per-expression selector.
#[component]
pub fn CstAstComparison() -> Element {
    let examples = comparisons();
    let mut current = use_signal(|| 0_usize);

    let example = examples[current()];
    let reduction = example.ast.node_count * 100 / example.cst.node_count;

    rsx! {
        div { class: "cst-ast",
            div { class: "cst-ast-header",
                h3 { "🔄 Comparison: CST vs AST" }
                div { class: "cst-ast-selector",
                    for (index, option) in examples.iter().enumerate() {
                        button {
                            key: "{option.expression}",
                            class: if current() == index { "btn btn-primary" } else { "btn btn-secondary" },
                            r#type: "button",
                            onclick: move |_| current.set(index),
                            "{option.expression}"
                        }
                    }
                }
            }

            div { class: "expression-box",
                h4 { "Current expression:" }
                p { class: "mono expression-text", "{example.expression}" }
            }

            div { class: "cst-ast-grid",
                div { class: "card cst-card",
                    div { class: "cst-ast-card-header",
                        h4 { "🌳 CST" }
                        span { class: "node-count-pill", "{example.cst.node_count} nodes" }
                    }
                    p { class: "cst-ast-description", "{example.cst.description}" }
                    ul {
                        for detail in example.cst.details {
                            li { "{detail}" }
                        }
                    }
                }
                div { class: "card ast-card",
                    div { class: "cst-ast-card-header",
                        h4 { "🌿 AST" }
                        span { class: "node-count-pill", "{example.ast.node_count} nodes" }
                    }
                    p { class: "cst-ast-description", "{example.ast.description}" }
                    ul {
                        for detail in example.ast.details {
                            li { "{detail}" }
                        }
                    }
                }
            }

            div { class: "card cst-ast-summary",
                h4 { "📊 Size at a glance" }
                p { class: "cst-ast-reduction",
                    "The AST keeps {reduction}% of the CST's nodes for this expression."
                }
                p {
                    strong { "Takeaway: " }
                    "the AST is the efficient choice for compilers; the CST is useful for detailed analysis and code formatting."
                }
            }
        }
    }
}
