use dioxus::prelude::*;

use syntax_core::model::TreeNode;

use crate::vm::map_tree;

/// Renders one tree as absolutely positioned boxes over an SVG edge layer.
#[component]
pub fn TreeCanvas(tree: TreeNode) -> Element {
    let canvas = map_tree(&tree);

    rsx! {
        div {
            class: "tree-canvas",
            style: "width: {canvas.width}px; height: {canvas.height}px;",
            svg {
                class: "tree-edges",
                width: "{canvas.width}",
                height: "{canvas.height}",
                for edge in canvas.edges.iter() {
                    line {
                        x1: "{edge.x1}",
                        y1: "{edge.y1}",
                        x2: "{edge.x2}",
                        y2: "{edge.y2}",
                    }
                }
            }
            for tree_box in canvas.boxes.iter() {
                div {
                    key: "{tree_box.id}",
                    class: if tree_box.highlighted { "tree-node tree-node--highlighted" } else { "tree-node" },
                    style: "left: {tree_box.left}px; top: {tree_box.top}px; animation-delay: {tree_box.fade_delay};",
                    "{tree_box.label}"
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TreeKind {
    Ast,
    Cst,
}

/// The tree explorer card: expression, AST/CST toggle, canvas, and a short
/// reminder of what the selected tree kind is for.
#[component]
pub fn TreeVisualizer(
    title: String,
    expression: String,
    ast: TreeNode,
    cst: Option<TreeNode>,
) -> Element {
    let mut current = use_signal(|| TreeKind::Ast);

    let tree = match (current(), &cst) {
        (TreeKind::Cst, Some(cst_tree)) => cst_tree.clone(),
        _ => ast.clone(),
    };
    let showing_cst = current() == TreeKind::Cst && cst.is_some();
    let (info_title, info_body) = if showing_cst {
        (
            "🌳 Concrete Syntax Tree (CST)",
            "Shows every detailed derivation step, including every grammar symbol.",
        )
    } else {
        (
            "🌿 Abstract Syntax Tree (AST)",
            "Simplified version focused on the logical structure, the one the compiler works with.",
        )
    };

    rsx! {
        div { class: "card tree-visualizer",
            div { class: "tree-visualizer-header",
                h3 { "{title}" }
                div { class: "tree-toggle",
                    button {
                        class: if !showing_cst { "btn btn-primary" } else { "btn btn-secondary" },
                        r#type: "button",
                        onclick: move |_| current.set(TreeKind::Ast),
                        "AST"
                    }
                    if cst.is_some() {
                        button {
                            class: if showing_cst { "btn btn-primary" } else { "btn btn-secondary" },
                            r#type: "button",
                            onclick: move |_| current.set(TreeKind::Cst),
                            "CST"
                        }
                    }
                }
            }

            div { class: "expression-box",
                h4 { "Expression:" }
                p { class: "mono expression-text", "{expression}" }
            }

            div { class: "tree-scroll",
                TreeCanvas { tree }
            }

            div { class: "tree-info",
                h4 { "{info_title}" }
                p { "{info_body}" }
            }
        }
    }
}
