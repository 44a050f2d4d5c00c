use syntax_core::layout::{self, NODE_HEIGHT, NODE_WIDTH};
use syntax_core::model::TreeNode;

/// Breathing room around the outermost boxes.
const CANVAS_MARGIN: f64 = 16.0;

/// A node box in canvas coordinates, ready for absolute positioning.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeBoxVm {
    pub id: String,
    pub label: String,
    pub highlighted: bool,
    pub left: f64,
    pub top: f64,
    pub fade_delay: String,
}

/// An SVG line between a parent and one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdgeVm {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeCanvasVm {
    pub width: f64,
    pub height: f64,
    pub boxes: Vec<TreeBoxVm>,
    pub edges: Vec<TreeEdgeVm>,
}

/// Lays the tree out and shifts it into a non-negative canvas box.
#[must_use]
pub fn map_tree(root: &TreeNode) -> TreeCanvasVm {
    let placed = layout::layout(root);
    let (min_x, max_x) = placed.horizontal_bounds();
    let shift = CANVAS_MARGIN - min_x;

    let boxes = placed
        .nodes()
        .iter()
        .map(|node| TreeBoxVm {
            id: node.id.clone(),
            label: node.label.clone(),
            highlighted: node.highlighted,
            left: node.x - NODE_WIDTH / 2.0 + shift,
            top: node.y + CANVAS_MARGIN,
            // Stagger the fade-in by depth, like rings growing outward.
            fade_delay: format!("{:.1}s", node.depth as f64 * 0.2),
        })
        .collect();

    let edges = placed
        .edges()
        .iter()
        .map(|edge| TreeEdgeVm {
            x1: edge.from_x + shift,
            y1: edge.from_y + CANVAS_MARGIN,
            x2: edge.to_x + shift,
            y2: edge.to_y + CANVAS_MARGIN,
        })
        .collect();

    TreeCanvasVm {
        width: (max_x - min_x) + 2.0 * CANVAS_MARGIN,
        height: placed.height() + 2.0 * CANVAS_MARGIN,
        boxes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::branch(
            "root",
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

    #[test]
    fn canvas_coordinates_are_non_negative() {
        let canvas = map_tree(&sample());
        for tree_box in &canvas.boxes {
            assert!(tree_box.left >= 0.0, "{} left {}", tree_box.id, tree_box.left);
            assert!(tree_box.top >= 0.0);
            assert!(tree_box.left + NODE_WIDTH <= canvas.width);
            assert!(tree_box.top + NODE_HEIGHT <= canvas.height);
        }
        for edge in &canvas.edges {
            assert!(edge.x1 >= 0.0 && edge.x2 >= 0.0);
            assert!(edge.y1 >= 0.0 && edge.y2 >= 0.0);
        }
    }

    #[test]
    fn fade_delay_grows_with_depth() {
        let canvas = map_tree(&sample());
        let root = canvas.boxes.iter().find(|b| b.id == "root").unwrap();
        let leaf = canvas.boxes.iter().find(|b| b.id == "a").unwrap();
        assert_eq!(root.fade_delay, "0.0s");
        assert_eq!(leaf.fade_delay, "0.4s");
    }

    #[test]
    fn single_node_tree_gets_margin_on_all_sides() {
        let canvas = map_tree(&TreeNode::leaf("only", "x"));
        assert_eq!(canvas.width, NODE_WIDTH + 2.0 * CANVAS_MARGIN);
        assert_eq!(canvas.height, NODE_HEIGHT + 2.0 * CANVAS_MARGIN);
        assert_eq!(canvas.boxes[0].left, CANVAS_MARGIN);
    }
}
