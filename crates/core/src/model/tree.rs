use serde::{Deserialize, Serialize};

/// One node of an example syntax tree.
///
/// Example data only: trees are finite literals with no shared substructure,
/// so the layout code never needs cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub highlighted: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    #[must_use]
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            highlighted: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            highlighted: false,
            children,
        }
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    /// Number of nodes in this subtree, including the node itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Number of levels below this node; a leaf has height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::branch(
            "mult",
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
    fn counts_every_node_once() {
        assert_eq!(sample().node_count(), 5);
    }

    #[test]
    fn height_is_longest_path() {
        assert_eq!(sample().height(), 2);
        assert_eq!(TreeNode::leaf("x", "x").height(), 0);
    }

    #[test]
    fn highlight_builder_sets_flag() {
        let node = TreeNode::leaf("x", "x").highlighted();
        assert!(node.highlighted);
    }
}
