use crate::data::dataset::Label;
use std::collections::VecDeque;

/// Node of an induced decision tree.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Terminal decision.
    Leaf(Label),
    /// Split on one attribute, with one branch per value of its domain.
    Internal {
        attribute: usize,
        name: String,
        gain: f64,
        branches: Vec<Branch>,
    },
}

/// Edge from an internal node to the subtree of one attribute value.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub value: String,
    pub node: TreeNode,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Label of a leaf, `None` for internal nodes.
    pub fn prediction(&self) -> Option<Label> {
        match self {
            TreeNode::Leaf(label) => Some(*label),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Name of the split attribute, `None` for leaves.
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Internal { name, .. } => Some(name.as_str()),
        }
    }

    pub fn branches(&self) -> &[Branch] {
        match self {
            TreeNode::Leaf(_) => &[],
            TreeNode::Internal { branches, .. } => branches.as_slice(),
        }
    }

    /// Subtree followed for `value`, if this node splits and knows the value.
    pub fn branch(&self, value: &str) -> Option<&TreeNode> {
        self.branches()
            .iter()
            .find(|branch| branch.value == value)
            .map(|branch| &branch.node)
    }

    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.branches().iter().map(|branch| &branch.node)
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Internal { branches, .. } => {
                1 + branches
                    .iter()
                    .map(|branch| branch.node.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn num_leaves(&self) -> usize {
        self.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn num_nodes(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter::new(self)
    }
}

/// Level-order iterator over the nodes of a tree.
pub struct NodeIter<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> NodeIter<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        NodeIter {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            self.queue.extend(node.children());
            node
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(value: &str, node: TreeNode) -> Branch {
        Branch {
            value: value.to_string(),
            node,
        }
    }

    fn tree() -> TreeNode {
        TreeNode::Internal {
            attribute: 0,
            name: "Outlook".into(),
            gain: 0.5,
            branches: vec![
                branch("Sunny", TreeNode::Leaf(Label::Negative)),
                branch(
                    "Rain",
                    TreeNode::Internal {
                        attribute: 1,
                        name: "Windy".into(),
                        gain: 1.0,
                        branches: vec![
                            branch("No", TreeNode::Leaf(Label::Positive)),
                            branch("Yes", TreeNode::Leaf(Label::Negative)),
                        ],
                    },
                ),
                branch("Overcast", TreeNode::Leaf(Label::Positive)),
            ],
        }
    }

    #[test]
    fn test_leaf() {
        let leaf = TreeNode::Leaf(Label::Positive);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.prediction(), Some(Label::Positive));
        assert_eq!(leaf.attribute_name(), None);
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.children().count(), 0);
    }

    #[test]
    fn test_branch_lookup() {
        let tree = tree();
        assert_eq!(tree.attribute_name(), Some("Outlook"));
        assert_eq!(tree.branch("Overcast"), Some(&TreeNode::Leaf(Label::Positive)));
        assert_eq!(tree.branch("Snow"), None);
    }

    #[test]
    fn test_statistics() {
        let tree = tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.num_leaves(), 4);
        assert_eq!(tree.num_nodes(), 6);
    }

    #[test]
    fn test_iter_is_level_order() {
        let tree = tree();
        let names = tree
            .iter()
            .map(|node| node.attribute_name().unwrap_or("leaf"))
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Outlook", "leaf", "Windy", "leaf", "leaf", "leaf"]);
    }
}
