use super::classifier::DecisionTreeClassifier;
use super::node::TreeNode;
use crate::data::dataset::LabelSet;
use std::fmt::{self, Display, Formatter};

const INDENT: usize = 2;

/// Indented text rendering of a tree.
///
/// An internal node prints as `Attribute?` followed by its branches in domain
/// order. A branch to a leaf prints as `value -> label`, a branch to another
/// split prints as `value ->` with the subtree nested below it.
pub struct TreeDisplay<'a> {
    root: &'a TreeNode,
    label_set: &'a LabelSet,
}

impl<'a> TreeDisplay<'a> {
    pub fn new(root: &'a TreeNode, label_set: &'a LabelSet) -> Self {
        Self { root, label_set }
    }

    fn write_node(&self, f: &mut Formatter<'_>, node: &TreeNode, indent: usize) -> fmt::Result {
        match node {
            TreeNode::Leaf(label) => {
                writeln!(f, "{:indent$}{}", "", self.label_set.name(*label), indent = indent)
            }
            TreeNode::Internal { name, branches, .. } => {
                writeln!(f, "{:indent$}{}?", "", name, indent = indent)?;
                let indent = indent + INDENT;
                for branch in branches {
                    match &branch.node {
                        TreeNode::Leaf(label) => writeln!(
                            f,
                            "{:indent$}{} -> {}",
                            "",
                            branch.value,
                            self.label_set.name(*label),
                            indent = indent
                        )?,
                        subtree => {
                            writeln!(f, "{:indent$}{} ->", "", branch.value, indent = indent)?;
                            self.write_node(f, subtree, indent + INDENT)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, 0)
    }
}

impl DecisionTreeClassifier {
    /// Printable view of the fitted tree, `None` before fitting.
    pub fn display(&self) -> Option<TreeDisplay<'_>> {
        self.root()
            .map(|root| TreeDisplay::new(root, self.label_set()))
    }
}

impl Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.display() {
            Some(tree) => tree.fmt(f),
            None => writeln!(f, "(unfitted tree)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::{CategoricalDataset, Label};
    use crate::data::table::Table;

    #[test]
    fn test_render_leaf() {
        let root = TreeNode::Leaf(Label::Positive);
        let label_set = LabelSet::default();
        assert_eq!(TreeDisplay::new(&root, &label_set).to_string(), "yes\n");
    }

    #[test]
    fn test_render_unfitted() {
        assert_eq!(DecisionTreeClassifier::new().to_string(), "(unfitted tree)\n");
    }

    #[test]
    fn test_render_restaurant() {
        let table = Table::from_reader(include_str!("../../datasets/restaurant.csv").as_bytes())
            .unwrap();
        let dataset = CategoricalDataset::from_table(&table, LabelSet::default()).unwrap();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();

        let expected = "\
Patrons?
  Some -> yes
  Full ->
    Hungry?
      Yes ->
        Type?
          French -> no
          Thai ->
            Fri/Sat?
              No -> no
              Yes -> yes
          Burger -> yes
          Italian -> no
      No -> no
  None -> no
";
        assert_eq!(classifier.to_string(), expected);
    }
}
