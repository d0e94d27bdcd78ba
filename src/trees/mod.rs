/// Decision tree classifier and its induction
pub mod classifier;
/// Entropy and information gain
pub mod importance;
/// Tree nodes and traversal
pub mod node;
/// Induction parameters
pub mod params;
/// Splitting example sets by attribute value
pub mod partition;
/// Text rendering of trees
pub mod render;

pub use classifier::DecisionTreeClassifier;
pub use node::{Branch, NodeIter, TreeNode};
pub use params::{GainConvention, TieBreak, TreeParams};
