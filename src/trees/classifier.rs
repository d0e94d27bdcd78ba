//! Decision Tree Classifier
use super::importance::importance;
use super::node::{Branch, TreeNode};
use super::params::{GainConvention, TieBreak, TreeParams};
use super::partition::partition;
use crate::data::dataset::{CategoricalDataset, Label, LabelSet};
use crate::data::table::Table;
use crate::error::{Error, Result};
use crate::metrics::confusion::ClassificationMetrics;
use log::{debug, info, trace};
use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A challenger must beat the best gain by more than this, not by a plain `>`.
/// Gains within it count as tied and the earlier attribute keeps the split.
const GAIN_TOLERANCE: f64 = 1e-12;

/// ID3 decision tree over categorical attributes with a binary target.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier {
    root: Option<TreeNode>,
    attribute_names: Vec<String>,
    label_set: LabelSet,
    tree_params: TreeParams,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationMetrics for DecisionTreeClassifier {}

impl DecisionTreeClassifier {
    /// Creates a new classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            attribute_names: Vec::new(),
            label_set: LabelSet::default(),
            tree_params: TreeParams::new(),
        }
    }

    /// Creates a new classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `gain` - Baseline of the information gain.
    /// * `tie_break` - How plurality votes with equal counts are resolved.
    /// * `max_attributes` - The largest number of attributes a dataset may have.
    ///
    /// # Errors
    ///
    /// This method will return an error if the attribute limit is 0.
    pub fn with_params(
        gain: Option<GainConvention>,
        tie_break: Option<TieBreak>,
        max_attributes: Option<usize>,
    ) -> Result<Self> {
        let mut tree = Self::new();

        tree.set_gain(gain.unwrap_or_default());
        tree.set_tie_break(tie_break.unwrap_or_default());
        if let Some(max_attributes) = max_attributes {
            tree.set_max_attributes(max_attributes)?;
        }
        Ok(tree)
    }

    pub fn set_gain(&mut self, gain: GainConvention) {
        self.tree_params.set_gain(gain)
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tree_params.set_tie_break(tie_break)
    }

    pub fn set_max_attributes(&mut self, max_attributes: usize) -> Result<()> {
        self.tree_params.set_max_attributes(max_attributes)
    }

    pub fn gain(&self) -> GainConvention {
        self.tree_params.gain()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tree_params.tie_break()
    }

    pub fn max_attributes(&self) -> usize {
        self.tree_params.max_attributes()
    }

    /// Induces the tree from a dataset.
    ///
    /// A failed fit leaves the classifier unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] for an empty dataset and
    /// [`Error::TooManyAttributes`] when the dataset exceeds the attribute limit.
    pub fn fit(&mut self, dataset: &CategoricalDataset) -> Result<String> {
        if !dataset.is_not_empty() {
            return Err(Error::InputShape("the training set is empty".into()));
        }
        if dataset.n_attributes() > self.max_attributes() {
            return Err(Error::TooManyAttributes {
                found: dataset.n_attributes(),
                limit: self.max_attributes(),
            });
        }

        let examples = (0..dataset.nrows()).collect::<Vec<_>>();
        let attributes = (0..dataset.n_attributes()).collect::<Vec<_>>();
        let root = TreeBuilder::new(dataset, &self.tree_params).build(&examples, &attributes, &[])?;

        info!(
            "built tree with {} nodes, {} leaves and depth {} from {} examples",
            root.num_nodes(),
            root.num_leaves(),
            root.depth(),
            dataset.nrows()
        );

        self.root = Some(root);
        self.attribute_names = dataset
            .attribute_names()
            .into_iter()
            .map(String::from)
            .collect();
        self.label_set = dataset.label_set().clone();
        Ok("Finished building the tree.".into())
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn label_set(&self) -> &LabelSet {
        &self.label_set
    }

    /// Names of the attributes the tree splits on, in level order and without repeats.
    pub fn attributes_used(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let nodes = self.root.iter().flat_map(|root| root.iter());
        for name in nodes.filter_map(TreeNode::attribute_name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Classifies one vector of raw attribute values, aligned with [`Self::attribute_names`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFitted`] before [`Self::fit`], [`Error::ArityMismatch`]
    /// for a vector of the wrong length and [`Error::UnknownValue`] when a value
    /// on the followed path was never seen during training.
    pub fn classify<S: AsRef<str>>(&self, values: &[S]) -> Result<Label> {
        let mut node = self.root.as_ref().ok_or(Error::NotFitted)?;
        if values.len() != self.attribute_names.len() {
            return Err(Error::ArityMismatch {
                expected: self.attribute_names.len(),
                found: values.len(),
            });
        }

        loop {
            match node {
                TreeNode::Leaf(label) => return Ok(*label),
                TreeNode::Internal {
                    attribute, name, ..
                } => {
                    let value = values[*attribute].as_ref();
                    node = node.branch(value).ok_or_else(|| Error::UnknownValue {
                        attribute: name.clone(),
                        value: value.to_string(),
                    })?;
                }
            }
        }
    }

    /// Classifies every record of a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table's attributes differ from the trained ones or
    /// any record fails to classify. The tree is left untouched either way.
    pub fn predict(&self, table: &Table) -> Result<DVector<Label>> {
        if self.root.is_none() {
            return Err(Error::NotFitted);
        }
        if table.attribute_names() != self.attribute_names.as_slice() {
            return Err(Error::InputShape(format!(
                "table attributes {:?} differ from the trained attributes {:?}",
                table.attribute_names(),
                self.attribute_names
            )));
        }

        let predictions = table
            .records()
            .par_iter()
            .map(|record| self.classify(&record.values))
            .collect::<Result<Vec<_>>>()?;

        Ok(DVector::from_vec(predictions))
    }
}

/// State of one induction run over a fixed dataset.
struct TreeBuilder<'a> {
    dataset: &'a CategoricalDataset,
    gain: GainConvention,
    rng: Option<StdRng>,
}

impl<'a> TreeBuilder<'a> {
    fn new(dataset: &'a CategoricalDataset, params: &TreeParams) -> Self {
        let rng = match params.tie_break() {
            TieBreak::Lexicographic => None,
            TieBreak::Random { seed: Some(seed) } => Some(StdRng::seed_from_u64(seed)),
            TieBreak::Random { seed: None } => Some(StdRng::from_entropy()),
        };
        Self {
            dataset,
            gain: params.gain(),
            rng,
        }
    }

    /// Builds the subtree for `examples` using only `attributes`.
    ///
    /// `parent_examples` is the example set of the parent node; it decides the
    /// leaf of a branch no example reaches.
    fn build(
        &mut self,
        examples: &[usize],
        attributes: &[usize],
        parent_examples: &[usize],
    ) -> Result<TreeNode> {
        if examples.is_empty() {
            return Ok(TreeNode::Leaf(self.plurality_value(parent_examples)?));
        }
        if self.dataset.same_classification(examples) {
            return Ok(TreeNode::Leaf(self.dataset.label(examples[0])));
        }
        if attributes.is_empty() {
            return Ok(TreeNode::Leaf(self.plurality_value(examples)?));
        }

        let (attribute, gain) = self.best_attribute(examples, attributes)?;
        let dataset = self.dataset;
        let domain = dataset.domain(attribute);
        debug!(
            "splitting {} examples on {:?} with gain {:.4}",
            examples.len(),
            domain.name(),
            gain
        );

        let remaining = attributes
            .iter()
            .copied()
            .filter(|&candidate| candidate != attribute)
            .collect::<Vec<_>>();

        let mut branches = Vec::with_capacity(domain.len());
        for (value, subset) in domain
            .values()
            .iter()
            .zip(partition(dataset, examples, attribute))
        {
            branches.push(Branch {
                value: value.clone(),
                node: self.build(&subset, &remaining, examples)?,
            });
        }

        Ok(TreeNode::Internal {
            attribute,
            name: domain.name().to_string(),
            gain,
            branches,
        })
    }

    /// Attribute with the largest gain. Ties keep the earlier attribute.
    fn best_attribute(&self, examples: &[usize], attributes: &[usize]) -> Result<(usize, f64)> {
        let labels = examples
            .iter()
            .map(|&example| self.dataset.label(example))
            .collect::<Vec<_>>();

        let mut best: Option<(usize, f64)> = None;
        for &attribute in attributes {
            let values = examples
                .iter()
                .map(|&example| self.dataset.code(example, attribute))
                .collect::<Vec<_>>();
            let gain = importance(&values, &labels, self.gain);
            trace!(
                "gain of {:?} over {} examples: {:.4}",
                self.dataset.domain(attribute).name(),
                examples.len(),
                gain
            );

            match best {
                Some((_, best_gain)) if gain <= best_gain + GAIN_TOLERANCE => {}
                _ => best = Some((attribute, gain)),
            }
        }

        best.ok_or_else(|| Error::InputShape("no attribute left to split on".into()))
    }

    /// Most common label among `examples`.
    fn plurality_value(&mut self, examples: &[usize]) -> Result<Label> {
        if examples.is_empty() {
            return Err(Error::InputShape(
                "cannot take a plurality vote of an empty example set".into(),
            ));
        }

        let (positives, negatives) = self.dataset.label_counts(examples);
        let label = match positives.cmp(&negatives) {
            Ordering::Greater => Label::Positive,
            Ordering::Less => Label::Negative,
            Ordering::Equal => match self.rng.as_mut() {
                Some(rng) => {
                    if rng.gen_bool(0.5) {
                        Label::Positive
                    } else {
                        Label::Negative
                    }
                }
                None => {
                    let label_set = self.dataset.label_set();
                    if label_set.positive() < label_set.negative() {
                        Label::Positive
                    } else {
                        Label::Negative
                    }
                }
            },
        };
        Ok(label)
    }
}
