use crate::data::table::Table;
use crate::error::{Error, Result};
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;

/// Binary target of an example.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Row/column of the label in a confusion matrix.
    pub fn index(self) -> usize {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

/// The two label texts a table may use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet {
    positive: String,
    negative: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            positive: "yes".to_string(),
            negative: "no".to_string(),
        }
    }
}

impl LabelSet {
    pub fn new<S: Into<String>>(positive: S, negative: S) -> Result<Self> {
        let (positive, negative) = (positive.into(), negative.into());
        if positive == negative {
            return Err(Error::Parameters(format!(
                "positive and negative labels must differ, both are {:?}",
                positive
            )));
        }
        Ok(Self { positive, negative })
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    pub fn negative(&self) -> &str {
        &self.negative
    }

    pub fn name(&self, label: Label) -> &str {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Labels of every record of `table`.
    pub fn labels(&self, table: &Table) -> Result<DVector<Label>> {
        let labels = table
            .records()
            .iter()
            .map(|record| self.parse(&record.label))
            .collect::<Result<Vec<_>>>()?;
        Ok(DVector::from_vec(labels))
    }

    /// Maps label text onto a [`Label`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] for text outside the set.
    pub fn parse(&self, text: &str) -> Result<Label> {
        if text == self.positive {
            Ok(Label::Positive)
        } else if text == self.negative {
            Ok(Label::Negative)
        } else {
            Err(Error::InputShape(format!(
                "label {:?} is neither {:?} nor {:?}",
                text, self.positive, self.negative
            )))
        }
    }
}

/// Name and values of a categorical attribute, in the order the values were first seen.
#[derive(Clone, Debug)]
pub struct AttributeDomain {
    name: String,
    values: Vec<String>,
    codes: HashMap<String, usize>,
}

impl AttributeDomain {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
            codes: HashMap::new(),
        }
    }

    fn insert(&mut self, value: &str) -> usize {
        if let Some(&code) = self.codes.get(value) {
            return code;
        }
        let code = self.values.len();
        self.values.push(value.to_string());
        self.codes.insert(value.to_string(), code);
        code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn code(&self, value: &str) -> Option<usize> {
        self.codes.get(value).copied()
    }

    pub fn value(&self, code: usize) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }
}

/// Integer encoded training set.
///
/// Every attribute domain is fixed here, once, from the complete table. `x`
/// holds the value codes of each example (one row per example, one column per
/// attribute) and `y` its label.
#[derive(Clone, Debug)]
pub struct CategoricalDataset {
    ids: Vec<String>,
    domains: Vec<AttributeDomain>,
    label_set: LabelSet,
    x: DMatrix<usize>,
    y: DVector<Label>,
}

impl CategoricalDataset {
    /// Encodes a table, collecting every attribute domain in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] if the table is empty or a label is outside `label_set`.
    pub fn from_table(table: &Table, label_set: LabelSet) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::InputShape("the training table is empty".into()));
        }

        let mut domains = table
            .attribute_names()
            .iter()
            .map(|name| AttributeDomain::new(name))
            .collect::<Vec<_>>();

        let nrows = table.len();
        let ncols = domains.len();
        let mut codes = Vec::with_capacity(nrows * ncols);
        let mut labels = Vec::with_capacity(nrows);
        let mut ids = Vec::with_capacity(nrows);

        for record in table.records() {
            if record.values.len() != ncols {
                return Err(Error::InputShape(format!(
                    "record {} has {} attribute values, expected {}",
                    record.id,
                    record.values.len(),
                    ncols
                )));
            }
            for (domain, value) in domains.iter_mut().zip(record.values.iter()) {
                codes.push(domain.insert(value));
            }
            labels.push(label_set.parse(&record.label)?);
            ids.push(record.id.clone());
        }

        Ok(Self {
            ids,
            domains,
            label_set,
            x: DMatrix::from_row_slice(nrows, ncols, &codes),
            y: DVector::from_vec(labels),
        })
    }

    pub fn into_parts(&self) -> (&DMatrix<usize>, &DVector<Label>) {
        (&self.x, &self.y)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.y.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.domains.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn domains(&self) -> &[AttributeDomain] {
        &self.domains
    }

    pub fn domain(&self, attribute: usize) -> &AttributeDomain {
        &self.domains[attribute]
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.domains.iter().map(AttributeDomain::name).collect()
    }

    pub fn label_set(&self) -> &LabelSet {
        &self.label_set
    }

    pub fn label(&self, example: usize) -> Label {
        self.y[example]
    }

    /// Value code of `attribute` for `example`.
    pub fn code(&self, example: usize, attribute: usize) -> usize {
        self.x[(example, attribute)]
    }

    /// Number of positive and negative examples among `examples`.
    pub fn label_counts(&self, examples: &[usize]) -> (usize, usize) {
        let positives = examples
            .iter()
            .filter(|&&example| self.y[example] == Label::Positive)
            .count();
        (positives, examples.len() - positives)
    }

    /// Whether all `examples` carry the same label. False for an empty set.
    pub fn same_classification(&self, examples: &[usize]) -> bool {
        match examples.split_first() {
            Some((&first, rest)) => rest
                .iter()
                .all(|&example| self.y[example] == self.y[first]),
            None => false,
        }
    }
}
