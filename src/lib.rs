//! # id3-tree
//!
//! `id3-tree` induces decision tree classifiers from small tables of categorical
//! attributes with a binary target, using the ID3 algorithm: the attribute with
//! the largest information gain is split on, examples are partitioned by its
//! values, and the procedure recurses until a subset is pure, empty or out of
//! attributes.
//!
//! ## Example Usage
//!
//! ```rust
//! use id3_tree::data::dataset::{CategoricalDataset, LabelSet};
//! use id3_tree::data::table::Table;
//! use id3_tree::trees::DecisionTreeClassifier;
//!
//! let csv = "\
//! Day,Outlook,Windy,Play
//! D1,Sunny,No,yes
//! D2,Rain,Yes,no
//! D3,Rain,No,yes
//! ";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let dataset = CategoricalDataset::from_table(&table, LabelSet::default()).unwrap();
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&dataset).unwrap();
//!
//! print!("{}", model);
//! let label = model.classify(&["Rain", "Yes"]).unwrap();
//! assert_eq!(model.label_set().name(label), "no");
//! ```

/// Table loading and categorical encoding
pub mod data;
/// Error types
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::{Error, Result};
