/// Integer encoded categorical datasets
pub mod dataset;
/// Delimited table loading
pub mod table;
