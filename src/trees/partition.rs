use crate::data::dataset::CategoricalDataset;

/// Groups `examples` by their value of `attribute`.
///
/// Returns one subset per value of the attribute's full domain, in domain
/// order. Values no example exhibits still get an (empty) subset.
pub fn partition(
    dataset: &CategoricalDataset,
    examples: &[usize],
    attribute: usize,
) -> Vec<Vec<usize>> {
    let mut subsets = vec![Vec::new(); dataset.domain(attribute).len()];
    for &example in examples {
        subsets[dataset.code(example, attribute)].push(example);
    }
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::LabelSet;
    use crate::data::table::{Record, Table};

    fn dataset() -> CategoricalDataset {
        let table = Table::new(
            vec!["Outlook".into(), "Windy".into()],
            vec![
                Record::new("D1", vec!["Sunny", "No"], "no"),
                Record::new("D2", vec!["Rain", "Yes"], "no"),
                Record::new("D3", vec!["Overcast", "No"], "yes"),
                Record::new("D4", vec!["Sunny", "Yes"], "yes"),
            ],
        )
        .unwrap();
        CategoricalDataset::from_table(&table, LabelSet::default()).unwrap()
    }

    #[test]
    fn test_partition_all_examples() {
        let dataset = dataset();
        let subsets = partition(&dataset, &[0, 1, 2, 3], 0);
        assert_eq!(subsets, vec![vec![0, 3], vec![1], vec![2]]);
    }

    #[test]
    fn test_partition_keeps_empty_branches() {
        let dataset = dataset();
        let subsets = partition(&dataset, &[0, 3], 0);
        assert_eq!(subsets, vec![vec![0, 3], vec![], vec![]]);
    }

    #[test]
    fn test_partition_empty_examples() {
        let dataset = dataset();
        let subsets = partition(&dataset, &[], 1);
        assert_eq!(subsets.len(), 2);
        assert!(subsets.iter().all(Vec::is_empty));
    }
}
