//! Entropy and information gain of a categorical split
use super::params::GainConvention;
use crate::data::dataset::Label;
use std::collections::HashMap;
use std::hash::Hash;

/// Entropy of a Boolean variable that is true with probability `q`.
///
/// A pure set (`q` of 0 or 1) has no uncertainty and yields exactly 0.
pub fn binary_entropy(q: f64) -> f64 {
    if q <= 0.0 || q >= 1.0 {
        return 0.0;
    }
    -(q * q.log2() + (1.0 - q) * (1.0 - q).log2())
}

/// Expected entropy left after splitting the labels on the attribute values.
///
/// `values` and `labels` are aligned one to one.
pub fn remainder<V: Eq + Hash>(values: &[V], labels: &[Label]) -> f64 {
    let total = labels.len();
    if total == 0 {
        return 0.0;
    }

    // (positives, total) per value, kept in first-seen order
    let mut positions = HashMap::new();
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for (value, &label) in values.iter().zip(labels.iter()) {
        let position = *positions.entry(value).or_insert_with(|| {
            counts.push((0, 0));
            counts.len() - 1
        });
        let (positives, seen) = &mut counts[position];
        if label == Label::Positive {
            *positives += 1;
        }
        *seen += 1;
    }

    counts
        .iter()
        .map(|&(positives, seen)| {
            let p_x = seen as f64 / total as f64;
            let q = positives as f64 / seen as f64;
            p_x * binary_entropy(q)
        })
        .sum()
}

/// Information gain of splitting `labels` on `values`. Higher is better.
pub fn importance<V: Eq + Hash>(values: &[V], labels: &[Label], gain: GainConvention) -> f64 {
    let baseline = match gain {
        GainConvention::UnitBaseline => 1.0,
        GainConvention::Entropy => {
            let positives = labels.iter().filter(|&&l| l == Label::Positive).count();
            if labels.is_empty() {
                0.0
            } else {
                binary_entropy(positives as f64 / labels.len() as f64)
            }
        }
    };
    baseline - remainder(values, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::data::dataset::Label::{Negative as N, Positive as P};

    #[test]
    fn test_binary_entropy() {
        assert_relative_eq!(binary_entropy(0.5), 1.0);
        assert_relative_eq!(binary_entropy(1.0 / 3.0), 0.918_295_834, epsilon = 1e-6);
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
    }

    #[test]
    fn test_importance_pure_branches() {
        let values = ["a", "a", "b", "b"];
        let labels = [P, P, N, N];
        assert_eq!(importance(&values, &labels, GainConvention::UnitBaseline), 1.0);
    }

    #[test]
    fn test_importance_uninformative() {
        let values = ["a", "a", "b", "b"];
        let labels = [P, N, P, N];
        assert_relative_eq!(importance(&values, &labels, GainConvention::UnitBaseline), 0.0);
        assert_relative_eq!(importance(&values, &labels, GainConvention::Entropy), 0.0);
    }

    #[test]
    fn test_importance_patrons() {
        // None: 0/2, Some: 4/4, Full: 2/6
        let values = [
            "Some", "Full", "Some", "Full", "Full", "Some", "None", "Some", "Full", "Full",
            "None", "Full",
        ];
        let labels = [P, N, P, P, N, P, N, P, N, N, N, P];
        assert_relative_eq!(
            importance(&values, &labels, GainConvention::UnitBaseline),
            0.540_852,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            importance(&values, &labels, GainConvention::Entropy),
            0.540_852,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_importance_conventions_differ_on_skewed_labels() {
        let values = [0, 0, 1, 1];
        let labels = [P, P, P, N];
        let unit = importance(&values, &labels, GainConvention::UnitBaseline);
        let entropy = importance(&values, &labels, GainConvention::Entropy);
        assert_relative_eq!(unit - entropy, 1.0 - binary_entropy(0.75), epsilon = 1e-12);
    }

    #[test]
    fn test_importance_is_permutation_invariant() {
        let values = ["x", "y", "x", "z", "y", "x"];
        let labels = [P, N, N, P, P, P];
        let permuted_values = ["z", "x", "y", "x", "x", "y"];
        let permuted_labels = [P, P, P, N, P, N];
        assert_relative_eq!(
            importance(&values, &labels, GainConvention::UnitBaseline),
            importance(&permuted_values, &permuted_labels, GainConvention::UnitBaseline),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_importance_is_at_most_one() {
        let values = [1, 2, 1, 2, 3];
        let labels = [P, N, N, P, P];
        assert!(importance(&values, &labels, GainConvention::UnitBaseline) <= 1.0);
    }
}
