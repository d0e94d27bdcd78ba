use nalgebra::{DMatrix, DVector};

use crate::data::dataset::Label;
use crate::error::{Error, Result};

/// 2x2 counts: rows are true labels, columns predicted ones, negative first.
pub type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] if the two vectors differ in length.
    fn confusion_matrix(
        &self,
        y_true: &DVector<Label>,
        y_pred: &DVector<Label>,
    ) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(Error::InputShape(format!(
                "{} predictions for {} labels",
                y_pred.len(),
                y_true.len()
            )));
        }

        let mut matrix = DMatrix::zeros(2, 2);
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(y_t.index(), y_p.index())] += 1;
        }

        Ok(matrix)
    }

    /// Share of predictions equal to the true label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] for mismatched or empty vectors.
    fn accuracy(&self, y_true: &DVector<Label>, y_pred: &DVector<Label>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(Error::InputShape("accuracy of zero predictions".into()));
        }

        let correct = matrix.diagonal().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Share of positive predictions that are correct, 0 without positive predictions.
    fn precision(&self, y_true: &DVector<Label>, y_pred: &DVector<Label>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;

        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];

        if tp + fp == 0 {
            return Ok(0.0);
        }
        Ok(tp as f64 / (tp + fp) as f64)
    }

    /// Share of positive examples predicted as positive, 0 without positive examples.
    fn recall(&self, y_true: &DVector<Label>, y_pred: &DVector<Label>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;

        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];

        if tp + fn_ == 0 {
            return Ok(0.0);
        }
        Ok(tp as f64 / (tp + fn_) as f64)
    }
}
