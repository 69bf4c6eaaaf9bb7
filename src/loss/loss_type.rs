use serde::{Serialize, Deserialize};

use crate::loss::{mae::MaeLoss, mse::MseLoss};
use crate::math::matrix::Matrix;

/// Selects which loss function `train_step` minimises.
///
/// - `MeanSquaredError`  — mean of squared residuals over the batch.
/// - `MeanAbsoluteError` — mean of absolute residuals over the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    MeanSquaredError,
    MeanAbsoluteError,
}

impl LossType {
    /// Scalar batch loss. Panics if the shapes differ.
    pub fn loss(&self, predicted: &Matrix, expected: &Matrix) -> f64 {
        assert_eq!(
            predicted.shape(),
            expected.shape(),
            "prediction and target shapes differ"
        );
        match self {
            LossType::MeanSquaredError  => MseLoss::loss(predicted, expected),
            LossType::MeanAbsoluteError => MaeLoss::loss(predicted, expected),
        }
    }

    /// ∂L/∂predicted, same shape as `predicted`.
    pub fn derivative(&self, predicted: &Matrix, expected: &Matrix) -> Matrix {
        match self {
            LossType::MeanSquaredError  => MseLoss::derivative(predicted, expected),
            LossType::MeanAbsoluteError => MaeLoss::derivative(predicted, expected),
        }
    }
}
