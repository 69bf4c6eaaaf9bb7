use serde::{Serialize, Deserialize};

use crate::data::{sampler::linspace, target::TargetFunction};
use crate::math::matrix::Matrix;
use crate::network::regressor::Regressor;

/// Model output and true target over an evenly spaced grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionGrid {
    /// `n x 1`
    pub inputs: Matrix,
    /// `n x 1`, the model's predictions.
    pub predicted: Matrix,
    /// `n x 1`, the target function evaluated on `inputs`.
    pub expected: Matrix,
}

impl PredictionGrid {
    /// Evaluates `model` and `target` on `linspace(lo, hi, n)`.
    pub fn build<M: Regressor + ?Sized>(
        model: &M,
        target: TargetFunction,
        lo: f64,
        hi: f64,
        n: usize,
    ) -> PredictionGrid {
        let inputs = linspace(lo, hi, n);
        let predicted = model.predict(&inputs);
        let expected = target.eval_matrix(&inputs);
        PredictionGrid { inputs, predicted, expected }
    }

    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean squared gap between prediction and target over the grid.
    pub fn mse(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        crate::loss::MseLoss::loss(&self.predicted, &self.expected)
    }

    pub fn predicted_points(&self) -> Vec<(f64, f64)> {
        self.inputs.values().into_iter().zip(self.predicted.values()).collect()
    }

    pub fn expected_points(&self) -> Vec<(f64, f64)> {
        self.inputs.values().into_iter().zip(self.expected.values()).collect()
    }
}
