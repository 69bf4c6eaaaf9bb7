use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every element: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |a, b| (a - b).powi(2))
            .values()
            .iter()
            .sum::<f64>() / n
    }

    /// Per-element gradient of the mean: 2·(predicted - expected) / n
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |a, b| 2.0 * (a - b) / n)
    }
}
