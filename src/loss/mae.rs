use crate::math::matrix::Matrix;

pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE: mean(|predicted - expected|)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |p, y| (p - y).abs())
            .values()
            .iter()
            .sum::<f64>() / n
    }

    /// Per-element subgradient: sign(p - y) / n  (0 when equal)
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        let n = predicted.len() as f64;
        predicted.zip_map(expected, |p, y| {
            let diff = p - y;
            if diff > 0.0 { 1.0 / n } else if diff < 0.0 { -1.0 / n } else { 0.0 }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_and_subgradient() {
        let p = Matrix::column(&[1.0, -1.0, 0.0, 2.0]);
        let y = Matrix::column(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(MaeLoss::loss(&p, &y), 1.0);
        assert_eq!(MaeLoss::derivative(&p, &y).values(), vec![0.25, -0.25, 0.0, 0.25]);
    }
}
