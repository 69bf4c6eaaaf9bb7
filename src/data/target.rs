use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// The wave packet `sin(y) / (1 + y²)`.
///
/// Defined for every real `y` and bounded by 1 in magnitude.
pub fn target_func(y: f64) -> f64 {
    y.sin() / (1.0 + y * y)
}

/// Closed-form scalar functions the regressor can be asked to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFunction {
    /// `sin(y) / (1 + y²)`
    #[default]
    WavePacket,
    /// `sin(y)`
    Sine,
    /// `exp(-y²)`
    Gaussian,
    /// `y² / 100`
    Quadratic,
}

impl TargetFunction {
    pub fn eval(&self, y: f64) -> f64 {
        match self {
            TargetFunction::WavePacket => target_func(y),
            TargetFunction::Sine => y.sin(),
            TargetFunction::Gaussian => (-y * y).exp(),
            TargetFunction::Quadratic => y * y / 100.0,
        }
    }

    /// Applies `eval` element-wise.
    pub fn eval_matrix(&self, inputs: &Matrix) -> Matrix {
        inputs.map(|y| self.eval(y))
    }

    pub fn formula(&self) -> &'static str {
        match self {
            TargetFunction::WavePacket => "sin(x) / (1 + x²)",
            TargetFunction::Sine => "sin(x)",
            TargetFunction::Gaussian => "exp(-x²)",
            TargetFunction::Quadratic => "x² / 100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wave_packet_known_values() {
        assert_eq!(target_func(0.0), 0.0);
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert!((target_func(half_pi) - 1.0 / (1.0 + half_pi * half_pi)).abs() < 1e-15);
        assert!((target_func(-1.3) + target_func(1.3)).abs() < 1e-15);
    }

    #[test]
    fn eval_matrix_keeps_shape() {
        let x = Matrix::column(&[-1.0, 0.0, 1.0, 2.0]);
        let y = TargetFunction::WavePacket.eval_matrix(&x);
        assert_eq!(y.shape(), (4, 1));
        assert_eq!(y.data[2][0], target_func(1.0));
    }

    #[test]
    fn names_match_config_keys() {
        let f: TargetFunction = serde_json::from_str("\"wave_packet\"").unwrap();
        assert_eq!(f, TargetFunction::WavePacket);
    }

    proptest! {
        #[test]
        fn wave_packet_is_finite_and_bounded(y in -1e6f64..1e6) {
            let v = target_func(y);
            prop_assert!(v.is_finite());
            prop_assert!(v.abs() <= 1.0);
        }

        #[test]
        fn wave_packet_is_deterministic(y in proptest::num::f64::NORMAL) {
            prop_assert_eq!(target_func(y).to_bits(), target_func(y).to_bits());
        }
    }
}
