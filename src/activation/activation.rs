use serde::{Serialize, Deserialize};

/// Element-wise activation applied after a dense layer's linear transform.
///
/// Serialized by the short names used in experiment configs
/// (`"sigmoid"`, `"linear"`, `"tanh"`, `"relu"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFunction {
    Sigmoid,
    Linear,
    Tanh,
    #[serde(rename = "relu")]
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Linear => x,
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Linear => "linear",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::ReLU => "relu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ActivationFunction;

    #[test]
    fn sigmoid_is_centered_at_one_half() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_eq!(ActivationFunction::Sigmoid.derivative(0.0), 0.25);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-6;
        for act in [
            ActivationFunction::Sigmoid,
            ActivationFunction::Linear,
            ActivationFunction::Tanh,
        ] {
            for &x in &[-3.0, -0.5, 0.3, 2.0] {
                let numeric = (act.function(x + h) - act.function(x - h)) / (2.0 * h);
                assert!(
                    (numeric - act.derivative(x)).abs() < 1e-6,
                    "{:?} at {}", act, x
                );
            }
        }
    }

    #[test]
    fn names_round_trip_through_serde() {
        let parsed: ActivationFunction = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(parsed, ActivationFunction::ReLU);
        assert_eq!(serde_json::to_string(&ActivationFunction::Linear).unwrap(), "\"linear\"");
    }
}
