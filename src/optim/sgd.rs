use crate::layers::dense::{Dense, Gradients};
use crate::optim::Optimizer;

/// Plain gradient descent: `θ ← θ - lr·g`.
#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn apply(&mut self, layers: &mut [Dense], grads: &[Gradients]) {
        assert_eq!(layers.len(), grads.len(), "one gradient per layer");
        let lr = self.learning_rate;
        for (layer, g) in layers.iter_mut().zip(grads) {
            layer.weights = &layer.weights - &g.weights.scale(lr);
            layer.biases = &layer.biases - &g.biases.scale(lr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::math::matrix::Matrix;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn step_moves_against_the_gradient() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layers = vec![Dense::new(1, 1, ActivationFunction::Linear, &mut rng)];
        let before = layers[0].weights.data[0][0];
        let grads = vec![Gradients {
            weights: Matrix::from_data(vec![vec![2.0]]),
            biases: Matrix::from_data(vec![vec![-1.0]]),
        }];

        Sgd::new(0.5).apply(&mut layers, &grads);

        assert!((layers[0].weights.data[0][0] - (before - 1.0)).abs() < 1e-12);
        assert_eq!(layers[0].biases.data[0][0], 0.5);
    }
}
