use rand::Rng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer: `a = f(x·W + b)` over a batch of rows.
#[derive(Debug, Clone)]
pub struct Dense {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
    inputs: Matrix,       // batch input seen by the last training forward pass
    pre_neurons: Matrix,  // z = xW + b, needed for σ'(z)
}

/// Parameter gradients for one layer, averaged over the batch by the loss.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Dense {
    /// Glorot-uniform weights and zero biases.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Dense {
        assert!(size > 0 && input_size > 0, "dense layers need at least one input and one unit");

        Dense {
            size,
            weights: Matrix::glorot_uniform(input_size, size, rng),
            biases: Matrix::zeros(1, size),
            activator: activation,
            inputs: Matrix::default(),
            pre_neurons: Matrix::default(),
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.biases.len()
    }

    /// Inference-only forward pass; leaves the layer untouched.
    pub fn infer(&self, input: &Matrix) -> Matrix {
        let z = (input * &self.weights).add_row(&self.biases);
        z.map(|x| self.activator.function(x))
    }

    /// Training forward pass; caches what `backward` needs.
    pub fn forward(&mut self, input: &Matrix) -> Matrix {
        let z = (input * &self.weights).add_row(&self.biases);
        let a = z.map(|x| self.activator.function(x));
        self.inputs = input.clone();
        self.pre_neurons = z;
        a
    }

    /// Backpropagates `delta` (∂L/∂a for this layer's output, one row per
    /// sample). Returns the parameter gradients and ∂L/∂a for the layer below.
    pub fn backward(&self, delta: &Matrix) -> (Gradients, Matrix) {
        assert_eq!(
            delta.shape(),
            self.pre_neurons.shape(),
            "backward called without a matching forward pass"
        );
        // δ = error ⊙ σ'(z)
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        let layer_delta = delta.hadamard(&act_derivative);

        let grads = Gradients {
            weights: &self.inputs.transpose() * &layer_delta,
            biases: layer_delta.sum_rows(),
        };
        let upstream = &layer_delta * &self.weights.transpose();

        (grads, upstream)
    }
}
