use rand::Rng;

use crate::{
    layers::dense::Dense,
    loss::loss_type::LossType,
    math::matrix::Matrix,
    network::{regressor::Regressor, spec::NetworkSpec},
    optim::Optimizer,
};

/// A sequential stack of dense layers compiled with a loss and an optimizer.
#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Dense>,
    pub loss: LossType,
    optimizer: Box<dyn Optimizer>,
}

impl Network {
    /// Builds the layers described by `spec`, drawing initial weights from `rng`.
    ///
    /// # Panics
    /// Panics if the spec has no layers or a layer has zero units.
    pub fn compile<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Network {
        assert!(!spec.layers.is_empty(), "a network needs at least one layer");

        let mut input_size = spec.input_size;
        let layers = spec.layers.iter()
            .map(|layer| {
                let dense = Dense::new(layer.size, input_size, layer.activation, &mut *rng);
                input_size = layer.size;
                dense
            })
            .collect();

        Network {
            layers,
            loss: spec.loss,
            optimizer: spec.optimizer.build(),
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Dense::parameter_count).sum()
    }

    /// Training forward pass; stores activations in each layer for backprop.
    fn forward(&mut self, input: &Matrix) -> Matrix {
        let mut current = input.clone();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }
}

impl Regressor for Network {
    fn train_step(&mut self, inputs: &Matrix, targets: &Matrix) -> f64 {
        let output = self.forward(inputs);
        let loss = self.loss.loss(&output, targets);

        // Backward pass, output layer first.
        let mut delta = self.loss.derivative(&output, targets);
        let mut grads = Vec::with_capacity(self.layers.len());
        for layer in self.layers.iter().rev() {
            let (g, upstream) = layer.backward(&delta);
            grads.push(g);
            delta = upstream;
        }
        grads.reverse();

        self.optimizer.apply(&mut self.layers, &grads);
        loss
    }

    fn predict(&self, inputs: &Matrix) -> Matrix {
        self.layers.iter().fold(inputs.clone(), |current, layer| layer.infer(&current))
    }
}
