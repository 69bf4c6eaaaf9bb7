use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::loss::loss_type::LossType;
use crate::optim::OptimizerKind;

/// Describes one dense layer in a network specification.
///
/// - `size`       — number of units in this layer
/// - `activation` — activation function applied after the linear transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: ActivationFunction,
}

impl LayerSpec {
    pub fn new(size: usize, activation: ActivationFunction) -> Self {
        LayerSpec { size, activation }
    }
}

/// A serializable description of a sequential network plus the loss and
/// optimizer it is compiled with.
///
/// The default is the wave-packet regressor:
/// `1 → 20 (sigmoid) → 10 (sigmoid) → 1 (linear)`, mean squared error, Adam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    /// Width of each input row.
    pub input_size: usize,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    pub loss: LossType,
    pub optimizer: OptimizerKind,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            input_size: 1,
            layers: vec![
                LayerSpec::new(20, ActivationFunction::Sigmoid),
                LayerSpec::new(10, ActivationFunction::Sigmoid),
                LayerSpec::new(1, ActivationFunction::Linear),
            ],
            loss: LossType::MeanSquaredError,
            optimizer: OptimizerKind::default(),
        }
    }
}

impl NetworkSpec {
    /// Width of the final layer, or the input width for an empty stack.
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.size).unwrap_or(self.input_size)
    }

    /// One-line architecture summary, e.g. `1 → 20 sigmoid → 1 linear`.
    pub fn describe(&self) -> String {
        let mut out = self.input_size.to_string();
        for layer in &self.layers {
            out.push_str(&format!(" → {} {}", layer.size, layer.activation.name()));
        }
        out
    }
}
