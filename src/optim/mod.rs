pub mod sgd;
pub mod adam;
pub mod optimizer_kind;

pub use sgd::Sgd;
pub use adam::Adam;
pub use optimizer_kind::OptimizerKind;

use crate::layers::dense::{Dense, Gradients};

/// Turns per-layer gradients into a parameter update.
pub trait Optimizer: std::fmt::Debug {
    /// Applies one update; `grads[i]` belongs to `layers[i]`.
    fn apply(&mut self, layers: &mut [Dense], grads: &[Gradients]);
}
