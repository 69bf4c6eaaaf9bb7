use crate::math::matrix::Matrix;

/// The two operations the training driver and the reports need from a model.
///
/// Any differentiable model can sit behind this trait; the driver never looks
/// at parameters directly.
pub trait Regressor {
    /// One forward/backward pass and one parameter update on a batch.
    ///
    /// Returns the loss of the forward pass that produced the gradients,
    /// i.e. the loss *before* the update is applied.
    fn train_step(&mut self, inputs: &Matrix, targets: &Matrix) -> f64;

    /// Forward pass only. Must not change any state.
    fn predict(&self, inputs: &Matrix) -> Matrix;
}
