pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod data;
pub mod train;
pub mod report;
pub mod config;
pub mod experiment;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Dense;
pub use network::{Network, NetworkSpec, LayerSpec, Regressor};
pub use loss::LossType;
pub use optim::{Adam, Sgd, Optimizer, OptimizerKind};
pub use data::{target_func, linspace, Batch, Sampler, TargetFunction};
pub use train::{train_loop, train_loop_with, CostHistory, TrainConfig};
pub use report::{PredictionGrid, RunSummary};
pub use config::ExperimentConfig;
