pub mod network;
pub mod regressor;
pub mod spec;

pub use network::Network;
pub use regressor::Regressor;
pub use spec::{NetworkSpec, LayerSpec};
