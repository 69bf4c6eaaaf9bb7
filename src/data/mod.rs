pub mod target;
pub mod sampler;

pub use target::{target_func, TargetFunction};
pub use sampler::{linspace, Batch, Sampler};
