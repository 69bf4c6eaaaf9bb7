pub mod history;
pub mod train_config;
pub mod loop_fn;

pub use history::CostHistory;
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, train_loop_with};
