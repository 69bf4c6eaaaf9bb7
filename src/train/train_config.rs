use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations` — number of batches to train on; one cost is recorded per batch
/// - `batch_size` — samples drawn fresh for every batch
/// - `log_every`  — emit an `info` progress line every this many batches
///                  (`0` keeps the loop quiet apart from `debug` output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub batch_size: usize,
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(iterations: usize, batch_size: usize) -> Self {
        TrainConfig {
            iterations,
            batch_size,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 2000,
            batch_size: 100,
            log_every: 200,
        }
    }
}
