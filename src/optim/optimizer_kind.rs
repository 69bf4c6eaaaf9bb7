use serde::{Serialize, Deserialize};

use crate::optim::{Adam, Optimizer, Sgd};

/// Serializable optimizer choice, e.g. `{"name": "adam", "learning_rate": 0.001}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum OptimizerKind {
    Adam {
        #[serde(default = "adam_learning_rate")]
        learning_rate: f64,
        #[serde(default = "beta1")]
        beta1: f64,
        #[serde(default = "beta2")]
        beta2: f64,
        #[serde(default = "epsilon")]
        epsilon: f64,
    },
    Sgd {
        #[serde(default = "sgd_learning_rate")]
        learning_rate: f64,
    },
}

fn adam_learning_rate() -> f64 { 0.001 }
fn beta1() -> f64 { 0.9 }
fn beta2() -> f64 { 0.999 }
fn epsilon() -> f64 { 1e-7 }
fn sgd_learning_rate() -> f64 { 0.01 }

impl OptimizerKind {
    pub fn build(&self) -> Box<dyn Optimizer> {
        match *self {
            OptimizerKind::Adam { learning_rate, beta1, beta2, epsilon } =>
                Box::new(Adam::new(learning_rate, beta1, beta2, epsilon)),
            OptimizerKind::Sgd { learning_rate } => Box::new(Sgd::new(learning_rate)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OptimizerKind::Adam { .. } => "adam",
            OptimizerKind::Sgd { .. } => "sgd",
        }
    }
}

impl Default for OptimizerKind {
    fn default() -> Self {
        OptimizerKind::Adam {
            learning_rate: adam_learning_rate(),
            beta1: beta1(),
            beta2: beta2(),
            epsilon: epsilon(),
        }
    }
}
