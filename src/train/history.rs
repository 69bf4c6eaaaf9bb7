use serde::{Serialize, Deserialize};

/// Per-batch training cost, in iteration order.
///
/// Filled by `train_loop`, one entry per batch; read by the cost chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostHistory {
    costs: Vec<f64>,
}

impl CostHistory {
    pub fn with_capacity(iterations: usize) -> Self {
        CostHistory { costs: Vec::with_capacity(iterations) }
    }

    pub fn push(&mut self, cost: f64) {
        self.costs.push(cost);
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.costs.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.costs.last().copied()
    }

    /// Mean of the last `window` costs (fewer if the history is shorter).
    pub fn trailing_mean(&self, window: usize) -> Option<f64> {
        let n = window.min(self.costs.len());
        if n == 0 {
            return None;
        }
        let tail = &self.costs[self.costs.len() - n..];
        Some(tail.iter().sum::<f64>() / n as f64)
    }

    /// Smallest finite cost and its iteration index.
    pub fn best(&self) -> Option<(usize, f64)> {
        self.costs.iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| c.is_finite())
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl From<Vec<f64>> for CostHistory {
    fn from(costs: Vec<f64>) -> Self {
        CostHistory { costs }
    }
}
