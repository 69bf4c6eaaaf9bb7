use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::data::sampler::Sampler;
use crate::network::regressor::Regressor;
use crate::train::history::CostHistory;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `model` on `config.iterations` freshly sampled batches and returns
/// the cost of every batch, in order.
///
/// # Arguments
/// - `model`   — anything implementing `Regressor`; modified in place
/// - `sampler` — source of (input, target) batches
/// - `rng`     — the only randomness the loop consumes
/// - `config`  — iteration count, batch size and logging cadence
///
/// There is no early stopping: the returned history always has exactly
/// `config.iterations` entries, non-finite costs included.
///
/// # Panics
/// Panics if `config.batch_size == 0`.
pub fn train_loop<M, R>(
    model: &mut M,
    sampler: &Sampler,
    rng: &mut R,
    config: &TrainConfig,
) -> CostHistory
where
    M: Regressor + ?Sized,
    R: Rng + ?Sized,
{
    train_loop_with(model, sampler, rng, config, |_, _| {})
}

/// Like `train_loop`, calling `on_step(iteration, cost)` after every batch.
/// `iteration` is 0-based.
pub fn train_loop_with<M, R, F>(
    model: &mut M,
    sampler: &Sampler,
    rng: &mut R,
    config: &TrainConfig,
    mut on_step: F,
) -> CostHistory
where
    M: Regressor + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(usize, f64),
{
    assert!(config.batch_size > 0, "batch_size must be at least 1");

    let mut history = CostHistory::with_capacity(config.iterations);
    let t_start = Instant::now();

    info!(
        iterations = config.iterations,
        batch_size = config.batch_size,
        lo = sampler.lo,
        hi = sampler.hi,
        "training started"
    );

    for i in 0..config.iterations {
        let batch = sampler.sample(config.batch_size, rng);
        let cost = model.train_step(&batch.inputs, &batch.targets);
        history.push(cost);

        debug!(iteration = i, cost, "batch trained");
        if config.log_every > 0 && (i + 1) % config.log_every == 0 {
            info!(
                iteration = i + 1,
                cost,
                recent_mean = history.trailing_mean(config.log_every).unwrap_or(cost),
                "progress"
            );
        }

        on_step(i, cost);
    }

    info!(
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        final_cost = history.last().unwrap_or(f64::NAN),
        "training finished"
    );

    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::target::TargetFunction;
    use crate::math::matrix::Matrix;
    use rand::{rngs::StdRng, SeedableRng};

    /// Records every batch it sees and reports a fixed cost.
    struct Recorder {
        batch_sizes: Vec<usize>,
        cost: f64,
    }

    impl Regressor for Recorder {
        fn train_step(&mut self, inputs: &Matrix, targets: &Matrix) -> f64 {
            assert_eq!(inputs.shape(), targets.shape());
            self.batch_sizes.push(inputs.rows);
            self.cost
        }

        fn predict(&self, inputs: &Matrix) -> Matrix {
            inputs.clone()
        }
    }

    #[test]
    fn history_length_equals_iteration_count() {
        let mut model = Recorder { batch_sizes: Vec::new(), cost: 0.25 };
        let sampler = Sampler::new(-10.0, 10.0, TargetFunction::WavePacket);
        let config = TrainConfig::new(37, 8);

        let history = train_loop(&mut model, &sampler, &mut StdRng::seed_from_u64(0), &config);

        assert_eq!(history.len(), 37);
        assert!(history.costs().iter().all(|&c| c == 0.25));
        assert_eq!(model.batch_sizes, vec![8; 37]);
    }

    #[test]
    fn non_finite_costs_are_recorded_as_is() {
        let mut model = Recorder { batch_sizes: Vec::new(), cost: f64::NAN };
        let sampler = Sampler::new(-1.0, 1.0, TargetFunction::WavePacket);

        let history = train_loop(&mut model, &sampler, &mut StdRng::seed_from_u64(0), &TrainConfig::new(3, 2));

        assert_eq!(history.len(), 3);
        assert!(history.costs().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn callback_sees_every_step_in_order() {
        let mut model = Recorder { batch_sizes: Vec::new(), cost: 1.0 };
        let sampler = Sampler::new(0.0, 1.0, TargetFunction::Sine);
        let mut seen = Vec::new();

        train_loop_with(
            &mut model,
            &sampler,
            &mut StdRng::seed_from_u64(0),
            &TrainConfig::new(5, 1),
            |i, _| seen.push(i),
        );

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "batch_size")]
    fn empty_batches_are_rejected() {
        let mut model = Recorder { batch_sizes: Vec::new(), cost: 1.0 };
        let sampler = Sampler::new(-10.0, 10.0, TargetFunction::WavePacket);
        train_loop(&mut model, &sampler, &mut StdRng::seed_from_u64(0), &TrainConfig::new(3, 0));
    }

    #[test]
    fn zero_iterations_leave_the_model_alone() {
        let mut model = Recorder { batch_sizes: Vec::new(), cost: 1.0 };
        let sampler = Sampler::new(0.0, 1.0, TargetFunction::Sine);
        let history = train_loop(&mut model, &sampler, &mut StdRng::seed_from_u64(0), &TrainConfig::new(0, 10));
        assert!(history.is_empty());
        assert!(model.batch_sizes.is_empty());
    }
}
