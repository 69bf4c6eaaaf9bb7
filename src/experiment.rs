use rand::Rng;
use tracing::info;

use crate::config::ExperimentConfig;
use crate::data::sampler::Sampler;
use crate::network::network::Network;
use crate::report::grid::PredictionGrid;
use crate::report::page::RunSummary;
use crate::train::history::CostHistory;
use crate::train::loop_fn::train_loop;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct Outcome {
    pub network: Network,
    pub history: CostHistory,
    pub grid: PredictionGrid,
}

/// Builds the network, trains it and evaluates it on the plotting grid.
///
/// `rng` seeds the initial weights and then drives the sampler, so a seeded
/// generator makes the whole run reproducible.
pub fn run<R: Rng + ?Sized>(config: &ExperimentConfig, rng: &mut R) -> Outcome {
    let mut network = Network::compile(&config.network, rng);
    info!(
        architecture = %config.network.describe(),
        parameters = network.parameter_count(),
        loss = ?config.network.loss,
        optimizer = config.network.optimizer.name(),
        "model compiled"
    );

    let sampler = Sampler::new(config.train_lo, config.train_hi, config.target);
    let history = train_loop(&mut network, &sampler, rng, &config.train);

    let grid = PredictionGrid::build(
        &network,
        config.target,
        config.grid_lo,
        config.grid_hi,
        config.grid_points,
    );

    Outcome { network, history, grid }
}

impl Outcome {
    pub fn summary(&self, config: &ExperimentConfig, seed: Option<u64>) -> RunSummary {
        RunSummary {
            architecture: config.network.describe(),
            target: config.target.formula().to_owned(),
            iterations: config.train.iterations,
            batch_size: config.train.batch_size,
            first_cost: self.history.first(),
            final_cost: self.history.last(),
            best_cost: self.history.best(),
            grid_mse: self.grid.mse(),
            seed,
        }
    }
}
