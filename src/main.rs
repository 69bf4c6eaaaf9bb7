use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use wavefit::{config::ExperimentConfig, experiment, logging, report};

/// Train a small feed-forward network to mimic a scalar function, then plot
/// the cost curve and the learned shape.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON experiment config; anything omitted keeps its default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for weight initialisation and sampling (random if omitted)
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Number of training batches
    #[arg(long, value_name = "INT")]
    iterations: Option<usize>,
    /// Samples per batch
    #[arg(long, value_name = "INT")]
    batch_size: Option<usize>,
    /// Also write index.html, cost.svg, prediction.svg and costs.json here
    #[arg(long, value_name = "PATH")]
    out_dir: Option<PathBuf>,
    /// Address for the report page
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:7878")]
    serve: String,
    /// Print the summary and exit instead of serving the report
    #[arg(long)]
    no_serve: bool,
    /// Log every batch
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => ExperimentConfig::load_json(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(n) = cli.iterations {
        config.train.iterations = n;
    }
    if let Some(b) = cli.batch_size {
        config.train.batch_size = b;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = experiment::run(&config, &mut rng);
    let summary = outcome.summary(&config, cli.seed);
    info!(
        first_cost = ?summary.first_cost,
        final_cost = ?summary.final_cost,
        grid_mse = summary.grid_mse,
        "run complete"
    );

    let pages = report::build_pages(&outcome.history, &outcome.grid, &summary);

    if let Some(dir) = &cli.out_dir {
        report::write_reports(dir, &pages)?;
    }

    if !cli.no_serve {
        report::serve(&cli.serve, &pages)?;
    }
    Ok(())
}
