use rand::{rngs::StdRng, SeedableRng};

use wavefit::{
    experiment, linspace, report, train_loop, ExperimentConfig, Network, NetworkSpec,
    Regressor, Sampler, TargetFunction, TrainConfig,
};

fn seeded_network(seed: u64) -> Network {
    Network::compile(&NetworkSpec::default(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn wave_packet_cost_trends_down() {
    let mut network = seeded_network(2020);
    let sampler = Sampler::new(-10.0, 10.0, TargetFunction::WavePacket);
    let mut rng = StdRng::seed_from_u64(7);

    let history = train_loop(&mut network, &sampler, &mut rng, &TrainConfig::new(2000, 100));

    assert_eq!(history.len(), 2000);
    assert!(history.costs().iter().all(|c| c.is_finite() && *c >= 0.0));

    let first = history.first().unwrap();
    let last = history.last().unwrap();
    assert!(last < first, "final cost {} not below first cost {}", last, first);

    let early = history.costs()[..20].iter().sum::<f64>() / 20.0;
    let late = history.trailing_mean(200).unwrap();
    assert!(late < early, "late mean {} not below early mean {}", late, early);
}

#[test]
fn same_seeds_reproduce_the_same_run() {
    let cfg = ExperimentConfig {
        train: TrainConfig::new(50, 16),
        ..ExperimentConfig::default()
    };
    let a = experiment::run(&cfg, &mut StdRng::seed_from_u64(99));
    let b = experiment::run(&cfg, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.history, b.history);
    assert_eq!(a.grid, b.grid);
}

#[test]
fn prediction_grid_has_one_output_per_point() {
    let network = seeded_network(1);
    let y_in = linspace(-20.0, 20.0, 400);

    let y_out = network.predict(&y_in);

    assert_eq!(y_out.shape(), (400, 1));
}

#[test]
fn predict_is_idempotent_between_training_steps() {
    let mut network = seeded_network(3);
    let sampler = Sampler::new(-10.0, 10.0, TargetFunction::WavePacket);
    let mut rng = StdRng::seed_from_u64(3);
    let probe = linspace(-5.0, 5.0, 11);

    train_loop(&mut network, &sampler, &mut rng, &TrainConfig::new(10, 100));
    let first = network.predict(&probe);
    let second = network.predict(&probe);
    assert_eq!(first, second);

    let batch = sampler.sample(100, &mut rng);
    network.train_step(&batch.inputs, &batch.targets);
    assert_ne!(network.predict(&probe), first);
}

#[test]
fn full_run_renders_a_report() {
    let cfg = ExperimentConfig {
        train: TrainConfig::new(20, 32),
        grid_points: 50,
        ..ExperimentConfig::default()
    };
    let outcome = experiment::run(&cfg, &mut StdRng::seed_from_u64(5));
    let summary = outcome.summary(&cfg, Some(5));

    let pages = report::build_pages(&outcome.history, &outcome.grid, &summary);

    assert_eq!(outcome.grid.len(), 50);
    assert!(pages.index_html.contains("Batch Number"));
    assert_eq!(pages.prediction_svg.matches("<path").count(), 2);
    assert!(!pages.index_html.contains("{{"));
}
