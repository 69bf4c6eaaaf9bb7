use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::data::target::TargetFunction;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Everything that defines one run. Every field has a default, so a config
/// file only needs the values it changes; `{}` reproduces the wave-packet
/// experiment (train on [-10, 10], 2000 batches of 100, plot on [-20, 20]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub network: NetworkSpec,
    pub target: TargetFunction,
    /// Sampling interval for training inputs.
    pub train_lo: f64,
    pub train_hi: f64,
    pub train: TrainConfig,
    /// Interval and resolution of the prediction plot.
    pub grid_lo: f64,
    pub grid_hi: f64,
    pub grid_points: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            network: NetworkSpec::default(),
            target: TargetFunction::WavePacket,
            train_lo: -10.0,
            train_hi: 10.0,
            train: TrainConfig::default(),
            grid_lo: -20.0,
            grid_hi: 20.0,
            grid_points: 400,
        }
    }
}

impl ExperimentConfig {
    /// Deserializes a config from a JSON file.
    pub fn load_json(path: &Path) -> std::io::Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default_experiment() {
        let cfg: ExperimentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ExperimentConfig::default());
        assert_eq!(cfg.train.iterations, 2000);
        assert_eq!(cfg.train.batch_size, 100);
    }

    #[test]
    fn overrides_are_merged_with_defaults() {
        let cfg: ExperimentConfig = serde_json::from_str(
            r#"{"target": "gaussian", "train": {"iterations": 50}, "grid_points": 10}"#,
        ).unwrap();
        assert_eq!(cfg.target, TargetFunction::Gaussian);
        assert_eq!(cfg.train.iterations, 50);
        assert_eq!(cfg.train.batch_size, 100);
        assert_eq!(cfg.grid_points, 10);
        assert_eq!(cfg.network, NetworkSpec::default());
    }

    #[test]
    fn save_then_load_from_disk() {
        let path = std::env::temp_dir().join(format!("wavefit-config-{}.json", std::process::id()));
        let mut cfg = ExperimentConfig::default();
        cfg.train_hi = 5.0;
        cfg.save_json(&path).unwrap();
        assert_eq!(ExperimentConfig::load_json(&path).unwrap(), cfg);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let path = std::env::temp_dir().join(format!("wavefit-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = ExperimentConfig::load_json(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        let _ = std::fs::remove_file(&path);
    }
}
