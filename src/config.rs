use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::finder::Strategy;
use crate::report::OutputFormat;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PairSumConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default)]
    pub verify: bool,
}

impl Default for PairSumConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            format: OutputFormat::default(),
            parallel: default_parallel(),
            verify: false,
        }
    }
}

impl PairSumConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: PairSumConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_parallel() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = PairSumConfig::load_from_file("/nonexistent/pairsum.toml").unwrap();
        assert_eq!(config, PairSumConfig::default());
        assert_eq!(config.strategy, Strategy::Linear);
        assert!(config.parallel);
    }

    #[test]
    fn test_partial_file() {
        let path = std::env::temp_dir().join("pairsum_config_partial.toml");
        fs::write(&path, "strategy = \"brute-force\"\nformat = \"json\"\n").unwrap();
        let config = PairSumConfig::load_from_file(&path).unwrap();
        assert_eq!(config.strategy, Strategy::BruteForce);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.parallel);
        assert!(!config.verify);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let path = std::env::temp_dir().join("pairsum_config_bad.toml");
        fs::write(&path, "strategy = \"quantum\"\n").unwrap();
        let err = PairSumConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = fs::remove_file(&path);
    }
}
