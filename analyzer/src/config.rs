use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigErrors {
    #[error("Failed to open config file")]
    OpenConfig(#[from] std::io::Error),
    #[error("Failed to deserialize config")]
    DeserializeConfig(#[from] serde_yaml::Error),
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct SpeedupConfig {
    // metrics log written by the sequential run
    #[serde(default = "default_sequential_path")]
    pub sequential_path: PathBuf,
    // metrics log written by the concurrent run
    #[serde(default = "default_concurrent_path")]
    pub concurrent_path: PathBuf,
    // destination of the generated report
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl SpeedupConfig {
    /// load a config from a yaml file, missing fields fall back to the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigErrors> {
        Ok(serde_yaml::from_reader(File::open(path)?)?)
    }
}

impl Default for SpeedupConfig {
    fn default() -> Self {
        Self {
            sequential_path: default_sequential_path(),
            concurrent_path: default_concurrent_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_sequential_path() -> PathBuf {
    PathBuf::from("Sequential/output/metrics.txt")
}

fn default_concurrent_path() -> PathBuf {
    PathBuf::from("Concurrent/output/metrics.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("speedup_results.txt")
}
