use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use ythub_core::{StatusEntry, StatusRegistry};
use ythub_logging::ythub_info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read label config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse label config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Label overrides shipped alongside the client.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LabelConfig {
    #[serde(default)]
    pub statuses: Vec<StatusEntry>,
}

pub fn load_label_config(path: &Path) -> Result<LabelConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LabelConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    ythub_info!(
        "Loaded {} status label overrides from {:?}",
        config.statuses.len(),
        path
    );
    Ok(config)
}

/// Overrides go through `register_status`, so they replace the built-in entries.
pub fn apply_overrides(registry: &mut StatusRegistry, config: LabelConfig) {
    registry.register_status(config.statuses);
}
