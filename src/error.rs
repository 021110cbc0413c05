use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a scenario file. The models themselves never fail.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported scenario format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

impl ScenarioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
