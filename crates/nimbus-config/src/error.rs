//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while loading, saving, or checking configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// Serializing to RON failed.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A setting is outside the range the renderer accepts.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
