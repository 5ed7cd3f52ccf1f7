//! Error types for root resolution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve the path of the running program")]
    Resolve(#[source] rootenv_platform::Error),

    #[error("{var} is not set and no {binary} could be found in your PATH")]
    EngineNotFound { var: String, binary: String },

    /// The engine root fallback failed. The cause is kept as `source()` only.
    #[error("{var} is not set. Please set ${var}")]
    BaseDirUnset {
        var: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
