//! Variable names and defaults used by [`RootResolver`](crate::RootResolver).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Platform root used when `ROOT` is unset and the program is not in a `bin` directory.
pub const DEFAULT_ROOT: &str = "/usr/local/bhojpur";
/// Data root used when `DATAROOT` is unset.
pub const DEFAULT_DATA_ROOT: &str = "/bhojpur";
/// Directory searched ahead of `PATH` for the engine binary.
pub const DEFAULT_ENGINE_SYSTEM_DIR: &str = "/usr/sbin";
pub const DEFAULT_ENGINE_BINARY: &str = "mysqld";
pub const DEFAULT_BIN_DIR: &str = "bin";

/// Names of the override variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVars {
    pub root: String,
    pub data_root: String,
    pub engine_root: String,
    pub engine_basedir: String,
}

impl Default for EnvVars {
    fn default() -> Self {
        Self {
            root: "ROOT".into(),
            data_root: "DATAROOT".into(),
            engine_root: "DB_ROOT".into(),
            engine_basedir: "DB_BASEDIR".into(),
        }
    }
}

/// Resolver configuration.
///
/// Every field is optional in TOML; missing fields keep their defaults.
///
/// ```toml
/// default_root = "/opt/platform"
///
/// [vars]
/// root = "PLATFORM_ROOT"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub vars: EnvVars,
    pub default_root: PathBuf,
    pub default_data_root: PathBuf,
    /// Name of the directory the platform binaries live in.
    pub bin_dir: String,
    pub engine_binary: String,
    pub engine_system_dir: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            vars: EnvVars::default(),
            default_root: PathBuf::from(DEFAULT_ROOT),
            default_data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            bin_dir: DEFAULT_BIN_DIR.into(),
            engine_binary: DEFAULT_ENGINE_BINARY.into(),
            engine_system_dir: PathBuf::from(DEFAULT_ENGINE_SYSTEM_DIR),
        }
    }
}

impl ResolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
