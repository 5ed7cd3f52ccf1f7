//! Installation-root resolution.
//!
//! Four lookups, each a linear fallback chain:
//!
//! | Lookup | Override | Fallback |
//! |---|---|---|
//! | [`platform_root`] | `ROOT` | parent of the program's `bin` directory, else `/usr/local/bhojpur` |
//! | [`data_root`] | `DATAROOT` | `/bhojpur` |
//! | [`engine_root`] | `DB_ROOT` | two levels above `mysqld` found on `/usr/sbin` + `PATH` |
//! | [`engine_base_dir`] | `DB_BASEDIR` | [`engine_root`] |
//!
//! Returned paths are not checked for existence or writability.
//! The process environment is only read, never written.
//!
//! # Example
//!
//! ```
//! use rootenv::{ResolverConfig, RootResolver};
//! use rootenv_platform::{MapEnv, WhichLocator};
//!
//! let env = MapEnv::new().with_var("DATAROOT", "/srv/data");
//! let resolver = RootResolver::with_parts(env, WhichLocator::new(), ResolverConfig::default());
//!
//! assert_eq!(resolver.data_root(), std::path::PathBuf::from("/srv/data"));
//! ```

pub use config::{EnvVars, ResolverConfig};
pub use error::{Error, Result};
pub use resolver::RootResolver;

pub mod config;
mod error;
mod resolver;

use std::path::PathBuf;

/// Platform root of the running process.
pub fn platform_root() -> Result<PathBuf> {
    RootResolver::new().platform_root()
}

/// Data root of the running process.
pub fn data_root() -> PathBuf {
    RootResolver::new().data_root()
}

/// Database engine root of the running process.
pub fn engine_root() -> Result<PathBuf> {
    RootResolver::new().engine_root()
}

/// Database engine base directory of the running process.
pub fn engine_base_dir() -> Result<PathBuf> {
    RootResolver::new().engine_base_dir()
}
