//! Mechanism layer for root resolution.
//!
//! Reads the environment through the [`Environment`] trait, builds local
//! [`SearchPath`] lists and finds executables with an [`ExecutableLocator`].
//! Nothing here writes to the process environment.

pub use env::{Environment, MapEnv, ProcessEnv, SearchPath, program_path};
pub use error::{Error, Result};
pub use locate::{ExecutableLocator, WhichLocator};

pub mod env;
mod error;
pub mod locate;
pub mod path;
