//! Executable lookup over an explicit search list.
//!
//! A locator only maps a program name to the first matching file. Which
//! directories are searched, and in what order, is the caller's policy,
//! expressed as the [`SearchPath`] it passes in.

use crate::env::SearchPath;
use std::env;
use std::path::PathBuf;

pub trait ExecutableLocator {
    fn locate(&self, name: &str, search: &SearchPath) -> Option<PathBuf>;
}

impl<F> ExecutableLocator for F
where
    F: Fn(&str, &SearchPath) -> Option<PathBuf>,
{
    fn locate(&self, name: &str, search: &SearchPath) -> Option<PathBuf> {
        self(name, search)
    }
}

/// Locator backed by the `which` crate.
#[derive(Debug, Clone, Default)]
pub struct WhichLocator {
    cwd: Option<PathBuf>,
}

impl WhichLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative search entries against `cwd` instead of the process
    /// working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl ExecutableLocator for WhichLocator {
    fn locate(&self, name: &str, search: &SearchPath) -> Option<PathBuf> {
        let cwd = match &self.cwd {
            Some(cwd) => Some(cwd.clone()),
            None => env::current_dir().ok(),
        };
        let search = search.clone().resolve_against(cwd.as_deref());

        if search.is_empty() {
            tracing::trace!(name, "empty search path");
            return None;
        }

        let paths = match search.join() {
            Ok(paths) => paths,
            Err(err) => {
                tracing::debug!(name, error = %err, "cannot join search path");
                return None;
            }
        };

        // Every entry is absolute at this point.
        let cwd = cwd.unwrap_or_else(|| PathBuf::from("/"));

        match which::which_in(name, Some(paths), cwd) {
            Ok(found) => {
                tracing::trace!(name, path = %found.display(), "executable located");
                Some(found)
            }
            Err(err) => {
                tracing::trace!(name, error = %err, "executable not located");
                None
            }
        }
    }
}
