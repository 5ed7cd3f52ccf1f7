//! The four root lookups.
//!
//! Each lookup checks its override variable first and returns the value
//! verbatim when it is set and non-empty. None of the returned paths are
//! checked for existence, type or writability; that is left to the caller.

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use rootenv_platform::path::strip_levels;
use rootenv_platform::{
    Environment, ExecutableLocator, ProcessEnv, SearchPath, WhichLocator, program_path,
};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// The engine binary sits in `<root>/sbin/<binary>`.
const ENGINE_BINARY_DEPTH: usize = 2;

#[derive(Debug, Clone)]
pub struct RootResolver<E = ProcessEnv, L = WhichLocator> {
    env: E,
    locator: L,
    config: ResolverConfig,
}

impl RootResolver {
    /// Resolver over the running process with the default configuration.
    pub fn new() -> Self {
        Self::with_parts(ProcessEnv, WhichLocator::new(), ResolverConfig::default())
    }
}

impl Default for RootResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, L> RootResolver<E, L>
where
    E: Environment,
    L: ExecutableLocator,
{
    pub fn with_parts(env: E, locator: L, config: ResolverConfig) -> Self {
        Self {
            env,
            locator,
            config,
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn override_var(&self, var: &str) -> Option<PathBuf> {
        let value = self.env.non_empty(var)?;
        debug!(var, value = ?value, "resolved from environment");
        Some(PathBuf::from(value))
    }

    /// Root of the platform distribution.
    ///
    /// Falls back to the parent of the running program's directory when that
    /// directory is named `bin`, and to the configured default otherwise.
    pub fn platform_root(&self) -> Result<PathBuf> {
        if let Some(root) = self.override_var(&self.config.vars.root) {
            return Ok(root);
        }

        let program = program_path(&self.env).map_err(Error::Resolve)?;
        let dir = program.parent().unwrap_or(program.as_path());

        if dir.file_name() == Some(OsStr::new(&self.config.bin_dir)) {
            let root = dir.parent().unwrap_or(dir).to_path_buf();
            debug!(program = %program.display(), root = %root.display(), "platform root from program location");
            return Ok(root);
        }

        debug!(program = %program.display(), "program not in a bin directory, using default root");
        Ok(self.config.default_root.clone())
    }

    /// Root for runtime data. Never fails.
    pub fn data_root(&self) -> PathBuf {
        self.override_var(&self.config.vars.data_root)
            .unwrap_or_else(|| self.config.default_data_root.clone())
    }

    /// Directories searched for the engine binary: the system directory,
    /// then the inherited `PATH` entries. Relative entries are anchored at the
    /// environment's current directory, or dropped when it cannot be read.
    pub fn engine_search_path(&self) -> SearchPath {
        let cwd = match self.env.current_dir() {
            Ok(cwd) => Some(cwd),
            Err(err) => {
                debug!(error = %err, "no current directory, relative search entries dropped");
                None
            }
        };
        SearchPath::from_env(&self.env)
            .prepend(&self.config.engine_system_dir)
            .resolve_against(cwd.as_deref())
    }

    /// Root of the database engine distribution, two levels above its binary.
    pub fn engine_root(&self) -> Result<PathBuf> {
        let vars = &self.config.vars;
        if let Some(root) = self.override_var(&vars.engine_root) {
            return Ok(root);
        }

        let binary = &self.config.engine_binary;
        let search = self.engine_search_path();
        tracing::trace!(binary = %binary, search = ?search, "locating engine binary");

        let Some(found) = self.locator.locate(binary, &search) else {
            return Err(Error::EngineNotFound {
                var: vars.engine_root.clone(),
                binary: binary.clone(),
            });
        };

        let root = strip_levels(&found, ENGINE_BINARY_DEPTH);
        debug!(binary = %found.display(), root = %root.display(), "engine root from binary location");
        Ok(root)
    }

    /// Directory holding the engine's support files. Defaults to
    /// [`engine_root`](Self::engine_root).
    pub fn engine_base_dir(&self) -> Result<PathBuf> {
        let var = &self.config.vars.engine_basedir;
        if let Some(dir) = self.override_var(var) {
            return Ok(dir);
        }

        self.engine_root().map_err(|source| Error::BaseDirUnset {
            var: var.clone(),
            source: Box::new(source),
        })
    }
}
