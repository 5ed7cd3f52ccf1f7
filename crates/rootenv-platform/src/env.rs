//! Environment access and search-path lists.

use crate::error::{Error, Result};
use crate::path;
use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Name of the executable search-path variable.
pub const PATH_VAR: &str = "PATH";

fn paths_equal(p1: &Path, p2: &Path) -> bool {
    fn normalize(p: &Path) -> String {
        let s = p.to_string_lossy();
        let s = s.trim_end_matches(['/', '\\']);
        if cfg!(target_os = "windows") {
            s.to_lowercase()
        } else {
            s.to_owned()
        }
    }
    normalize(p1) == normalize(p2)
}

/// Read-only view of a process environment.
pub trait Environment {
    fn var(&self, key: &str) -> Option<OsString>;

    /// First element of the program argument vector.
    fn program(&self) -> Option<OsString>;

    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Value of `key` when it is set and non-empty.
    fn non_empty(&self, key: &str) -> Option<OsString> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<OsString> {
        (**self).var(key)
    }

    fn program(&self) -> Option<OsString> {
        (**self).program()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn program(&self) -> Option<OsString> {
        env::args_os().next()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }
}

/// In-memory environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
    program: Option<OsString>,
    cwd: Option<PathBuf>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the running process: variables, program and working directory.
    pub fn capture() -> Self {
        Self {
            vars: env::vars_os()
                .filter_map(|(k, v)| k.into_string().ok().map(|k| (k, v)))
                .collect(),
            program: env::args_os().next(),
            cwd: env::current_dir().ok(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }

    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn program(&self) -> Option<OsString> {
        self.program.clone()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no current directory"))
    }
}

/// Absolute, lexically cleaned path of the running program.
pub fn program_path(env: &impl Environment) -> Result<PathBuf> {
    let program = PathBuf::from(env.program().ok_or(Error::EmptyArgs)?);
    if program.is_absolute() {
        return Ok(path::clean(&program));
    }
    let cwd = env.current_dir()?;
    Ok(path::absolute(&program, &cwd))
}

/// Ordered list of directories searched for executables.
///
/// Owned by the caller; editing it never changes the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    paths: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a path-list value using the platform separator.
    pub fn from_value(value: impl AsRef<OsStr>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            return Self::default();
        }
        Self {
            paths: env::split_paths(value).collect(),
        }
    }

    /// The `PATH` list of `env`, empty when unset.
    pub fn from_env(env: &impl Environment) -> Self {
        env.var(PATH_VAR)
            .map(|value| Self::from_value(value))
            .unwrap_or_default()
    }

    /// Put `path` first. An existing equal entry is moved, not duplicated.
    pub fn prepend(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.paths.retain(|p| !paths_equal(p, &path));
        self.paths.insert(0, path);
        self
    }

    /// Anchor relative entries at `cwd`. Without a `cwd` they are dropped.
    pub fn resolve_against(self, cwd: Option<&Path>) -> Self {
        let paths = self
            .paths
            .into_iter()
            .filter_map(|p| {
                if p.is_absolute() {
                    Some(p)
                } else {
                    cwd.map(|cwd| path::absolute(&p, cwd))
                }
            })
            .collect();
        Self { paths }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| paths_equal(p, path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Join back into a single path-list value.
    pub fn join(&self) -> Result<OsString> {
        Ok(env::join_paths(&self.paths)?)
    }
}
