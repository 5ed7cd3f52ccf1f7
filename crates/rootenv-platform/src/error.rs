use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("program argument vector is empty")]
    EmptyArgs,

    #[error("search path entry contains the path separator")]
    JoinPaths(#[from] std::env::JoinPathsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
