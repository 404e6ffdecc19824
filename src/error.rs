use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line terminator within the lookahead window after a tentative
    /// chunk boundary.
    #[error("no line terminator within {window} bytes after offset {offset}")]
    BoundaryNotFound { offset: usize, window: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
