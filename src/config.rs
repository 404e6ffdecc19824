use std::num::NonZeroUsize;
use std::thread;

use crate::error::{Error, Result};

/// Distinct stations expected per chunk; tables start this large so the scan
/// never rehashes on realistic inputs.
pub const EXPECTED_STATIONS: usize = 15_000;

/// How far the chunk planner may look past a tentative boundary for `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundarySearch {
    /// Scan up to the end of the buffer.
    #[default]
    Unbounded,
    /// Give up after this many bytes and report the input as malformed.
    Window(usize),
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub parallelism: NonZeroUsize,
    pub boundary: BoundarySearch,
    pub table_capacity: usize,
}

impl EngineConfig {
    pub fn with_parallelism(mut self, parallelism: usize) -> Result<Self> {
        self.parallelism = NonZeroUsize::new(parallelism)
            .ok_or(Error::InvalidConfig("parallelism must be at least 1"))?;
        Ok(self)
    }

    pub fn with_boundary(mut self, boundary: BoundarySearch) -> Result<Self> {
        if boundary == BoundarySearch::Window(0) {
            return Err(Error::InvalidConfig("lookahead window must be non-zero"));
        }
        self.boundary = boundary;
        Ok(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            parallelism: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            boundary: BoundarySearch::default(),
            table_capacity: EXPECTED_STATIONS,
        }
    }
}
