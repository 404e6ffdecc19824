//! Parallel min/mean/max aggregation over `station;value` lines.
//!
//! The input buffer is split into line-aligned chunks, each chunk is scanned
//! on its own worker into a private table keyed by borrowed byte spans, and
//! the tables are merged on the calling thread once every worker is done.

pub mod chunk;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod key;
pub mod merge;
pub mod scan;
pub mod stats;

use rayon::prelude::*;
use tracing::{debug, trace};

pub use config::{BoundarySearch, EngineConfig};
pub use error::{Error, Result};
pub use format::{render, write_summary, StationSummary};
pub use input::MappedInput;
pub use key::ByteKey;
pub use scan::StationTable;
pub use stats::Accumulator;

pub fn aggregate<'a>(buf: &'a [u8], config: &EngineConfig) -> Result<StationTable<'a>> {
    let chunks = chunk::plan_chunks(buf, config.parallelism, config.boundary)?;
    debug!(bytes = buf.len(), chunks = chunks.len(), "planned chunks");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism.get())
        .thread_name(|i| format!("scan-{i}"))
        .build()?;

    let tables: Vec<StationTable<'a>> = pool.install(|| {
        chunks
            .par_iter()
            .map(|chunk| {
                let table = scan::scan_chunk(chunk.bytes(buf), config.table_capacity);
                trace!(
                    start = chunk.start,
                    len = chunk.len,
                    stations = table.len(),
                    "scanned chunk"
                );
                table
            })
            .collect()
    });

    Ok(merge::merge_all(tables).unwrap_or_else(|| scan::new_table(0)))
}

/// Aggregates `buf` and returns the stations in byte-wise key order.
pub fn summarize<'a>(buf: &'a [u8], config: &EngineConfig) -> Result<Vec<StationSummary<'a>>> {
    aggregate(buf, config).map(format::sorted)
}
