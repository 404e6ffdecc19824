use std::num::NonZeroUsize;

use memchr::memchr;

use crate::config::BoundarySearch;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub len: usize,
}

impl Chunk {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end()]
    }
}

/// Splits `buf` into exactly `parts` line-aligned chunks covering the whole
/// buffer. Later chunks may be empty when the buffer holds fewer lines than
/// `parts`. An empty buffer yields no chunks.
pub fn plan_chunks(buf: &[u8], parts: NonZeroUsize, search: BoundarySearch) -> Result<Vec<Chunk>> {
    let len = buf.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let parts = parts.get();
    let chunk_size = len / parts;
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;

    for _ in 0..parts - 1 {
        let end = next_boundary(buf, start + chunk_size, search)?;
        chunks.push(Chunk {
            start,
            len: end - start,
        });
        start = end;
    }
    chunks.push(Chunk {
        start,
        len: len - start,
    });

    Ok(chunks)
}

/// Offset just past the first `\n` at or after `from`, or the buffer length.
fn next_boundary(buf: &[u8], from: usize, search: BoundarySearch) -> Result<usize> {
    let len = buf.len();
    if from >= len {
        return Ok(len);
    }

    match search {
        BoundarySearch::Unbounded => Ok(memchr(b'\n', &buf[from..]).map_or(len, |i| from + i + 1)),
        BoundarySearch::Window(window) => {
            let limit = len.min(from.saturating_add(window));
            match memchr(b'\n', &buf[from..limit]) {
                Some(i) => Ok(from + i + 1),
                None if limit == len => Ok(len),
                None => Err(Error::BoundaryNotFound {
                    offset: from,
                    window,
                }),
            }
        }
    }
}
