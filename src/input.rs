use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// The whole input file, mapped read-only for the duration of a run.
pub struct MappedInput {
    map: Option<Mmap>,
}

impl MappedInput {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            // Zero-length mappings are rejected by some platforms.
            return Ok(MappedInput { map: None });
        }

        // SAFETY: the file is opened read-only and the mapping is never
        // written. Truncating the file while it is mapped is not supported.
        let map = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        Ok(MappedInput { map: Some(map) })
    }
}

impl Deref for MappedInput {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }
}
