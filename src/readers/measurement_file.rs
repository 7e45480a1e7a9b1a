use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::Result;

/// Read-only view over a measurement file's bytes.
///
/// Large inputs are memory-mapped so the whole region can be shared across
/// worker threads without copying. The map is never written to; a zero-length
/// file carries no mapping at all and exposes an empty slice.
#[derive(Debug)]
pub struct MeasurementFile {
    mmap: Option<Mmap>,
}

impl MeasurementFile {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        // mmap(2) rejects zero-length mappings.
        let mmap = if len == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self { mmap })
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
