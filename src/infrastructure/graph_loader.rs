//! Input loading: memory-map the dump file and hand the bytes to the decoder.
//!
//! The whole file is mapped before decoding begins; the decoder sees one
//! contiguous byte slice, so results and failure points are identical to a
//! read-into-Vec implementation. The mapping (and the file handle behind it)
//! is dropped when loading returns, success or failure.

use crate::domain::decode;
use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::CommGraph;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

pub struct GraphLoader;

impl GraphLoader {
    /// Load and decode a communication graph dump.
    pub fn load(path: &Path) -> GraphResult<CommGraph> {
        let file = File::open(path)?;

        // Mapping a zero-length file fails with EINVAL on most platforms;
        // report it as the malformed input it is instead.
        if file.metadata()?.len() == 0 {
            return Err(GraphError::malformed(
                0,
                "empty input, expected a process record header",
            ));
        }

        let mmap = unsafe { Mmap::map(&file) }?;
        decode::decode(&mmap)
    }
}
