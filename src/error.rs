//! Error type shared by the harness.
//!
//! The benchmarking philosophy is fail fast, measure the happy path: there
//! are no retries and no partial reports. Library code propagates this error
//! with `?`; the binaries print its one-line `Display` and exit with code 1.

use std::io;
use std::path::{Path, PathBuf};

/// Errors produced while driving a benchmark run.
#[derive(Debug)]
pub enum BenchError {
    /// An input file (keys, queries or index) could not be opened.
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// An I/O error after a file was successfully opened.
    Io(io::Error),
    /// A record exceeded the scan buffer, so it can never be tokenized.
    ///
    /// The maximum representable key is one byte shorter than the buffer
    /// capacity (the record's separator must also fit in the window).
    KeyTooLong {
        /// Capacity of the scan buffer the record did not fit into.
        capacity: usize,
    },
    /// FST construction or deserialization failed.
    Fst(fst::Error),
    /// A serialized index failed validation while loading.
    CorruptIndex(String),
}

impl BenchError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        BenchError::Open {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::Open { path, .. } => write!(f, "no such file: {}", path.display()),
            BenchError::Io(e) => write!(f, "I/O error: {}", e),
            BenchError::KeyTooLong { capacity } => {
                write!(f, "key exceeds scan buffer capacity ({} bytes)", capacity)
            }
            BenchError::Fst(e) => write!(f, "index error: {}", e),
            BenchError::CorruptIndex(msg) => write!(f, "corrupt index: {}", msg),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Open { source, .. } => Some(source),
            BenchError::Io(e) => Some(e),
            BenchError::Fst(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(e: io::Error) -> Self {
        BenchError::Io(e)
    }
}

impl From<fst::Error> for BenchError {
    fn from(e: fst::Error) -> Self {
        BenchError::Fst(e)
    }
}
