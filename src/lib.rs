//! # keybench - Comparative Benchmarks for String-Keyed Containers
//!
//! A micro-benchmark harness that measures memory footprint, bulk-build
//! throughput and point-lookup throughput of interchangeable associative
//! container backends over the same key corpus, under one uniform protocol.
//!
//! ## Protocol
//!
//! Every run walks the same state machine:
//!
//! 1. **Init**: sample process RSS as the baseline, emit the backend label.
//! 2. **Build**: stream the key file through the tokenizer, inserting each
//!    key with its 1-based ordinal as the value, under a wall-clock timer.
//! 3. **Persist/Reload** (static backends only): serialize the built index
//!    to disk, report its byte size, and reload a fresh read-only container
//!    strictly from the on-disk bytes.
//! 4. **Query**: read the query file into memory in one allocation, look up
//!    every record under a timer, counting probes and hits.
//! 5. **Teardown**: drop the container before the next run starts.
//!
//! ## Key files
//!
//! Keys and queries are flat byte streams of records separated by a newline
//! (text mode) or a NUL byte (binary mode, `binary-data` feature). There is
//! no header and no escaping; a final record without a trailing separator is
//! still indexed.
//!
//! ## Example
//!
//! ```no_run
//! use keybench::backends::btree::BTreeBackend;
//! use keybench::runner::{self, RunConfig};
//! use keybench::scan::Separator;
//!
//! let cfg = RunConfig {
//!     keys: "keys.txt".into(),
//!     queries: Some("queries.txt".into()),
//!     separator: Separator::Newline,
//! };
//! let report = runner::run::<BTreeBackend>("btree", &cfg).unwrap();
//! assert_eq!(report.label, "btree");
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod backends;
pub mod buffer;
pub mod error;
pub mod report;
pub mod rss;
pub mod runner;
pub mod scan;

pub use backend::{Backend, StaticBackend, Value};
pub use buffer::{BoundedBuffer, SCAN_BUFFER_SIZE};
pub use error::BenchError;
pub use report::Report;
pub use runner::{run, run_static, RunConfig, StaticRunConfig};
pub use scan::{KeyTokenizer, Separator, SliceRecords};

#[cfg(test)]
mod proptests;
