//! Per-run measurement schema and the stderr report format.
//!
//! The line-oriented report written to stderr is the harness's only
//! user-visible output. Field layout matches the established format so
//! runs remain comparable across harness versions:
//!
//! ```text
//! ---- btree                     --------------------------
//! Init RSS:            12.34 MiB (12938240 bytes)
//! Time to insert:      1.23 sec (123.45 nsec per key)
//! Words:               1000000
//!
//! Index size:          4.56 MiB (4780032 bytes)
//! Time to search:      0.98 sec (98.76 nsec per key)
//! Words:               1000000
//! Found:               999998
//! ```

use std::time::Duration;

const MIB: f64 = 1048576.0;

/// Measurements from the build phase.
#[derive(Debug, Clone)]
pub struct BuildStats {
    /// Wall-clock time of the whole build phase.
    pub elapsed: Duration,
    /// Number of keys inserted (records tokenized from the key file).
    pub keys: u64,
}

/// Measurements from the query phase.
#[derive(Debug, Clone)]
pub struct QueryStats {
    /// Wall-clock time of the lookup loop.
    pub elapsed: Duration,
    /// Number of records probed.
    pub keys: u64,
    /// Number of probes that hit.
    pub hits: u64,
}

/// All measurements of one benchmark run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Backend label.
    pub label: String,
    /// Process RSS sampled before the run, in bytes.
    pub init_rss_bytes: u64,
    /// Build phase, absent when an existing index was reused.
    pub build: Option<BuildStats>,
    /// On-disk index size in bytes (static backends only).
    pub index_bytes: Option<u64>,
    /// Query phase, absent when it was skipped.
    pub query: Option<QueryStats>,
}

impl BuildStats {
    /// Nanoseconds per inserted key, 0.0 when no key was inserted.
    pub fn ns_per_key(&self) -> f64 {
        per_key_ns(self.elapsed, self.keys)
    }
}

impl QueryStats {
    /// Nanoseconds per probed key, 0.0 when no key was probed.
    pub fn ns_per_key(&self) -> f64 {
        per_key_ns(self.elapsed, self.keys)
    }
}

fn per_key_ns(elapsed: Duration, keys: u64) -> f64 {
    if keys == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1e9 / keys as f64
    }
}

/// Emit the run header: label banner and initial RSS.
pub fn print_header(label: &str, rss_bytes: u64) {
    eprintln!("---- {:<25} --------------------------", label);
    eprintln!(
        "{:<20} {:.2} MiB ({} bytes)",
        "Init RSS:",
        rss_bytes as f64 / MIB,
        rss_bytes
    );
}

/// Emit the build phase fields.
pub fn print_build(stats: &BuildStats) {
    eprintln!(
        "{:<20} {:.2} sec ({:.2} nsec per key)",
        "Time to insert:",
        stats.elapsed.as_secs_f64(),
        stats.ns_per_key()
    );
    eprintln!("{:<20} {}\n", "Words:", stats.keys);
}

/// Emit the on-disk index size (static backends only).
pub fn print_index_size(bytes: u64) {
    eprintln!(
        "{:<20} {:.2} MiB ({} bytes)",
        "Index size:",
        bytes as f64 / MIB,
        bytes
    );
}

/// Emit the query phase fields.
pub fn print_query(stats: &QueryStats) {
    eprintln!(
        "{:<20} {:.2} sec ({:.2} nsec per key)",
        "Time to search:",
        stats.elapsed.as_secs_f64(),
        stats.ns_per_key()
    );
    eprintln!("{:<20} {}", "Words:", stats.keys);
    eprintln!("{:<20} {}", "Found:", stats.hits);
}
