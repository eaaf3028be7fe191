//! The closed set of container backends under benchmark.
//!
//! Each variant is an opaque container realizing the capability interface
//! in [`crate::backend`]; the harness never looks inside it. The registry
//! maps a stable name to a monomorphized driver function, so backend
//! selection is resolved at startup while the backends themselves stay
//! statically dispatched.

pub mod art;
pub mod blart;
pub mod btree;
pub mod dash;
pub mod dict;
pub mod fst;
pub mod hash;
pub mod skiplist;

use crate::backend::Value;
use crate::error::BenchError;
use crate::report::Report;
use crate::runner::{self, RunConfig, StaticRunConfig};

/// Driver signature for an incremental backend.
pub type RunFn = fn(&str, &RunConfig) -> Result<Report, BenchError>;

/// Driver signature for a static backend.
pub type StaticRunFn = fn(&str, &StaticRunConfig) -> Result<Report, BenchError>;

/// A named incremental backend variant.
pub struct BenchEntry {
    /// Registry name, also used as the report label.
    pub name: &'static str,
    /// Runs one full benchmark through this backend.
    pub run: RunFn,
}

/// A named static backend variant.
pub struct StaticEntry {
    /// Registry name, also used as the report label.
    pub name: &'static str,
    /// Runs one full build/persist/reload/query lifecycle.
    pub run: StaticRunFn,
}

/// Incremental backends, in report order.
pub const INCREMENTAL: &[BenchEntry] = &[
    BenchEntry {
        name: "btree",
        run: runner::run::<btree::BTreeBackend>,
    },
    BenchEntry {
        name: "hash",
        run: runner::run::<hash::HashBackend>,
    },
    BenchEntry {
        name: "art",
        run: runner::run::<art::ArtBackend>,
    },
    BenchEntry {
        name: "blart",
        run: runner::run::<blart::BlartBackend>,
    },
    BenchEntry {
        name: "skiplist",
        run: runner::run::<skiplist::SkipListBackend>,
    },
    BenchEntry {
        name: "dash",
        run: runner::run::<dash::DashBackend>,
    },
];

/// Static backends, in report order.
pub const STATIC: &[StaticEntry] = &[
    StaticEntry {
        name: "fst",
        run: runner::run_static::<fst::FstBackend>,
    },
    StaticEntry {
        name: "fst-mmap",
        run: runner::run_static::<fst::MmapFstBackend>,
    },
    StaticEntry {
        name: "dict",
        run: runner::run_static::<dict::SortedDictBackend>,
    },
];

/// Look up an incremental backend by registry name.
pub fn find_incremental(name: &str) -> Option<&'static BenchEntry> {
    INCREMENTAL.iter().find(|e| e.name == name)
}

/// Look up a static backend by registry name.
pub fn find_static(name: &str) -> Option<&'static StaticEntry> {
    STATIC.iter().find(|e| e.name == name)
}

/// Pair up keys with their values, sorted by key with duplicates collapsed
/// to the last-inserted value. Static builders share this normalization:
/// the FST requires strictly increasing keys, and the sorted dictionary
/// relies on it for binary search.
pub(crate) fn sorted_unique<'a>(
    keys: &'a [Box<[u8]>],
    values: &[Value],
) -> Vec<(&'a [u8], Value)> {
    let mut pairs: Vec<(&[u8], Value)> = keys
        .iter()
        .map(|k| k.as_ref())
        .zip(values.iter().copied())
        .collect();
    // Stable sort keeps insertion order within a duplicate run.
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let mut out: Vec<(&[u8], Value)> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if let Some(last) = out.last_mut() {
            if last.0 == pair.0 {
                last.1 = pair.1;
                continue;
            }
        }
        out.push(pair);
    }
    out
}
