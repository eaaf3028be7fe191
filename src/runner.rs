//! Benchmark drivers: one for incremental backends, one for the
//! build/persist/reload lifecycle of static backends.
//!
//! Each run is strictly sequential:
//! `Init -> Build -> (Persist -> Reload, static only) -> Query -> Teardown`.
//! Exactly one container is live per run and it is dropped before the
//! function returns, so RSS baselines of later runs in the same process
//! are not polluted. Report lines are written to stderr as each phase
//! completes; the same measurements come back in the returned [`Report`].

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::backend::{Backend, StaticBackend, Value};
use crate::error::BenchError;
use crate::report::{self, BuildStats, QueryStats, Report};
use crate::rss;
use crate::scan::{KeyTokenizer, Separator, SliceRecords};

/// Inputs of one incremental benchmark run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Key file to build from.
    pub keys: PathBuf,
    /// Query file; `None` skips the query phase.
    pub queries: Option<PathBuf>,
    /// Record separator of both files.
    pub separator: Separator,
}

/// Inputs of one static benchmark run.
#[derive(Debug, Clone)]
pub struct StaticRunConfig {
    /// Key file to build from; `None` skips the build phase and reuses
    /// the existing index at `index`.
    pub keys: Option<PathBuf>,
    /// Where the serialized index is written and read back.
    pub index: PathBuf,
    /// Query file; `None` skips the query phase.
    pub queries: Option<PathBuf>,
    /// Record separator of both files.
    pub separator: Separator,
}

/// Benchmark one incremental backend: timed streaming insert of every key
/// with its 1-based ordinal as the value, then a timed lookup of every
/// query record.
pub fn run<T: Backend>(label: &str, cfg: &RunConfig) -> Result<Report, BenchError> {
    let rss_bytes = rss::resident_set_size() as u64;
    report::print_header(label, rss_bytes);
    let mut result = Report {
        label: label.to_string(),
        init_rss_bytes: rss_bytes,
        build: None,
        index_bytes: None,
        query: None,
    };

    let mut container = T::default();

    let file = File::open(&cfg.keys).map_err(|e| BenchError::open(&cfg.keys, e))?;
    let started = Instant::now();
    let mut keys = KeyTokenizer::new(file, cfg.separator);
    let mut inserted: u64 = 0;
    while let Some(key) = keys.next_key()? {
        inserted += 1;
        container.insert(key, inserted as Value);
    }
    let build = BuildStats {
        elapsed: started.elapsed(),
        keys: inserted,
    };
    report::print_build(&build);
    result.build = Some(build);

    if let Some(queries) = &cfg.queries {
        result.query = Some(query_phase(
            |key| container.lookup(key),
            queries,
            cfg.separator,
        )?);
    }

    drop(container);
    Ok(result)
}

/// Benchmark one static backend through its full lifecycle: materialize
/// the key set and bulk-build + save under the build timer, report the
/// on-disk index size, then reload a fresh container from the index and
/// run the timed query loop against it.
pub fn run_static<T: StaticBackend>(
    label: &str,
    cfg: &StaticRunConfig,
) -> Result<Report, BenchError> {
    let rss_bytes = rss::resident_set_size() as u64;
    report::print_header(label, rss_bytes);
    let mut result = Report {
        label: label.to_string(),
        init_rss_bytes: rss_bytes,
        build: None,
        index_bytes: None,
        query: None,
    };

    if let Some(keys_path) = &cfg.keys {
        let file = File::open(keys_path).map_err(|e| BenchError::open(keys_path, e))?;
        let started = Instant::now();
        let mut tokenizer = KeyTokenizer::new(file, cfg.separator);
        let mut keys: Vec<Box<[u8]>> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        let mut inserted: u64 = 0;
        while let Some(key) = tokenizer.next_key()? {
            inserted += 1;
            keys.push(Box::from(key));
            values.push(inserted as Value);
        }
        let container = T::build(&keys, &values)?;
        container.save(&cfg.index)?;
        // The build-time container is discarded; queries go through a
        // fresh load from the on-disk bytes only.
        drop(container);
        let build = BuildStats {
            elapsed: started.elapsed(),
            keys: inserted,
        };
        report::print_build(&build);
        result.build = Some(build);
    }

    let index_bytes = fs::metadata(&cfg.index)
        .map_err(|e| BenchError::open(&cfg.index, e))?
        .len();
    report::print_index_size(index_bytes);
    result.index_bytes = Some(index_bytes);

    if let Some(queries) = &cfg.queries {
        let container = T::load(&cfg.index)?;
        result.query = Some(query_phase(
            |key| container.lookup(key),
            queries,
            cfg.separator,
        )?);
        drop(container);
    }

    Ok(result)
}

fn query_phase(
    lookup: impl Fn(&[u8]) -> bool,
    queries: &Path,
    separator: Separator,
) -> Result<QueryStats, BenchError> {
    let data = fs::read(queries).map_err(|e| BenchError::open(queries, e))?;
    let started = Instant::now();
    let (mut probed, mut hits) = (0u64, 0u64);
    for key in SliceRecords::new(&data, separator) {
        probed += 1;
        if lookup(key) {
            hits += 1;
        }
    }
    let stats = QueryStats {
        elapsed: started.elapsed(),
        keys: probed,
        hits,
    };
    report::print_query(&stats);
    Ok(stats)
}
