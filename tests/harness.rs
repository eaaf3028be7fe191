//! End-to-end scenarios through the benchmark runners, using real files.

use std::fs;
use std::path::PathBuf;

use keybench::backends::btree::BTreeBackend;
use keybench::backends::dict::SortedDictBackend;
use keybench::backends::fst::{FstBackend, MmapFstBackend};
use keybench::backends::hash::HashBackend;
use keybench::error::BenchError;
use keybench::runner::{self, RunConfig, StaticRunConfig};
use keybench::scan::Separator;
use keybench::StaticBackend;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn incremental_run_counts_words_and_hits() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"apple\nbanana\ncherry\n");
    let queries = write_file(&dir, "queries", b"apple\ndate\ncherry\n");

    let cfg = RunConfig {
        keys,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    let report = runner::run::<BTreeBackend>("btree", &cfg).unwrap();

    assert_eq!(report.label, "btree");
    assert!(report.init_rss_bytes > 0);
    assert_eq!(report.build.as_ref().unwrap().keys, 3);
    assert!(report.index_bytes.is_none());
    let query = report.query.as_ref().unwrap();
    assert_eq!(query.keys, 3);
    assert_eq!(query.hits, 2); // apple and cherry hit, date misses
}

#[test]
fn duplicate_records_are_each_counted() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"a\na\nb\n");
    let queries = write_file(&dir, "queries", b"a\nb\n");

    let cfg = RunConfig {
        keys,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    let report = runner::run::<HashBackend>("hash", &cfg).unwrap();

    assert_eq!(report.build.as_ref().unwrap().keys, 3);
    let query = report.query.as_ref().unwrap();
    assert_eq!(query.keys, 2);
    assert_eq!(query.hits, 2);
}

#[test]
fn query_phase_can_be_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"one\ntwo\n");

    let cfg = RunConfig {
        keys,
        queries: None,
        separator: Separator::Newline,
    };
    let report = runner::run::<BTreeBackend>("btree", &cfg).unwrap();
    assert_eq!(report.build.as_ref().unwrap().keys, 2);
    assert!(report.query.is_none());
}

#[test]
fn trailing_record_without_separator_is_built() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"alpha\nbeta");
    let queries = write_file(&dir, "queries", b"beta\n");

    let cfg = RunConfig {
        keys,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    let report = runner::run::<BTreeBackend>("btree", &cfg).unwrap();
    assert_eq!(report.build.as_ref().unwrap().keys, 2);
    assert_eq!(report.query.as_ref().unwrap().hits, 1);
}

#[test]
fn missing_key_file_is_an_open_error() {
    let cfg = RunConfig {
        keys: PathBuf::from("/nonexistent/keys.txt"),
        queries: None,
        separator: Separator::Newline,
    };
    let err = runner::run::<BTreeBackend>("btree", &cfg).unwrap_err();
    assert!(matches!(err, BenchError::Open { .. }));
    assert!(err.to_string().starts_with("no such file: "));
}

fn static_lifecycle<T: StaticBackend>(label: &str) {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"apple\nbanana\ncherry\n");
    let queries = write_file(&dir, "queries", b"apple\ndate\ncherry\n");
    let index = dir.path().join("keys.index");

    let cfg = StaticRunConfig {
        keys: Some(keys),
        index: index.clone(),
        queries: Some(queries.clone()),
        separator: Separator::Newline,
    };
    let report = runner::run_static::<T>(label, &cfg).unwrap();

    assert_eq!(report.build.as_ref().unwrap().keys, 3);
    assert!(report.index_bytes.unwrap() > 0);
    assert_eq!(report.index_bytes.unwrap(), fs::metadata(&index).unwrap().len());
    let query = report.query.as_ref().unwrap();
    assert_eq!(query.keys, 3);
    assert_eq!(query.hits, 2);

    // Build-skip: a second run must answer queries from the existing
    // index alone.
    let reuse = StaticRunConfig {
        keys: None,
        index,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    let report = runner::run_static::<T>(label, &reuse).unwrap();
    assert!(report.build.is_none());
    assert_eq!(report.query.as_ref().unwrap().hits, 2);
}

#[test]
fn fst_static_lifecycle() {
    static_lifecycle::<FstBackend>("fst");
}

#[test]
fn fst_mmap_static_lifecycle() {
    static_lifecycle::<MmapFstBackend>("fst-mmap");
}

#[test]
fn dict_static_lifecycle() {
    static_lifecycle::<SortedDictBackend>("dict");
}

#[test]
fn static_build_with_duplicate_keys() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"a\na\nb\n");
    let queries = write_file(&dir, "queries", b"a\nb\nc\n");
    let index = dir.path().join("dup.index");

    let cfg = StaticRunConfig {
        keys: Some(keys),
        index,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    let report = runner::run_static::<FstBackend>("fst", &cfg).unwrap();
    // Every record is counted even though the index stores "a" once.
    assert_eq!(report.build.as_ref().unwrap().keys, 3);
    let query = report.query.as_ref().unwrap();
    assert_eq!(query.keys, 3);
    assert_eq!(query.hits, 2);
}

#[test]
fn binary_mode_uses_nul_separators() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"line\none\0two\0");
    let queries = write_file(&dir, "queries", b"line\none\0missing\0");

    let cfg = RunConfig {
        keys,
        queries: Some(queries),
        separator: Separator::Nul,
    };
    let report = runner::run::<BTreeBackend>("btree", &cfg).unwrap();
    assert_eq!(report.build.as_ref().unwrap().keys, 2);
    let query = report.query.as_ref().unwrap();
    assert_eq!(query.keys, 2);
    assert_eq!(query.hits, 1);
}

#[test]
fn runs_are_isolated_across_backends() {
    let dir = tempfile::tempdir().unwrap();
    let keys = write_file(&dir, "keys", b"only-here\n");
    let other_keys = write_file(&dir, "other", b"different\n");
    let queries = write_file(&dir, "queries", b"only-here\n");

    let first = RunConfig {
        keys,
        queries: Some(queries.clone()),
        separator: Separator::Newline,
    };
    let second = RunConfig {
        keys: other_keys,
        queries: Some(queries),
        separator: Separator::Newline,
    };
    assert_eq!(
        runner::run::<BTreeBackend>("btree", &first)
            .unwrap()
            .query
            .unwrap()
            .hits,
        1
    );
    // A fresh run sees none of the previous run's keys.
    assert_eq!(
        runner::run::<BTreeBackend>("btree", &second)
            .unwrap()
            .query
            .unwrap()
            .hits,
        0
    );
}
