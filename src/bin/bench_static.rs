//! Benchmark build-once static index backends: build from a key file,
//! persist the index, reload it and query.
//!
//! ```text
//! bench_static [--backends=NAME,...] <keys> <index> <queries>
//! ```
//!
//! Pass `-` as the key file to reuse an existing index (skips the build
//! phase), or as the query file to skip the lookup phase. Reports go to
//! stderr.

use std::path::PathBuf;
use std::process;

use keybench::backends::{self, StaticEntry};
use keybench::runner::StaticRunConfig;
use keybench::scan::Separator;

#[cfg(feature = "binary-data")]
const KEY_SEP: Separator = Separator::Nul;
#[cfg(not(feature = "binary-data"))]
const KEY_SEP: Separator = Separator::Newline;

fn main() {
    let mut selected: Option<Vec<String>> = None;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(list) = arg.strip_prefix("--backends=") {
            selected = Some(list.split(',').map(str::to_string).collect());
        } else {
            positional.push(arg);
        }
    }
    if positional.len() < 3 {
        eprintln!("Usage: bench_static [--backends=NAME,...] <keys> <index> <queries>");
        process::exit(1);
    }

    let entries: Vec<&StaticEntry> = match &selected {
        Some(names) => names
            .iter()
            .map(|name| {
                backends::find_static(name).unwrap_or_else(|| {
                    let known: Vec<&str> = backends::STATIC.iter().map(|e| e.name).collect();
                    eprintln!("unknown backend: {} (known: {})", name, known.join(", "));
                    process::exit(1);
                })
            })
            .collect(),
        None => backends::STATIC.iter().collect(),
    };

    let cfg = StaticRunConfig {
        keys: optional_path(&positional[0]),
        index: PathBuf::from(&positional[1]),
        queries: optional_path(&positional[2]),
        separator: KEY_SEP,
    };

    for entry in entries {
        if let Err(err) = (entry.run)(entry.name, &cfg) {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

/// `-` means "skip this phase".
fn optional_path(arg: &str) -> Option<PathBuf> {
    if arg == "-" {
        None
    } else {
        Some(PathBuf::from(arg))
    }
}
