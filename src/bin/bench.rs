//! Benchmark incrementally built backends over a key file and a query file.
//!
//! ```text
//! bench [--backends=NAME,...] <keys> <queries>
//! ```
//!
//! Pass `-` as the query file to skip the lookup phase. Every selected
//! backend gets one fully isolated run; reports go to stderr.

use std::path::PathBuf;
use std::process;

use keybench::backends::{self, BenchEntry};
use keybench::runner::RunConfig;
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
    if positional.len() < 2 {
        eprintln!("Usage: bench [--backends=NAME,...] <keys> <queries>");
        process::exit(1);
    }

    let entries: Vec<&BenchEntry> = match &selected {
        Some(names) => names
            .iter()
            .map(|name| {
                backends::find_incremental(name).unwrap_or_else(|| {
                    let known: Vec<&str> =
                        backends::INCREMENTAL.iter().map(|e| e.name).collect();
                    eprintln!("unknown backend: {} (known: {})", name, known.join(", "));
                    process::exit(1);
                })
            })
            .collect(),
        None => backends::INCREMENTAL.iter().collect(),
    };

    let cfg = RunConfig {
        keys: PathBuf::from(&positional[0]),
        queries: optional_path(&positional[1]),
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
