//! Static index backends over the `fst` crate.
//!
//! An FST stores the key set as a minimal automaton with the insertion
//! ordinal as the associated value. Construction requires strictly
//! increasing keys, so the builder sorts the materialized key set and
//! collapses duplicates keeping the last value.
//!
//! Two variants share the same index bytes and differ only in how `load`
//! backs the automaton: [`FstBackend`] reads the whole file into a heap
//! allocation, [`MmapFstBackend`] memory-maps it, so its load cost shifts
//! from read time to page-fault time during queries.

use std::fs::{self, File};
use std::path::Path;

use fst::{Map, MapBuilder};
use memmap2::Mmap;

use crate::backend::{StaticBackend, Value};
use crate::backends::sorted_unique;
use crate::error::BenchError;

fn build_fst_bytes(keys: &[Box<[u8]>], values: &[Value]) -> Result<Vec<u8>, BenchError> {
    let mut builder = MapBuilder::memory();
    for (key, value) in sorted_unique(keys, values) {
        builder.insert(key, value as u64)?;
    }
    Ok(builder.into_inner()?)
}

/// FST map backend with a heap-allocated index.
#[derive(Debug)]
pub struct FstBackend {
    map: Map<Vec<u8>>,
}

impl StaticBackend for FstBackend {
    fn build(keys: &[Box<[u8]>], values: &[Value]) -> Result<Self, BenchError> {
        let bytes = build_fst_bytes(keys, values)?;
        Ok(Self {
            map: Map::new(bytes)?,
        })
    }

    fn save(&self, path: &Path) -> Result<(), BenchError> {
        fs::write(path, self.map.as_fst().as_bytes())?;
        Ok(())
    }

    fn load(path: &Path) -> Result<Self, BenchError> {
        let bytes = fs::read(path).map_err(|e| BenchError::open(path, e))?;
        Ok(Self {
            map: Map::new(bytes)?,
        })
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}

/// Bytes backing a memory-mappable FST: heap right after a build, a file
/// mapping after a load.
enum IndexBytes {
    Heap(Vec<u8>),
    Mapped(Mmap),
}

impl AsRef<[u8]> for IndexBytes {
    fn as_ref(&self) -> &[u8] {
        match self {
            IndexBytes::Heap(bytes) => bytes,
            IndexBytes::Mapped(mmap) => mmap,
        }
    }
}

/// FST map backend that memory-maps the index on load.
pub struct MmapFstBackend {
    map: Map<IndexBytes>,
}

impl StaticBackend for MmapFstBackend {
    fn build(keys: &[Box<[u8]>], values: &[Value]) -> Result<Self, BenchError> {
        let bytes = build_fst_bytes(keys, values)?;
        Ok(Self {
            map: Map::new(IndexBytes::Heap(bytes))?,
        })
    }

    fn save(&self, path: &Path) -> Result<(), BenchError> {
        fs::write(path, self.map.as_fst().as_bytes())?;
        Ok(())
    }

    fn load(path: &Path) -> Result<Self, BenchError> {
        let file = File::open(path).map_err(|e| BenchError::open(path, e))?;
        // Safety: the index file is treated as read-only for the lifetime
        // of the mapping; the harness never writes to a loaded index.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self {
            map: Map::new(IndexBytes::Mapped(mmap))?,
        })
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}
