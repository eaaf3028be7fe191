//! Baseline static backend: a sorted key array with binary search.
//!
//! Deliberately simple so the other static backends have an honest floor
//! to compare against, the same role the plain `BTreeMap` plays among the
//! incremental backends.
//!
//! Index format (little-endian, no compression):
//!
//! ```text
//! u64  entry count
//! per entry:
//!   u32  key length
//!   ...  key bytes
//!   i32  value
//! ```
//!
//! Entries are written in strictly increasing key order; `load` validates
//! framing and ordering and rejects anything else as corrupt.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::backend::{StaticBackend, Value};
use crate::backends::sorted_unique;
use crate::error::BenchError;

/// Sorted key array searched with `binary_search_by`.
#[derive(Debug)]
pub struct SortedDictBackend {
    keys: Vec<Box<[u8]>>,
    values: Vec<Value>,
}

impl StaticBackend for SortedDictBackend {
    fn build(keys: &[Box<[u8]>], values: &[Value]) -> Result<Self, BenchError> {
        let pairs = sorted_unique(keys, values);
        Ok(Self {
            keys: pairs.iter().map(|(k, _)| Box::from(*k)).collect(),
            values: pairs.iter().map(|(_, v)| *v).collect(),
        })
    }

    fn save(&self, path: &Path) -> Result<(), BenchError> {
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(&(self.keys.len() as u64).to_le_bytes())?;
        for (key, value) in self.keys.iter().zip(&self.values) {
            out.write_all(&(key.len() as u32).to_le_bytes())?;
            out.write_all(key)?;
            out.write_all(&value.to_le_bytes())?;
        }
        out.flush()?;
        Ok(())
    }

    fn load(path: &Path) -> Result<Self, BenchError> {
        let data = fs::read(path).map_err(|e| BenchError::open(path, e))?;
        let mut reader = IndexReader { data: &data, pos: 0 };

        let count = reader.u64()?;
        let mut keys: Vec<Box<[u8]>> = Vec::new();
        let mut values = Vec::new();
        for _ in 0..count {
            let len = reader.u32()? as usize;
            let key = reader.bytes(len)?;
            if let Some(prev) = keys.last() {
                if prev.as_ref() >= key {
                    return Err(BenchError::CorruptIndex(
                        "keys are not strictly increasing".into(),
                    ));
                }
            }
            keys.push(Box::from(key));
            values.push(Value::from_le_bytes(
                reader.bytes(4)?.try_into().expect("4-byte read"),
            ));
        }
        if reader.pos != data.len() {
            return Err(BenchError::CorruptIndex("trailing bytes".into()));
        }
        Ok(Self { keys, values })
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.keys
            .binary_search_by(|probe| probe.as_ref().cmp(key))
            .is_ok()
    }
}

struct IndexReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> IndexReader<'a> {
    fn bytes(&mut self, len: usize) -> Result<&'a [u8], BenchError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| BenchError::CorruptIndex("truncated entry".into()))?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn u32(&mut self) -> Result<u32, BenchError> {
        Ok(u32::from_le_bytes(
            self.bytes(4)?.try_into().expect("4-byte read"),
        ))
    }

    fn u64(&mut self) -> Result<u64, BenchError> {
        Ok(u64::from_le_bytes(
            self.bytes(8)?.try_into().expect("8-byte read"),
        ))
    }
}
