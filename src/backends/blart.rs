//! Adaptive radix tree backend over the `blart` crate.
//!
//! `blart` requires prefix-free keys, so keys are stored as `CString`s,
//! whose trailing NUL terminator makes any byte string prefix-free. A key
//! containing an interior NUL byte is unrepresentable in this backend:
//! inserts of such keys are dropped and lookups report a miss, which is
//! internally consistent across a run. In binary mode NUL is the record
//! separator and such keys cannot occur at all.
//!
//! Duplicate policy: last insertion wins.

use std::ffi::CString;

use blart::TreeMap;

use crate::backend::{Backend, Value};

/// `blart::TreeMap` with NUL-terminated keys.
pub struct BlartBackend {
    tree: TreeMap<CString, Value>,
}

impl Default for BlartBackend {
    fn default() -> Self {
        Self {
            tree: TreeMap::new(),
        }
    }
}

impl Backend for BlartBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        if let Ok(key) = CString::new(key) {
            // NUL-terminated keys are prefix-free, so this cannot fail.
            let _ = self.tree.try_insert(key, value);
        }
    }

    fn lookup(&self, key: &[u8]) -> bool {
        match CString::new(key) {
            Ok(key) => self.tree.get(&key).is_some(),
            Err(_) => false,
        }
    }
}
