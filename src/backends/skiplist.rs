//! Skip-list backend over `crossbeam_skiplist::SkipMap`.
//!
//! The map is lock-free and takes `&self` for inserts; the harness still
//! drives it single-threaded like every other backend.
//!
//! Duplicate policy: last insertion wins (the existing entry is replaced).

use crossbeam_skiplist::SkipMap;

use crate::backend::{Backend, Value};

/// `SkipMap` with boxed byte-slice keys.
pub struct SkipListBackend {
    map: SkipMap<Box<[u8]>, Value>,
}

impl Default for SkipListBackend {
    fn default() -> Self {
        Self {
            map: SkipMap::new(),
        }
    }
}

impl Backend for SkipListBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        self.map.insert(Box::from(key), value);
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}
