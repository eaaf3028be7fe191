//! Sharded hash-map backend over the `dashmap` crate.
//!
//! Duplicate policy: last insertion wins.

use dashmap::DashMap;

use crate::backend::{Backend, Value};

/// `DashMap` with boxed byte-slice keys.
pub struct DashBackend {
    map: DashMap<Box<[u8]>, Value>,
}

impl Default for DashBackend {
    fn default() -> Self {
        Self {
            map: DashMap::new(),
        }
    }
}

impl Backend for DashBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        self.map.insert(Box::from(key), value);
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}
