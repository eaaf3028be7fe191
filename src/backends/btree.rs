//! Balanced-tree backend over `std::collections::BTreeMap`.
//!
//! Duplicate policy: last insertion wins.

use std::collections::BTreeMap;

use crate::backend::{Backend, Value};

/// `BTreeMap` with boxed byte-slice keys.
#[derive(Default)]
pub struct BTreeBackend {
    map: BTreeMap<Box<[u8]>, Value>,
}

impl Backend for BTreeBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        self.map.insert(Box::from(key), value);
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}
