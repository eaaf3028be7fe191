//! Hash-map backend over `std::collections::HashMap`.
//!
//! Duplicate policy: last insertion wins.

use std::collections::HashMap;

use crate::backend::{Backend, Value};

/// `HashMap` with boxed byte-slice keys.
#[derive(Default)]
pub struct HashBackend {
    map: HashMap<Box<[u8]>, Value>,
}

impl Backend for HashBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        self.map.insert(Box::from(key), value);
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut t = HashBackend::default();
        t.insert(b"apple", 1);
        assert!(t.lookup(b"apple"));
        assert!(!t.lookup(b"apples"));
        assert!(!t.lookup(b"appl"));
    }

    #[test]
    fn empty_key_is_a_valid_key() {
        let mut t = HashBackend::default();
        t.insert(b"", 1);
        assert!(t.lookup(b""));
    }
}
