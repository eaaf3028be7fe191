//! Adaptive radix tree backend over the `art-tree` crate.
//!
//! Duplicate policy: first insertion wins (`Art::insert` leaves an
//! existing entry in place); the key stays present either way.

use art_tree::{Art, ByteString};

use crate::backend::{Backend, Value};

/// `art_tree::Art` with byte-string keys.
pub struct ArtBackend {
    tree: Art<ByteString, Value>,
}

impl Default for ArtBackend {
    fn default() -> Self {
        Self { tree: Art::new() }
    }
}

impl Backend for ArtBackend {
    fn insert(&mut self, key: &[u8], value: Value) {
        self.tree.insert(ByteString::new(key), value);
    }

    fn lookup(&self, key: &[u8]) -> bool {
        self.tree.get(&ByteString::new(key)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut t = ArtBackend::default();
        t.insert(b"apple", 1);
        t.insert(b"app", 2); // prefix of an existing key
        assert!(t.lookup(b"apple"));
        assert!(t.lookup(b"app"));
        assert!(!t.lookup(b"ap"));
    }

    #[test]
    fn duplicate_keys_stay_present() {
        let mut t = ArtBackend::default();
        t.insert(b"dup", 1);
        t.insert(b"dup", 2);
        assert!(t.lookup(b"dup"));
    }
}
