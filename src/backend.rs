//! Capability interface every container backend realizes.
//!
//! The interface is deliberately minimal and uniform so that structurally
//! incompatible container APIs (double arrays, pointer trees, hash maps,
//! skip lists, automata) can all be driven through identical benchmark
//! code, isolating the backend's performance characteristics from the
//! driver's.

use std::path::Path;

use crate::error::BenchError;

/// Value associated with a key at insertion time: the 1-based ordinal
/// position of the key among all keys inserted so far in the current run.
/// Duplicate keys need not keep a unique value; each backend documents its
/// duplicate policy.
pub type Value = i32;

/// An incrementally built container.
///
/// Creation is `Default::default()` and must not fail under normal
/// conditions; memory exhaustion aborts the process. Destruction is `Drop`,
/// which the ownership model guarantees runs exactly once per run.
pub trait Backend: Default {
    /// Associate `value` with `key`. Duplicate-key semantics are
    /// backend-defined but internally consistent across a whole run.
    fn insert(&mut self, key: &[u8], value: Value);

    /// Whether `key` is present. Must not mutate the container.
    fn lookup(&self, key: &[u8]) -> bool;
}

/// A build-once container that separates construction from loading.
///
/// The lifecycle is `build` from a fully materialized key set, `save` to an
/// opaque byte-stream index, then `load` a fresh read-only container
/// strictly from the on-disk bytes; the build-time container may be
/// discarded in between.
pub trait StaticBackend: Sized {
    /// Bulk-construct from parallel key/value arrays.
    fn build(keys: &[Box<[u8]>], values: &[Value]) -> Result<Self, BenchError>;

    /// Serialize the index to `path`. The only externally observable
    /// property of the written bytes is their total length.
    fn save(&self, path: &Path) -> Result<(), BenchError>;

    /// Deserialize a previously saved index into a fresh container usable
    /// only for lookups.
    fn load(path: &Path) -> Result<Self, BenchError>;

    /// Whether `key` is present.
    fn lookup(&self, key: &[u8]) -> bool;
}
