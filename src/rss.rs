//! Process resident memory sampling.
//!
//! RSS is a coarse proxy for a container's memory footprint: the runner
//! samples it once before each run, and runs execute strictly in sequence
//! with the previous container destroyed, so the baseline is not polluted
//! by earlier runs.

/// Current resident set size of this process in bytes, or 0 if the
/// platform query fails.
pub fn resident_set_size() -> usize {
    memory_stats::memory_stats()
        .map(|s| s.physical_mem)
        .unwrap_or(0)
}
