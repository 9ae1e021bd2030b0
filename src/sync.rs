//! Synchronization primitives for the engine.
//!
//! Provides the shared node counter a search worker attaches to its position.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A thread-safe node counter owned by a search worker.
///
/// The position increments it once per move made; a UI thread may read it at
/// any time. All accesses are relaxed — the count is only ever aggregated,
/// never used for synchronization.
#[derive(Clone, Debug)]
pub struct NodeCounter(Arc<AtomicU64>);

impl NodeCounter {
    /// Create a new counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        NodeCounter(Arc::new(AtomicU64::new(0)))
    }

    /// Add one searched node.
    #[inline]
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current count.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Reset the count to zero (between searches).
    #[inline]
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }

    /// Get a clone of the underlying Arc for sharing.
    #[inline]
    #[must_use]
    pub fn as_arc(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.0)
    }
}

impl Default for NodeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Arc<AtomicU64>> for NodeCounter {
    fn from(arc: Arc<AtomicU64>) -> Self {
        NodeCounter(arc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counter_lifecycle() {
        let nodes = NodeCounter::new();
        assert_eq!(nodes.get(), 0);

        nodes.increment();
        nodes.increment();
        assert_eq!(nodes.get(), 2);

        nodes.reset();
        assert_eq!(nodes.get(), 0);
    }

    #[test]
    fn test_node_counter_shared() {
        let a = NodeCounter::new();
        let b = a.clone();

        a.increment();
        assert_eq!(b.get(), 1);
    }
}
