//! Monitoring-restart epoch
//!
//! Some hosts expose a counter that increases whenever the runtime rebuilds
//! its event-dispatch tables; observers use it to notice that cached dispatch
//! state went stale. The capability is optional, and privileged: on hosts
//! without it the reader degrades to the [`Epoch::UNAVAILABLE`] sentinel,
//! which callers must not treat as an invalidation signal.

use crate::domain::Epoch;

/// Optional host capability: the current monitoring-restart counter.
pub trait EpochSource {
    /// The current counter value. Monotonically nondecreasing.
    fn monitoring_epoch(&self) -> u64;
}

/// Reads the restart counter from a host that may or may not have one.
#[derive(Clone, Copy, Default)]
pub struct EpochReader<'a> {
    source: Option<&'a dyn EpochSource>,
}

impl<'a> EpochReader<'a> {
    /// A reader over `source`; pass `None` on hosts without the capability.
    #[must_use]
    pub fn new(source: Option<&'a dyn EpochSource>) -> Self {
        Self { source }
    }

    /// The current epoch, or [`Epoch::UNAVAILABLE`] without a source.
    #[must_use]
    pub fn current_epoch(&self) -> Epoch {
        self.source
            .map_or(Epoch::UNAVAILABLE, |source| Epoch(source.monitoring_epoch()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct RestartCounter(AtomicU64);

    impl EpochSource for RestartCounter {
        fn monitoring_epoch(&self) -> u64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_no_source_reads_sentinel() {
        let reader = EpochReader::new(None);
        assert_eq!(reader.current_epoch(), Epoch::UNAVAILABLE);
        assert!(!reader.current_epoch().signals_restarts());
    }

    #[test]
    fn test_reads_are_nondecreasing() {
        let counter = RestartCounter(AtomicU64::new(1));
        let reader = EpochReader::new(Some(&counter));

        let mut last = reader.current_epoch();
        for bump in [0u64, 1, 0, 3, 2] {
            counter.0.fetch_add(bump, Ordering::SeqCst);
            let next = reader.current_epoch();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_restart_is_visible() {
        let counter = RestartCounter(AtomicU64::new(4));
        let reader = EpochReader::new(Some(&counter));
        let before = reader.current_epoch();

        counter.0.fetch_add(1, Ordering::SeqCst);
        assert!(reader.current_epoch() > before);
    }
}
