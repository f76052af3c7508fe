//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers prevent common bugs like mixing a tick count with
//! an epoch number, and make function signatures more expressive.

use std::fmt;

/// Kind of execution event the runtime delivers to the active hook.
///
/// `Step` is the fine-grained per-line/per-step event that makes up the bulk
/// of the event stream during profiling; the others mark the boundaries of
/// calls and error propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new call frame was entered.
    Call,
    /// A fine-grained execution step was reached (e.g. a source line).
    Step,
    /// The current frame is returning.
    Return,
    /// An error is propagating through the current frame.
    Raise,
}

impl EventKind {
    /// Event name as the runtime spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Call => "call",
            EventKind::Step => "step",
            EventKind::Return => "return",
            EventKind::Raise => "raise",
        }
    }

    /// Returns true for the fine-grained step event kind.
    ///
    /// Nested tools commonly disable step events for themselves; the
    /// chaining protocol must detect and revert exactly this kind.
    #[must_use]
    pub fn is_step(self) -> bool {
        matches!(self, EventKind::Step)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monitoring-restart generation number
///
/// Increases whenever the runtime resets its internal event-dispatch tables.
/// `Epoch(0)` is the sentinel for "the host exposes no such counter" and must
/// never be used to justify discarding caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(pub u64);

impl Epoch {
    /// Sentinel returned on hosts without a restart counter.
    pub const UNAVAILABLE: Epoch = Epoch(0);

    /// Returns true if this value carries a real invalidation signal.
    #[must_use]
    pub fn signals_restarts(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch:{}", self.0)
    }
}

/// High-resolution monotonic counter reading
///
/// A raw tick count; multiply a tick difference by the clock's
/// seconds-per-tick unit to get elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticks(pub i64);

impl Ticks {
    /// Ticks elapsed since an earlier reading.
    #[must_use]
    pub fn since(self, earlier: Ticks) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::Call.as_str(), "call");
        assert_eq!(EventKind::Step.as_str(), "step");
        assert_eq!(EventKind::Return.as_str(), "return");
        assert_eq!(EventKind::Raise.as_str(), "raise");
    }

    #[test]
    fn test_only_step_is_step() {
        assert!(EventKind::Step.is_step());
        assert!(!EventKind::Call.is_step());
        assert!(!EventKind::Return.is_step());
        assert!(!EventKind::Raise.is_step());
    }

    #[test]
    fn test_epoch_sentinel() {
        assert!(!Epoch::UNAVAILABLE.signals_restarts());
        assert!(Epoch(7).signals_restarts());
        assert_eq!(Epoch::default(), Epoch::UNAVAILABLE);
    }

    #[test]
    fn test_epoch_ordering() {
        assert!(Epoch(1) < Epoch(2));
        assert_eq!(Epoch(3).to_string(), "epoch:3");
    }

    #[test]
    fn test_ticks_since() {
        assert_eq!(Ticks(1500).since(Ticks(500)), 1000);
        assert_eq!(Ticks(42).to_string(), "42 ticks");
    }
}
