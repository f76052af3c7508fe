//! # Runtime Hook Boundary
//!
//! The host runtime is an external collaborator; this module defines the
//! narrow interfaces the chaining protocol needs from it, plus the hook value
//! types that cross that boundary.
//!
//! ## Ownership Model
//!
//! A hook registration is a "maybe-present callable + owned context" value
//! ([`GlobalHook`]). The context is an [`Arc`] handle, so the reference
//! discipline the protocol depends on maps onto plain Rust semantics:
//!
//! - acquire = clone the handle
//! - release = drop the handle
//! - transfer = move the handle
//!
//! Leaks and double-releases are unrepresentable; what remains interesting is
//! *when* each of those happens, which is the snapshot protocol's job.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::domain::{EventKind, HookError, HookFault};

/// Ownership handle to an opaque runtime object associated with a hook.
pub type HookContext = Arc<dyn Any + Send + Sync>;

/// Extra data delivered with an event (return value, error info). Opaque to
/// the chaining protocol; it is only passed through.
pub type EventPayload = Arc<dyn Any + Send + Sync>;

/// A global execution-event hook function.
///
/// Receives its own context, the frame the event occurred on, the event kind,
/// and the optional payload. Returns the runtime's raw outcome code, or fails
/// with an opaque fault the caller propagates unchanged.
pub type HookFn = Arc<
    dyn Fn(&HookContext, &dyn FrameHooks, EventKind, Option<&EventPayload>) -> Result<i32, HookFault>
        + Send
        + Sync,
>;

/// The (function, context) pair a thread dispatches execution events to.
///
/// Either field may be absent; a hook with *either* field absent is treated
/// as not installed ("null hook").
#[derive(Clone, Default)]
pub struct GlobalHook {
    /// The hook function, if installed.
    pub func: Option<HookFn>,
    /// The context object the function is invoked with.
    pub context: Option<HookContext>,
}

impl GlobalHook {
    /// A hook registration with both parts present.
    #[must_use]
    pub fn new(func: HookFn, context: HookContext) -> Self {
        Self {
            func: Some(func),
            context: Some(context),
        }
    }

    /// The "no hook installed" value.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            func: None,
            context: None,
        }
    }

    /// True if this registration does not denote a callable hook.
    ///
    /// A half-present pair counts as null; the runtime never invokes one.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.func.is_none() || self.context.is_none()
    }
}

impl fmt::Debug for GlobalHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalHook")
            .field("func", &self.func.is_some())
            .field("context", &self.context.is_some())
            .finish()
    }
}

/// Per-thread access to the runtime's single active hook registration.
///
/// This is deliberately a two-method capability: all save/restore discipline
/// lives in the chaining protocol, which every access must route through.
pub trait HookSlot {
    /// Read the currently installed hook, acquiring fresh references.
    fn get(&self) -> GlobalHook;

    /// Install `hook`, replacing whatever was installed before.
    fn set(&self, hook: GlobalHook);
}

/// A frame-local execution hook.
///
/// Frame-local hooks observe events for a single call frame and can be
/// stacked via the combinators in [`crate::chaining`].
pub trait FrameHook: Send + Sync {
    /// Deliver one event to this hook.
    fn on_event(
        &self,
        frame: &dyn FrameHooks,
        kind: EventKind,
        payload: Option<&EventPayload>,
    ) -> Result<i32, HookFault>;
}

/// Shared handle to a frame-local hook.
pub type LocalHook = Arc<dyn FrameHook>;

/// Identity comparison for frame-local hooks (same underlying object).
#[must_use]
pub fn same_hook(a: &LocalHook, b: &LocalHook) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// The hook-related surface of a call frame.
///
/// Setters take `&self`: frames are runtime-owned objects with interior
/// mutability, mutated from the dispatch path that already holds them.
pub trait FrameHooks {
    /// The frame's local hook, if one is attached.
    fn local_hook(&self) -> Option<LocalHook>;

    /// Attach or clear the frame's local hook. The runtime may reject the
    /// attachment, which surfaces as [`HookError::CompositionFailed`].
    fn set_local_hook(&self, hook: Option<LocalHook>) -> Result<(), HookError>;

    /// Whether the runtime delivers step events for this frame.
    fn step_events_enabled(&self) -> bool;

    /// Turn step-event delivery for this frame on or off.
    fn set_step_events_enabled(&self, enabled: bool);
}

/// Capabilities a frame-local hook implementor provides so independent
/// observers can coexist on one frame.
///
/// A manager is itself a [`FrameHook`]; the two methods produce replacement
/// hooks from an existing one. Behavior selection goes through this interface
/// rather than through any inspection of the existing hook.
pub trait HookManager: FrameHook {
    /// Compose this manager with a hook that is already attached to a frame.
    ///
    /// Ordering semantics are the manager's choice; the contract is only
    /// that `existing` keeps receiving the events it would have received.
    fn wrap_local_hook(&self, existing: LocalHook) -> Result<LocalHook, HookError>;

    /// Produce a replacement for `existing` that no longer receives step
    /// events but still receives every other event kind.
    ///
    /// The stock filter is right for almost every manager; override only if
    /// the wrapped hook needs bookkeeping when it is muted.
    fn disable_step_events(&self, existing: LocalHook) -> Result<LocalHook, HookError> {
        Ok(crate::chaining::without_step_events(existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_hook() -> HookFn {
        Arc::new(|_ctx, _frame, _kind, _payload| Ok(0))
    }

    #[test]
    fn test_empty_hook_is_null() {
        assert!(GlobalHook::empty().is_null());
        assert!(GlobalHook::default().is_null());
    }

    #[test]
    fn test_full_hook_is_not_null() {
        let hook = GlobalHook::new(noop_hook(), Arc::new(()));
        assert!(!hook.is_null());
    }

    #[test]
    fn test_half_present_hook_is_null() {
        let func_only = GlobalHook {
            func: Some(noop_hook()),
            context: None,
        };
        assert!(func_only.is_null());

        let context_only = GlobalHook {
            func: None,
            context: Some(Arc::new(())),
        };
        assert!(context_only.is_null());
    }

    #[test]
    fn test_clone_acquires_context_reference() {
        let context: HookContext = Arc::new(5u32);
        let hook = GlobalHook::new(noop_hook(), context.clone());
        let before = Arc::strong_count(&context);

        let copy = hook.clone();
        assert_eq!(Arc::strong_count(&context), before + 1);

        drop(copy);
        assert_eq!(Arc::strong_count(&context), before);
    }

    #[test]
    fn test_same_hook_identity() {
        struct Nop;
        impl FrameHook for Nop {
            fn on_event(
                &self,
                _frame: &dyn FrameHooks,
                _kind: EventKind,
                _payload: Option<&EventPayload>,
            ) -> Result<i32, HookFault> {
                Ok(0)
            }
        }

        let a: LocalHook = Arc::new(Nop);
        let b = a.clone();
        let c: LocalHook = Arc::new(Nop);
        assert!(same_hook(&a, &b));
        assert!(!same_hook(&a, &c));
    }
}
