//! Frame-local hook composition
//!
//! A frame has room for exactly one local hook. [`attach_local_hook`] lets a
//! manager claim that spot without evicting whoever is already there: the
//! existing hook is handed to the manager's [`HookManager::wrap_local_hook`]
//! and the composed result installed in its place.
//!
//! The stock combinators cover the two compositions the protocol itself
//! needs: running two hooks in sequence, and muting step events for a hook
//! that asked to stop receiving them.

use std::sync::Arc;

use crate::domain::{EventKind, HookError, HookFault};
use crate::runtime::{same_hook, EventPayload, FrameHook, FrameHooks, HookManager, LocalHook};

/// Install `manager` as `frame`'s local hook, composing with any hook that is
/// already attached.
///
/// Attaching the same manager twice is a no-op, so the call is idempotent.
///
/// # Errors
///
/// Propagates failures from the manager's composition or from the frame
/// rejecting the install; the existing hook is never silently discarded.
pub fn attach_local_hook<M>(manager: &Arc<M>, frame: &dyn FrameHooks) -> Result<(), HookError>
where
    M: HookManager + 'static,
{
    let own: LocalHook = manager.clone();
    match frame.local_hook() {
        Some(existing) if same_hook(&existing, &own) => Ok(()),
        Some(existing) => {
            let composed = manager.wrap_local_hook(existing)?;
            frame.set_local_hook(Some(composed))
        }
        None => frame.set_local_hook(Some(own)),
    }
}

/// Forwards every event kind except step events.
struct StepEventFilter {
    inner: LocalHook,
}

impl FrameHook for StepEventFilter {
    fn on_event(
        &self,
        frame: &dyn FrameHooks,
        kind: EventKind,
        payload: Option<&EventPayload>,
    ) -> Result<i32, HookFault> {
        if kind.is_step() {
            // Swallowed: the inner hook opted out of these.
            return Ok(0);
        }
        self.inner.on_event(frame, kind, payload)
    }
}

/// A hook that delivers everything except step events to `inner`.
#[must_use]
pub fn without_step_events(inner: LocalHook) -> LocalHook {
    Arc::new(StepEventFilter { inner })
}

/// Runs two hooks in sequence for every event.
struct ChainedHook {
    first: LocalHook,
    second: LocalHook,
}

impl FrameHook for ChainedHook {
    fn on_event(
        &self,
        frame: &dyn FrameHooks,
        kind: EventKind,
        payload: Option<&EventPayload>,
    ) -> Result<i32, HookFault> {
        self.first.on_event(frame, kind, payload)?;
        self.second.on_event(frame, kind, payload)
    }
}

/// A hook that runs `first` then `second`, returning `second`'s outcome code.
/// A failure in `first` short-circuits.
#[must_use]
pub fn chained(first: LocalHook, second: LocalHook) -> LocalHook {
    Arc::new(ChainedHook { first, second })
}
