//! # Guarded Hook Invocation
//!
//! The heart of the chaining protocol: invoke a displaced hook on behalf of
//! an execution event *as if the interposer were not there*, while detecting
//! and propagating the side effects the hook is allowed to have on itself.
//!
//! ## Protocol
//!
//! For a non-empty snapshot, one invocation runs this sequence:
//!
//! 1. Remember the frame's step-events-enabled flag.
//! 2. Capture the thread's global slot into a local `saved` snapshot.
//! 3. Invoke the wrapped hook. The call is opaque: it may fail, install a
//!    different global hook, clear the slot entirely, flip the frame's step
//!    flag, replace the frame's local hook, or recursively trigger events
//!    that reenter this protocol on the same thread.
//! 4. Capture the slot again. Empty now means the hook unset itself, and the
//!    caller's snapshot is permanently nullified: the runtime convention is
//!    that a hook which errors or disables itself leaves no active hook.
//! 5. Restore `saved`, making the interposition invisible to everything
//!    above this call on the stack.
//! 6. If the step flag went from on to off, the hook is opting out of step
//!    events for this frame. Re-enable the flag so the interposer keeps
//!    seeing them, and mute the frame's local hook (if any) with
//!    [`HookManager::disable_step_events`] so the opt-out is still honored.
//!
//! Reentrancy is sound because `saved` and the step-4 capture live on this
//! call's stack; the only shared mutable state is the slot itself, and each
//! nesting level saves and restores it around its own invocation.

use log::{debug, warn};

use crate::domain::{EventKind, HookError};
use crate::runtime::{EventPayload, FrameHooks, HookManager, HookSlot};

use super::snapshot::HookSnapshot;

/// Result of chaining one event to the wrapped hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// No hook is held in the snapshot; nothing was invoked and nothing was
    /// touched. A valid outcome, not an error.
    NotInstalled,
    /// The wrapped hook ran; its raw outcome code is passed through.
    Forwarded(i32),
}

/// Save/invoke/detect/restore protocol around a thread's global hook slot.
pub struct GlobalHookGuard<'a> {
    slot: &'a dyn HookSlot,
}

impl<'a> GlobalHookGuard<'a> {
    /// A guard operating on `slot` (the calling thread's slot).
    #[must_use]
    pub fn new(slot: &'a dyn HookSlot) -> Self {
        Self { slot }
    }

    /// Invoke the hook held in `snapshot` for an event on `frame`.
    ///
    /// On return the global slot holds exactly what it held on entry,
    /// whatever the wrapped hook did to it in between. `snapshot` is
    /// nullified if the hook unset itself; the frame's step flag and local
    /// hook may have been rewritten as described in the module docs.
    ///
    /// # Errors
    ///
    /// [`HookError::InvocationFailed`] when the wrapped hook fails (cleanup
    /// has already run); [`HookError::CompositionFailed`] when muting the
    /// frame-local hook fails (the slot restoration is not rolled back).
    pub fn invoke(
        &self,
        disabler: &dyn HookManager,
        snapshot: &mut HookSnapshot,
        frame: &dyn FrameHooks,
        kind: EventKind,
        payload: Option<&EventPayload>,
    ) -> Result<ChainOutcome, HookError> {
        let Some((hook_fn, context)) = snapshot.handles() else {
            return Ok(ChainOutcome::NotInstalled);
        };

        let step_before = frame.step_events_enabled();

        let mut saved = HookSnapshot::new();
        saved.populate(self.slot);

        let invocation = hook_fn(&context, frame, kind, payload);

        // Did the hook unset itself? Its opt-out outlives this call.
        let mut after = HookSnapshot::new();
        after.populate(self.slot);
        if after.is_empty() {
            debug!("wrapped hook unset itself during {kind}; dropping it from the chain");
            snapshot.nullify();
        }
        after.nullify();
        saved.restore(self.slot);

        // Did the hook turn off step events for this frame? Keep them on for
        // the interposer, and withhold them from the frame-local hook instead.
        let mut composition = Ok(());
        if step_before && !frame.step_events_enabled() {
            frame.set_step_events_enabled(true);
            if let Some(existing) = frame.local_hook() {
                composition = disabler
                    .disable_step_events(existing)
                    .and_then(|filtered| frame.set_local_hook(Some(filtered)));
            }
        }

        match (invocation, composition) {
            (Ok(code), Ok(())) => Ok(ChainOutcome::Forwarded(code)),
            (Ok(_), Err(err)) => Err(err),
            (Err(fault), composition) => {
                if let Err(shadowed) = composition {
                    warn!("composition failure shadowed by hook failure: {shadowed}");
                }
                Err(HookError::InvocationFailed(fault))
            }
        }
    }
}
