//! Hook snapshots
//!
//! A [`HookSnapshot`] captures one observation of "who is the active global
//! hook" on a thread, together with the reference it keeps alive. The
//! populate/nullify/restore discipline is what the rest of the chaining
//! protocol is built from:
//!
//! - `populate` acquires: the slot's current value is copied in and a strong
//!   context reference is taken.
//! - `nullify` releases: the reference is dropped and the snapshot cleared.
//! - `restore` transfers: the value moves back into the slot, which now owns
//!   the reference, and the snapshot is cleared without releasing.
//!
//! Exactly one populate, followed by exactly one of nullify or restore, per
//! cycle. The value semantics make the failure modes of a manual-refcount
//! rendition (double release, leak on drop) unrepresentable: repeated
//! nullify/restore degrade to no-ops and dropping a populated snapshot
//! releases through `Drop`.

use crate::runtime::{GlobalHook, HookContext, HookFn, HookSlot};

/// A captured, ownership-bearing copy of a thread's global hook registration.
#[derive(Debug, Default)]
pub struct HookSnapshot {
    hook: GlobalHook,
}

impl HookSnapshot {
    /// A new, empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the slot's current registration into this snapshot, acquiring a
    /// strong reference to the context if one is installed.
    ///
    /// Anything the snapshot held before is released first, so repeated
    /// populates never leak.
    pub fn populate(&mut self, slot: &dyn HookSlot) {
        self.hook = slot.get();
    }

    /// True iff the snapshot does not hold a callable hook.
    ///
    /// A half-present pair (function without context, or the reverse) counts
    /// as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hook.is_null()
    }

    /// Release the held reference (no-op when empty) and clear both fields.
    pub fn nullify(&mut self) {
        self.hook = GlobalHook::empty();
    }

    /// Install the held registration into the slot, transferring ownership of
    /// the context reference to it, and clear the snapshot.
    ///
    /// An empty snapshot leaves the slot untouched but is still cleared, so a
    /// half-present remnant is released rather than installed.
    pub fn restore(&mut self, slot: &dyn HookSlot) {
        if self.is_empty() {
            self.hook = GlobalHook::empty();
            return;
        }
        slot.set(std::mem::take(&mut self.hook));
    }

    /// Fresh handles to the held hook, or `None` when empty.
    ///
    /// The clones keep the hook callable even if the snapshot is nullified
    /// mid-invocation (self-unset detection does exactly that).
    #[must_use]
    pub(crate) fn handles(&self) -> Option<(HookFn, HookContext)> {
        match (&self.hook.func, &self.hook.context) {
            (Some(func), Some(context)) => Some((func.clone(), context.clone())),
            _ => None,
        }
    }
}
