//! Interposition lifecycle
//!
//! A [`HookSession`] is the install/uninstall bracket around the per-event
//! protocol: it saves whatever observer a thread already had when the
//! interposer takes over, keeps that snapshot available for event chaining,
//! and puts the displaced observer back on teardown.

use log::debug;

use crate::runtime::{GlobalHook, HookSlot};

use super::snapshot::HookSnapshot;

/// One thread's interposition: the displaced observer, saved for chaining
/// and for restoration.
#[derive(Debug, Default)]
pub struct HookSession {
    previous: HookSnapshot,
}

impl HookSession {
    /// Save the slot's current registration and install `hook` in its place.
    #[must_use]
    pub fn install(slot: &dyn HookSlot, hook: GlobalHook) -> Self {
        let mut previous = HookSnapshot::new();
        previous.populate(slot);
        debug!(
            "interposing execution hook (previous observer {})",
            if previous.is_empty() { "absent" } else { "saved" }
        );
        slot.set(hook);
        Self { previous }
    }

    /// The displaced observer's snapshot.
    #[must_use]
    pub fn previous(&self) -> &HookSnapshot {
        &self.previous
    }

    /// Mutable access for the dispatch path, which chains every event
    /// through this snapshot via [`super::GlobalHookGuard::invoke`].
    pub fn previous_mut(&mut self) -> &mut HookSnapshot {
        &mut self.previous
    }

    /// Tear down the interposition, reinstalling the displaced observer.
    ///
    /// If the observer is gone (none was installed, or it unset itself
    /// during the session) the slot is cleared instead, leaving the thread
    /// with no active hook.
    pub fn uninstall(mut self, slot: &dyn HookSlot) {
        debug!(
            "removing execution hook ({} to restore)",
            if self.previous.is_empty() { "nothing" } else { "previous observer" }
        );
        if self.previous.is_empty() {
            slot.set(GlobalHook::empty());
            self.previous.nullify();
        } else {
            self.previous.restore(slot);
        }
    }
}
