//! Thread-local hook slot
//!
//! The reference [`HookSlot`] implementation: each OS thread owns exactly one
//! slot, matching the one-active-hook-per-thread model of the host runtime.
//! The state is reachable only through the slot handle, never as ambient
//! global data.

use std::cell::RefCell;

use super::hooks::{GlobalHook, HookSlot};

thread_local! {
    static ACTIVE_HOOK: RefCell<GlobalHook> = RefCell::new(GlobalHook::empty());
}

/// Handle to the calling thread's hook slot.
///
/// Copyable and free to construct; all instances on one thread alias the same
/// slot. Borrows on the underlying cell are scoped to a single get/set, so
/// hooks invoked between accesses may freely reenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadHookSlot;

impl ThreadHookSlot {
    /// A handle to the current thread's slot.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HookSlot for ThreadHookSlot {
    fn get(&self) -> GlobalHook {
        ACTIVE_HOOK.with(|slot| slot.borrow().clone())
    }

    fn set(&self, hook: GlobalHook) {
        ACTIVE_HOOK.with(|slot| *slot.borrow_mut() = hook);
    }
}
