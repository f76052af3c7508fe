//! Host-runtime boundary: hook value types, accessor traits, and the
//! thread-local reference slot.

pub mod hooks;
pub mod thread_slot;

pub use hooks::{
    same_hook, EventPayload, FrameHook, FrameHooks, GlobalHook, HookContext, HookFn, HookManager,
    HookSlot, LocalHook,
};
pub use thread_slot::ThreadHookSlot;
