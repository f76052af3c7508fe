//! Structured error types for hookscope
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Error reported by a hook implementation itself.
///
/// Hooks are opaque to this crate, so whatever they fail with is carried
/// through unchanged as a boxed error.
pub type HookFault = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum HookError {
    /// The wrapped hook raised during its invocation. Slot cleanup has
    /// already run by the time this is returned; the hook's own error is
    /// carried unchanged.
    #[error("wrapped hook invocation failed: {0}")]
    InvocationFailed(#[source] HookFault),

    /// Building or installing a wrapped/filtered frame-local hook failed.
    /// The global hook slot is already restored when this surfaces.
    #[error("failed to compose frame-local hook: {0}")]
    CompositionFailed(String),
}
