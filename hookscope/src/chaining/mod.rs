//! Hook interception and chaining
//!
//! Everything an interposing observer needs to coexist with hooks it did not
//! install:
//! - `snapshot`: capture/release/transfer discipline for the global slot
//! - `guard`: transparent invocation of the displaced hook per event
//! - `local`: frame-local hook composition and the stock combinators
//! - `session`: the install/uninstall bracket around a whole interposition

pub mod guard;
pub mod local;
pub mod session;
pub mod snapshot;

pub use guard::{ChainOutcome, GlobalHookGuard};
pub use local::{attach_local_hook, chained, without_step_events};
pub use session::HookSession;
pub use snapshot::HookSnapshot;
