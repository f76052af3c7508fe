//! # hookscope - Transparent Execution-Hook Interposition
//!
//! hookscope lets an observer (typically a line-level profiler) become a
//! managed runtime's single active execution-event hook while staying
//! invisible to whatever hook another tool installed first. The runtime
//! allows one hook per thread and one per call frame; this crate owns the
//! discipline that makes sharing those two slots safe.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Host Runtime (external)                  │
//! │   dispatch loop · frames · per-thread global hook slot    │
//! └──────────────┬────────────────────────────────────────────┘
//!                │ execution events (call / step / return / raise)
//!                ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                  hookscope (this crate)                   │
//! │                                                           │
//! │  ┌───────────┐    ┌────────────────┐    ┌─────────────┐   │
//! │  │  Session  │───▶│ GlobalHookGuard│───▶│  displaced  │   │
//! │  │ (install/ │    │ save · invoke  │    │    hook     │   │
//! │  │ uninstall)│    │ detect · restore    └─────────────┘   │
//! │  └───────────┘    └────────────────┘                      │
//! │        │                  │                               │
//! │        ▼                  ▼                               │
//! │  ┌───────────┐    ┌────────────────┐                      │
//! │  │ Snapshot  │    │ local composer │                      │
//! │  │ (acquire/ │    │ (wrap, filter, │                      │
//! │  │  release) │    │  chain)        │                      │
//! │  └───────────┘    └────────────────┘                      │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`chaining`]: the interposition core
//!   - `snapshot`: ownership-bearing captures of the global hook slot
//!   - `guard`: save → invoke → detect-side-effects → restore around each
//!     event delivered to a displaced hook
//!   - `local`: frame-local hook attachment and composition
//!   - `session`: install/uninstall lifecycle for a whole interposition
//!
//! - [`runtime`]: the host-runtime boundary - hook value types, the
//!   [`runtime::HookSlot`] and [`runtime::FrameHooks`] accessor traits, and
//!   a thread-local reference slot implementation
//!
//! - [`epoch`]: optional monitoring-restart counter, for invalidating
//!   cached dispatch state
//!
//! - [`clock`]: high-resolution monotonic tick source
//!
//! - [`domain`]: core domain types ([`domain::EventKind`], [`domain::Epoch`],
//!   [`domain::Ticks`]) and structured errors
//!
//! ## Guarantees
//!
//! - **Transparency**: around every chained invocation the thread's global
//!   hook slot is saved and restored, so nothing above the interposer on the
//!   stack can tell it is there - even when the displaced hook rewrites or
//!   clears the slot during its own call.
//! - **No leaked observers**: snapshots hold exactly one strong reference per
//!   capture and release it on exactly one of nullify/restore/drop.
//! - **Opt-outs honored without going blind**: a displaced hook that unsets
//!   itself stops receiving events for good; one that disables step events
//!   for a frame stops receiving step events - in both cases the interposer
//!   keeps observing everything.
//!
//! ## Typical Usage
//!
//! On attach, install a [`chaining::HookSession`] over the thread's slot and
//! an [`chaining::attach_local_hook`] on each frame of interest. In the
//! dispatch path, forward every event through
//! [`chaining::GlobalHookGuard::invoke`] with the session's saved snapshot.
//! On detach, uninstall the session to put the displaced observer back.

pub mod chaining;
pub mod clock;
pub mod domain;
pub mod epoch;
pub mod runtime;
