//! Frame-local hook composition through the public API: several independent
//! managers end up sharing one frame without losing each other's events.

use std::sync::{Arc, Mutex};

use hookscope::chaining::{attach_local_hook, chained};
use hookscope::domain::{EventKind, HookError, HookFault};
use hookscope::runtime::{same_hook, EventPayload, FrameHook, FrameHooks, HookManager, LocalHook};

#[derive(Default)]
struct Frame {
    local: Mutex<Option<LocalHook>>,
}

impl FrameHooks for Frame {
    fn local_hook(&self) -> Option<LocalHook> {
        self.local.lock().unwrap().clone()
    }

    fn set_local_hook(&self, hook: Option<LocalHook>) -> Result<(), HookError> {
        *self.local.lock().unwrap() = hook;
        Ok(())
    }

    fn step_events_enabled(&self) -> bool {
        true
    }

    fn set_step_events_enabled(&self, _enabled: bool) {}
}

/// Manager that logs its label per event and composes by appending itself
/// after whatever was already attached.
struct Labeled {
    label: &'static str,
    journal: Arc<Mutex<Vec<&'static str>>>,
}

impl FrameHook for Labeled {
    fn on_event(
        &self,
        _frame: &dyn FrameHooks,
        _kind: EventKind,
        _payload: Option<&EventPayload>,
    ) -> Result<i32, HookFault> {
        self.journal.lock().unwrap().push(self.label);
        Ok(0)
    }
}

impl HookManager for Labeled {
    fn wrap_local_hook(&self, existing: LocalHook) -> Result<LocalHook, HookError> {
        let own: LocalHook = Arc::new(Labeled {
            label: self.label,
            journal: self.journal.clone(),
        });
        Ok(chained(existing, own))
    }
}

#[test]
fn test_first_manager_takes_the_frame_directly() {
    let frame = Frame::default();
    let journal = Arc::new(Mutex::new(Vec::new()));
    let manager_a = Arc::new(Labeled { label: "a", journal });

    attach_local_hook(&manager_a, &frame).unwrap();

    let installed = frame.local_hook().unwrap();
    assert!(same_hook(&installed, &(manager_a.clone() as LocalHook)));
}

#[test]
fn test_reattaching_the_same_manager_changes_nothing() {
    let frame = Frame::default();
    let journal = Arc::new(Mutex::new(Vec::new()));
    let manager_a = Arc::new(Labeled { label: "a", journal: journal.clone() });

    attach_local_hook(&manager_a, &frame).unwrap();
    let first = frame.local_hook().unwrap();
    attach_local_hook(&manager_a, &frame).unwrap();
    let second = frame.local_hook().unwrap();
    assert!(same_hook(&first, &second));

    second.on_event(&frame, EventKind::Step, None).unwrap();
    assert_eq!(*journal.lock().unwrap(), vec!["a"]);
}

#[test]
fn test_second_manager_composes_with_the_first() {
    let frame = Frame::default();
    let journal = Arc::new(Mutex::new(Vec::new()));
    let manager_a = Arc::new(Labeled { label: "a", journal: journal.clone() });
    let manager_b = Arc::new(Labeled { label: "b", journal: journal.clone() });

    attach_local_hook(&manager_a, &frame).unwrap();
    attach_local_hook(&manager_b, &frame).unwrap();

    let composed = frame.local_hook().unwrap();
    assert!(!same_hook(&composed, &(manager_a.clone() as LocalHook)));
    assert!(!same_hook(&composed, &(manager_b.clone() as LocalHook)));

    composed.on_event(&frame, EventKind::Step, None).unwrap();
    assert_eq!(*journal.lock().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_three_way_composition_preserves_everyone() {
    let frame = Frame::default();
    let journal = Arc::new(Mutex::new(Vec::new()));
    for label in ["a", "b", "c"] {
        let manager = Arc::new(Labeled { label, journal: journal.clone() });
        attach_local_hook(&manager, &frame).unwrap();
    }

    let composed = frame.local_hook().unwrap();
    composed.on_event(&frame, EventKind::Return, None).unwrap();
    assert_eq!(*journal.lock().unwrap(), vec!["a", "b", "c"]);
}
