//! Testing utilities for keytrig.
//!
//! # Features
//!
//! - [`RecordingCallback`]: A callback that records every source event it receives
//! - [`CountingCallback`]: A callback that only counts invocations
//! - [`ToggleGate`]: A gate predicate that tests can open and close
//! - [`MockEvent`]: A raw event with named code fields and a default flag

use keytrig_core::{Callback, Gate, IntoCode, Label, RawEvent};
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

// ============================================================================
// Recording Callback
// ============================================================================

/// A callback that records all source events it receives.
///
/// Dispatches without a source event are recorded as `None`.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingCallback::<MyEvent>::new();
/// relay.add_callback("keydown", 37, recorder.callback());
///
/// relay.call_label("keydown", 37, Some(&event))?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingCallback<E: Clone, R = ()> {
    events: Rc<RefCell<Vec<Option<E>>>>,
    result: R,
}

impl<E: Clone + 'static> RecordingCallback<E> {
    /// Create a recorder whose callback returns `()`.
    pub fn new() -> Self {
        Self::returning(())
    }
}

impl<E: Clone + 'static> Default for RecordingCallback<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + 'static, R: Clone + 'static> RecordingCallback<E, R> {
    /// Create a recorder whose callback returns `result`.
    pub fn returning(result: R) -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
            result,
        }
    }

    /// A callback that records into this recorder.
    pub fn callback(&self) -> Callback<E, R> {
        let events = Rc::clone(&self.events);
        let result = self.result.clone();
        Rc::new(move |source: Option<&E>| {
            events.borrow_mut().push(source.cloned());
            result.clone()
        })
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<Option<E>> {
        self.events.borrow().clone()
    }

    /// Get the number of recorded invocations.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl<E: Clone, R: Clone> Clone for RecordingCallback<E, R> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
            result: self.result.clone(),
        }
    }
}

// ============================================================================
// Counting Callback
// ============================================================================

/// A callback that counts how many times it ran.
#[derive(Clone, Default)]
pub struct CountingCallback {
    count: Rc<Cell<usize>>,
}

impl CountingCallback {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that increments this counter, for any event type.
    pub fn callback<E: 'static>(&self) -> Callback<E> {
        let count = Rc::clone(&self.count);
        Rc::new(move |_: Option<&E>| count.set(count.get() + 1))
    }

    /// Get the number of invocations.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

// ============================================================================
// Toggle Gate
// ============================================================================

/// A gate whose state tests flip between dispatches.
///
/// The predicate handed to the relay reads the shared flag on every call.
#[derive(Clone)]
pub struct ToggleGate {
    open: Rc<Cell<bool>>,
}

impl ToggleGate {
    /// Create a gate in the given state.
    pub fn new(open: bool) -> Self {
        Self {
            open: Rc::new(Cell::new(open)),
        }
    }

    /// A predicate gate tied to this toggle.
    pub fn gate(&self) -> Gate {
        let open = Rc::clone(&self.open);
        Gate::predicate(move || open.get())
    }

    /// Set the state.
    pub fn set(&self, open: bool) {
        self.open.set(open);
    }

    /// Open the gate.
    pub fn open(&self) {
        self.set(true);
    }

    /// Close the gate.
    pub fn close(&self) {
        self.set(false);
    }

    /// Whether the gate is open.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

impl Default for ToggleGate {
    fn default() -> Self {
        Self::new(true)
    }
}

// ============================================================================
// Mock Event
// ============================================================================

/// A raw event with arbitrary code fields.
///
/// # Example
///
/// ```rust,ignore
/// let mut event = MockEvent::new().with("keyCode", 37);
/// pipe.feed(&mut event)?;
/// assert!(event.default_prevented());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockEvent {
    fields: HashMap<String, Label>,
    default_prevented: bool,
}

impl MockEvent {
    /// An event with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// An event with a single code field.
    pub fn key(field: &str, code: impl IntoCode) -> Self {
        Self::new().with(field, code)
    }

    /// Add a code field. Values without a code are ignored.
    pub fn with(mut self, field: &str, code: impl IntoCode) -> Self {
        if let Some(label) = code.into_code() {
            self.fields.insert(field.to_owned(), label);
        }
        self
    }

    /// Whether a pipe asked this event to suppress its default.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl RawEvent for MockEvent {
    fn code(&self, field: &str) -> Option<Label> {
        self.fields.get(field).cloned()
    }

    fn prevent_default(&mut self) -> bool {
        self.default_prevented = true;
        true
    }
}
