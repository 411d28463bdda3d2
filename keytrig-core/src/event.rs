//! Raw input events as seen by pipes.

use crate::label::{IntoCode, Label};
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A raw event delivered by an input source (keyboard, mouse, gamepad...).
///
/// Pipes never know the concrete event type. They ask for the code stored in
/// a named field and, when configured to, ask the event to suppress its
/// platform default behavior.
///
/// Use `#[derive(RawEvent)]` from the `keytrig` crate for plain structs.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a raw input event",
    label = "missing `RawEvent` implementation",
    note = "Implement `RawEvent` or use `#[derive(RawEvent)]` to feed this type through a pipe."
)]
pub trait RawEvent {
    /// The code carried by the field named `field`, if there is one.
    fn code(&self, field: &str) -> Option<Label>;

    /// Suppress the platform default for this event.
    ///
    /// Returns `false` when the event has no default to suppress.
    fn prevent_default(&mut self) -> bool {
        false
    }
}

impl<V: IntoCode, S: BuildHasher> RawEvent for HashMap<String, V, S> {
    fn code(&self, field: &str) -> Option<Label> {
        self.get(field).and_then(IntoCode::into_code)
    }
}

impl<V: IntoCode> RawEvent for BTreeMap<String, V> {
    fn code(&self, field: &str) -> Option<Label> {
        self.get(field).and_then(IntoCode::into_code)
    }
}

impl<T: RawEvent + ?Sized> RawEvent for Box<T> {
    fn code(&self, field: &str) -> Option<Label> {
        (**self).code(field)
    }

    fn prevent_default(&mut self) -> bool {
        (**self).prevent_default()
    }
}
