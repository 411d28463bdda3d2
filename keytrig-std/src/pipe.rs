//! Pipes adapt a raw event source to the relay.
//!
//! A [`Pipe`] captures a target, the name of the event field carrying the
//! code, and whether to suppress the event's platform default. It holds no
//! other state, so any number of pipes can be attached to different sources
//! at once.
//!
//! A pipe holds a strong [`KeyRelay`] handle. Registering a pipe or its
//! handler as a callback of the same relay keeps the relay alive forever;
//! route through [`KeyRelay::downgrade`] instead.

use crate::relay::KeyRelay;
use keytrig_core::{DispatchError, RawEvent, Target};
use std::fmt;

/// A ready-to-attach event handler produced by [`KeyRelay::make_pipe`].
pub struct Pipe<E, R = ()> {
    relay: KeyRelay<E, R>,
    target: Target<E, R>,
    code_field: String,
    prevent_defaults: bool,
}

impl<E, R> Pipe<E, R> {
    pub(crate) fn new(
        relay: KeyRelay<E, R>,
        target: Target<E, R>,
        code_field: String,
        prevent_defaults: bool,
    ) -> Self {
        Self {
            relay,
            target,
            code_field,
            prevent_defaults,
        }
    }

    /// The dispatch target.
    pub fn target(&self) -> &Target<E, R> {
        &self.target
    }

    /// The event field the code is read from.
    pub fn code_field(&self) -> &str {
        &self.code_field
    }

    /// Whether events have their default suppressed.
    pub fn prevents_defaults(&self) -> bool {
        self.prevent_defaults
    }
}

impl<E: RawEvent, R> Pipe<E, R> {
    /// Feed one raw event through the pipe.
    pub fn feed(&self, event: &mut E) -> Result<Option<R>, DispatchError> {
        if self.prevent_defaults && !event.prevent_default() {
            tracing::trace!(dispatch = ?self.target, "event has no default to prevent");
        }
        let code = event.code(&self.code_field);
        self.relay.dispatch(&self.target, code.as_ref(), Some(&*event))
    }

    /// Turn the pipe into a plain event handler.
    ///
    /// The callback's result is discarded. Dispatch errors cannot be returned
    /// to an event source, so they are logged at `warn` level and dropped.
    pub fn into_handler(self) -> impl Fn(&mut E) {
        move |event: &mut E| {
            if let Err(err) = self.feed(event) {
                tracing::warn!(
                    dispatch = ?self.target,
                    field = %self.code_field,
                    %err,
                    "dropped raw event"
                );
            }
        }
    }
}

impl<E, R> Clone for Pipe<E, R> {
    fn clone(&self) -> Self {
        Self {
            relay: self.relay.clone(),
            target: self.target.clone(),
            code_field: self.code_field.clone(),
            prevent_defaults: self.prevent_defaults,
        }
    }
}

impl<E, R> fmt::Debug for Pipe<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe")
            .field("target", &self.target)
            .field("code_field", &self.code_field)
            .field("prevent_defaults", &self.prevent_defaults)
            .finish_non_exhaustive()
    }
}
