//! # Callbacks, dispatch targets and gates
//!
//! A [`Callback`] is the terminal point of dispatch: it receives the source
//! event (when there is one) and returns whatever the application needs.
//! Results pass through dispatch untouched, so a callback returning
//! `Result<T, MyError>` hands its error straight back to the caller.
//!
//! Everything here is single-threaded. Callbacks are shared through `Rc` so a
//! registry lookup can hand one out without holding a borrow on the table
//! while it runs.

use std::{fmt, rc::Rc};

/// A shared callback invoked with an optional source event.
pub type Callback<E, R = ()> = Rc<dyn Fn(Option<&E>) -> R>;

/// Wrap a closure as a [`Callback`].
pub fn callback<E, R, F>(f: F) -> Callback<E, R>
where
    F: Fn(Option<&E>) -> R + 'static,
{
    Rc::new(f)
}

/// What a dispatch call should run.
pub enum Target<E, R = ()> {
    /// Look the callback up in the registry under this trigger name.
    Trigger(String),
    /// Run this callback directly, bypassing the registry.
    Callback(Callback<E, R>),
}

impl<E, R> Target<E, R> {
    /// A registry lookup under `name`.
    pub fn trigger(name: impl Into<String>) -> Self {
        Target::Trigger(name.into())
    }

    /// An ad-hoc callback that never touches the registry.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(Option<&E>) -> R + 'static,
    {
        Target::Callback(Rc::new(f))
    }

    /// The trigger name, if this target goes through the registry.
    pub fn trigger_name(&self) -> Option<&str> {
        match self {
            Target::Trigger(name) => Some(name),
            Target::Callback(_) => None,
        }
    }
}

impl<E, R> Clone for Target<E, R> {
    fn clone(&self) -> Self {
        match self {
            Target::Trigger(name) => Target::Trigger(name.clone()),
            Target::Callback(cb) => Target::Callback(Rc::clone(cb)),
        }
    }
}

impl<E, R> fmt::Debug for Target<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Trigger(name) => f.debug_tuple("Trigger").field(name).finish(),
            Target::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl<E, R> From<&str> for Target<E, R> {
    fn from(name: &str) -> Self {
        Target::Trigger(name.to_owned())
    }
}

impl<E, R> From<String> for Target<E, R> {
    fn from(name: String) -> Self {
        Target::Trigger(name)
    }
}

impl<E, R> From<&String> for Target<E, R> {
    fn from(name: &String) -> Self {
        Target::Trigger(name.clone())
    }
}

impl<E, R> From<Callback<E, R>> for Target<E, R> {
    fn from(cb: Callback<E, R>) -> Self {
        Target::Callback(cb)
    }
}

/// A predicate deciding whether dispatch may run right now.
pub type Predicate = Rc<dyn Fn() -> bool>;

/// Trigger enablement: a fixed value or a predicate evaluated on every call.
#[derive(Clone)]
pub enum Gate {
    /// Always open (`true`) or always closed (`false`).
    Constant(bool),
    /// Re-evaluated before every invocation. Never cached.
    Predicate(Predicate),
}

impl Gate {
    /// A gate backed by `f`.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Gate::Predicate(Rc::new(f))
    }

    /// Normalize into the single callable shape dispatch uses.
    pub fn into_predicate(self) -> Predicate {
        match self {
            Gate::Constant(value) => Rc::new(move || value),
            Gate::Predicate(f) => f,
        }
    }
}

impl Default for Gate {
    fn default() -> Self {
        Gate::Constant(true)
    }
}

impl fmt::Debug for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Gate::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for Gate {
    fn from(value: bool) -> Self {
        Gate::Constant(value)
    }
}

impl From<Predicate> for Gate {
    fn from(f: Predicate) -> Self {
        Gate::Predicate(f)
    }
}
