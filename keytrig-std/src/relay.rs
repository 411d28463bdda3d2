//! # Key relay
//!
//! [`KeyRelay`] is the handle applications hold. It owns the alias tables,
//! the trigger registry and the gate, and exposes every registration and
//! dispatch operation.
//!
//! The relay is a cheap-to-clone `Rc` handle over `RefCell` state. Clones
//! share the same tables, which is how [`Pipe`]s reach the registry. It is
//! `!Send`: dispatch is single-threaded and synchronous.
//!
//! No table borrow is held while a callback or the gate predicate runs, so
//! callbacks may re-enter the relay (close the gate, register more events,
//! dispatch again). A callback stored in the relay must reach it through a
//! [`WeakRelay`] from [`KeyRelay::downgrade`]: capturing a `KeyRelay` (or a
//! [`Pipe`], which holds one) forms an `Rc` cycle and the tables are never
//! freed.

use crate::{
    alias::AliasTable,
    dispatch::{Matched, Resolver, invoke},
    gate::GateController,
    pipe::Pipe,
    registry::TriggerRegistry,
    settings::RelaySettings,
};
use indexmap::IndexMap;
use keytrig_core::{AliasEntry, AliasError, Callback, DispatchError, Gate, Label, Predicate, Target};
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// A caller-supplied clock, stored for callers that timestamp recorded events.
pub type Timestamp = Rc<dyn Fn() -> f64>;

struct Inner<E, R> {
    aliases: RefCell<AliasTable>,
    triggers: RefCell<TriggerRegistry<E, R>>,
    gate: RefCell<GateController>,
    timestamp: Option<Timestamp>,
}

/// Shared handle over an alias table, trigger registry and gate.
pub struct KeyRelay<E, R = ()> {
    inner: Rc<Inner<E, R>>,
}

/// Non-owning handle to a [`KeyRelay`], for callbacks that re-enter it.
pub struct WeakRelay<E, R = ()> {
    inner: Weak<Inner<E, R>>,
}

impl<E, R> WeakRelay<E, R> {
    /// The relay, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<KeyRelay<E, R>> {
        self.inner.upgrade().map(|inner| KeyRelay { inner })
    }
}

impl<E, R> Clone for WeakRelay<E, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<E, R> fmt::Debug for WeakRelay<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakRelay")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl<E, R> Clone for KeyRelay<E, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E, R> Default for KeyRelay<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> fmt::Debug for KeyRelay<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRelay")
            .field("aliases", &self.inner.aliases.borrow())
            .field("triggers", &self.inner.triggers.borrow())
            .field("timestamp", &self.inner.timestamp.is_some())
            .finish_non_exhaustive()
    }
}

impl<E, R> KeyRelay<E, R> {
    /// An empty relay with an open gate.
    pub fn new() -> Self {
        Self::from_parts(
            AliasTable::new(),
            TriggerRegistry::new(),
            GateController::default(),
            None,
        )
    }

    /// Start building a relay from settings.
    pub fn builder() -> RelaySettings<E, R> {
        RelaySettings::new()
    }

    pub(crate) fn from_parts(
        aliases: AliasTable,
        triggers: TriggerRegistry<E, R>,
        gate: GateController,
        timestamp: Option<Timestamp>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                aliases: RefCell::new(aliases),
                triggers: RefCell::new(triggers),
                gate: RefCell::new(gate),
                timestamp,
            }),
        }
    }

    /// A handle that does not keep the relay alive.
    pub fn downgrade(&self) -> WeakRelay<E, R> {
        WeakRelay {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Read the current time from the configured clock, if any.
    pub fn timestamp(&self) -> Option<f64> {
        self.inner.timestamp.as_ref().map(|now| now())
    }

    // ------------------------------------------------------------------
    // Aliases
    // ------------------------------------------------------------------

    /// Run `f` with read access to the alias table.
    ///
    /// # Panics
    ///
    /// The table stays borrowed while `f` runs. Calling a relay method that
    /// changes aliases from inside `f` panics.
    pub fn with_aliases<T>(&self, f: impl FnOnce(&AliasTable) -> T) -> T {
        f(&self.inner.aliases.borrow())
    }

    /// Snapshot of every action alias set.
    pub fn get_aliases(&self) -> IndexMap<String, Vec<Label>> {
        self.inner.aliases.borrow().get_aliases().clone()
    }

    /// Every action alias set as human-readable labels.
    pub fn get_aliases_as_key_strings(&self) -> IndexMap<String, Vec<Label>> {
        self.inner.aliases.borrow().get_aliases_as_key_strings()
    }

    /// The alias set of `name` as human-readable labels.
    pub fn get_alias_as_key_strings(&self, name: &str) -> Vec<Label> {
        self.inner.aliases.borrow().get_alias_as_key_strings(name)
    }

    /// Map a code to its human alias, or return it unchanged.
    pub fn convert_alias_to_key_string(&self, alias: impl Into<Label>) -> Label {
        self.inner
            .aliases
            .borrow()
            .convert_alias_to_key_string(&alias.into())
    }

    /// Map a human alias to its code, or return it unchanged.
    pub fn convert_key_string_to_alias(&self, key: impl Into<Label>) -> Label {
        self.inner
            .aliases
            .borrow()
            .convert_key_string_to_alias(&key.into())
    }

    /// Bind `alias` ↔ `code`, evicting conflicting pairs.
    pub fn bind_key(&self, alias: impl Into<Label>, code: impl Into<Label>) {
        self.inner.aliases.borrow_mut().bind_key(alias, code);
    }

    /// See [`AliasTable::add_alias_values`].
    pub fn add_alias_values<I, L>(&self, name: &str, values: I) -> Vec<Label>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.inner.aliases.borrow_mut().add_alias_values(name, values)
    }

    /// See [`AliasTable::remove_alias_values`].
    pub fn remove_alias_values<I, L>(&self, name: &str, values: I) -> Vec<Label>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.inner
            .aliases
            .borrow_mut()
            .remove_alias_values(name, values)
    }

    /// See [`AliasTable::switch_alias_values`].
    pub fn switch_alias_values<I, J, L, M>(&self, name: &str, old: I, new: J)
    where
        I: IntoIterator<Item = L>,
        J: IntoIterator<Item = M>,
        L: Into<Label>,
        M: Into<Label>,
    {
        self.inner
            .aliases
            .borrow_mut()
            .switch_alias_values(name, old, new);
    }

    /// See [`AliasTable::add_aliases`].
    pub fn add_aliases<I, S>(&self, map: I) -> Result<(), AliasError>
    where
        I: IntoIterator<Item = (S, AliasEntry)>,
        S: Into<String>,
    {
        self.inner.aliases.borrow_mut().add_aliases(map)
    }

    // ------------------------------------------------------------------
    // Gate
    // ------------------------------------------------------------------

    /// The current gate predicate.
    pub fn get_can_trigger(&self) -> Predicate {
        self.inner.gate.borrow().get_can_trigger()
    }

    /// Replace the gate with a boolean or a [`Gate`].
    pub fn set_can_trigger(&self, gate: impl Into<Gate>) {
        self.inner.gate.borrow_mut().set_can_trigger(gate);
    }

    /// Replace the gate with a predicate closure.
    pub fn set_can_trigger_with<F>(&self, f: F)
    where
        F: Fn() -> bool + 'static,
    {
        self.inner.gate.borrow_mut().set_can_trigger_with(f);
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Run `f` with read access to the trigger registry.
    ///
    /// # Panics
    ///
    /// The registry stays borrowed while `f` runs. Calling a relay method
    /// that registers, removes or dispatches from inside `f` panics.
    pub fn with_triggers<T>(&self, f: impl FnOnce(&TriggerRegistry<E, R>) -> T) -> T {
        f(&self.inner.triggers.borrow())
    }

    /// Register `f` under `(trigger, label)`, replacing any previous
    /// callback in that slot.
    pub fn add_event<F>(&self, trigger: &str, label: impl Into<Label>, f: F) -> Option<Callback<E, R>>
    where
        F: Fn(Option<&E>) -> R + 'static,
    {
        self.add_callback(trigger, label, Rc::new(f))
    }

    /// Register an already shared callback under `(trigger, label)`.
    pub fn add_callback(
        &self,
        trigger: &str,
        label: impl Into<Label>,
        callback: Callback<E, R>,
    ) -> Option<Callback<E, R>> {
        self.inner
            .triggers
            .borrow_mut()
            .add_event(trigger, label, callback)
    }

    /// Remove the callback under `(trigger, label)`, if any.
    pub fn remove_event(&self, trigger: &str, label: impl Into<Label>) -> Option<Callback<E, R>> {
        self.inner.triggers.borrow_mut().remove_event(trigger, label)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Dispatch `target` with an optional code and source event.
    ///
    /// Returns `Ok(None)` when the gate is closed and `Ok(Some(result))` with
    /// the callback's own return value otherwise.
    pub fn call_event(
        &self,
        target: impl Into<Target<E, R>>,
        code: Option<Label>,
        source: Option<&E>,
    ) -> Result<Option<R>, DispatchError> {
        self.dispatch(&target.into(), code.as_ref(), source)
    }

    /// Dispatch `label` under `trigger`.
    pub fn call_label(
        &self,
        trigger: &str,
        label: impl Into<Label>,
        source: Option<&E>,
    ) -> Result<Option<R>, DispatchError> {
        self.dispatch(&Target::trigger(trigger), Some(&label.into()), source)
    }

    pub(crate) fn dispatch(
        &self,
        target: &Target<E, R>,
        code: Option<&Label>,
        source: Option<&E>,
    ) -> Result<Option<R>, DispatchError> {
        let (callback, matched) = {
            let aliases = self.inner.aliases.borrow();
            let triggers = self.inner.triggers.borrow();
            Resolver::new(&aliases, &triggers).resolve(target, code)
        }
        .inspect_err(|err| tracing::trace!(dispatch = ?target, ?code, %err, "dispatch failed"))?;

        if matched != Matched::Direct {
            tracing::trace!(dispatch = ?target, ?code, ?matched, "resolved trigger");
        }

        let gate = self.get_can_trigger();
        Ok(invoke(&*gate, &callback, source))
    }

    /// Build a pipe feeding raw events into `target`.
    ///
    /// `code_field` names the event field carrying the code (`"keyCode"`,
    /// `"which"`, ...). With `prevent_defaults` set, the pipe asks every
    /// event to suppress its platform default before dispatching.
    pub fn make_pipe(
        &self,
        target: impl Into<Target<E, R>>,
        code_field: impl Into<String>,
        prevent_defaults: bool,
    ) -> Pipe<E, R> {
        Pipe::new(self.clone(), target.into(), code_field.into(), prevent_defaults)
    }
}
