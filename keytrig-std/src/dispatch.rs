//! Dispatch resolution.
//!
//! Turns a [`Target`] plus an optional code into the callback to run. Alias
//! handling happens here, at call time, against the current alias tables:
//!
//! 1. the requested label normalized to its code (`"left"` → `37`),
//! 2. that code rendered as its human alias (`37` → `"left"`),
//! 3. every action whose alias set lists the label (`"fire"` for `32`).
//!
//! The first slot of the trigger's table that matches wins. When no code is
//! given the trigger name itself is the requested label.

use crate::{alias::AliasTable, registry::TriggerRegistry};
use keytrig_core::{Callback, DispatchError, Label, Target};
use std::rc::Rc;

/// How a label was matched to a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    /// The target was a callback; no lookup took place.
    Direct,
    /// The label's canonical code had a slot.
    Code(Label),
    /// The canonical code's human alias had a slot.
    KeyString(Label),
    /// An action listing the label had a slot.
    Action(String),
}

/// Read-only view used to resolve targets against the current tables.
pub struct Resolver<'a, E, R> {
    aliases: &'a AliasTable,
    registry: &'a TriggerRegistry<E, R>,
}

impl<'a, E, R> Resolver<'a, E, R> {
    /// Create a resolver over the given tables.
    pub fn new(aliases: &'a AliasTable, registry: &'a TriggerRegistry<E, R>) -> Self {
        Self { aliases, registry }
    }

    /// Resolve `target` and `code` to a callback.
    ///
    /// Fails with [`DispatchError::UnknownTrigger`] when the trigger has no
    /// table and [`DispatchError::UnknownLabel`] when no candidate slot is
    /// filled.
    pub fn resolve(
        &self,
        target: &Target<E, R>,
        code: Option<&Label>,
    ) -> Result<(Callback<E, R>, Matched), DispatchError> {
        let trigger = match target {
            Target::Callback(cb) => return Ok((Rc::clone(cb), Matched::Direct)),
            Target::Trigger(name) => name.as_str(),
        };

        let table = self
            .registry
            .labels(trigger)
            .ok_or_else(|| DispatchError::UnknownTrigger(trigger.to_owned()))?;

        let requested = code.cloned().unwrap_or_else(|| Label::from(trigger));
        let canonical = self.aliases.convert_key_string_to_alias(&requested);
        if let Some(cb) = table.get(canonical.key().as_ref()) {
            return Ok((Rc::clone(cb), Matched::Code(canonical)));
        }

        let key_string = self.aliases.convert_alias_to_key_string(&canonical);
        if let Some(cb) = table.get(key_string.key().as_ref()) {
            return Ok((Rc::clone(cb), Matched::KeyString(key_string)));
        }

        let owners = self
            .aliases
            .actions_for(&requested)
            .into_iter()
            .chain(self.aliases.actions_for(&canonical))
            .chain(self.aliases.actions_for(&key_string));
        for action in owners {
            if let Some(cb) = table.get(action) {
                return Ok((Rc::clone(cb), Matched::Action(action.to_owned())));
            }
        }

        Err(DispatchError::UnknownLabel {
            trigger: trigger.to_owned(),
            label: requested.to_string(),
        })
    }
}

/// Run `callback` with `source` if `gate` allows it.
///
/// The gate is evaluated right here, on every call. A closed gate is a
/// silent no-op and yields `None`.
pub fn invoke<E, R>(gate: &dyn Fn() -> bool, callback: &Callback<E, R>, source: Option<&E>) -> Option<R> {
    if !gate() {
        tracing::trace!("gate closed, dispatch skipped");
        return None;
    }
    Some(callback(source))
}
