//! Trigger registry.
//!
//! A two-level table: trigger name → label → callback. Labels are stored
//! under their normalized key, one callback per slot. Registration never
//! fans a callback out to aliases; alias resolution is done by dispatch.

use keytrig_core::{Callback, Label};
use std::{collections::HashMap, fmt, rc::Rc};

/// Callbacks of one trigger, keyed by normalized label.
pub type LabelTable<E, R> = HashMap<String, Callback<E, R>>;

/// The trigger → label → callback table.
pub struct TriggerRegistry<E, R = ()> {
    triggers: HashMap<String, LabelTable<E, R>>,
}

impl<E, R> Default for TriggerRegistry<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> TriggerRegistry<E, R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            triggers: HashMap::new(),
        }
    }

    /// Ensure `trigger` has a (possibly empty) label table.
    pub fn add_trigger(&mut self, trigger: &str) {
        self.triggers.entry(trigger.to_owned()).or_default();
    }

    /// Register `callback` for `(trigger, label)`.
    ///
    /// Creates the trigger's table if needed. An existing callback in the
    /// same slot is replaced and returned.
    pub fn add_event(
        &mut self,
        trigger: &str,
        label: impl Into<Label>,
        callback: Callback<E, R>,
    ) -> Option<Callback<E, R>> {
        let label = label.into();
        let previous = self
            .triggers
            .entry(trigger.to_owned())
            .or_default()
            .insert(label.key().into_owned(), callback);

        tracing::debug!(
            trigger,
            %label,
            replaced = previous.is_some(),
            "registered trigger callback"
        );
        previous
    }

    /// Remove the callback for `(trigger, label)`, if any.
    ///
    /// The trigger keeps its table even when this empties it.
    pub fn remove_event(&mut self, trigger: &str, label: impl Into<Label>) -> Option<Callback<E, R>> {
        let label = label.into();
        let removed = self
            .triggers
            .get_mut(trigger)
            .and_then(|table| table.remove(label.key().as_ref()));

        if removed.is_some() {
            tracing::debug!(trigger, %label, "removed trigger callback");
        }
        removed
    }

    /// Whether `trigger` has a label table.
    pub fn has_trigger(&self, trigger: &str) -> bool {
        self.triggers.contains_key(trigger)
    }

    /// Whether a callback is registered for `(trigger, label)`.
    pub fn contains(&self, trigger: &str, label: &Label) -> bool {
        self.get(trigger, label).is_some()
    }

    /// The label table of `trigger`.
    pub fn labels(&self, trigger: &str) -> Option<&LabelTable<E, R>> {
        self.triggers.get(trigger)
    }

    /// The callback for `(trigger, label)`, matched by normalized key only.
    pub fn get(&self, trigger: &str, label: &Label) -> Option<&Callback<E, R>> {
        self.triggers.get(trigger)?.get(label.key().as_ref())
    }

    /// Names of all triggers.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.triggers.keys().map(String::as_str)
    }

    /// Total number of registered callbacks across all triggers.
    pub fn len(&self) -> usize {
        self.triggers.values().map(HashMap::len).sum()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E, R> Clone for TriggerRegistry<E, R> {
    fn clone(&self) -> Self {
        let triggers = self
            .triggers
            .iter()
            .map(|(trigger, table)| {
                let table = table
                    .iter()
                    .map(|(label, cb)| (label.clone(), Rc::clone(cb)))
                    .collect();
                (trigger.clone(), table)
            })
            .collect();
        Self { triggers }
    }
}

impl<E, R> fmt::Debug for TriggerRegistry<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (trigger, table) in &self.triggers {
            map.entry(trigger, &table.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}
