//! Construction settings for [`KeyRelay`].
//!
//! Every setting is optional. Key tables are applied in the order
//! `alias_to_code` then `code_to_alias`, each through the bijection, so a
//! later conflicting pair wins over an earlier one.

use crate::{
    alias::AliasTable,
    gate::GateController,
    registry::TriggerRegistry,
    relay::{KeyRelay, Timestamp},
};
use keytrig_core::{AliasEntry, AliasError, Callback, Gate, Label};
use std::rc::Rc;

/// Builder for a [`KeyRelay`].
pub struct RelaySettings<E, R = ()> {
    triggers: TriggerRegistry<E, R>,
    timestamp: Option<Timestamp>,
    aliases: Vec<(String, AliasEntry)>,
    alias_to_code: Vec<(Label, Label)>,
    code_to_alias: Vec<(Label, Label)>,
    gate: Gate,
}

impl<E, R> Default for RelaySettings<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> RelaySettings<E, R> {
    /// Empty settings: no triggers, no aliases, open gate, no clock.
    pub fn new() -> Self {
        Self {
            triggers: TriggerRegistry::new(),
            timestamp: None,
            aliases: Vec::new(),
            alias_to_code: Vec::new(),
            code_to_alias: Vec::new(),
            gate: Gate::default(),
        }
    }

    /// Start from an existing trigger table.
    pub fn triggers(mut self, triggers: TriggerRegistry<E, R>) -> Self {
        self.triggers = triggers;
        self
    }

    /// Declare a trigger with no callbacks yet.
    pub fn trigger(mut self, trigger: &str) -> Self {
        self.triggers.add_trigger(trigger);
        self
    }

    /// Register a callback.
    pub fn event<F>(mut self, trigger: &str, label: impl Into<Label>, f: F) -> Self
    where
        F: Fn(Option<&E>) -> R + 'static,
    {
        let cb: Callback<E, R> = Rc::new(f);
        self.triggers.add_event(trigger, label, cb);
        self
    }

    /// Install the clock returned by [`KeyRelay::timestamp`].
    pub fn timestamp<F>(mut self, now: F) -> Self
    where
        F: Fn() -> f64 + 'static,
    {
        self.timestamp = Some(Rc::new(now));
        self
    }

    /// Add one action's alias entry. Validated at [`build`](Self::build).
    pub fn alias(mut self, name: impl Into<String>, entry: impl Into<AliasEntry>) -> Self {
        self.aliases.push((name.into(), entry.into()));
        self
    }

    /// Add many action alias entries.
    pub fn aliases<I, S>(mut self, map: I) -> Self
    where
        I: IntoIterator<Item = (S, AliasEntry)>,
        S: Into<String>,
    {
        self.aliases
            .extend(map.into_iter().map(|(name, entry)| (name.into(), entry)));
        self
    }

    /// Seed the alias → code table.
    pub fn alias_to_code<I, A, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<Label>,
        C: Into<Label>,
    {
        self.alias_to_code
            .extend(pairs.into_iter().map(|(a, c)| (a.into(), c.into())));
        self
    }

    /// Seed the code → alias table.
    pub fn code_to_alias<I, C, A>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, A)>,
        C: Into<Label>,
        A: Into<Label>,
    {
        self.code_to_alias
            .extend(pairs.into_iter().map(|(c, a)| (c.into(), a.into())));
        self
    }

    /// Initial gate value or predicate.
    pub fn can_trigger(mut self, gate: impl Into<Gate>) -> Self {
        self.gate = gate.into();
        self
    }

    /// Build the relay.
    ///
    /// Fails with [`AliasError::InvalidAlias`] if any alias entry is not an
    /// ordered sequence.
    pub fn build(self) -> Result<KeyRelay<E, R>, AliasError> {
        let mut aliases = AliasTable::new();
        for (alias, code) in self.alias_to_code {
            aliases.bind_key(alias, code);
        }
        for (code, alias) in self.code_to_alias {
            aliases.bind_key(alias, code);
        }
        aliases.add_aliases(self.aliases)?;

        tracing::debug!(
            triggers = self.triggers.triggers().count(),
            callbacks = self.triggers.len(),
            keys = aliases.key_count(),
            actions = aliases.get_aliases().len(),
            "relay built"
        );

        Ok(KeyRelay::from_parts(
            aliases,
            self.triggers,
            GateController::new(self.gate),
            self.timestamp,
        ))
    }
}
