//! Alias tables.
//!
//! Two structures live here:
//!
//! - the **key bijection** between symbolic aliases and raw codes
//!   (`"left"` ↔ `37`), and
//! - the **action sets**, mapping an action name to the ordered aliases and
//!   codes that can invoke it, with a reverse index from each value back to
//!   the actions that list it.
//!
//! The action sets are independent of the trigger registry. Nothing here is
//! copied into trigger tables; dispatch consults these tables at call time.

use indexmap::{IndexMap, IndexSet};
use keytrig_core::{AliasEntry, AliasError, Label};
use std::collections::HashMap;

/// Bidirectional alias ↔ code map plus per-action alias sets.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    actions: IndexMap<String, Vec<Label>>,
    members: HashMap<String, IndexSet<String>>,
    alias_to_code: HashMap<String, Label>,
    code_to_alias: HashMap<String, Label>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Key bijection
    // ------------------------------------------------------------------

    /// Bind `alias` to `code`.
    ///
    /// Any previous code of `alias` and any previous alias of `code` are
    /// unbound first, so the mapping stays a bijection.
    pub fn bind_key(&mut self, alias: impl Into<Label>, code: impl Into<Label>) {
        let alias = alias.into();
        let code = code.into();

        self.unbind_alias(&alias);
        self.unbind_code(&code);

        tracing::debug!(%alias, %code, "bound key alias");
        self.alias_to_code
            .insert(alias.key().into_owned(), code.clone());
        self.code_to_alias.insert(code.key().into_owned(), alias);
    }

    /// Remove `alias` and its code from the bijection. Returns the code.
    pub fn unbind_alias(&mut self, alias: &Label) -> Option<Label> {
        let code = self.alias_to_code.remove(alias.key().as_ref())?;
        self.code_to_alias.remove(code.key().as_ref());
        Some(code)
    }

    /// Remove `code` and its alias from the bijection. Returns the alias.
    pub fn unbind_code(&mut self, code: &Label) -> Option<Label> {
        let alias = self.code_to_alias.remove(code.key().as_ref())?;
        self.alias_to_code.remove(alias.key().as_ref());
        Some(alias)
    }

    /// The code bound to `alias`, if any.
    pub fn code_of(&self, alias: &Label) -> Option<&Label> {
        self.alias_to_code.get(alias.key().as_ref())
    }

    /// The alias bound to `code`, if any.
    pub fn alias_of(&self, code: &Label) -> Option<&Label> {
        self.code_to_alias.get(code.key().as_ref())
    }

    /// Number of bound alias/code pairs.
    pub fn key_count(&self) -> usize {
        self.alias_to_code.len()
    }

    /// Map a code to its human alias. Unknown input comes back unchanged,
    /// since it is taken to already be a human label.
    pub fn convert_alias_to_key_string(&self, alias: &Label) -> Label {
        self.alias_of(alias).unwrap_or(alias).clone()
    }

    /// Map a human alias to its code. Unknown input comes back unchanged.
    pub fn convert_key_string_to_alias(&self, key: &Label) -> Label {
        self.code_of(key).unwrap_or(key).clone()
    }

    // ------------------------------------------------------------------
    // Action sets
    // ------------------------------------------------------------------

    /// Append `values` to the alias set of action `name`.
    ///
    /// Existing entries are kept and values already present are skipped.
    /// Returns the values that were actually inserted, so removing exactly
    /// those restores the previous set.
    pub fn add_alias_values<I, L>(&mut self, name: &str, values: I) -> Vec<Label>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        let existing = self.actions.get(name).map(Vec::as_slice).unwrap_or_default();
        let mut added: Vec<Label> = Vec::new();

        for value in values {
            let value = value.into();
            if existing.iter().chain(&added).any(|v| v.same_key(&value)) {
                continue;
            }
            added.push(value);
        }

        // An action only exists while its set is non-empty.
        if added.is_empty() {
            return added;
        }

        for value in &added {
            self.members
                .entry(value.key().into_owned())
                .or_default()
                .insert(name.to_owned());
        }
        self.actions
            .entry(name.to_owned())
            .or_default()
            .extend(added.iter().cloned());

        tracing::debug!(action = name, count = added.len(), "added alias values");
        added
    }

    /// Remove `values` from the alias set of action `name`.
    ///
    /// Values that are not present are ignored. An action whose set becomes
    /// empty is dropped. Returns the values that were actually removed.
    pub fn remove_alias_values<I, L>(&mut self, name: &str, values: I) -> Vec<Label>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        let Some(set) = self.actions.get_mut(name) else {
            return Vec::new();
        };
        let mut removed = Vec::new();

        for value in values {
            let value = value.into();
            let Some(pos) = set.iter().position(|v| v.same_key(&value)) else {
                continue;
            };
            let gone = set.remove(pos);
            let key = gone.key().into_owned();
            if let Some(owners) = self.members.get_mut(&key) {
                owners.shift_remove(name);
                if owners.is_empty() {
                    self.members.remove(&key);
                }
            }
            removed.push(gone);
        }

        if set.is_empty() {
            self.actions.shift_remove(name);
        }
        if !removed.is_empty() {
            tracing::debug!(action = name, count = removed.len(), "removed alias values");
        }
        removed
    }

    /// Remove `old` then add `new`, one after the other.
    ///
    /// A value in both lists ends up present.
    pub fn switch_alias_values<I, J, L, M>(&mut self, name: &str, old: I, new: J)
    where
        I: IntoIterator<Item = L>,
        J: IntoIterator<Item = M>,
        L: Into<Label>,
        M: Into<Label>,
    {
        self.remove_alias_values(name, old);
        self.add_alias_values(name, new);
    }

    /// Bulk form of [`add_alias_values`](Self::add_alias_values).
    ///
    /// Every entry is validated before any is applied: a non-sequence entry
    /// fails the whole call with [`AliasError::InvalidAlias`] and leaves the
    /// table untouched.
    pub fn add_aliases<I, S>(&mut self, map: I) -> Result<(), AliasError>
    where
        I: IntoIterator<Item = (S, AliasEntry)>,
        S: Into<String>,
    {
        let validated = map
            .into_iter()
            .map(|(name, entry)| {
                let name = name.into();
                entry.into_sequence(&name).map(|values| (name, values))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (name, values) in validated {
            self.add_alias_values(&name, values);
        }
        Ok(())
    }

    /// All action alias sets, in the order actions were first seen.
    pub fn get_aliases(&self) -> &IndexMap<String, Vec<Label>> {
        &self.actions
    }

    /// The raw alias set of action `name`, if it exists.
    pub fn alias_values(&self, name: &str) -> Option<&[Label]> {
        self.actions.get(name).map(Vec::as_slice)
    }

    /// The alias set of action `name` as human-readable labels.
    ///
    /// Each entry is normalized to its code and rendered back to its alias,
    /// so `"left"` and `37` both show up as `"left"` once `"left" ↔ 37` is
    /// bound. Unknown actions yield an empty list.
    pub fn get_alias_as_key_strings(&self, name: &str) -> Vec<Label> {
        self.actions
            .get(name)
            .map(|values| values.iter().map(|v| self.key_string(v)).collect())
            .unwrap_or_default()
    }

    /// Every action set rendered as human-readable labels.
    pub fn get_aliases_as_key_strings(&self) -> IndexMap<String, Vec<Label>> {
        self.actions
            .iter()
            .map(|(name, values)| {
                let labels = values.iter().map(|v| self.key_string(v)).collect();
                (name.clone(), labels)
            })
            .collect()
    }

    /// Actions whose alias set lists `value`, in action insertion order.
    pub fn actions_for(&self, value: &Label) -> Vec<&str> {
        let Some(owners) = self.members.get(value.key().as_ref()) else {
            return Vec::new();
        };
        self.actions
            .keys()
            .filter(|name| owners.contains(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    fn key_string(&self, value: &Label) -> Label {
        let code = self.convert_key_string_to_alias(value);
        self.convert_alias_to_key_string(&code)
    }
}
