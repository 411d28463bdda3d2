//! Keymap configuration loading.
//!
//! Parses a JSON keymap document into [`RelaySettings`]:
//!
//! ```json
//! {
//!   "aliases": { "left": [37, "a"], "fire": ["space"] },
//!   "alias_to_code": { "left": 37, "space": 32 },
//!   "code_to_alias": { "13": "enter" },
//!   "can_trigger": true
//! }
//! ```
//!
//! Map keys that look like integers are read as codes. Alias entries keep
//! whatever shape the document used; non-sequence entries are reported as
//! [`AliasError::InvalidAlias`](keytrig_core::AliasError) by
//! [`KeymapConfig::validate`] and again when the settings are built.

use crate::settings::RelaySettings;
use indexmap::IndexMap;
use keytrig_core::{AliasEntry, ConfigError, Label};
use serde::{Deserialize, Serialize};

/// Root structure of a keymap document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeymapConfig {
    /// Action name → aliases and codes that invoke it.
    pub aliases: IndexMap<String, AliasEntry>,
    /// Alias → code pairs.
    pub alias_to_code: IndexMap<String, Label>,
    /// Code → alias pairs.
    pub code_to_alias: IndexMap<String, Label>,
    /// Initial gate value. Absent means open.
    pub can_trigger: Option<bool>,
}

impl KeymapConfig {
    /// Parse a keymap from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: KeymapConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every alias entry is an ordered sequence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, entry) in &self.aliases {
            entry.clone().into_sequence(name)?;
        }
        Ok(())
    }

    /// Convert into relay settings.
    pub fn into_settings<E, R>(self) -> RelaySettings<E, R> {
        let settings = RelaySettings::new()
            .alias_to_code(
                self.alias_to_code
                    .into_iter()
                    .map(|(alias, code)| (Label::parse(&alias), code)),
            )
            .code_to_alias(
                self.code_to_alias
                    .into_iter()
                    .map(|(code, alias)| (Label::parse(&code), alias)),
            )
            .aliases(self.aliases);

        match self.can_trigger {
            Some(open) => settings.can_trigger(open),
            None => settings,
        }
    }
}

impl<E, R> RelaySettings<E, R> {
    /// Settings seeded from a parsed keymap.
    pub fn from_config(config: KeymapConfig) -> Self {
        config.into_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keytrig_core::AliasError;

    #[test]
    fn parses_full_document() {
        let config = KeymapConfig::from_json(
            r#"{
                "aliases": { "left": [37, "a"] },
                "alias_to_code": { "left": 37 },
                "code_to_alias": { "13": "enter" },
                "can_trigger": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.aliases["left"],
            AliasEntry::Sequence(vec![Label::Code(37), Label::from("a")])
        );
        assert_eq!(config.code_to_alias["13"], Label::from("enter"));
        assert_eq!(config.can_trigger, Some(false));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let config = KeymapConfig::from_json("{}").unwrap();
        assert_eq!(config, KeymapConfig::default());
    }

    #[test]
    fn scalar_alias_entry_is_invalid() {
        let err = KeymapConfig::from_json(r#"{ "aliases": { "fire": 32 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Alias(AliasError::InvalidAlias { ref name, .. }) if name == "fire"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = KeymapConfig::from_json("{ aliases: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
