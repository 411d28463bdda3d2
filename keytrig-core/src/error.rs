//! Error types for keytrig.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`KeytrigError`] - Top-level error type for all keytrig operations
//! - [`DispatchError`] - Errors while resolving a trigger to a callback
//! - [`AliasError`] - Malformed alias input
//! - [`ConfigError`] - Failures while loading a keymap configuration

use thiserror::Error;

/// Top-level error type for all keytrig operations.
#[derive(Error, Debug)]
pub enum KeytrigError {
    /// An error occurred while dispatching a trigger.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Alias input was rejected.
    #[error("alias error: {0}")]
    Alias(#[from] AliasError),

    /// A keymap configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while resolving a trigger name and code to a callback.
///
/// These are reported to the caller and never swallowed. A closed gate is
/// not an error and never produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The trigger name has no label table.
    #[error("unknown trigger: {0}")]
    UnknownTrigger(String),

    /// The trigger exists but nothing is registered for the resolved label.
    #[error("no callback for label `{label}` under trigger `{trigger}`")]
    UnknownLabel {
        /// The trigger that was looked up.
        trigger: String,
        /// The label as requested by the caller, before alias resolution.
        label: String,
    },
}

/// Errors raised by bulk alias registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// The values for an action were not an ordered sequence.
    #[error("aliases for `{name}` must be an ordered sequence, found {found}")]
    InvalidAlias {
        /// The action name whose entry was rejected.
        name: String,
        /// A short description of what was supplied instead.
        found: String,
    },
}

/// Errors raised while loading a keymap configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error("failed to parse keymap: {0}")]
    Parse(String),

    /// The document parsed but contained invalid alias entries.
    #[error(transparent)]
    Alias(#[from] AliasError),
}
