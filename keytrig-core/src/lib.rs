//! # keytrig-core
//!
//! Core types for the keytrig input trigger layer.
//!
//! This crate has minimal dependencies and is meant to be imported by input
//! backends that only need to describe their events, without pulling in the
//! registry and dispatch machinery of `keytrig-std`.
//!
//! # Vocabulary
//!
//! - [`Label`] - an alias (`"left"`) or a raw code (`37`) naming an input signal
//! - [`AliasEntry`] - the raw value a settings loader supplies for one action
//! - [`RawEvent`] - an event a pipe can pull a code out of
//! - [`Callback`] - what a trigger ultimately runs
//! - [`Target`] - either a trigger name to look up or a callback to run directly
//! - [`Gate`] - a constant or predicate controlling whether dispatch proceeds
//!
//! # Error Types
//!
//! - [`KeytrigError`] - Top-level error type
//! - [`DispatchError`] - Unknown triggers and labels
//! - [`AliasError`] - Malformed alias input
//! - [`ConfigError`] - Keymap loading failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;
mod event;
mod label;

// Re-exports
pub use callback::{Callback, Gate, Predicate, Target, callback};
pub use error::{AliasError, ConfigError, DispatchError, KeytrigError};
pub use event::RawEvent;
pub use label::{AliasEntry, IntoCode, Label};
