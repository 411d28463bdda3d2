//! # keytrig-std
//!
//! Standard implementations for the keytrig input trigger layer.
//!
//! This crate provides:
//! - **Aliases**: [`AliasTable`] with the alias ↔ code bijection and per-action alias sets
//! - **Registry**: [`TriggerRegistry`], trigger → label → callback
//! - **Gate**: [`GateController`], the global enablement predicate
//! - **Dispatch**: [`KeyRelay::call_event`] and the [`Resolver`] behind it
//! - **Pipes**: [`KeyRelay::make_pipe`] adapting raw event sources
//! - **Settings**: [`RelaySettings`] and, with the `serde` feature, JSON keymaps

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use keytrig_core;

// Modules
pub mod alias;
#[cfg(feature = "serde")]
pub mod config;
pub mod dispatch;
pub mod gate;
pub mod pipe;
pub mod registry;
pub mod relay;
pub mod settings;
pub mod testing;

pub use alias::AliasTable;
#[cfg(feature = "serde")]
pub use config::KeymapConfig;
pub use dispatch::{Matched, Resolver};
pub use gate::GateController;
pub use pipe::Pipe;
pub use registry::{LabelTable, TriggerRegistry};
pub use relay::{KeyRelay, Timestamp, WeakRelay};
pub use settings::RelaySettings;
