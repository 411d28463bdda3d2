//! # keytrig - Input Trigger Indirection
//!
//! `keytrig` sits between raw input sources and application logic. Raw codes
//! (`37`) and symbolic aliases (`"left"`) are bound to named triggers, a
//! global gate decides whether anything fires, and pipes turn raw events
//! into dispatches.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keytrig::{prelude::*, testing::MockEvent};
//!
//! let relay: KeyRelay<MockEvent> = KeyRelay::builder()
//!     .alias_to_code([("left", 37)])
//!     .event("keydown", "left", |_| println!("left"))
//!     .build()?;
//!
//! let pipe = relay.make_pipe("keydown", "keyCode", true);
//! pipe.feed(&mut MockEvent::key("keyCode", 37))?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use keytrig_core::{
    // Errors
    AliasError,
    ConfigError,
    DispatchError,
    KeytrigError,
    // Labels
    AliasEntry,
    IntoCode,
    Label,
    // Events
    RawEvent,
    // Callbacks and gates
    Callback,
    Gate,
    Predicate,
    Target,
    callback,
};

pub use keytrig_std::{
    AliasTable, GateController, KeyRelay, LabelTable, Matched, Pipe, RelaySettings, Resolver,
    Timestamp, TriggerRegistry, WeakRelay,
};

#[cfg(feature = "serde")]
pub use keytrig_std::KeymapConfig;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use keytrig_std::testing::*;
}

/// Prelude module - common imports for keytrig.
///
/// # Usage
///
/// ```rust,ignore
/// use keytrig::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DispatchError, Gate, IntoCode, KeyRelay, Label, Pipe, RawEvent, RelaySettings, Target,
        callback,
    };
}

#[cfg(feature = "macros")]
pub use keytrig_macros::RawEvent;
