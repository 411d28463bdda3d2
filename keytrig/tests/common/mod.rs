#![allow(dead_code)]

use keytrig::{KeyRelay, RawEvent, Label};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Test Event Types
// ============================================================================

/// A keyboard event shaped like a browser `KeyboardEvent`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyEvent {
    pub key_code: i64,
    pub which: Option<i64>,
    pub default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key_code: i64) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }
}

impl RawEvent for KeyEvent {
    fn code(&self, field: &str) -> Option<Label> {
        match field {
            "keyCode" => Some(Label::Code(self.key_code)),
            "which" => self.which.map(Label::Code),
            _ => None,
        }
    }

    fn prevent_default(&mut self) -> bool {
        self.default_prevented = true;
        true
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const LEFT: i64 = 37;
pub const RIGHT: i64 = 39;
pub const SPACE: i64 = 32;

/// A relay with the arrow keys and space bound to their aliases.
pub fn arrow_relay<E, R>() -> KeyRelay<E, R> {
    let relay = KeyRelay::new();
    relay.bind_key("left", LEFT);
    relay.bind_key("right", RIGHT);
    relay.bind_key("space", SPACE);
    relay
}

/// Shared log callbacks append to, for asserting call order.
pub fn call_log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}
