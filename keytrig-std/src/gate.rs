//! Gate controller.
//!
//! Holds the trigger-enablement state. Whatever the caller supplies (a
//! boolean, a closure, or a [`Gate`]) is normalized into one predicate when
//! it is set, and that predicate runs before every invocation.

use keytrig_core::{Gate, Predicate};
use std::{fmt, rc::Rc};

/// Decides whether dispatch may invoke callbacks.
#[derive(Clone)]
pub struct GateController {
    predicate: Predicate,
}

impl Default for GateController {
    fn default() -> Self {
        Self::new(Gate::default())
    }
}

impl GateController {
    /// Create a controller from any gate value.
    pub fn new(gate: impl Into<Gate>) -> Self {
        Self {
            predicate: gate.into().into_predicate(),
        }
    }

    /// The current predicate. Constants come back as constant predicates.
    pub fn get_can_trigger(&self) -> Predicate {
        Rc::clone(&self.predicate)
    }

    /// Replace the gate.
    pub fn set_can_trigger(&mut self, gate: impl Into<Gate>) {
        let gate = gate.into();
        tracing::debug!(?gate, "gate replaced");
        self.predicate = gate.into_predicate();
    }

    /// Replace the gate with a closure.
    pub fn set_can_trigger_with<F>(&mut self, f: F)
    where
        F: Fn() -> bool + 'static,
    {
        self.set_can_trigger(Gate::predicate(f));
    }

    /// Evaluate the gate now.
    pub fn allows(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for GateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateController").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn defaults_to_open() {
        assert!(GateController::default().allows());
    }

    #[test]
    fn boolean_is_wrapped_as_predicate() {
        let mut gate = GateController::new(true);
        gate.set_can_trigger(false);
        let predicate = gate.get_can_trigger();
        assert!(!predicate());
        assert!(!gate.allows());
    }

    #[test]
    fn closure_is_evaluated_each_time() {
        let open = Rc::new(Cell::new(false));
        let probe = Rc::clone(&open);

        let mut gate = GateController::default();
        gate.set_can_trigger_with(move || probe.get());
        assert!(!gate.allows());

        open.set(true);
        assert!(gate.allows());
    }
}
