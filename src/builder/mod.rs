//! Builder API for ergonomic transition construction.
//!
//! This module provides a fluent builder and a macro for defining states
//! and transitions with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::{State, Transition};

/// Create a transition that may be taken from any of `states` and leads
/// back to `to`, which is usually one of them.
///
/// # Example
///
/// ```
/// use waypoint::builder::from_any;
///
/// let reset = from_any("reset", ["running", "paused", "idle"], "idle");
/// assert!(reset.is_valid_from(&"idle"));
/// ```
pub fn from_any<S, I>(name: impl Into<String>, states: I, to: S) -> Transition<S>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    Transition::new(name, states, to)
}

/// Create a transition that leaves `state` and re-enters it.
///
/// # Example
///
/// ```
/// use waypoint::builder::self_loop;
///
/// let tick = self_loop("tick", "running");
/// assert!(tick.is_valid_from(&"running"));
/// assert!(tick.leads_to(&"running"));
/// ```
pub fn self_loop<S: State>(name: impl Into<String>, state: S) -> Transition<S> {
    Transition::new(name, [state.clone()], state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Fsm;

    #[test]
    fn self_loop_records_history_and_stays_put() {
        let fsm = Fsm::with_history("running")
            .set_transitions([self_loop("tick", "running")])
            .execute("tick");

        assert!(fsm.is(&"running"));
        assert_eq!(fsm.history(), &["running", "running"]);
    }

    #[test]
    fn from_any_accepts_every_listed_state() {
        let transition = from_any("reset", ["a", "b"], "idle");

        assert!(transition.is_valid_from(&"a"));
        assert!(transition.is_valid_from(&"b"));
        assert!(!transition.is_valid_from(&"idle"));
    }
}
