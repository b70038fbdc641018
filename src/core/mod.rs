//! Core state machine types.
//!
//! This module contains the pure building blocks of a machine:
//! - State definitions via the `State` trait
//! - Named transitions and the table that holds them
//! - Lifecycle callbacks
//! - Immutable, navigable history
//!
//! Nothing in this module mutates shared state; every "update" returns a
//! new value.

mod callbacks;
mod history;
mod state;
mod transition;

pub use callbacks::{Callbacks, StateCallback, TransitionCallback};
pub use history::History;
pub use state::State;
pub use transition::{Transition, TransitionTable};
