//! Waypoint: a pure functional finite state machine
//!
//! A machine is a value holding a current state, a table of named
//! transitions, four lifecycle callbacks and an optional history of visited
//! states. Every operation returns a new machine; the old one stays valid,
//! so snapshots can be kept, compared and branched from.
//!
//! # Core Concepts
//!
//! - **State**: any comparable, named value via the `State` trait
//! - **Transition**: a named rule from a set of origin states to one
//!   destination
//! - **Callbacks**: leave, before, after and enter hooks fired around each
//!   transition
//! - **History**: visited states with a cursor for back and forward
//!   navigation
//!
//! Rejected transitions and out-of-range history moves are silent no-ops.
//!
//! # Example
//!
//! ```rust
//! use waypoint::{Fsm, Transition};
//!
//! let fsm = Fsm::with_history("locked").set_transitions(vec![
//!     Transition::new("coin", ["locked", "unlocked"], "unlocked"),
//!     Transition::new("push", ["locked", "unlocked"], "locked"),
//! ]);
//!
//! let fsm = fsm.execute("coin").execute("coin");
//! assert!(fsm.is(&"unlocked"));
//! assert_eq!(fsm.history(), &["locked", "unlocked", "unlocked"]);
//!
//! let fsm = fsm.clear_history().execute("push").execute("push");
//! let fsm = fsm.history_back(2);
//! assert!(fsm.is(&"unlocked"));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod visualize;

// Re-export commonly used types
pub use crate::core::{Callbacks, State, Transition};
pub use crate::machine::{Fsm, FsmError};
