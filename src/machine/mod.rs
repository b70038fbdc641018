//! The finite state machine engine.
//!
//! [`Fsm`] is a value: every operation that would change it returns a new
//! machine instead, so earlier snapshots stay valid and can be compared or
//! branched from.

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
