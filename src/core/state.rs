//! Core State trait for machine states.
//!
//! States are opaque, comparable identifiers. They have no lifecycle of
//! their own: they exist as values referenced by transitions and by the
//! machine's current-state field.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state only needs to be comparable and to have a
/// stable name, which is used for logging and graph export.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history and into derived machines
/// - `PartialEq`: states must be comparable for transition lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send + Sync`: machines holding states can move between threads
///
/// `String` and `&'static str` implement this trait directly; enums can use
/// the [`state_enum!`](crate::state_enum) macro.
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("locked".name(), "locked");
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Get the state's name for display, logging and graph export.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
