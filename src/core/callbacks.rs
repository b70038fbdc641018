//! Lifecycle callbacks fired around each executed transition.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Callback receiving a transition name.
pub type TransitionCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback receiving a state.
pub type StateCallback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// The four lifecycle hooks of a machine.
///
/// Every slot defaults to a no-op and can be assigned independently. Hooks
/// are plain data: the set is swapped as a whole on the machine with
/// [`Fsm::set_callbacks`](crate::machine::Fsm::set_callbacks).
///
/// On a successful transition they fire in this order:
/// `on_leave_state`, `on_before_transition`, `on_after_transition`,
/// `on_enter_state`. None of them can veto the transition.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use waypoint::core::Callbacks;
///
/// let coins = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&coins);
///
/// let callbacks: Callbacks<&'static str> = Callbacks::new()
///     .on_after_transition(move |transition| {
///         if transition == "coin" {
///             counter.fetch_add(1, Ordering::SeqCst);
///         }
///     });
/// ```
pub struct Callbacks<S> {
    before_transition: TransitionCallback,
    after_transition: TransitionCallback,
    enter_state: StateCallback<S>,
    leave_state: StateCallback<S>,
}

impl<S: State> Callbacks<S> {
    /// Create a set of no-op callbacks.
    pub fn new() -> Self {
        Self {
            before_transition: Arc::new(|_: &str| {}),
            after_transition: Arc::new(|_: &str| {}),
            enter_state: Arc::new(|_: &S| {}),
            leave_state: Arc::new(|_: &S| {}),
        }
    }

    /// Set the hook run before a transition, with the transition name.
    pub fn on_before_transition<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.before_transition = Arc::new(callback);
        self
    }

    /// Set the hook run after a transition, with the transition name.
    pub fn on_after_transition<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.after_transition = Arc::new(callback);
        self
    }

    /// Set the hook run when a state is entered, with the new state.
    pub fn on_enter_state<F>(mut self, callback: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.enter_state = Arc::new(callback);
        self
    }

    /// Set the hook run when a state is left, with the old state.
    pub fn on_leave_state<F>(mut self, callback: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.leave_state = Arc::new(callback);
        self
    }

    /// Fire all four hooks in lifecycle order.
    pub(crate) fn fire(&self, transition: &str, from: &S, to: &S) {
        (self.leave_state)(from);
        (self.before_transition)(transition);
        (self.after_transition)(transition);
        (self.enter_state)(to);
    }
}

impl<S: State> Default for Callbacks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Callbacks<S> {
    fn clone(&self) -> Self {
        Self {
            before_transition: Arc::clone(&self.before_transition),
            after_transition: Arc::clone(&self.after_transition),
            enter_state: Arc::clone(&self.enter_state),
            leave_state: Arc::clone(&self.leave_state),
        }
    }
}

impl<S> fmt::Debug for Callbacks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}
