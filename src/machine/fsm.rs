//! Finite state machine with lifecycle callbacks and optional history.

use crate::core::{Callbacks, History, State, Transition, TransitionTable};
use crate::machine::FsmError;
use std::sync::Arc;
use tracing::{debug, trace};

/// A finite state machine value.
///
/// Holds the current state, the transition table, four lifecycle callbacks
/// and, when enabled, a navigable history of visited states.
///
/// Every configuring or transitioning method borrows the machine and
/// returns a new one. The table and callbacks are shared between snapshots
/// behind `Arc`s, so deriving a machine is cheap and never disturbs the
/// one it came from.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Transition;
/// use waypoint::machine::Fsm;
///
/// let fsm = Fsm::new("locked").set_transitions(vec![
///     Transition::new("coin", ["locked", "unlocked"], "unlocked"),
///     Transition::new("push", ["locked", "unlocked"], "locked"),
/// ]);
///
/// let next = fsm.execute("coin");
///
/// assert!(next.is(&"unlocked"));
/// assert!(fsm.is(&"locked")); // original unchanged
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S: State> {
    current: S,
    transitions: Arc<TransitionTable<S>>,
    callbacks: Callbacks<S>,
    history: Option<History<S>>,
}

impl<S: State> Fsm<S> {
    /// Create a machine in `initial` with no transitions and no-op
    /// callbacks. When `enable_history` is set, history starts as
    /// `[initial]`.
    pub fn generate(initial: S, enable_history: bool) -> Self {
        let history = enable_history.then(|| History::new(initial.clone()));
        Self {
            current: initial,
            transitions: Arc::new(TransitionTable::new()),
            callbacks: Callbacks::new(),
            history,
        }
    }

    /// Create a machine without history tracking.
    pub fn new(initial: S) -> Self {
        Self::generate(initial, false)
    }

    /// Create a machine that tracks history.
    pub fn with_history(initial: S) -> Self {
        Self::generate(initial, true)
    }

    /// Get current state (pure)
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in `state` (pure)
    pub fn is(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Check if `state` is reachable from the current state in one step.
    ///
    /// This scans every transition regardless of its name: it answers
    /// "does any transition lead from here to `state`", not whether a
    /// particular named transition does.
    pub fn can(&self, state: &S) -> bool {
        self.transitions
            .iter()
            .any(|t| t.leads_to(state) && t.is_valid_from(&self.current))
    }

    /// Check if `state` is not reachable from the current state in one
    /// step. Always the negation of [`can`](Self::can).
    pub fn cannot(&self, state: &S) -> bool {
        self.transitions
            .iter()
            .all(|t| !t.leads_to(state) || !t.is_valid_from(&self.current))
    }

    /// Names of the transitions that can be taken from the current state,
    /// sorted by name.
    pub fn valid_transitions(&self) -> Vec<&str> {
        self.transitions
            .valid_from(&self.current)
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Names of every registered transition, sorted by name.
    pub fn all_transitions(&self) -> Vec<&str> {
        self.transitions.names()
    }

    /// Every state mentioned by any transition, each listed once.
    pub fn all_states(&self) -> Vec<&S> {
        self.transitions.states()
    }

    /// Look up a registered transition by name.
    pub fn transition(&self, name: &str) -> Option<&Transition<S>> {
        self.transitions.get(name)
    }

    /// The transition table.
    pub fn transitions(&self) -> &TransitionTable<S> {
        &self.transitions
    }

    /// Whether this machine records history.
    pub fn is_tracking_history(&self) -> bool {
        self.history.is_some()
    }

    /// Visited states, oldest first. Empty when history is disabled.
    pub fn history(&self) -> &[S] {
        match &self.history {
            Some(history) => history.entries(),
            None => &[],
        }
    }

    /// Index of the current state in [`history`](Self::history); zero when
    /// history is disabled.
    pub fn cursor(&self) -> usize {
        self.history.as_ref().map_or(0, History::cursor)
    }

    /// Replace the transition table with one built from `transitions`.
    ///
    /// Duplicate names collapse to the last occurrence. The current state
    /// and callbacks are kept. History entries after the cursor are
    /// discarded.
    pub fn set_transitions<I>(&self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        let table = TransitionTable::from_transitions(transitions);
        debug!(
            state = self.current.name(),
            transitions = table.len(),
            "replaced transition table"
        );

        Self {
            current: self.current.clone(),
            transitions: Arc::new(table),
            callbacks: self.callbacks.clone(),
            history: self.branched_history(),
        }
    }

    /// Replace all four lifecycle callbacks at once.
    ///
    /// History entries after the cursor are discarded.
    pub fn set_callbacks(&self, callbacks: Callbacks<S>) -> Self {
        debug!(state = self.current.name(), "replaced callbacks");

        Self {
            current: self.current.clone(),
            transitions: Arc::clone(&self.transitions),
            callbacks,
            history: self.branched_history(),
        }
    }

    /// Execute the transition named `transition`.
    ///
    /// If the transition is unknown or not valid from the current state,
    /// the machine is returned unchanged and no callback fires. Otherwise
    /// the leave, before, after and enter callbacks fire in that order and
    /// the returned machine is in the transition's destination.
    ///
    /// Callbacks must not execute transitions on this same machine.
    pub fn execute(&self, transition: &str) -> Self {
        let rule = self
            .transitions
            .valid_from(&self.current)
            .find(|t| t.name == transition);

        let Some(rule) = rule else {
            debug!(
                transition,
                state = self.current.name(),
                "transition not valid from current state"
            );
            return self.clone();
        };

        let destination = rule.to.clone();
        self.callbacks.fire(transition, &self.current, &destination);

        debug!(
            transition,
            from = self.current.name(),
            to = destination.name(),
            "executed transition"
        );

        Self {
            history: self.history.as_ref().map(|h| h.record(destination.clone())),
            current: destination,
            transitions: Arc::clone(&self.transitions),
            callbacks: self.callbacks.clone(),
        }
    }

    /// Reset history to just the current state.
    ///
    /// Does nothing when history is disabled.
    pub fn clear_history(&self) -> Self {
        self.with_history_state(self.history.as_ref().map(History::cleared))
    }

    /// Step back `steps` entries in history without firing callbacks.
    ///
    /// Returns the machine unchanged when history is disabled or the step
    /// would go before the first entry.
    pub fn history_back(&self, steps: usize) -> Self {
        match self.history.as_ref().and_then(|h| h.back(steps)) {
            Some(history) => self.teleport(history),
            None => {
                debug!(steps, cursor = self.cursor(), "history back out of range");
                self.clone()
            }
        }
    }

    /// Step forward `steps` entries in history without firing callbacks.
    ///
    /// Returns the machine unchanged when history is disabled or the step
    /// would go past the last entry.
    pub fn history_forward(&self, steps: usize) -> Self {
        match self.history.as_ref().and_then(|h| h.forward(steps)) {
            Some(history) => self.teleport(history),
            None => {
                debug!(steps, cursor = self.cursor(), "history forward out of range");
                self.clone()
            }
        }
    }

    /// Keep only the last `limit` history entries.
    ///
    /// The current state must stay in history, so this fails with
    /// [`FsmError::HistoryLimitOutOfRange`] when `limit` exceeds the history
    /// length, and with [`FsmError::CursorOutsideHistoryWindow`] when the
    /// cursor sits before the kept window. With history enabled the history
    /// is never empty, so `limit == 0` always fails. With history disabled
    /// the length is zero, so only a limit of zero succeeds.
    pub fn limit_history(&self, limit: usize) -> Result<Self, FsmError> {
        match &self.history {
            Some(history) => Ok(self.with_history_state(Some(history.limit(limit)?))),
            None if limit == 0 => Ok(self.clone()),
            None => Err(FsmError::HistoryLimitOutOfRange { limit, len: 0 }),
        }
    }

    fn branched_history(&self) -> Option<History<S>> {
        self.history.as_ref().map(|history| {
            if history.cursor() + 1 < history.len() {
                trace!(
                    cursor = history.cursor(),
                    dropped = history.len() - history.cursor() - 1,
                    "discarding history after cursor"
                );
            }
            history.truncate_future()
        })
    }

    fn teleport(&self, history: History<S>) -> Self {
        debug!(
            from = self.current.name(),
            to = history.current().name(),
            cursor = history.cursor(),
            "moved through history"
        );
        Self {
            current: history.current().clone(),
            transitions: Arc::clone(&self.transitions),
            callbacks: self.callbacks.clone(),
            history: Some(history),
        }
    }

    fn with_history_state(&self, history: Option<History<S>>) -> Self {
        Self {
            current: self.current.clone(),
            transitions: Arc::clone(&self.transitions),
            callbacks: self.callbacks.clone(),
            history,
        }
    }
}
