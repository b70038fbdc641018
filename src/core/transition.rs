//! Named transitions and the table that holds them.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named rule permitting movement from any of its origin states to a
/// single destination state.
///
/// The same state may appear as both an origin and the destination
/// (a self-loop).
///
/// # Example
///
/// ```rust
/// use waypoint::core::Transition;
///
/// let coin = Transition::new("coin", ["locked", "unlocked"], "unlocked");
///
/// assert!(coin.is_valid_from(&"locked"));
/// assert!(coin.leads_to(&"unlocked"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition<S> {
    /// Name of the transition, unique within a table
    pub name: String,
    /// States this transition may be taken from
    pub from: Vec<S>,
    /// State the transition leads to
    pub to: S,
}

impl<S: State> Transition<S> {
    /// Create a transition from a name, a set of origins and a destination.
    pub fn new<I>(name: impl Into<String>, from: I, to: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            name: name.into(),
            from: from.into_iter().collect(),
            to,
        }
    }

    /// Check if `state` is one of this transition's origins (pure)
    pub fn is_valid_from(&self, state: &S) -> bool {
        self.from.iter().any(|origin| origin == state)
    }

    /// Check if this transition's destination is `state` (pure)
    pub fn leads_to(&self, state: &S) -> bool {
        self.to == *state
    }
}

/// Mapping from transition name to transition.
///
/// A table is always built wholesale from a list; there is no incremental
/// merge. Later entries with a name already seen replace earlier ones.
/// Names are kept sorted, so every listing derived from the table comes out
/// in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S> {
    entries: BTreeMap<String, Transition<S>>,
}

impl<S> Default for TransitionTable<S> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<S: State> TransitionTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of transitions, last name wins.
    pub fn from_transitions<I>(transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        let entries = transitions
            .into_iter()
            .map(|transition| (transition.name.clone(), transition))
            .collect();
        Self { entries }
    }

    /// Look up a transition by name.
    pub fn get(&self, name: &str) -> Option<&Transition<S>> {
        self.entries.get(name)
    }

    /// Iterate over transitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition<S>> {
        self.entries.values()
    }

    /// Iterate over transitions whose origins include `state`.
    pub fn valid_from<'a>(&'a self, state: &'a S) -> impl Iterator<Item = &'a Transition<S>> {
        self.iter().filter(move |t| t.is_valid_from(state))
    }

    /// All transition names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Every state mentioned by any transition, each once, in first-seen
    /// order (origins before destination, transitions in name order).
    pub fn states(&self) -> Vec<&S> {
        let mut states: Vec<&S> = Vec::new();
        for transition in self.iter() {
            for state in transition.from.iter().chain(std::iter::once(&transition.to)) {
                if !states.contains(&state) {
                    states.push(state);
                }
            }
        }
        states
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: State> FromIterator<Transition<S>> for TransitionTable<S> {
    fn from_iter<I: IntoIterator<Item = Transition<S>>>(iter: I) -> Self {
        Self::from_transitions(iter)
    }
}
