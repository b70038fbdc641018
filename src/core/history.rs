//! Navigable history of visited states.
//!
//! History is immutable: every operation returns a new history and leaves
//! the receiver untouched.

use super::state::State;
use crate::machine::FsmError;

/// Ordered record of visited states plus a cursor marking the current one.
///
/// The cursor always indexes a valid entry: a history is never empty.
///
/// # Example
///
/// ```rust
/// use waypoint::core::History;
///
/// let history = History::new("locked")
///     .record("unlocked")
///     .record("locked");
///
/// assert_eq!(history.entries(), &["locked", "unlocked", "locked"]);
/// assert_eq!(history.cursor(), 2);
///
/// let rewound = history.back(2).unwrap();
/// assert_eq!(rewound.current(), &"locked");
/// assert_eq!(rewound.cursor(), 0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct History<S> {
    entries: Vec<S>,
    cursor: usize,
}

impl<S: State> History<S> {
    /// Create a history holding only the initial state.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// All recorded states, oldest first.
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &S {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history always holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry after the cursor.
    ///
    /// Used when the machine is reconfigured or advanced from a past
    /// position: the previously recorded future is abandoned.
    pub fn truncate_future(&self) -> Self {
        Self {
            entries: self.entries[..=self.cursor].to_vec(),
            cursor: self.cursor,
        }
    }

    /// Record a newly entered state after the cursor, returning a new
    /// history with the cursor on that state.
    pub fn record(&self, state: S) -> Self {
        let mut entries = self.entries[..=self.cursor].to_vec();
        entries.push(state);
        let cursor = entries.len() - 1;
        Self { entries, cursor }
    }

    /// Move the cursor `steps` entries back, or `None` if that would go
    /// before the first entry.
    pub fn back(&self, steps: usize) -> Option<Self> {
        let cursor = self.cursor.checked_sub(steps)?;
        Some(Self {
            entries: self.entries.clone(),
            cursor,
        })
    }

    /// Move the cursor `steps` entries forward, or `None` if that would go
    /// past the last entry.
    pub fn forward(&self, steps: usize) -> Option<Self> {
        let cursor = self
            .cursor
            .checked_add(steps)
            .filter(|&cursor| cursor < self.entries.len())?;
        Some(Self {
            entries: self.entries.clone(),
            cursor,
        })
    }

    /// Reset to a single entry holding the current state.
    pub fn cleared(&self) -> Self {
        Self::new(self.current().clone())
    }

    /// Keep only the last `limit` entries.
    ///
    /// The cursor is re-based onto the kept window. It is an error to ask
    /// for more entries than exist, or for a window that no longer contains
    /// the cursor.
    pub fn limit(&self, limit: usize) -> Result<Self, FsmError> {
        let len = self.entries.len();
        if limit > len {
            return Err(FsmError::HistoryLimitOutOfRange { limit, len });
        }

        let first_kept = len - limit;
        if self.cursor < first_kept {
            return Err(FsmError::CursorOutsideHistoryWindow {
                cursor: self.cursor,
                first_kept,
            });
        }

        Ok(Self {
            entries: self.entries[first_kept..].to_vec(),
            cursor: self.cursor - first_kept,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> History<&'static str> {
        History::new("a").record("b").record("c").record("d")
    }

    #[test]
    fn new_history_holds_initial_state() {
        let history = History::new("locked");

        assert_eq!(history.entries(), &["locked"]);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &"locked");
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new("a");
        let next = history.record("b");

        assert_eq!(history.len(), 1);
        assert_eq!(next.entries(), &["a", "b"]);
        assert_eq!(next.cursor(), 1);
    }

    #[test]
    fn record_from_the_past_discards_the_future() {
        let history = walk().back(2).unwrap().record("x");

        assert_eq!(history.entries(), &["a", "b", "x"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn back_and_forward_move_the_cursor() {
        let history = walk();

        let back = history.back(3).unwrap();
        assert_eq!(back.current(), &"a");

        let forward = back.forward(2).unwrap();
        assert_eq!(forward.current(), &"c");
        assert_eq!(forward.entries(), history.entries());
    }

    #[test]
    fn navigation_out_of_bounds_is_none() {
        let history = walk();

        assert!(history.back(4).is_none());
        assert!(history.forward(1).is_none());
        assert!(history.back(1).unwrap().forward(2).is_none());
        assert!(history.forward(usize::MAX).is_none());
    }

    #[test]
    fn truncate_future_keeps_entries_up_to_cursor() {
        let history = walk().back(1).unwrap().truncate_future();

        assert_eq!(history.entries(), &["a", "b", "c"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn cleared_keeps_only_current() {
        let history = walk().back(1).unwrap().cleared();

        assert_eq!(history.entries(), &["c"]);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn limit_keeps_last_entries_and_rebases_cursor() {
        let history = walk().limit(2).unwrap();

        assert_eq!(history.entries(), &["c", "d"]);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.current(), &"d");
    }

    #[test]
    fn limit_to_full_length_is_identity() {
        let history = walk();

        assert_eq!(history.limit(4).unwrap(), history);
    }

    #[test]
    fn limit_beyond_length_is_an_error() {
        let result = walk().limit(5);

        assert_eq!(
            result,
            Err(FsmError::HistoryLimitOutOfRange { limit: 5, len: 4 })
        );
    }

    #[test]
    fn limit_that_drops_the_cursor_is_an_error() {
        let result = walk().back(3).unwrap().limit(2);

        assert_eq!(
            result,
            Err(FsmError::CursorOutsideHistoryWindow {
                cursor: 0,
                first_kept: 2
            })
        );
    }

    #[test]
    fn limit_to_zero_is_an_error() {
        assert!(walk().limit(0).is_err());
    }
}
