//! Machine errors.

use thiserror::Error;

/// Contract violations raised by machine operations.
///
/// Rejected transitions and out-of-range history navigation are not errors;
/// they leave the machine unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("History limit {limit} exceeds history length {len}")]
    HistoryLimitOutOfRange { limit: usize, len: usize },

    #[error("History cursor {cursor} falls before the kept window starting at {first_kept}")]
    CursorOutsideHistoryWindow { cursor: usize, first_kept: usize },
}
