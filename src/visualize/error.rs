//! Graph export errors.

use thiserror::Error;

/// Errors that can occur when writing or reading a graph description.
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// Writing the rendered graph failed
    #[error("Failed to write graph: {0}")]
    Io(#[from] std::io::Error),

    /// Graph text could not be parsed
    #[error("Invalid graph description at line {line}: {message}")]
    Parse { line: usize, message: String },
}
