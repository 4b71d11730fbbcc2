//! Error types for the graphkit CLI.

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Input contained no node count line.
    #[error("Input is empty: expected a node count on the first data line")]
    EmptyInput,

    /// Error reported by a graph algorithm.
    #[error(transparent)]
    Graph(#[from] graphkit::GraphError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        CliError::Parse {
            line,
            message: message.into(),
        }
    }
}
