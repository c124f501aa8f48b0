//! Error types for curriculum-core.

use thiserror::Error;

/// Result type alias using CorpusError.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while building a corpus.
///
/// Running out of selectable sentences is not an error: the selection
/// loop signals it by returning `None` and the driver stops normally.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus contains no usable sentences")]
    Empty,
}
