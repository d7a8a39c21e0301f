//! Error types for the summark library.

use std::io;
use thiserror::Error;

/// Result type alias for summark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a summary.
///
/// Segmentation itself never fails: malformed text degrades into plain
/// paragraphs. Errors come from the fallible edges — file I/O, JSON
/// serialization, and option parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A date string could not be parsed as an ISO calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A consultation type string did not match any known option.
    #[error("Unknown consultation type: {0}")]
    UnknownConsultationType(String),
}
