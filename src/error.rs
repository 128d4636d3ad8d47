//! Errors surfaced by the library's fallible entry points
use thiserror::Error;

use tiny_font::FontError;

#[derive(Error, Debug)]
pub enum WrapError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Invalid config {path}: {message}")]
    Config { path: String, message: String },
}
