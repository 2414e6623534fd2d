//! Error types for reading bit rows

use thiserror::Error;

/// Errors that can occur while turning a text source into a batch of rows
#[derive(Debug, Error)]
pub enum InputError {
    /// Source could not be opened or read
    #[error("{source_name} does not appear to exist or cannot be read: {source}")]
    SourceUnavailable {
        source_name: String,
        source: std::io::Error,
    },

    /// A line does not have the width the requested operation needs
    #[error("line {line} is of length {length}, not {expected}")]
    LengthMismatch {
        line: usize,
        length: usize,
        expected: usize,
    },

    /// A line contains something other than `0` or `1`
    #[error("invalid character {character} at line {line}")]
    InvalidCharacter { character: char, line: usize },
}

impl InputError {
    /// 1-based line the error points at, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::SourceUnavailable { .. } => None,
            InputError::LengthMismatch { line, .. } | InputError::InvalidCharacter { line, .. } => {
                Some(*line)
            }
        }
    }
}

/// Type alias for input results
pub type InputResult<T> = Result<T, InputError>;
