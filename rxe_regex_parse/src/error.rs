use thiserror::Error;

/// The reasons a pattern can be rejected by [`crate::parse`].
///
/// Positions are zero-based character offsets into the pattern as the caller
/// passed it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected alphanumeric, got `{found}` at #{position}")]
    UnexpectedChar {
        found: char,
        position: usize,
    },

    #[error("expected alphanumeric, got end of pattern at #{position}")]
    UnexpectedEnd {
        position: usize,
    },

    #[error("expected `)` at #{position} to close the group opened at #{open}")]
    UnclosedGroup {
        open: usize,
        position: usize,
    },

    #[error("unexpected `{found}` at #{position} after a complete expression")]
    TrailingInput {
        found: char,
        position: usize,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedChar{ position, .. }
            | ParseError::UnexpectedEnd{ position }
            | ParseError::UnclosedGroup{ position, .. }
            | ParseError::TrailingInput{ position, .. } => *position,
        }
    }
}
