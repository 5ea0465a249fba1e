//! Layout errors and per-character warnings.

use std::fmt;

use crate::types::Scalar;

/// Fatal errors raised before any glyph is decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The input text is empty.
    EmptyText,
    /// The text height must be positive.
    InvalidTextHeight(Scalar),
    /// The flattening tolerance must be positive.
    InvalidMaxChord(Scalar),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyText => write!(f, "text cannot be empty"),
            Self::InvalidTextHeight(h) => {
                write!(f, "text height must be positive, got {h}")
            }
            Self::InvalidMaxChord(c) => {
                write!(f, "point density must be positive, got {c}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Recoverable per-character conditions.
///
/// Warnings never abort a run; they are collected on the produced
/// [`DrawingProgram`](crate::layout::DrawingProgram) for the caller to
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWarning {
    /// The character has no glyph in the font and was skipped.
    UnmappedCharacter(char),
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedCharacter(ch) => {
                write!(f, "character '{ch}' not found in font, skipping")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_names_the_character() {
        let w = LayoutWarning::UnmappedCharacter('Ω');
        assert!(format!("{w}").contains('Ω'));
    }
}
