//! Emission errors.

use std::fmt;

/// Errors raised while turning a drawing program into motion
/// instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitError {
    /// The drawing program contains no paths (for example, every
    /// character of the text was unmapped). Nothing is written.
    EmptyProgram,
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProgram => {
                write!(f, "no paths generated from text; check font and text")
            }
        }
    }
}

impl std::error::Error for EmitError {}
