//! Font resolution and parsing errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur when resolving, reading, or parsing fonts.
///
/// All of these are fatal to a generation run; per-character conditions
/// (a codepoint with no glyph) are not errors at this level.
#[derive(Debug)]
pub enum FontError {
    /// The requested font is neither a bundled font name nor an existing
    /// file path.
    NotFound(String),
    /// The font file exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The font data could not be parsed.
    Parse(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(
                f,
                "font not found: {name} (use a bundled font: {}, or a path to a .ttf/.otf file)",
                crate::embedded::bundled_names().join(", ")
            ),
            Self::Io { path, source } => {
                write!(f, "cannot read font file {}: {source}", path.display())
            }
            Self::Parse(msg) => write!(f, "font parse error: {msg}"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
