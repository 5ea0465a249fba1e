//! Font resolution: bundled names and filesystem paths.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::data::FontData;
use crate::embedded;
use crate::error::FontError;

/// A loaded font together with its display name.
///
/// The name is the original file name (`"DejaVuSans.ttf"` for bundled
/// fonts, the path's file name for custom fonts) and appears in the
/// generated program's header comments.
#[derive(Debug, Clone)]
pub struct ResolvedFont {
    pub name: String,
    pub data: FontData,
}

/// Resolve a font specifier to loaded font data.
///
/// The specifier is either a bundled font name (`sans`, `bold`, `mono`,
/// matched case-insensitively) or a path to a `.ttf`/`.otf` file.
///
/// # Errors
///
/// - [`FontError::NotFound`] if the specifier is not a bundled name and
///   no file exists at that path.
/// - [`FontError::Io`] if the file exists but cannot be read.
/// - [`FontError::Parse`] if the data is not a valid font.
pub fn resolve(spec: &str) -> Result<ResolvedFont, FontError> {
    if let Some(bundled) = embedded::find(spec) {
        return Ok(ResolvedFont {
            name: bundled.file_name.to_owned(),
            data: bundled.load()?,
        });
    }

    let path = Path::new(spec);
    if !path.exists() {
        return Err(FontError::NotFound(spec.to_owned()));
    }

    let bytes = fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = FontData::from_bytes(Arc::from(bytes.into_boxed_slice()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(spec)
        .to_owned();

    Ok(ResolvedFont { name, data })
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    #[test]
    fn resolves_bundled_names() {
        let font = resolve("sans").expect("sans resolves");
        assert_eq!(font.name, "DejaVuSans.ttf");
        assert!(font.data.has_glyph('A'));
    }

    #[test]
    fn bundled_lookup_is_case_insensitive() {
        let font = resolve("BOLD").expect("BOLD resolves");
        assert_eq!(font.name, "DejaVuSans-Bold.ttf");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = resolve("no-such-font").expect_err("should fail");
        assert!(matches!(err, FontError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = resolve("/no/such/dir/font.ttf").expect_err("should fail");
        assert!(matches!(err, FontError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn custom_path_resolves_with_file_name() {
        // Use one of the crate's own font files as a "custom" font.
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fonts/DejaVuSansMono.ttf");
        let font = resolve(path).expect("path resolves");
        assert_eq!(font.name, "DejaVuSansMono.ttf");
        assert!(font.data.has_glyph('A'));
    }

    #[test]
    fn non_font_file_fails_to_parse() {
        // The crate manifest is a file that exists but is not a font.
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let err = resolve(path).expect_err("should fail");
        assert!(matches!(err, FontError::Parse(_)), "got {err:?}");
    }
}
