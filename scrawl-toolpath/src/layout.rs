//! Text layout: characters to positioned, flattened contours.
//!
//! Walks the input string in order, decodes each character's outline
//! through the font, and accumulates flattened contours with a running
//! horizontal advance. The output is the [`DrawingProgram`] consumed by
//! the motion program emitter.

use scrawl_fonts::ResolvedFont;

use crate::builder::PathBuilder;
use crate::error::{LayoutError, LayoutWarning};
use crate::types::{Polyline, Scalar};

/// Default flattening tolerance (maximum chord length), millimeters.
pub const DEFAULT_MAX_CHORD: Scalar = 2.0;

/// Default pen-lift z offset, millimeters.
pub const DEFAULT_Z_LIFT: Scalar = 10.0;

/// Default workobject name for the generated RAPID code.
pub const DEFAULT_WORKOBJECT: &str = "wobj0";

/// Generation parameters for one drawing program.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramParams {
    /// Text height in millimeters. Must be positive.
    pub text_height: Scalar,
    /// Maximum chord length for curve flattening, millimeters. Must be
    /// positive; smaller values produce more points.
    pub max_chord: Scalar,
    /// WorkObject (reference frame) name.
    pub workobject: String,
    /// Z offset for pen-up moves, millimeters.
    pub z_lift: Scalar,
}

impl ProgramParams {
    /// Parameters for the given text height with all defaults.
    #[must_use]
    pub fn new(text_height: Scalar) -> Self {
        Self {
            text_height,
            max_chord: DEFAULT_MAX_CHORD,
            workobject: DEFAULT_WORKOBJECT.to_owned(),
            z_lift: DEFAULT_Z_LIFT,
        }
    }
}

/// The ordered contours for an entire text string, plus the metadata the
/// emitter needs.
///
/// Paths are visited in character order, then contour order within a
/// character (the font's authored order, typically outer before inner,
/// but that is a font convention, not a guarantee). The program owns its
/// paths; they are never mutated after layout.
#[derive(Debug, Clone)]
pub struct DrawingProgram {
    /// The source text.
    pub text: String,
    /// Display name of the font (for output headers).
    pub font_name: String,
    /// Generation parameters.
    pub params: ProgramParams,
    /// All contours, one pen-down stroke each.
    pub paths: Vec<Polyline>,
    /// Per-character conditions encountered during layout.
    pub warnings: Vec<LayoutWarning>,
}

impl DrawingProgram {
    /// Total point count across all paths.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.paths.iter().map(Polyline::len).sum()
    }
}

/// Lay out a text string as flattened contours in physical units.
///
/// Characters with no glyph in the font are skipped with a warning and
/// do not advance the layout position (so mixed mapped/unmapped strings
/// can visually overlap, a documented limitation of the original
/// generator, preserved here). Characters whose glyph has no outline
/// (such as the space) contribute no contours but do advance.
///
/// # Errors
///
/// - [`LayoutError::EmptyText`] if `text` is empty.
/// - [`LayoutError::InvalidTextHeight`] / [`LayoutError::InvalidMaxChord`]
///   if a parameter is not positive.
pub fn layout_text(
    font: &ResolvedFont,
    text: &str,
    params: ProgramParams,
) -> Result<DrawingProgram, LayoutError> {
    if text.is_empty() {
        return Err(LayoutError::EmptyText);
    }
    if !params.text_height.is_finite() || params.text_height <= 0.0 {
        return Err(LayoutError::InvalidTextHeight(params.text_height));
    }
    if !params.max_chord.is_finite() || params.max_chord <= 0.0 {
        return Err(LayoutError::InvalidMaxChord(params.max_chord));
    }

    let scale = font.data.scale(params.text_height);
    let mut builder = PathBuilder::new(scale, params.max_chord);
    let mut warnings = Vec::new();

    for ch in text.chars() {
        let Some(gid) = font.data.glyph_id(ch) else {
            warnings.push(LayoutWarning::UnmappedCharacter(ch));
            continue;
        };

        // Glyphs without an outline (space) still advance below.
        let _ = font.data.outline(gid, &mut builder);

        let advance = font.data.advance_width(gid).unwrap_or(0);
        builder.advance(Scalar::from(advance));
    }

    Ok(DrawingProgram {
        text: text.to_owned(),
        font_name: font.name.clone(),
        params,
        paths: builder.finish(),
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
