//! Text metric types.

/// Aggregate metrics for a rendered text string at a specific text height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Total advance width in physical units (sum of character advances).
    pub width: f64,
    /// Maximum ascender height in physical units (positive, above baseline).
    pub height: f64,
    /// Maximum descender depth in physical units (positive, below baseline).
    pub depth: f64,
}
