//! Geometry and text layout for `scrawl`.
//!
//! Turns a text string into an ordered list of flat polylines in physical
//! drawing units (millimeters): glyph outlines are decoded through
//! `scrawl-fonts`, Bezier curves are flattened at a bounded chord
//! tolerance, and each glyph is positioned by its cumulative advance
//! width and scaled uniformly by `text_height / units_per_em`.

pub mod bezier;
pub mod builder;
pub mod error;
pub mod layout;
pub mod types;

pub use builder::PathBuilder;
pub use error::{LayoutError, LayoutWarning};
pub use layout::{layout_text, DrawingProgram, ProgramParams};
pub use types::{Point, Polyline, Scalar, EPSILON};
