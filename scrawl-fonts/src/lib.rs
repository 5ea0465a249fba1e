//! Font loading, metrics, and glyph outline extraction for `scrawl`.
//!
//! This crate wraps `ttf-parser` to provide OpenType/TrueType font support.
//! It is intentionally independent of `scrawl-toolpath`: all types are
//! plain `f64`/`u16` values in font design units. Scaling into physical
//! drawing units happens in the consuming crates.

pub mod data;
pub mod embedded;
pub mod error;
pub mod metrics;
pub mod outline;
pub mod resolve;

pub use data::FontData;
pub use error::FontError;
pub use metrics::TextMetrics;
pub use outline::OutlineSink;
pub use resolve::{resolve, ResolvedFont};
