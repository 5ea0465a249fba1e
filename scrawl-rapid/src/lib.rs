//! ABB RAPID motion program emitter for `scrawl`.
//!
//! Converts a [`DrawingProgram`](scrawl_toolpath::DrawingProgram) into an
//! ordered list of abstract motion instructions (retract, plunge, draw)
//! and serializes it as a RAPID module (`.mod`) a robot controller can
//! execute. The instruction list is the contract; the textual grammar is
//! a thin formatter over it.

pub mod emit;
pub mod error;
pub mod instruction;
pub mod module;

pub use emit::{emit, SECONDS_PER_POINT};
pub use error::EmitError;
pub use instruction::{Instruction, MotionProgram, ProgramStats, Quality, Stroke};
pub use module::{render, RenderOptions};
