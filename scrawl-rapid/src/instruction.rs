//! Abstract motion instructions.

use scrawl_toolpath::layout::ProgramParams;
use scrawl_toolpath::types::{Point, Scalar};

/// How precisely a move must reach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Stop exactly at the target (RAPID `fine`). Used where corner
    /// accuracy matters: pen contact and stroke endpoints.
    Fine,
    /// Blend smoothly into the next move (RAPID zone data). Faster,
    /// rounds corners slightly; used mid-stroke.
    Continuous,
}

/// One linear motion of the pen.
///
/// Targets are in the drawing plane (z = 0); retract moves are offset
/// upward by the program's z lift at serialization time. Instructions
/// own their coordinates; nothing aliases back into the drawing
/// program's paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Pen-up travel to a point, at the lift height.
    Retract { target: Point },
    /// Lower the pen onto the surface at the target.
    Plunge { target: Point },
    /// Pen-down straight line to the target.
    Draw { target: Point, quality: Quality },
}

impl Instruction {
    /// Whether this instruction touches the drawing surface.
    #[must_use]
    pub const fn is_pen_down(&self) -> bool {
        matches!(self, Self::Plunge { .. } | Self::Draw { .. })
    }

    /// The target point in the drawing plane.
    #[must_use]
    pub const fn target(&self) -> Point {
        match self {
            Self::Retract { target } | Self::Plunge { target } | Self::Draw { target, .. } => {
                *target
            }
        }
    }
}

/// The instruction sequence for one pen-down stroke: approach, plunge,
/// draws, retract.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub instructions: Vec<Instruction>,
}

/// Summary statistics for a motion program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramStats {
    /// Pen-down points across all strokes.
    pub total_points: usize,
    /// Number of strokes (paths).
    pub total_paths: usize,
    /// Rough execution estimate in seconds (linear per-point model, not
    /// a kinematic simulation).
    pub estimated_secs: Scalar,
}

/// A complete, ready-to-serialize motion program.
#[derive(Debug, Clone)]
pub struct MotionProgram {
    /// The source text (header commentary).
    pub text: String,
    /// Font display name (header commentary).
    pub font_name: String,
    /// Generation parameters carried over from layout.
    pub params: ProgramParams,
    /// One instruction sequence per path, in path order.
    pub strokes: Vec<Stroke>,
    /// Summary statistics.
    pub stats: ProgramStats,
}
