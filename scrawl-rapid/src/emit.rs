//! Drawing program to motion instructions.

use scrawl_toolpath::layout::DrawingProgram;
use scrawl_toolpath::types::{Polyline, Scalar};

use crate::error::EmitError;
use crate::instruction::{Instruction, MotionProgram, ProgramStats, Quality, Stroke};

/// Per-point execution estimate, seconds. A crude linear model.
pub const SECONDS_PER_POINT: Scalar = 0.15;

/// Convert a drawing program into an ordered motion program.
///
/// Each path becomes one stroke: a pen-up approach to the first point,
/// a plunge, a draw move per subsequent point (blended corners except
/// the final point, which stops precisely), and a pen-up retract from
/// the last point. Paths keep their layout order.
///
/// # Errors
///
/// Returns [`EmitError::EmptyProgram`] when the program has no paths,
/// the only hard failure at this stage.
pub fn emit(program: &DrawingProgram) -> Result<MotionProgram, EmitError> {
    let strokes: Vec<Stroke> = program.paths.iter().filter_map(emit_stroke).collect();

    if strokes.is_empty() {
        return Err(EmitError::EmptyProgram);
    }

    let total_points = program.total_points();
    #[expect(clippy::cast_precision_loss, reason = "point counts are far below 2^52")]
    let estimated_secs = total_points as Scalar * SECONDS_PER_POINT;

    Ok(MotionProgram {
        text: program.text.clone(),
        font_name: program.font_name.clone(),
        params: program.params.clone(),
        stats: ProgramStats {
            total_points,
            total_paths: strokes.len(),
            estimated_secs,
        },
        strokes,
    })
}

/// Instruction sequence for one path; `None` for an empty path.
fn emit_stroke(path: &Polyline) -> Option<Stroke> {
    let first = path.first()?;
    let last = path.last()?;

    let mut instructions = Vec::with_capacity(path.len() + 3);
    instructions.push(Instruction::Retract { target: first });
    instructions.push(Instruction::Plunge { target: first });

    let n = path.len();
    for (i, &target) in path.points.iter().enumerate().skip(1) {
        let quality = if i == n - 1 {
            Quality::Fine
        } else {
            Quality::Continuous
        };
        instructions.push(Instruction::Draw { target, quality });
    }

    instructions.push(Instruction::Retract { target: last });
    Some(Stroke { instructions })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
