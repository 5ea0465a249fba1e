//! RAPID module serialization.
//!
//! Formats a [`MotionProgram`] as an ABB RAPID `.mod` module: a header
//! comment block, one `CONST robtarget` declaration per pen-down point,
//! and a drawing procedure of `MoveL` motions. Pen-up moves target
//! `Offs(pN,0,0,z)`, the declared point raised by the z lift. The whole
//! module is built in memory; callers decide where to write it.

use std::fmt::{self, Write};

use scrawl_toolpath::types::Scalar;

use crate::instruction::{Instruction, MotionProgram, Quality};

/// Options controlling RAPID output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// RAPID module name. Default: `TextDrawing`.
    pub module_name: String,
    /// Drawing procedure name. Default: `DrawText`.
    pub procedure_name: String,
    /// Tool name on every move. Default: `tool0`.
    pub tool: String,
    /// Number of decimal places for coordinates. Default: 2.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_name: "TextDrawing".to_owned(),
            procedure_name: "DrawText".to_owned(),
            tool: "tool0".to_owned(),
            precision: 2,
        }
    }
}

/// Serialize a motion program as RAPID module text.
#[must_use]
pub fn render(program: &MotionProgram, opts: &RenderOptions) -> String {
    // Rough per-line estimate; declarations dominate.
    let mut out = String::with_capacity(program.stats.total_points * 96 + 1024);
    // Writing into a String cannot fail.
    let _ = write_module(&mut out, program, opts);
    out
}

fn write_module(out: &mut String, program: &MotionProgram, opts: &RenderOptions) -> fmt::Result {
    let total = program.strokes.len();

    writeln!(out, "MODULE {}", opts.module_name)?;
    writeln!(
        out,
        "    ! Generated RAPID code for drawing text: {}",
        program.text
    )?;
    writeln!(out, "    ! Font: {}", program.font_name)?;
    writeln!(
        out,
        "    ! Text size: {} mm",
        fmt_scalar(program.params.text_height, opts.precision)
    )?;
    writeln!(
        out,
        "    ! Point density: {} mm",
        fmt_scalar(program.params.max_chord, opts.precision)
    )?;
    writeln!(out, "    ! Total points: {}", program.stats.total_points)?;
    writeln!(
        out,
        "    ! Estimated time: {:.1} seconds",
        program.stats.estimated_secs
    )?;
    writeln!(out)?;

    // Target declarations, numbered across the whole program.
    writeln!(out, "    ! Define target positions")?;
    let mut index = 0usize;
    for (s, stroke) in program.strokes.iter().enumerate() {
        writeln!(out, "    ! Path {}/{total}", s + 1)?;
        for inst in &stroke.instructions {
            if inst.is_pen_down() {
                write_target(out, index, inst, opts.precision)?;
                index += 1;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "    PROC {}()", opts.procedure_name)?;
    writeln!(out, "        ! Draw text: {}", program.text)?;
    writeln!(out)?;

    let z = fmt_scalar(program.params.z_lift, opts.precision);
    let wobj = &program.params.workobject;
    let tool = &opts.tool;

    let mut index = 0usize;
    for (s, stroke) in program.strokes.iter().enumerate() {
        writeln!(out, "        ! Path {}/{total}", s + 1)?;

        // Index of the most recently referenced pen-down point; the
        // closing retract lifts from it.
        let mut last_used = index;
        let mut drawing = false;

        for (k, inst) in stroke.instructions.iter().enumerate() {
            match inst {
                Instruction::Retract { .. } if k == 0 => {
                    writeln!(out, "        ! Move to start of path (pen up)")?;
                    writeln!(
                        out,
                        "        MoveL Offs(p{index},0,0,{z}),v100,z10,{tool}\\WObj:={wobj};"
                    )?;
                }
                Instruction::Retract { .. } => {
                    writeln!(out, "        ! Lift pen")?;
                    writeln!(
                        out,
                        "        MoveL Offs(p{last_used},0,0,{z}),v50,z10,{tool}\\WObj:={wobj};"
                    )?;
                }
                Instruction::Plunge { .. } => {
                    writeln!(out, "        ! Lower pen")?;
                    writeln!(out, "        MoveL p{index},v50,fine,{tool}\\WObj:={wobj};")?;
                    last_used = index;
                    index += 1;
                }
                Instruction::Draw { quality, .. } => {
                    if !drawing {
                        writeln!(out, "        ! Draw path")?;
                        drawing = true;
                    }
                    let (speed, zone) = match quality {
                        Quality::Fine => ("v50", "fine"),
                        Quality::Continuous => ("v100", "z1"),
                    };
                    writeln!(
                        out,
                        "        MoveL p{index},{speed},{zone},{tool}\\WObj:={wobj};"
                    )?;
                    last_used = index;
                    index += 1;
                }
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "    ENDPROC")?;
    writeln!(out, "ENDMODULE")?;
    Ok(())
}

/// Write one `CONST robtarget` declaration.
///
/// Orientation is pen-straight-down (`[0,0,1,0]`), configuration
/// `[-1,0,-1,0]`, external axes unused (`9E9`). Negative zero is
/// normalized for cleaner output.
fn write_target(out: &mut String, index: usize, inst: &Instruction, precision: usize) -> fmt::Result {
    let p = inst.target();
    let x = if p.x == 0.0 { 0.0 } else { p.x };
    let y = if p.y == 0.0 { 0.0 } else { p.y };
    writeln!(
        out,
        "    CONST robtarget p{index}:=[[{x:.precision$},{y:.precision$},0],\
         [0,0,1,0],[-1,0,-1,0],[9E9,9E9,9E9,9E9,9E9,9E9]];"
    )
}

/// Format a scalar to the given precision, stripping trailing zeros.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::emit::emit;
    use scrawl_toolpath::layout::{DrawingProgram, ProgramParams};
    use scrawl_toolpath::types::{Point, Polyline};

    fn sample_program() -> MotionProgram {
        let triangle = Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
            Point::new(0.0, 0.0),
        ]);
        let segment = Polyline::from_points(vec![Point::new(20.0, 0.0), Point::new(30.0, 0.0)]);
        let drawing = DrawingProgram {
            text: "HI".to_owned(),
            font_name: "Test.ttf".to_owned(),
            params: ProgramParams::new(100.0),
            paths: vec![triangle, segment],
            warnings: Vec::new(),
        };
        emit(&drawing).expect("emit")
    }

    #[test]
    fn module_brackets_and_header() {
        let text = render(&sample_program(), &RenderOptions::default());
        assert!(text.starts_with("MODULE TextDrawing\n"));
        assert!(text.ends_with("ENDMODULE\n"));
        assert!(text.contains("! Generated RAPID code for drawing text: HI"));
        assert!(text.contains("! Font: Test.ttf"));
        assert!(text.contains("! Text size: 100 mm"));
        assert!(text.contains("! Point density: 2 mm"));
        assert!(text.contains("! Total points: 6"));
        assert!(text.contains("! Estimated time: 0.9 seconds"));
        assert!(text.contains("PROC DrawText()"));
        assert!(text.contains("    ENDPROC"));
    }

    #[test]
    fn one_robtarget_per_pen_down_point() {
        let program = sample_program();
        let text = render(&program, &RenderOptions::default());
        let declared = text.matches("CONST robtarget").count();
        assert_eq!(declared, program.stats.total_points);
        // Declarations are numbered consecutively from p0.
        for i in 0..program.stats.total_points {
            assert!(
                text.contains(&format!("CONST robtarget p{i}:=")),
                "missing p{i}"
            );
        }
    }

    #[test]
    fn stroke_motion_sequence() {
        let text = render(&sample_program(), &RenderOptions::default());

        // First stroke: approach p0, plunge p0, blended draws, fine last
        // draw, lift from p3.
        assert!(text.contains("MoveL Offs(p0,0,0,10),v100,z10,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL p0,v50,fine,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL p1,v100,z1,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL p2,v100,z1,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL p3,v50,fine,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL Offs(p3,0,0,10),v50,z10,tool0\\WObj:=wobj0;"));

        // Second stroke: two points, the only draw stops fine.
        assert!(text.contains("MoveL Offs(p4,0,0,10),v100,z10,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL p5,v50,fine,tool0\\WObj:=wobj0;"));
        assert!(text.contains("MoveL Offs(p5,0,0,10),v50,z10,tool0\\WObj:=wobj0;"));
    }

    #[test]
    fn move_count_matches_instruction_count() {
        let program = sample_program();
        let text = render(&program, &RenderOptions::default());
        let expected: usize = program.strokes.iter().map(|s| s.instructions.len()).sum();
        assert_eq!(text.matches("MoveL ").count(), expected);
    }

    #[test]
    fn workobject_and_tool_are_configurable() {
        let mut program = sample_program();
        program.params.workobject = "wobjTable".to_owned();
        let opts = RenderOptions {
            tool: "penTool".to_owned(),
            ..RenderOptions::default()
        };
        let text = render(&program, &opts);

        assert!(!text.contains("wobj0"));
        assert!(!text.contains("tool0"));
        let moves = text.matches("MoveL ").count();
        assert_eq!(text.matches("\\WObj:=wobjTable;").count(), moves);
        assert_eq!(text.matches("penTool").count(), moves);
    }

    #[test]
    fn coordinates_respect_precision() {
        let path = Polyline::from_points(vec![Point::new(1.234, 5.678), Point::new(-0.0, 2.0)]);
        let drawing = DrawingProgram {
            text: "x".to_owned(),
            font_name: "Test.ttf".to_owned(),
            params: ProgramParams::new(10.0),
            paths: vec![path],
            warnings: Vec::new(),
        };
        let motion = emit(&drawing).expect("emit");
        let text = render(&motion, &RenderOptions::default());

        assert!(text.contains("[[1.23,5.68,0]"));
        // Negative zero is normalized.
        assert!(text.contains("[[0.00,2.00,0]"));
        assert!(!text.contains("-0.00"));
    }
}
