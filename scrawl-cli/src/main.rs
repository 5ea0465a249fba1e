//! `scrawl` CLI: generate ABB RAPID code for drawing text with a robot.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use scrawl_fonts::resolve;
use scrawl_rapid::{emit, render, RenderOptions};
use scrawl_toolpath::layout::{layout_text, ProgramParams, DEFAULT_MAX_CHORD, DEFAULT_Z_LIFT};

#[derive(Parser)]
#[command(
    version,
    about = "Generate ABB RAPID code for drawing text with a robot",
    after_help = "Bundled fonts:\n  \
        sans - DejaVu Sans (clean, general-purpose)\n  \
        bold - DejaVu Sans Bold (thick, for titles)\n  \
        mono - DejaVu Sans Mono (monospace, typewriter style)"
)]
struct Cli {
    /// Text to draw
    #[arg(long)]
    text: String,

    /// Bundled font name (sans/bold/mono) or path to a .ttf/.otf file
    #[arg(long)]
    font: String,

    /// Text height in mm
    #[arg(long)]
    size: f64,

    /// Drawing style ("filled" is accepted but draws outlines)
    #[arg(long, value_enum, default_value = "outline")]
    style: Style,

    /// Maximum distance between points on curves, in mm (smaller = more
    /// points)
    #[arg(long, default_value_t = DEFAULT_MAX_CHORD)]
    density: f64,

    /// WorkObject name for the generated RAPID code
    #[arg(long, default_value = "wobj0")]
    workobject: String,

    /// Output .mod file (default: derived from the text)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Style {
    Outline,
    Filled,
}

fn main() {
    let cli = Cli::parse();

    if cli.style == Style::Filled {
        eprintln!("Warning: filled style is not implemented, drawing outlines");
    }

    let font = match resolve(&cli.font) {
        Ok(font) => font,
        Err(e) => fail(&e),
    };

    let params = ProgramParams {
        text_height: cli.size,
        max_chord: cli.density,
        workobject: cli.workobject.clone(),
        z_lift: DEFAULT_Z_LIFT,
    };

    let drawing = match layout_text(&font, &cli.text, params) {
        Ok(drawing) => drawing,
        Err(e) => fail(&e),
    };

    for warning in &drawing.warnings {
        eprintln!("Warning: {warning}");
    }

    let motion = match emit(&drawing) {
        Ok(motion) => motion,
        Err(e) => fail(&e),
    };

    let module = render(&motion, &RenderOptions::default());

    // The full module is in memory; a failed write leaves no partial file
    // behind beyond what the OS already created.
    let output = cli.output.unwrap_or_else(|| default_output(&cli.text));
    if let Err(e) = fs::write(&output, module) {
        eprintln!("Error writing {}: {e}", output.display());
        process::exit(1);
    }

    let metrics = font.data.text_metrics(&cli.text, cli.size);
    println!("Wrote {}", output.display());
    println!("Text width: {:.1} mm", metrics.width);
    println!("Total points: {}", motion.stats.total_points);
    println!("Total paths: {}", motion.stats.total_paths);
    println!(
        "Estimated drawing time: {:.1} seconds",
        motion.stats.estimated_secs
    );
}

/// Default output name: lowercased text, spaces to underscores, `.mod`.
fn default_output(text: &str) -> PathBuf {
    PathBuf::from(format!("{}.mod", text.to_lowercase().replace(' ', "_")))
}

fn fail(e: &dyn std::error::Error) -> ! {
    eprintln!("Error: {e}");
    process::exit(1);
}
