use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::color::generate_palette;
use crate::data::expr::{parse_expr_list, ColumnExpr, ExprError};
use crate::data::loader;
use crate::scan::{self, ScanError};
use crate::state::{AppState, Trace};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Plot the waveform files of a simulation run directory.
#[derive(Parser, Debug)]
#[command(name = "waveplot")]
#[command(about = "Plot .dat waveform dumps from a simulation run", long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory containing the waveform files
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Column expressions to plot per file, comma separated (e.g. "1" or "3-2,1")
    #[arg(short, long, default_value = "1", value_name = "LIST")]
    pub expr: String,

    /// Waveform file suffix filter
    #[arg(long, default_value = ".dat", value_name = "SUFFIX")]
    pub suffix: String,
}

// Distinct exit status per failure category. clap itself exits with 2 when
// the directory argument is missing, so driver codes start past it.
pub const EXIT_LOAD_FAILED: u8 = 1;
pub const EXIT_NOT_A_DIRECTORY: u8 = 3;
pub const EXIT_NO_WAVE_FILES: u8 = 4;
pub const EXIT_BAD_EXPRESSION: u8 = 5;

// ---------------------------------------------------------------------------
// Session assembly
// ---------------------------------------------------------------------------

/// Parse the expression list and load every matching waveform file.
///
/// Expressions are parsed up front so a malformed `--expr` fails before any
/// file is opened.
pub fn build_session(args: &Args) -> Result<AppState> {
    let exprs = parse_expr_list(&args.expr)?;
    let traces = build_traces(&args.dir, &exprs, &args.suffix)?;
    Ok(AppState::new(
        args.dir.clone(),
        args.suffix.clone(),
        exprs,
        traces,
    ))
}

/// Load one trace per (file, expression) pair, file-major in scan order, and
/// assign each trace a palette colour. The first failing file aborts the
/// whole build.
pub fn build_traces(dir: &Path, exprs: &[ColumnExpr], suffix: &str) -> Result<Vec<Trace>> {
    let files = scan::find_wave_files(dir, suffix)?;

    let mut traces = Vec::with_capacity(files.len() * exprs.len());
    for path in &files {
        for expr in exprs {
            let waveform = loader::load_file(path, expr)
                .with_context(|| format!("loading {}", path.display()))?;
            traces.push(Trace {
                label: trace_label(path, expr, exprs.len() > 1),
                color: eframe::egui::Color32::GRAY,
                waveform,
            });
        }
    }

    let palette = generate_palette(traces.len());
    for (trace, color) in traces.iter_mut().zip(palette) {
        trace.color = color;
    }

    log::info!(
        "loaded {} traces from {} files in {}",
        traces.len(),
        files.len(),
        dir.display()
    );
    Ok(traces)
}

/// Legend label: the file stem, with the expression appended when several
/// expressions are plotted per file.
fn trace_label(path: &Path, expr: &ColumnExpr, multiple_exprs: bool) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("waveform");
    if multiple_exprs {
        format!("{stem} [{expr}]")
    } else {
        stem.to_string()
    }
}

/// Map a session-build failure to its process exit status.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ExprError>().is_some() {
        return EXIT_BAD_EXPRESSION;
    }
    match err.downcast_ref::<ScanError>() {
        Some(ScanError::NotADirectory(_)) => EXIT_NOT_A_DIRECTORY,
        Some(ScanError::NoMatches { .. }) => EXIT_NO_WAVE_FILES,
        _ => EXIT_LOAD_FAILED,
    }
}
