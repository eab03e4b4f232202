mod app;
mod cli;
mod color;
mod data;
mod scan;
mod state;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use eframe::egui;

use app::WaveplotApp;

fn main() -> ExitCode {
    env_logger::init();

    // clap exits with its usage status (2) when DIR is missing.
    let args = cli::Args::parse();

    let state = match cli::build_session(&args) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            return ExitCode::from(cli::exit_code_for(&e));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "waveplot – Waveform Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(WaveplotApp::new(state)))),
    );

    if let Err(e) = result {
        log::error!("ui error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
