use std::path::PathBuf;

use eframe::egui::Color32;

use crate::data::expr::ColumnExpr;
use crate::data::model::Waveform;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One plotted curve: a loaded waveform plus its legend label and colour.
#[derive(Debug)]
pub struct Trace {
    pub label: String,
    pub color: Color32,
    pub waveform: Waveform,
}

/// The full UI state, independent of rendering.
#[derive(Debug)]
pub struct AppState {
    /// Run directory the traces were loaded from.
    pub dir: PathBuf,

    /// Waveform-file suffix filter (normally `.dat`).
    pub suffix: String,

    /// Column expressions plotted per file, in CLI order.
    pub exprs: Vec<ColumnExpr>,

    /// Loaded traces, file-major in scan order.
    pub traces: Vec<Trace>,

    /// Per-trace visibility, parallel to `traces`.
    pub visible: Vec<bool>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dir: PathBuf, suffix: String, exprs: Vec<ColumnExpr>, traces: Vec<Trace>) -> Self {
        let visible = vec![true; traces.len()];
        Self {
            dir,
            suffix,
            exprs,
            traces,
            visible,
            status_message: None,
        }
    }

    /// Replace the session with a freshly loaded directory.
    pub fn set_traces(&mut self, dir: PathBuf, traces: Vec<Trace>) {
        self.visible = vec![true; traces.len()];
        self.traces = traces;
        self.dir = dir;
        self.status_message = None;
    }

    /// Reload from another run directory, keeping the session's expressions
    /// and suffix. All-or-nothing: a failed load leaves the current traces
    /// in place and reports the error instead.
    pub fn open_directory(&mut self, dir: PathBuf) {
        match crate::cli::build_traces(&dir, &self.exprs, &self.suffix) {
            Ok(traces) => {
                log::info!("loaded {} traces from {}", traces.len(), dir.display());
                self.set_traces(dir, traces);
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", dir.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    pub fn show_all(&mut self) {
        self.visible.fill(true);
    }

    pub fn hide_all(&mut self) {
        self.visible.fill(false);
    }

    /// X-axis label from the first trace, e.g. `Time [s]`.
    pub fn x_label(&self) -> String {
        match self.traces.first() {
            Some(trace) => axis_label(&trace.waveform.x_name, &trace.waveform.x_unit),
            None => "x".to_string(),
        }
    }

    /// Y-axis label from the first trace, e.g. `v(out) [V]`.
    pub fn y_label(&self) -> String {
        match self.traces.first() {
            Some(trace) => axis_label(&trace.waveform.y_name, &trace.waveform.y_unit),
            None => "y".to_string(),
        }
    }
}

fn axis_label(name: &str, unit: &str) -> String {
    if unit.is_empty() {
        name.to_string()
    } else {
        format!("{name} [{unit}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave() -> Waveform {
        Waveform {
            x_name: "Time".to_string(),
            x_unit: "s".to_string(),
            y_name: "v(out)".to_string(),
            y_unit: "V".to_string(),
            x: vec![0.0, 1.0],
            y: vec![0.0, 2.0],
        }
    }

    fn state() -> AppState {
        let trace = Trace {
            label: "rc".to_string(),
            color: Color32::LIGHT_BLUE,
            waveform: wave(),
        };
        AppState::new(
            PathBuf::from("waves"),
            ".dat".to_string(),
            vec![ColumnExpr::Select(2)],
            vec![trace],
        )
    }

    #[test]
    fn axis_labels_include_units() {
        let state = state();
        assert_eq!(state.x_label(), "Time [s]");
        assert_eq!(state.y_label(), "v(out) [V]");
    }

    #[test]
    fn visibility_toggles() {
        let mut state = state();
        assert_eq!(state.visible_count(), 1);
        state.hide_all();
        assert_eq!(state.visible_count(), 0);
        state.show_all();
        assert_eq!(state.visible_count(), 1);
    }
}
