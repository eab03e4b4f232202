use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Waveform plot (central panel)
// ---------------------------------------------------------------------------

/// Render every visible trace as a line in its assigned colour, with a
/// filled marker on the final sample showing where the run ended.
pub fn waveform_plot(ui: &mut Ui, state: &AppState) {
    if state.traces.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a run directory to view waveforms  (File → Open…)");
        });
        return;
    }

    Plot::new("waveform_plot")
        .legend(Legend::default())
        .x_axis_label(state.x_label())
        .y_axis_label(state.y_label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (trace, &visible) in state.traces.iter().zip(state.visible.iter()) {
                if !visible {
                    continue;
                }

                let points = PlotPoints::from(trace.waveform.points());
                let line = Line::new(points)
                    .name(&trace.label)
                    .color(trace.color)
                    .width(1.5);
                plot_ui.line(line);

                if let Some(last) = trace.waveform.last_point() {
                    let marker = Points::new(vec![last])
                        .name(&trace.label)
                        .color(trace.color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0);
                    plot_ui.points(marker);
                }
            }
        });
}
