use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – trace visibility
// ---------------------------------------------------------------------------

/// Render the trace list: one checkbox per loaded curve, tinted with the
/// curve's plot colour.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Traces");
    ui.separator();

    if state.traces.is_empty() {
        ui.label("No waveforms loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.hide_all();
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, trace) in state.traces.iter().enumerate() {
                let text = RichText::new(&trace.label).color(trace.color);
                let mut checked = state.visible[i];
                if ui.checkbox(&mut checked, text).changed() {
                    state.visible[i] = checked;
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_directory_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} traces loaded, {} visible",
            state.traces.len(),
            state.visible_count()
        ));

        ui.separator();

        ui.label(state.dir.display().to_string());

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Directory dialog
// ---------------------------------------------------------------------------

/// Pick another run directory and reload it with the session's expressions
/// and suffix filter.
pub fn open_directory_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open waveform run directory")
        .pick_folder();

    if let Some(dir) = dir {
        state.open_directory(dir);
    }
}
