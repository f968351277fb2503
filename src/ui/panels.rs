use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::FilterOp;
use crate::data::summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – exploration controls
// ---------------------------------------------------------------------------

/// Render the control panel: preview, summary, selection, and filter inputs.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Explore");
    ui.separator();

    let Some(file) = &state.file else {
        ui.label("No file loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the closures.
    let columns = file.table.column_names.clone();
    let n_rows = file.table.n_rows();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Preview ----
            ui.strong("Preview");
            ui.checkbox(&mut state.show_head, "First N rows");
            if state.show_head {
                ui.add(
                    egui::DragValue::new(&mut state.head_n)
                        .range(1..=n_rows.max(1))
                        .prefix("rows: "),
                );
            }
            ui.checkbox(&mut state.show_tail, "Last N rows");
            if state.show_tail {
                ui.add(
                    egui::DragValue::new(&mut state.tail_n)
                        .range(1..=n_rows.max(1))
                        .prefix("rows: "),
                );
            }
            ui.separator();

            // ---- Summary ----
            ui.strong("Summary");
            ui.checkbox(&mut state.show_overview, "File overview");
            ui.checkbox(&mut state.show_describe, "Descriptive statistics");
            ui.checkbox(&mut state.show_shape, "Shape");
            ui.checkbox(&mut state.show_columns, "Column names");
            ui.separator();

            // ---- Selection ----
            ui.strong("Selection");
            let current = state.selected_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("select_column")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui.selectable_label(current == *col, col).clicked() {
                            state.selected_column = Some(col.clone());
                        }
                    }
                });

            egui::CollapsingHeader::new("Multiple columns")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    column_checklist(ui, &columns, &mut state.selected_columns);
                });
            ui.separator();

            // ---- Filter ----
            ui.strong("Filter rows");
            let current_filter = state.filter_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("filter_column")
                .selected_text(&current_filter)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui.selectable_label(current_filter == *col, col).clicked() {
                            state.set_filter_column(col.clone());
                        }
                    }
                });

            egui::ComboBox::from_id_salt("filter_op")
                .selected_text(state.filter_op.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for op in FilterOp::ALL {
                        ui.selectable_value(&mut state.filter_op, op, op.to_string());
                    }
                });

            ui.add(
                egui::TextEdit::singleline(&mut state.filter_value)
                    .hint_text("value (text or number)"),
            );

            egui::CollapsingHeader::new("Columns to display")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    column_checklist(ui, &columns, &mut state.filter_projection);
                });

            if ui.button("Apply filter").clicked() {
                state.apply_filter();
            }
        });
}

/// Checkbox list over all column names, preserving click order in `chosen`.
fn column_checklist(ui: &mut Ui, columns: &[String], chosen: &mut Vec<String>) {
    for col in columns {
        let mut checked = chosen.contains(col);
        if ui.checkbox(&mut checked, col).changed() {
            if checked {
                chosen.push(col.clone());
            } else {
                chosen.retain(|c| c != col);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(file) = &state.file {
            let (rows, cols) = file.table.shape();
            ui.label(format!(
                "{} — {rows} rows × {cols} columns ({})",
                file.file_name,
                summary::format_file_size(file.byte_size)
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(loaded) => {
                log::info!(
                    "Loaded {} with {} rows and columns {:?}",
                    loaded.file_name,
                    loaded.table.n_rows(),
                    loaded.table.column_names
                );
                state.set_file(loaded);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
