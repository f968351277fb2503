use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{LoadedFile, Table};
use crate::data::summary::{self, ColumnStats};
use crate::data::topic;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – every requested view, top to bottom
// ---------------------------------------------------------------------------

/// Render the output views selected in the control panel.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let Some(file) = &state.file else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to explore it  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if state.show_head {
                section(ui, "First rows");
                table_grid(ui, "head", &summary::head(&file.table, state.head_n));
            }

            if state.show_tail {
                section(ui, "Last rows");
                table_grid(ui, "tail", &summary::tail(&file.table, state.tail_n));
            }

            if state.show_overview {
                section(ui, "File overview");
                overview(ui, file);
            }

            if state.show_describe {
                section(ui, "Descriptive statistics (numeric columns)");
                describe_grid(ui, &summary::describe(&file.table));
            }

            if state.show_shape {
                section(ui, "Shape");
                let (rows, cols) = file.table.shape();
                ui.monospace(format!("({rows}, {cols})"));
            }

            if state.show_columns {
                section(ui, "Column names");
                ui.monospace(file.table.column_names.join(", "));
            }

            if let Some(col) = &state.selected_column {
                if let Some(view) = file.table.select(std::slice::from_ref(col)) {
                    section(ui, "Selected column");
                    table_grid(ui, "single_select", &view);
                }
            }

            if !state.selected_columns.is_empty() {
                if let Some(view) = file.table.select(&state.selected_columns) {
                    section(ui, "Selected columns");
                    table_grid(ui, "multi_select", &view);
                }
            }

            if let Some(result) = &state.filter_result {
                section(ui, "Filter result");
                if result.is_empty() {
                    ui.label("No rows match the filter.");
                } else {
                    table_grid(ui, "filter_result", result);
                }
            }
        });
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.heading(title);
}

// ---------------------------------------------------------------------------
// Overview: dimensions, size estimate, detected topics
// ---------------------------------------------------------------------------

fn overview(ui: &mut Ui, file: &LoadedFile) {
    let (rows, cols) = file.table.shape();
    ui.label(format!("Dimensions: {rows} rows × {cols} columns"));
    ui.label(format!(
        "Estimated size: {}",
        summary::format_file_size(file.byte_size)
    ));

    let topics = topic::detect_topics(&file.table.column_names, &file.file_name);
    if topics.is_empty() {
        ui.label("Could not determine a clear topic automatically.");
    } else {
        ui.label("Probable topics, based on columns and file name:");
        for label in topics {
            ui.label(format!("  • {label}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Render a table as a striped grid with a header row.
fn table_grid(ui: &mut Ui, id: &str, table: &Table) {
    if table.n_cols() == 0 {
        ui.label("(no columns)");
        return;
    }
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), table.n_cols())
            .max_scroll_height(260.0)
            .header(20.0, |mut header| {
                for name in &table.column_names {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.n_rows(), |mut row| {
                    let r = row.index();
                    for c in 0..table.n_cols() {
                        row.col(|ui| {
                            if let Some(cell) = table.cell(r, c) {
                                ui.label(cell.to_string());
                            }
                        });
                    }
                });
            });
    });
}

/// Render describe output: one stat per row, one numeric column per grid
/// column, the familiar dataframe layout.
fn describe_grid(ui: &mut Ui, stats: &[ColumnStats]) {
    if stats.is_empty() {
        ui.label("No numeric columns to describe.");
        return;
    }

    egui::Grid::new("describe_grid")
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.strong("");
            for s in stats {
                ui.strong(&s.name);
            }
            ui.end_row();

            stat_row(ui, "count", stats, |s| s.count.to_string());
            stat_row(ui, "mean", stats, |s| format!("{:.4}", s.mean));
            stat_row(ui, "std", stats, |s| format!("{:.4}", s.std));
            stat_row(ui, "min", stats, |s| format!("{:.4}", s.min));
            stat_row(ui, "25%", stats, |s| format!("{:.4}", s.q25));
            stat_row(ui, "50%", stats, |s| format!("{:.4}", s.median));
            stat_row(ui, "75%", stats, |s| format!("{:.4}", s.q75));
            stat_row(ui, "max", stats, |s| format!("{:.4}", s.max));
        });
}

fn stat_row(ui: &mut Ui, label: &str, stats: &[ColumnStats], cell: impl Fn(&ColumnStats) -> String) {
    ui.strong(label);
    for s in stats {
        ui.monospace(cell(s));
    }
    ui.end_row();
}
