use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct CsvScoutApp {
    pub state: AppState,
}

impl eframe::App for CsvScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: exploration controls ----
        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: requested views ----
        egui::CentralPanel::default().show(ctx, |ui| {
            results::results_panel(ui, &self.state);
        });
    }
}
