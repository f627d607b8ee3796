use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SourcingApp {
    pub state: AppState,
}

impl SourcingApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SourcingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load failure is terminal: error screen only, no filters, no table.
        if self.state.load_error.is_some() {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::error_screen(ui, &self.state);
            });
            return;
        }

        // ---- Top panel: title + count metric ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results_table(ui, &self.state);
        });
    }
}
