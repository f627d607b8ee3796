mod app;
mod color;
mod data;
mod state;
mod ui;

use app::SourcingApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // One-time load; the outcome (success or failure) is cached for the
    // whole process lifetime.
    let outcome = data::loader::load();
    if let Ok(dataset) = outcome {
        log::info!(
            "loaded {} offers ({} countries, {} types)",
            dataset.len(),
            dataset.countries.len(),
            dataset.kinds.len()
        );
    }
    let state = AppState::from_load(outcome);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lion Industrie – Sourcing Multi-Produits",
        options,
        Box::new(|_cc| Ok(Box::new(SourcingApp::new(state)))),
    )
}
