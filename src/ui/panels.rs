use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filtres");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("Aucun catalogue chargé.");
            return;
        }
    };

    // Clone the option lists so we can mutate state inside the loop.
    let categories = dataset.categories.clone();
    let has_category = dataset.has_category;
    let (min_price, max_price) = dataset.price_bounds;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Category multi-select (only when the column exists) ----
            if has_category {
                let n_selected = state.selection.categories.len();
                let header = format!("📂 Catégorie  ({n_selected}/{})", categories.len());

                egui::CollapsingHeader::new(RichText::new(header).strong())
                    .id_salt("categories")
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("Tout").clicked() {
                                state.select_all_categories();
                            }
                            if ui.small_button("Aucun").clicked() {
                                state.select_no_categories();
                            }
                        });

                        for cat in &categories {
                            let mut checked = state.selection.categories.contains(cat);
                            let text =
                                RichText::new(cat).color(state.category_colors.color_for(cat));
                            if ui.checkbox(&mut checked, text).changed() {
                                state.toggle_category(cat);
                            }
                        }
                    });
                ui.separator();
            }

            // ---- Country multi-select (cascaded options) ----
            let countries = state.available_countries.clone();
            let selected = countries
                .iter()
                .filter(|c| state.selection.countries.contains(*c))
                .count();
            let header = format!("🌍 Pays  ({selected}/{})", countries.len());
            multi_select(
                ui,
                "countries",
                &header,
                &countries,
                |state, value| state.selection.countries.contains(value),
                AppState::toggle_country,
                AppState::select_all_countries,
                AppState::select_no_countries,
                state,
            );
            ui.separator();

            // ---- Type multi-select (cascaded options) ----
            let kinds = state.available_kinds.clone();
            let selected = kinds
                .iter()
                .filter(|k| state.selection.kinds.contains(*k))
                .count();
            let header = format!("🏷 Type / Méthode  ({selected}/{})", kinds.len());
            multi_select(
                ui,
                "kinds",
                &header,
                &kinds,
                |state, value| state.selection.kinds.contains(value),
                AppState::toggle_kind,
                AppState::select_all_kinds,
                AppState::select_no_kinds,
                state,
            );
            ui.separator();

            // ---- Price slider ----
            ui.strong("💰 Budget max (€ / unité ou kg)");
            let mut price = state.selection.max_price;
            if ui
                .add(egui::Slider::new(&mut price, min_price..=max_price).suffix(" €"))
                .changed()
            {
                state.set_max_price(price);
            }
        });
}

/// One collapsible checkbox list with Tout/Aucun buttons.
#[allow(clippy::too_many_arguments)]
fn multi_select(
    ui: &mut Ui,
    id: &str,
    header: &str,
    values: &[String],
    is_selected: impl Fn(&AppState, &str) -> bool,
    toggle: impl Fn(&mut AppState, &str),
    select_all: impl Fn(&mut AppState),
    select_none: impl Fn(&mut AppState),
    state: &mut AppState,
) {
    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(id)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("Tout").clicked() {
                    select_all(state);
                }
                if ui.small_button("Aucun").clicked() {
                    select_none(state);
                }
            });

            for value in values {
                let mut checked = is_selected(state, value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    toggle(state, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: title and matched-offer count.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("🦁 Lion Industrie – Sourcing Multi-Produits");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "Offres trouvées : {} / {}",
                state.visible_indices.len(),
                ds.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Load-failure screen
// ---------------------------------------------------------------------------

/// Terminal error screen shown instead of the whole UI when the one-time
/// load failed. No filters, no table.
pub fn error_screen(ui: &mut Ui, state: &AppState) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(
                RichText::new("⚠ Erreur : problème avec le fichier data.csv").color(Color32::RED),
            );
            if let Some(detail) = &state.load_error {
                ui.label(RichText::new(detail).color(Color32::LIGHT_RED));
            }
        });
    });
}
