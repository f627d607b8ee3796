use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered offers in the central panel.
///
/// Column set follows the data: Catégorie / Variété / Date only appear when
/// the source file carries them. Rows keep file order.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Aucun catalogue chargé.");
            });
            return;
        }
    };

    ui.heading("📋 Résultats");
    ui.add_space(4.0);

    if state.visible_indices.is_empty() {
        // Valid outcome, not an error.
        ui.label(RichText::new("ℹ Aucun produit trouvé avec ces critères.").italics());
        return;
    }

    let mut builder = TableBuilder::new(ui).striped(true).column(Column::auto());
    if dataset.has_category {
        builder = builder.column(Column::auto());
    }
    // Pays, Type/Méthode, Fournisseur
    builder = builder
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder());
    if dataset.has_variety {
        builder = builder.column(Column::auto());
    }
    // Prix, Lien
    builder = builder.column(Column::auto()).column(Column::auto());
    if dataset.has_harvest_date {
        builder = builder.column(Column::auto());
    }

    builder
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            if dataset.has_category {
                header.col(|ui| {
                    ui.strong("Catégorie");
                });
            }
            header.col(|ui| {
                ui.strong("Pays");
            });
            header.col(|ui| {
                ui.strong("Type/Méthode");
            });
            header.col(|ui| {
                ui.strong("Fournisseur");
            });
            if dataset.has_variety {
                header.col(|ui| {
                    ui.strong("Variété");
                });
            }
            header.col(|ui| {
                ui.strong("Prix");
            });
            header.col(|ui| {
                ui.strong("Lien Catalogue");
            });
            if dataset.has_harvest_date {
                header.col(|ui| {
                    ui.strong("Date");
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let position = row.index();
                let offer = &dataset.offers[state.visible_indices[position]];

                row.col(|ui| {
                    ui.label(format!("{}", position + 1));
                });
                if dataset.has_category {
                    row.col(|ui| {
                        let cat = offer.category.as_deref().unwrap_or("");
                        ui.label(
                            RichText::new(cat).color(state.category_colors.color_for(cat)),
                        );
                    });
                }
                row.col(|ui| {
                    ui.label(&offer.country);
                });
                row.col(|ui| {
                    ui.label(&offer.kind);
                });
                row.col(|ui| {
                    ui.label(&offer.name);
                });
                if dataset.has_variety {
                    row.col(|ui| {
                        ui.label(offer.variety.as_deref().unwrap_or("—"));
                    });
                }
                row.col(|ui| {
                    // Displayed in whole euros; filtering uses the full value.
                    ui.label(format!("{} €", offer.price as i64));
                });
                row.col(|ui| {
                    ui.hyperlink_to("Catalogue", &offer.link);
                });
                if dataset.has_harvest_date {
                    row.col(|ui| {
                        ui.label(offer.harvest_date.as_deref().unwrap_or("—"));
                    });
                }
            });
        });
}
