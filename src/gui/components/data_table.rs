// src/gui/components/data_table.rs
//
// Draws the three-column contact list. Purely a view over app.table.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, present::HEADERS};

const COL_WIDTHS: [f32; 2] = [180.0, 140.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows = app.table.rows();

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(COL_WIDTHS[0]).resizable(true).clip(true).at_least(40.0))
        .column(Column::initial(COL_WIDTHS[1]).resizable(true).clip(true).at_least(40.0))
        .column(Column::remainder().clip(true).at_least(80.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(record) = rows.get(row.index()) else { return };
                for cell in record.cells() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.label(cell);
                    });
                }
            });
        });
}
