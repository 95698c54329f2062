// src/gui/components/url_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let busy = app.running || app.notices.is_open();

    ui.horizontal(|ui| {
        ui.label("URL:");

        // Leave room for the button on the right
        let field_w = (ui.available_width() - 80.0).max(120.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url)
                .desired_width(field_w)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let button_fetch = ui.add_enabled(
            !busy,
            egui::Button::new(egui::RichText::new("Fetch").strong()),
        );

        if (button_fetch.clicked() || enter) && !busy {
            app.running = true;
            app.status("Fetching…");
            // paint the status once before the blocking fetch
            ui.ctx().request_repaint();
        }
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new().size(14.0));
        }
        ui.label(app.status.as_str());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("DB: {}", app.state.options.store.path().display()));
        });
    });
}
