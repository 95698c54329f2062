// src/gui/components/notice.rs
//
// Modal-ish notice window. One at a time; OK dismisses it and the next
// queued one (if any) shows on the following frame.

use eframe::egui::{self, Align2, Color32, RichText};

use crate::{gui::app::App, present::NoticeKind};

fn accent(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Warning => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        NoticeKind::Info    => Color32::from_rgb(0x64, 0xB4, 0xFF),
        NoticeKind::Error   => Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(notice) = app.notices.current() else { return };
    let color = accent(notice.kind);
    let title = notice.title.clone();
    let message = notice.message.clone();

    let mut dismissed = false;
    egui::Window::new(RichText::new(title).color(color).strong())
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("  OK  ").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        app.notices.dismiss();
    }
}
