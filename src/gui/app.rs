// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    present::{NoticeKind, Notifier},
    store::ContactStore,
};

use super::table_model::{ContactTable, NoticeQueue};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Contact Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // list view contents
    pub table: ContactTable,

    // modal notices, oldest first
    pub notices: NoticeQueue,

    // status line under the URL bar
    pub status: String,

    // set by the Fetch button; the fetch runs at the start of the next frame
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut notices = NoticeQueue::default();
        let mut status = s!("Idle");

        let store = ContactStore::new(&state.options.store);
        match store.initialize() {
            Ok(()) => logf!("Init: store at {}", store.path().display()),
            Err(e) => {
                loge!("Init: {e}");
                notices.notify(NoticeKind::Error, e.title(), &e.to_string());
                status = s!("Database unavailable");
            }
        }

        Self {
            state,
            table: ContactTable::default(),
            notices,
            status,
            running: false,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Blocking on purpose: one fetch action runs to completion per click.
        if self.running {
            super::actions::fetch(self);
        }

        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            super::components::url_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::data_table::draw(ui, self);
        });

        super::components::notice::draw(ctx, self);
    }
}
