// src/gui/actions/fetch.rs
use crate::{
    gui::app::App,
    runner::{self, FetchOutcome},
};

pub fn fetch(app: &mut App) {
    let url = app.state.gui.url.clone();
    logf!("UI: Fetch clicked url={url}");

    // → This is where the fetch action happens ←
    let outcome = runner::run_fetch(
        &url,
        &app.state.options,
        &mut app.table,
        &mut app.notices,
    );

    app.running = false;
    match outcome {
        FetchOutcome::Rejected(e) => app.status(format!("Input error: {e}")),
        FetchOutcome::FetchFailed => app.status("Fetch failed"),
        FetchOutcome::Empty => app.status("No contacts found"),
        FetchOutcome::StoreFailed { shown } => {
            app.status(format!("Showing {shown} contact(s); not saved"))
        }
        FetchOutcome::Saved { shown, summary } => app.status(format!(
            "Ready: {shown} contact(s), {} new",
            summary.inserted
        )),
    }
}
