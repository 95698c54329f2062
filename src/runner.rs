// src/runner.rs
//
// One fetch action: fetch → extract → display → persist → summary.
// Every failure ends as a notice; nothing here returns Err.

use crate::{
    config::options::AppOptions,
    core::net::Fetcher,
    error::InputError,
    present::{ContactView, NoticeKind, Notifier},
    scrape,
    store::{ContactStore, PersistSummary},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    ParseAndDisplay,
    Persisting,
}

/// How a fetch action ended. Every variant has already been notified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Input was rejected before any network call.
    Rejected(InputError),
    /// Fetch failed; view and store untouched.
    FetchFailed,
    /// Page fetched but no contacts in it; view cleared.
    Empty,
    /// Contacts shown but the store failed.
    StoreFailed { shown: usize },
    Saved { shown: usize, summary: PersistSummary },
}

fn enter(phase: Phase) {
    logd!("Fetch action: → {:?}", phase);
}

/// Run a complete fetch action for `url` against the given surfaces.
pub fn run_fetch(
    url: &str,
    opts: &AppOptions,
    view: &mut dyn ContactView,
    notifier: &mut dyn Notifier,
) -> FetchOutcome {
    let url = url.trim();
    if url.is_empty() {
        logw!("Fetch action: empty URL");
        notifier.notify(NoticeKind::Warning, "Input error", "Please enter a valid URL.");
        return FetchOutcome::Rejected(InputError::EmptyUrl);
    }

    logf!("Fetch action: Begin url={url}");
    enter(Phase::Fetching);

    let body = match Fetcher::new(&opts.fetch).and_then(|f| f.fetch(url)) {
        Ok(body) => body,
        Err(e) => {
            loge!("Fetch action: {e}");
            notifier.notify(NoticeKind::Error, e.title(), &e.message());
            enter(Phase::Idle);
            return FetchOutcome::FetchFailed;
        }
    };

    enter(Phase::ParseAndDisplay);
    let extraction = scrape::extract_with_shape(&body);
    let records = extraction.records;

    view.clear();
    if records.is_empty() {
        logf!("Fetch action: no contacts in {} bytes", body.len());
        notifier.notify(NoticeKind::Info, "Result", "No contact information was found.");
        enter(Phase::Idle);
        return FetchOutcome::Empty;
    }
    for r in &records {
        view.append_row(r);
    }
    let shown = records.len();
    if let Some(shape) = extraction.shape {
        logf!("Fetch action: {shown} contact(s) from {}", shape.label());
    }

    enter(Phase::Persisting);
    let store = ContactStore::new(&opts.store);
    let saved = store.initialize().and_then(|_| store.persist(&records));
    enter(Phase::Idle);

    match saved {
        Ok(summary) => {
            notifier.notify(NoticeKind::Info, "Success", &summary_message(shown, &summary));
            FetchOutcome::Saved { shown, summary }
        }
        Err(e) => {
            loge!("Fetch action: {e}");
            notifier.notify(NoticeKind::Error, e.title(), &e.to_string());
            FetchOutcome::StoreFailed { shown }
        }
    }
}

fn summary_message(shown: usize, summary: &PersistSummary) -> String {
    let mut msg = format!("Fetched {shown} contact(s) and saved them to the database.");
    if summary.skipped > 0 {
        msg.push_str(&format!(
            " {} new, {} already stored.",
            summary.inserted, summary.skipped
        ));
    }
    msg
}
