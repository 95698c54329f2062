// src/error.rs
//
// Failure taxonomy for one fetch action. Every variant ends up as a notice;
// nothing here is meant to escape `runner::run_fetch`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error {status} for {url}")]
    HttpStatus { status: reqwest::StatusCode, url: String },

    #[error("could not connect: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Other(#[source] reqwest::Error),
}

impl FetchError {
    /// Sort a transport error into the taxonomy. Timeout wins over connect,
    /// since a connect that times out reports both.
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else if err.is_connect() {
            FetchError::Connection(err)
        } else if let (true, Some(status)) = (err.is_status(), err.status()) {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            FetchError::HttpStatus { status, url }
        } else {
            FetchError::Other(err)
        }
    }

    /// Short title for the notification surface.
    pub fn title(&self) -> &'static str {
        match self {
            FetchError::HttpStatus { .. } => "HTTP error",
            FetchError::Connection(_) => "Connection error",
            FetchError::Timeout(_) => "Timeout",
            FetchError::Other(_) => "Request error",
        }
    }

    /// Message shown under the title.
    pub fn message(&self) -> String {
        match self {
            FetchError::HttpStatus { .. } => self.to_string(),
            FetchError::Connection(_) => s!("Unable to reach the server."),
            FetchError::Timeout(_) => s!("The request timed out."),
            FetchError::Other(e) => format!("The request failed: {e}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to initialize contact store: {0}")]
    Init(#[source] rusqlite::Error),

    #[error("failed to save contacts: {0}")]
    Persist(#[source] rusqlite::Error),

    #[error("failed to read contacts: {0}")]
    Read(#[source] rusqlite::Error),
}

impl StoreError {
    pub fn title(&self) -> &'static str {
        "Database error"
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter a URL")]
    EmptyUrl,
}
