// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything the fetch action needs, passed explicitly into each component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub store: StoreOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            store: StoreOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout for the single GET.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_STORE_PATH) }
    }
}

impl StoreOptions {
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse GUI/CLI text into a store path. Blank text keeps the current one.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }
        self.path = PathBuf::from(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let opts = AppOptions::default();
        assert_eq!(opts.fetch.timeout, Duration::from_secs(10));
        assert_eq!(opts.store.path(), Path::new("contacts.db"));
        assert!(opts.fetch.user_agent.starts_with("contact_scrape/"));
    }

    #[test]
    fn blank_store_path_is_ignored() {
        let mut store = StoreOptions::at("a.db");
        store.set_path("   ");
        assert_eq!(store.path(), Path::new("a.db"));
        store.set_path(" b.db ");
        assert_eq!(store.path(), Path::new("b.db"));
    }
}
