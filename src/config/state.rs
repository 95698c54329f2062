// src/config/state.rs
use super::consts::DEFAULT_URL;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the URL field
    pub url: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { url: s!(DEFAULT_URL) }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
