// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod fetch;   // src/gui/actions/fetch.rs

pub use fetch::fetch;
