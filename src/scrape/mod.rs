// src/scrape/mod.rs
mod contacts;

pub use contacts::{extract, extract_with_shape, extract_containers, extract_table_rows};
pub use contacts::{Extraction, Shape};
