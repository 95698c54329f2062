// src/gui/components/mod.rs
pub mod data_table;
pub mod notice;
pub mod url_bar;
