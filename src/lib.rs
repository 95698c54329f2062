// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod contact;
pub mod core;
pub mod error;
pub mod log;
pub mod present;
pub mod scrape;
pub mod store;
pub mod runner;

pub mod cli;
pub mod gui;
