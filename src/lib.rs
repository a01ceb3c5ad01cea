// Library interface for oploverz_scraper
// This allows tests and external crates to use the scraper components

pub mod batch;
pub mod browser;
pub mod config;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod models;
