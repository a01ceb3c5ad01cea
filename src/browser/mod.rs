//! Browser automation built on headless Chrome.
//!
//! The listing, detail, and episode pages all render their content with
//! JavaScript, so every fetch goes through a real browser: one Chrome
//! process for the whole run, one short-lived tab per page visit.

pub mod config;
pub mod manager;
pub mod scraper;

pub use config::BrowserConfig;
pub use manager::{BrowserError, BrowserManager};
pub use scraper::BrowserScraper;
