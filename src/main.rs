use log::{error, info};
use oploverz_scraper::batch;
use oploverz_scraper::browser::{BrowserConfig, BrowserManager};
use oploverz_scraper::config::{BatchConfig, OUTPUT_DIR};
use oploverz_scraper::error::ScrapeError;
use std::path::Path;

fn main() {
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    if run().is_err() {
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScrapeError> {
    let config = BatchConfig::from_env();
    info!(
        "{} | Batch {} | Size {}",
        chrono::Local::now().format("%a, %d %b %Y"),
        config.batch_index,
        config.batch_size
    );

    info!("Launching browser...");
    let manager = BrowserManager::new(BrowserConfig::default()).map_err(|e| {
        error!("Failed to launch browser: {}", e);
        ScrapeError::from(e)
    })?;

    let report = batch::run(&manager, &config, Path::new(OUTPUT_DIR)).map_err(|e| {
        error!("Fatal error: {}", e);
        e
    })?;

    info!(
        "Done. {} of {} anime in window scraped, {} skipped ({} in full listing).",
        report.written,
        report.window.len(),
        report.skipped.len(),
        report.listing_total
    );

    Ok(())
}
