//! Batch controller: fetch the listing, slice the configured window, fold
//! over it with skip-on-error, and write the JSON output.

use crate::browser::{BrowserManager, BrowserScraper};
use crate::config::{BatchConfig, BatchWindow, LISTING_URL, OUTPUT_FILE};
use crate::error::ScrapeError;
use crate::extract;
use crate::harvest;
use crate::models::{AnimeRecord, ListingEntry};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// An entry the batch loop gave up on, with the error that caused it.
#[derive(Debug)]
pub struct SkippedEntry {
    pub entry: ListingEntry,
    pub reason: String,
}

/// Outcome of one batch run.
#[derive(Debug)]
pub struct BatchReport {
    pub listing_total: usize,
    pub window: BatchWindow,
    pub written: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// Run one batch end to end.
///
/// A listing-fetch error is returned (the caller exits non-zero); every
/// later failure is recorded in the report's skip list instead. The output
/// file is written even when the window is empty, so downstream consumers
/// always find a valid JSON array.
pub fn run(
    manager: &BrowserManager,
    config: &BatchConfig,
    output_dir: &Path,
) -> Result<BatchReport, ScrapeError> {
    info!("Navigating to {}", LISTING_URL);
    let listing = fetch_listing(manager)?;
    info!("Found {} anime(s)", listing.len());

    let window = config.window(listing.len());
    if window.is_empty() {
        info!("No anime in this batch.");
        let path = write_output(output_dir, &[])?;
        info!("Saved 0 anime(s) to {}", path.display());
        return Ok(BatchReport {
            listing_total: listing.len(),
            window,
            written: 0,
            skipped: vec![],
        });
    }

    info!(
        "Processing batch {} (items {} to {})",
        config.batch_index,
        window.start,
        window.end - 1
    );

    let (records, skipped) = collect_batch(&listing[window.start..window.end], |entry| {
        info!("Scraping: {}", entry.title);
        harvest::harvest_anime(manager, entry)
    });

    for skip in &skipped {
        warn!("Error scraping details for {}: {}", skip.entry.title, skip.reason);
    }

    let path = write_output(output_dir, &records)?;
    info!(
        "Saved {} anime(s) to {} ({} skipped)",
        records.len(),
        path.display(),
        skipped.len()
    );

    Ok(BatchReport {
        listing_total: listing.len(),
        window,
        written: records.len(),
        skipped,
    })
}

/// Fetch the full ordered anime listing from the listing page.
fn fetch_listing(manager: &BrowserManager) -> Result<Vec<ListingEntry>, ScrapeError> {
    manager.with_tab(|tab| {
        let page = BrowserScraper::with_timeout(tab, manager.config().timeout());
        page.navigate(LISTING_URL)?;
        extract::extract_listing(&page)
    })
}

/// Fold over the window entries: successes accumulate, failures go to the
/// skip list with their reason. Never aborts.
fn collect_batch<F>(
    entries: &[ListingEntry],
    mut harvest_one: F,
) -> (Vec<AnimeRecord>, Vec<SkippedEntry>)
where
    F: FnMut(&ListingEntry) -> Result<AnimeRecord, ScrapeError>,
{
    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for entry in entries {
        match harvest_one(entry) {
            Ok(record) => records.push(record),
            Err(e) => skipped.push(SkippedEntry {
                entry: entry.clone(),
                reason: e.to_string(),
            }),
        }
    }

    (records, skipped)
}

/// Write the records as a pretty-printed JSON array, creating the output
/// directory if needed and overwriting any previous file.
fn write_output(
    output_dir: &Path,
    records: &[AnimeRecord],
) -> Result<std::path::PathBuf, ScrapeError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(OUTPUT_FILE);
    let json = serde_json::to_vec_pretty(records)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> ListingEntry {
        ListingEntry {
            title: format!("Anime {}", n),
            url: format!("https://oploverz.co.id/anime/anime-{}/", n),
        }
    }

    fn record_for(e: &ListingEntry) -> AnimeRecord {
        AnimeRecord {
            title: e.title.clone(),
            url: e.url.clone(),
            cover_img: None,
            synopsis: None,
            info_items: vec![],
            other_episode_links: vec![],
            episodes: vec![],
        }
    }

    #[test]
    fn collect_batch_keeps_order_and_skips_failures() {
        let entries: Vec<ListingEntry> = (0..4).map(entry).collect();

        let (records, skipped) = collect_batch(&entries, |e| {
            if e.title == "Anime 2" {
                Err(ScrapeError::Navigation("timed out".to_string()))
            } else {
                Ok(record_for(e))
            }
        });

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Anime 0");
        assert_eq!(records[1].title, "Anime 1");
        assert_eq!(records[2].title, "Anime 3");

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].entry.title, "Anime 2");
        assert!(skipped[0].reason.contains("timed out"));
    }

    #[test]
    fn collect_batch_with_all_failures_is_empty_not_an_error() {
        let entries: Vec<ListingEntry> = (0..3).map(entry).collect();
        let (records, skipped) =
            collect_batch(&entries, |_| Err(ScrapeError::Extraction("boom".to_string())));
        assert!(records.is_empty());
        assert_eq!(skipped.len(), 3);
    }

    #[test]
    fn write_output_creates_dir_and_valid_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("public");

        let path = write_output(&output_dir, &[]).unwrap();
        let parsed: Vec<AnimeRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());

        // Second write overwrites, dir creation is idempotent.
        let records = vec![record_for(&entry(1))];
        let path = write_output(&output_dir, &records).unwrap();
        let parsed: Vec<AnimeRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Anime 1");
    }

    #[test]
    fn output_omits_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_output(dir.path(), &[record_for(&entry(7))]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("synopsis"));
        assert!(!raw.contains("coverImg"));
        assert!(!raw.contains("null"));
    }
}
