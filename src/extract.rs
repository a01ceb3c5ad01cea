//! Typed extraction commands, one per page kind.
//!
//! Each command pairs a ready selector with a script that collects its
//! fields inside the page and returns them as one `JSON.stringify` payload,
//! decoded here into a fixed struct. Callers are expected to have navigated
//! the tab to the target URL already.

use crate::browser::BrowserScraper;
use crate::error::ScrapeError;
use crate::models::ListingEntry;
use serde::Deserialize;

pub const LISTING_READY_SELECTOR: &str = ".maxullink a";
pub const DETAIL_READY_SELECTOR: &str = ".clearfix img.cover";
pub const EPISODE_READY_SELECTOR: &str = "body";

const LISTING_SCRIPT: &str = r#"
JSON.stringify([...document.querySelectorAll('.maxullink a')].map(a => ({
    title: a.textContent.trim(),
    url: a.href
})))
"#;

const DETAIL_SCRIPT: &str = r#"
JSON.stringify((() => {
    const coverImg = document.querySelector('.clearfix img.cover')?.src || '';
    const synopsis = document.querySelector('.clearfix .sinops')?.innerText || '';
    const infoItems = [...document.querySelectorAll('.infopost li')].map(li => li.innerText);
    const otherEpisodeLinks = [...document.querySelectorAll('.bottom-line a')].map(a => ({
        title: a.textContent.trim(),
        url: a.href
    }));
    return { coverImg, synopsis, infoItems, otherEpisodeLinks };
})())
"#;

const EPISODE_SCRIPT: &str = r#"
JSON.stringify((() => {
    const iframe = document.querySelector('#istream');
    const select = document.querySelector('.mirvid');
    const playerOptions = select
        ? [...select.querySelectorAll('option')].map(o => o.textContent.trim())
        : [];
    return { iframeSrc: iframe ? iframe.src : '', playerOptions };
})())
"#;

/// Raw fields of a detail page. Empty strings mean the element was absent;
/// the harvester normalizes them to `None` before serialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub cover_img: String,
    pub synopsis: String,
    pub info_items: Vec<String>,
    pub other_episode_links: Vec<ListingEntry>,
}

/// Raw fields of an episode page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePayload {
    pub iframe_src: String,
    pub player_options: Vec<String>,
}

/// Collect every anime anchor from the listing page, in DOM order.
pub fn extract_listing(page: &BrowserScraper) -> Result<Vec<ListingEntry>, ScrapeError> {
    page.wait_for_selector(LISTING_READY_SELECTOR)?;
    Ok(page.evaluate_json(LISTING_SCRIPT)?)
}

/// Extract cover, synopsis, info items, and other-episode links from an
/// anime detail page.
pub fn extract_detail(page: &BrowserScraper) -> Result<DetailPayload, ScrapeError> {
    page.wait_for_selector(DETAIL_READY_SELECTOR)?;
    Ok(page.evaluate_json(DETAIL_SCRIPT)?)
}

/// Extract the player iframe src and mirror options from an episode page.
pub fn extract_episode(page: &BrowserScraper) -> Result<EpisodePayload, ScrapeError> {
    page.wait_for_selector(EPISODE_READY_SELECTOR)?;
    Ok(page.evaluate_json(EPISODE_SCRIPT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The in-page scripts are exercised end to end in tests/pipeline_tests.rs
    // (they need Chrome). These cover the payload decoding.

    #[test]
    fn listing_payload_decodes_in_order() {
        let raw = r#"[
            {"title": "Naruto", "url": "https://oploverz.co.id/anime/naruto/"},
            {"title": "Bleach", "url": "https://oploverz.co.id/anime/bleach/"}
        ]"#;
        let entries: Vec<ListingEntry> = serde_json::from_str(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Naruto");
        assert_eq!(entries[1].url, "https://oploverz.co.id/anime/bleach/");
    }

    #[test]
    fn detail_payload_decodes_with_empty_optionals() {
        let raw = r#"{
            "coverImg": "",
            "synopsis": "",
            "infoItems": ["Status: Ongoing", "Studio: MAPPA"],
            "otherEpisodeLinks": [
                {"title": "Episode 1", "url": "https://oploverz.co.id/x-episode-1/"}
            ]
        }"#;
        let payload: DetailPayload = serde_json::from_str(raw).unwrap();
        assert!(payload.cover_img.is_empty());
        assert!(payload.synopsis.is_empty());
        assert_eq!(payload.info_items.len(), 2);
        assert_eq!(payload.other_episode_links[0].title, "Episode 1");
    }

    #[test]
    fn episode_payload_decodes_without_options() {
        let raw = r#"{"iframeSrc": "https://stream.example.com/v/9", "playerOptions": []}"#;
        let payload: EpisodePayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.iframe_src, "https://stream.example.com/v/9");
        assert!(payload.player_options.is_empty());
    }
}
