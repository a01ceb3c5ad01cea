//! Per-anime and per-episode harvesting.
//!
//! One tab per page visit, closed after use. Detail-page failures propagate
//! to the batch loop (which skips the whole anime); episode failures are
//! logged and only drop that episode.

use crate::browser::{BrowserManager, BrowserScraper};
use crate::error::ScrapeError;
use crate::extract;
use crate::models::{AnimeRecord, EpisodeRecord, ListingEntry};
use log::warn;

/// Visit one anime's detail page and all of its episode pages.
///
/// The first navigation or extraction error on the detail page itself is
/// returned to the caller. Episode-level errors never are.
pub fn harvest_anime(
    manager: &BrowserManager,
    entry: &ListingEntry,
) -> Result<AnimeRecord, ScrapeError> {
    manager.with_tab(|tab| {
        let page = BrowserScraper::with_timeout(tab, manager.config().timeout());
        page.navigate(&entry.url)?;
        let detail = extract::extract_detail(&page)?;

        let episodes = harvest_episodes(manager, &detail.other_episode_links);

        Ok(AnimeRecord {
            title: entry.title.clone(),
            url: entry.url.clone(),
            cover_img: none_if_empty(detail.cover_img),
            synopsis: none_if_empty(detail.synopsis),
            info_items: detail.info_items,
            other_episode_links: detail.other_episode_links,
            episodes,
        })
    })
}

/// Visit each episode link in order and collect the survivors.
///
/// A failing or empty episode is logged and omitted; the relative order of
/// the remaining episodes matches the order of `links`.
pub fn harvest_episodes(manager: &BrowserManager, links: &[ListingEntry]) -> Vec<EpisodeRecord> {
    collect_episodes(links, |link| harvest_episode(manager, link))
}

/// Fold over the episode links: `Ok(Some)` accumulates, `Ok(None)` (a page
/// without player data) and `Err` are logged and dropped.
fn collect_episodes<F>(links: &[ListingEntry], mut harvest_one: F) -> Vec<EpisodeRecord>
where
    F: FnMut(&ListingEntry) -> Result<Option<EpisodeRecord>, ScrapeError>,
{
    let mut episodes = Vec::with_capacity(links.len());
    for link in links {
        match harvest_one(link) {
            Ok(Some(episode)) => episodes.push(episode),
            Ok(None) => {
                warn!(
                    "No iframe or player options found for episode {}, skipping",
                    link.url
                );
            }
            Err(e) => {
                warn!("Error scraping episode {}: {}, skipping", link.url, e);
            }
        }
    }
    episodes
}

/// Visit a single episode page. Returns `Ok(None)` when the page loads but
/// carries neither a player iframe nor any mirror option.
fn harvest_episode(
    manager: &BrowserManager,
    link: &ListingEntry,
) -> Result<Option<EpisodeRecord>, ScrapeError> {
    manager.with_tab(|tab| {
        let page = BrowserScraper::with_timeout(tab, manager.config().timeout());
        page.navigate(&link.url)?;
        let payload = extract::extract_episode(&page)?;

        if payload.iframe_src.is_empty() && payload.player_options.is_empty() {
            return Ok(None);
        }

        Ok(Some(EpisodeRecord {
            title: link.title.clone(),
            url: link.url.clone(),
            iframe_src: none_if_empty(payload.iframe_src),
            player_options: payload.player_options,
        }))
    })
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
