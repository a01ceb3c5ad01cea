use serde::{Deserialize, Serialize};

/// One anchor from the listing page (or an other-episode link on a detail
/// page): trimmed anchor text plus absolute href.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub url: String,
}

/// Aggregated data for one anime, as written to `public/anime.json`.
///
/// Optional fields and empty collections are omitted from the JSON output
/// entirely rather than serialized as null or empty values, matching what
/// the site front end expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cover_img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub synopsis: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub info_items: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub other_episode_links: Vec<ListingEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub episodes: Vec<EpisodeRecord>,
}

/// Player data for one episode page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRecord {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub iframe_src: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub player_options: Vec<String>,
}
