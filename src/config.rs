use log::warn;

/// The single listing page enumerating every anime on the site.
pub const LISTING_URL: &str = "https://oploverz.co.id/anime-list/";

/// Directory the output file is written into, created if missing.
pub const OUTPUT_DIR: &str = "public";

/// Name of the JSON output file inside [`OUTPUT_DIR`].
pub const OUTPUT_FILE: &str = "anime.json";

/// Batch selection read from the environment.
///
/// `BATCH_INDEX` and `BATCH_SIZE` both default to 0 when unset or
/// unparseable; a zero size yields an empty window, which makes the run a
/// successful no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub batch_index: usize,
    pub batch_size: usize,
}

impl BatchConfig {
    pub fn from_env() -> Self {
        Self {
            batch_index: env_usize("BATCH_INDEX"),
            batch_size: env_usize("BATCH_SIZE"),
        }
    }

    /// Compute the half-open window `[index*size, index*size+size)` clamped
    /// to the listing length.
    pub fn window(&self, listing_len: usize) -> BatchWindow {
        let start = self
            .batch_index
            .saturating_mul(self.batch_size)
            .min(listing_len);
        let end = start.saturating_add(self.batch_size).min(listing_len);
        BatchWindow { start, end }
    }
}

/// The contiguous slice of the listing processed by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchWindow {
    pub start: usize,
    pub end: usize,
}

impl BatchWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

fn env_usize(key: &str) -> usize {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("{}={:?} is not a valid integer, defaulting to 0", key, raw);
                0
            }
        },
        Err(_) => 0,
    }
}
