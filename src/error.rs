use crate::browser::BrowserError;
use thiserror::Error;

/// Pipeline error type.
///
/// A `ScrapeError` is fatal when the listing fetch raises it and
/// skip-and-continue when a single anime or episode does. The variants only
/// classify what went wrong, not how to react.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Page failed to load or a ready condition timed out
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// In-page extraction script failed or produced an undecodable payload
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Browser launch or tab management failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// Output directory or file could not be written
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failed
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<BrowserError> for ScrapeError {
    fn from(err: BrowserError) -> Self {
        match err {
            BrowserError::NavigationError(_) | BrowserError::Timeout(_) => {
                ScrapeError::Navigation(err.to_string())
            }
            BrowserError::JavaScriptError(_) => ScrapeError::Extraction(err.to_string()),
            other => ScrapeError::Browser(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_errors_map_to_pipeline_kinds() {
        let nav: ScrapeError = BrowserError::Timeout("Waiting for selector: body".into()).into();
        assert!(matches!(nav, ScrapeError::Navigation(_)));

        let eval: ScrapeError = BrowserError::JavaScriptError("boom".into()).into();
        assert!(matches!(eval, ScrapeError::Extraction(_)));

        let launch: ScrapeError = BrowserError::InitializationError("no chrome".into()).into();
        assert!(matches!(launch, ScrapeError::Browser(_)));
    }
}
