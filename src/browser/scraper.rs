use super::manager::BrowserError;
use headless_chrome::Tab;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// High-level scraping operations for a single tab.
pub struct BrowserScraper {
    tab: Arc<Tab>,
    default_timeout: Duration,
}

impl BrowserScraper {
    /// Create a new scraper with the given tab
    pub fn new(tab: Arc<Tab>) -> Self {
        Self {
            tab,
            default_timeout: Duration::from_secs(60),
        }
    }

    /// Create a new scraper with a custom default timeout
    pub fn with_timeout(tab: Arc<Tab>, timeout: Duration) -> Self {
        Self {
            tab,
            default_timeout: timeout,
        }
    }

    /// Navigate to a URL and wait for page load
    pub fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.tab.navigate_to(url).map_err(|e| {
            BrowserError::NavigationError(format!("Failed to navigate to {}: {}", url, e))
        })?;

        self.tab.wait_until_navigated().map_err(|e| {
            BrowserError::NavigationError(format!("Navigation timeout for {}: {}", url, e))
        })?;

        Ok(())
    }

    /// Wait for an element matching the given CSS selector
    pub fn wait_for_selector(&self, selector: &str) -> Result<(), BrowserError> {
        self.wait_for_selector_with_timeout(selector, self.default_timeout)
    }

    /// Wait for an element with a custom timeout
    pub fn wait_for_selector_with_timeout(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let start = Instant::now();

        loop {
            if start.elapsed() > timeout {
                return Err(BrowserError::Timeout(format!(
                    "Waiting for selector: {}",
                    selector
                )));
            }

            let script = format!(
                r#"document.querySelector('{}') !== null"#,
                selector.replace('\'', "\\'")
            );

            match self.tab.evaluate(&script, false) {
                Ok(result) => {
                    if let Some(value) = result.value {
                        if value.as_bool() == Some(true) {
                            return Ok(());
                        }
                    }
                }
                Err(_) => {
                    // Element not found yet, continue waiting
                }
            }

            std::thread::sleep(Duration::from_millis(100));
        }
    }

    /// Execute JavaScript that returns `JSON.stringify(...)` output and
    /// decode it into a typed value.
    ///
    /// Going through a string keeps the tab protocol simple: primitives and
    /// objects alike come back as one JSON document, decoded with serde on
    /// this side.
    pub fn evaluate_json<T: DeserializeOwned>(&self, script: &str) -> Result<T, BrowserError> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        let raw = result
            .value
            .and_then(|v| v.as_str().map(str::to_owned))
            .ok_or_else(|| {
                BrowserError::JavaScriptError("Script returned no value".to_string())
            })?;

        serde_json::from_str(&raw)
            .map_err(|e| BrowserError::JavaScriptError(format!("Payload did not decode: {}", e)))
    }

    /// Execute JavaScript and return the result as a string
    pub fn evaluate_script(&self, script: &str) -> Result<String, BrowserError> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        result
            .value
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .ok_or_else(|| BrowserError::JavaScriptError("Script returned no value".to_string()))
    }
}
