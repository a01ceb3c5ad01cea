use super::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

/// Owns the process-wide browser instance and hands out tabs.
///
/// One `BrowserManager` is created at startup and dropped at shutdown,
/// which terminates the Chrome process. Every page visit happens in a
/// child tab obtained through [`BrowserManager::with_tab`], which closes
/// the tab on success and failure alike.
pub struct BrowserManager {
    browser: Arc<Browser>,
    config: BrowserConfig,
}

impl BrowserManager {
    /// Launch Chrome with the given configuration.
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        // Owned strings first; LaunchOptions borrows them as &OsStr.
        let mut owned_args: Vec<String> = config.chrome_flags.clone();
        if config.disable_images {
            owned_args.push("--blink-settings=imagesEnabled=false".to_string());
        }
        if let Some(ua) = &config.user_agent {
            owned_args.push(format!("--user-agent={}", ua));
        }
        let args: Vec<&OsStr> = owned_args.iter().map(OsStr::new).collect();

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .args(args)
            .build()
            .map_err(|e| BrowserError::ConfigurationError(e.to_string()))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::InitializationError(e.to_string()))?;

        Ok(Self {
            browser: Arc::new(browser),
            config,
        })
    }

    /// Create a new tab.
    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        self.browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreationError(e.to_string()))
    }

    /// Run `f` with a fresh tab, closing the tab afterwards regardless of
    /// the outcome.
    pub fn with_tab<T, E>(&self, f: impl FnOnce(Arc<Tab>) -> Result<T, E>) -> Result<T, E>
    where
        E: From<BrowserError>,
    {
        let tab = self.new_tab()?;
        let result = f(Arc::clone(&tab));
        if let Err(e) = tab.close(true) {
            log::warn!("Failed to close tab: {}", e);
        }
        result
    }

    /// Get the browser configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    #[error("Browser configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tab creation failed: {0}")]
    TabCreationError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("JavaScript execution error: {0}")]
    JavaScriptError(String),
}
