use std::time::Duration;

/// Configuration for the browser instance.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,

    /// Browser window size
    pub window_size: (u32, u32),

    /// Custom user agent
    pub user_agent: Option<String>,

    /// Navigation and wait-for-selector timeout in seconds
    pub timeout_seconds: u64,

    /// Disable image loading for performance
    pub disable_images: bool,

    /// Additional Chrome flags
    pub chrome_flags: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36"
                    .to_string(),
            ),
            timeout_seconds: 60,
            disable_images: true,
            chrome_flags: vec![
                "--no-sandbox".to_string(),
                "--disable-setuid-sandbox".to_string(),
            ],
        }
    }
}

impl BrowserConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_size, (1920, 1080));
        assert!(config.user_agent.is_some());
        assert!(config.chrome_flags.iter().any(|f| f == "--no-sandbox"));
    }
}
