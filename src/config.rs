use std::path::PathBuf;
use url::Url;

use crate::errors::{Result, ScrapeError};

pub const DEFAULT_URL: &str =
    "https://ind.nl/nl/openbaar-register-erkende-referenten/openbaar-register-arbeid-regulier-kennismigranten";
pub const DEFAULT_OUTPUT: &str = "registered_employers.csv";
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 100;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub url: String,
    pub output_path: PathBuf,
    pub max_retries: usize,
    pub checkpoint_interval: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            url: DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            max_retries: DEFAULT_MAX_RETRIES,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }
}

impl ScraperConfig {
    // An alternate register URL can be passed as the first argument.
    pub fn from_args() -> Self {
        let mut config = ScraperConfig::default();
        if let Some(url) = std::env::args().nth(1) {
            config.url = url;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.url).map_err(|_| ScrapeError::InvalidUrl(self.url.clone()))?;
        if self.max_retries == 0 {
            return Err(ScrapeError::Config(
                "max_retries must be at least 1".to_string(),
            ));
        }
        if self.checkpoint_interval == 0 {
            return Err(ScrapeError::Config(
                "checkpoint_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ScraperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.checkpoint_interval, 100);
    }

    #[test]
    fn rejects_bad_url() {
        let config = ScraperConfig {
            url: "not a url".to_string(),
            ..ScraperConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScrapeError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_zero_checkpoint_interval() {
        let config = ScraperConfig {
            checkpoint_interval: 0,
            ..ScraperConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScrapeError::Config(_))));
    }
}
