use log::warn;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;

use crate::delay_manager;
use crate::errors::{Result, ScrapeError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct Fetcher {
    client: Client,
    max_retries: usize,
}

impl Fetcher {
    pub fn new(max_retries: usize) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("nl-NL,nl;q=0.9,en;q=0.8"),
        );

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Fetcher {
            client,
            max_retries,
        }
    }

    pub fn fetch(&self, url: &str) -> Result<String> {
        let mut retries = 0;
        while retries < self.max_retries {
            match self.get_page(url) {
                Ok(body) => return Ok(body),
                Err(ScrapeError::Http(e)) if e.is_timeout() || e.is_connect() => {
                    retries += 1;
                    warn!(
                        "Timeout or connection error encountered. Retrying {}/{}...",
                        retries, self.max_retries
                    );
                    delay_manager::retry_backoff();
                }
                Err(e) => return Err(e),
            }
        }
        Err(ScrapeError::FetchRetriesExhausted(self.max_retries))
    }

    fn get_page(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        // Any non-200 status aborts the run, no retry.
        if resp.status() != StatusCode::OK {
            return Err(ScrapeError::FetchStatus(resp.status()));
        }
        Ok(resp.text()?)
    }
}
