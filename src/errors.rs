use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to retrieve content. Status code: {0}")]
    FetchStatus(reqwest::StatusCode),

    #[error("Failed to retrieve content after {0} retries due to timeouts")]
    FetchRetriesExhausted(usize),

    #[error("No table found on the page")]
    NoTableFound,

    #[error("Failed to translate '{text}' to '{dest}' after {retries} retries")]
    Translation {
        text: String,
        dest: String,
        retries: usize,
    },

    #[error("Translation service returned status {0}")]
    TranslationStatus(reqwest::StatusCode),

    #[error("Translation service returned an unexpected response")]
    MalformedTranslation,

    #[error("Invalid source URL '{0}'")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
