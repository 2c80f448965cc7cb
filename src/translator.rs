use log::warn;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

use crate::delay_manager;
use crate::errors::{Result, ScrapeError};

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// One call is one attempt; retry policy lives in translate_with_retry.
pub trait Translator {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String>;
}

pub fn translate_with_retry(
    translator: &dyn Translator,
    text: &str,
    source: &str,
    dest: &str,
    max_retries: usize,
) -> Result<String> {
    let mut retries = 0;
    while retries < max_retries {
        match translator.translate(text, source, dest) {
            Ok(translated) => return Ok(translated),
            Err(e) => {
                retries += 1;
                warn!(
                    "Translation error for '{}' to '{}': {}. Retrying {}/{}...",
                    text, dest, e, retries, max_retries
                );
                delay_manager::retry_backoff();
            }
        }
    }
    Err(ScrapeError::Translation {
        text: text.to_string(),
        dest: dest.to_string(),
        retries: max_retries,
    })
}

pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build translation client");
        GoogleTranslator { client }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        GoogleTranslator::new()
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let url = format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            TRANSLATE_ENDPOINT,
            source,
            dest,
            urlencoding::encode(text)
        );

        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(ScrapeError::TranslationStatus(resp.status()));
        }

        let body: Value = resp.json()?;
        parse_gtx_response(&body).ok_or(ScrapeError::MalformedTranslation)
    }
}

// The gtx endpoint answers with nested arrays; the translation is spread over
// the first element of each segment under index 0.
fn parse_gtx_response(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut translated = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            translated.push_str(part);
        }
    }
    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FlakyTranslator {
        fail_first: usize,
        attempts: RefCell<usize>,
    }

    impl FlakyTranslator {
        fn new(fail_first: usize) -> Self {
            FlakyTranslator {
                fail_first,
                attempts: RefCell::new(0),
            }
        }
    }

    impl Translator for FlakyTranslator {
        fn translate(&self, text: &str, _source: &str, dest: &str) -> Result<String> {
            let mut attempts = self.attempts.borrow_mut();
            *attempts += 1;
            if *attempts <= self.fail_first {
                Err(ScrapeError::MalformedTranslation)
            } else {
                Ok(format!("{} ({})", text, dest))
            }
        }
    }

    #[test]
    fn succeeds_after_transient_failure() {
        let translator = FlakyTranslator::new(1);
        let translated = translate_with_retry(&translator, "Bakkerij", "nl", "en", 3).unwrap();
        assert_eq!(translated, "Bakkerij (en)");
        assert_eq!(*translator.attempts.borrow(), 2);
    }

    #[test]
    fn never_exceeds_max_retries() {
        let translator = FlakyTranslator::new(usize::MAX);
        let err = translate_with_retry(&translator, "Bakkerij", "nl", "es", 1).unwrap_err();
        assert_eq!(*translator.attempts.borrow(), 1);
        match err {
            ScrapeError::Translation {
                text,
                dest,
                retries,
            } => {
                assert_eq!(text, "Bakkerij");
                assert_eq!(dest, "es");
                assert_eq!(retries, 1);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn parses_gtx_body() {
        let body: Value = serde_json::from_str(
            r#"[[["Royal Philips","Koninklijke Philips",null,null,10]],null,"nl"]"#,
        )
        .unwrap();
        assert_eq!(parse_gtx_response(&body).unwrap(), "Royal Philips");
    }

    #[test]
    fn parses_multi_segment_body() {
        let body: Value = serde_json::from_str(
            r#"[[["United ","Verenigde ",null,null],["Bakeries","Bakkerijen",null,null]],null,"nl"]"#,
        )
        .unwrap();
        assert_eq!(parse_gtx_response(&body).unwrap(), "United Bakeries");
    }

    #[test]
    fn rejects_unexpected_body() {
        let body: Value = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        assert!(parse_gtx_response(&body).is_none());
    }
}
