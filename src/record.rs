use log::info;
use serde::Serialize;
use std::time::Instant;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_ERROR: &str = "None";

// Appended once per processed table row, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RowRecord {
    #[serde(rename = "Row Number")]
    pub row_number: usize,
    #[serde(rename = "Company Name (Dutch)")]
    pub source_name: String,
    #[serde(rename = "Company Name (English)")]
    pub name_en: String,
    #[serde(rename = "Company Name (Spanish)")]
    pub name_es: String,
    #[serde(rename = "Error")]
    pub error: String,
}

pub struct RunState {
    pub records: Vec<RowRecord>,
    started_at: Instant,
}

impl RunState {
    pub fn new() -> Self {
        RunState {
            records: Vec::new(),
            started_at: Instant::now(),
        }
    }

    pub fn push(&mut self, record: RowRecord) {
        self.records.push(record);
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    pub fn log_summary(&self) {
        info!("SUMMARY:");
        info!("Total rows scraped: {}", self.records.len());
        info!("Time elapsed: {:.2} seconds", self.elapsed_secs());
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::new()
    }
}
