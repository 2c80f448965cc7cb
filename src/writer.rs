use log::info;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::record::RowRecord;

pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CsvWriter {
            path: path.as_ref().to_path_buf(),
        }
    }

    // Each save rewrites the whole accumulated dataset.
    pub fn save(&self, records: &[RowRecord], partial: bool) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new().from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        if partial {
            info!("Partial data successfully saved to {}", self.path.display());
        } else {
            info!("Final data successfully saved to {}", self.path.display());
        }
        Ok(())
    }
}
