use log::{info, warn};
use scraper::ElementRef;

use crate::config::ScraperConfig;
use crate::errors::Result;
use crate::record::{RowRecord, RunState, NOT_AVAILABLE, NO_ERROR};
use crate::table::TableParser;
use crate::translator::{translate_with_retry, Translator};
use crate::writer::CsvWriter;

pub const SOURCE_LANG: &str = "nl";
pub const DEST_LANG_EN: &str = "en";
pub const DEST_LANG_ES: &str = "es";

pub fn extract_rows(
    table: ElementRef<'_>,
    parser: &TableParser,
    translator: &dyn Translator,
    config: &ScraperConfig,
    writer: &CsvWriter,
    state: &mut RunState,
) -> Result<()> {
    let rows = parser.rows(table);

    // The first row carries the column titles.
    for row in rows.into_iter().skip(1) {
        let cells = parser.cell_texts(row);
        if cells.is_empty() {
            continue;
        }

        let source_name = cells[0].clone();
        // Every processed row takes the next number, recorded failures included.
        let row_number = state.records.len() + 1;

        match translate_row(&source_name, translator, config.max_retries) {
            Ok((name_en, name_es)) => {
                info!("Row {} scraped:", row_number);
                info!("  Dutch: {}", source_name);
                info!("  English: {}", name_en);
                info!("  Spanish: {}", name_es);
                state.push(RowRecord {
                    row_number,
                    source_name,
                    name_en,
                    name_es,
                    error: NO_ERROR.to_string(),
                });
            }
            Err(e) => {
                warn!("Recording row {} with error: {}", row_number, e);
                state.push(RowRecord {
                    row_number,
                    source_name,
                    name_en: NOT_AVAILABLE.to_string(),
                    name_es: NOT_AVAILABLE.to_string(),
                    error: e.to_string(),
                });
            }
        }

        if state.records.len() % config.checkpoint_interval == 0 {
            writer.save(&state.records, true)?;
            info!("Progress saved after {} rows.", state.records.len());
        }
    }

    Ok(())
}

fn translate_row(
    source_name: &str,
    translator: &dyn Translator,
    max_retries: usize,
) -> Result<(String, String)> {
    let name_en =
        translate_with_retry(translator, source_name, SOURCE_LANG, DEST_LANG_EN, max_retries)?;
    let name_es =
        translate_with_retry(translator, source_name, SOURCE_LANG, DEST_LANG_ES, max_retries)?;
    Ok((name_en, name_es))
}
