use register_scraper_lib::{extractor, logger};
use register_scraper_lib::{CsvWriter, Fetcher, GoogleTranslator, Result, RunState, ScraperConfig, TableParser};

use log::{error, info};
use scraper::Html;
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init();
    info!("Starting Register Scraper...");

    let config = ScraperConfig::from_args();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ScraperConfig) -> Result<()> {
    config.validate()?;

    let fetcher = Fetcher::new(config.max_retries);
    let parser = TableParser::new();
    let translator = GoogleTranslator::new();
    let writer = CsvWriter::new(&config.output_path);
    let mut state = RunState::new();

    info!("Fetching {}", config.url);
    let html = fetcher.fetch(&config.url)?;

    let document = Html::parse_document(&html);
    let table = parser.first_table(&document)?;

    extractor::extract_rows(table, &parser, &translator, config, &writer, &mut state)?;

    writer.save(&state.records, false)?;
    state.log_summary();
    Ok(())
}
