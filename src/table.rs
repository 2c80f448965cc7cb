use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::errors::{Result, ScrapeError};

pub struct TableParser {
    table_selector: Selector,
    row_selector: Selector,
    cell_selector: Selector,
    whitespace: Regex,
}

impl TableParser {
    pub fn new() -> Self {
        TableParser {
            table_selector: Selector::parse("table").unwrap(),
            row_selector: Selector::parse("tr").unwrap(),
            cell_selector: Selector::parse("td").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn first_table<'a>(&self, document: &'a Html) -> Result<ElementRef<'a>> {
        document
            .select(&self.table_selector)
            .next()
            .ok_or(ScrapeError::NoTableFound)
    }

    pub fn rows<'a>(&self, table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        table.select(&self.row_selector).collect()
    }

    // Text of each td cell, with runs of whitespace collapsed to one space.
    pub fn cell_texts(&self, row: ElementRef<'_>) -> Vec<String> {
        row.select(&self.cell_selector)
            .map(|cell| self.normalize(&cell.text().collect::<String>()))
            .collect()
    }

    fn normalize(&self, raw: &str) -> String {
        self.whitespace.replace_all(raw, " ").trim().to_string()
    }
}

impl Default for TableParser {
    fn default() -> Self {
        TableParser::new()
    }
}
