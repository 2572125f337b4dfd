// ABOUTME: This module handles output formatting for the imgsearch CLI
// ABOUTME: It provides table formatting with color support and JSON output

use anyhow::Result;
use imgsearch_sdk::SignatureTable;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants;
use crate::types::{ClassifyReport, SearchOutcome, SearchReport};

pub trait OutputFormat {
    fn format_classified(&self, reports: &[ClassifyReport]) -> Result<String>;
    fn format_searches(&self, reports: &[SearchReport]) -> Result<String>;
    fn format_signatures(&self, table: &SignatureTable) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn format_format(&self, format: Option<&str>, image: bool) -> String {
        let text = format.unwrap_or(constants::status::UNKNOWN_FORMAT);

        if !self.use_color {
            return text.to_string();
        }
        match format {
            None => text.dimmed().to_string(),
            Some(_) if image => text.green().to_string(),
            Some(_) => text.to_string(),
        }
    }

    fn format_outcome(&self, outcome: SearchOutcome) -> String {
        if !self.use_color {
            return outcome.to_string();
        }
        match outcome {
            SearchOutcome::Resolved => outcome.to_string().green().to_string(),
            SearchOutcome::Skipped => outcome.to_string().dimmed().to_string(),
            SearchOutcome::Failed => outcome.to_string().red().to_string(),
        }
    }
}

#[derive(Tabled)]
struct ClassifyRow {
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Format")]
    format: String,
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Result")]
    outcome: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct SignatureRow {
    #[tabled(rename = "Extension")]
    extension: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
}

#[derive(Serialize)]
struct SignatureJson<'a> {
    extension: &'a str,
    pattern: String,
}

impl OutputFormat for TableFormatter {
    fn format_classified(&self, reports: &[ClassifyReport]) -> Result<String> {
        let rows: Vec<ClassifyRow> = reports
            .iter()
            .map(|report| ClassifyRow {
                path: report.path.clone(),
                format: match report.error {
                    Some(ref error) => error.clone(),
                    None => self.format_format(report.format.as_deref(), report.image),
                },
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }

    fn format_searches(&self, reports: &[SearchReport]) -> Result<String> {
        let rows: Vec<SearchRow> = reports
            .iter()
            .map(|report| SearchRow {
                path: report.path.clone(),
                format: self.format_format(
                    report.format.as_deref(),
                    report.format.as_deref().is_some_and(imgsearch_sdk::is_image),
                ),
                outcome: self.format_outcome(report.outcome),
                url: report
                    .url
                    .clone()
                    .or_else(|| report.error.clone())
                    .unwrap_or_default(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }

    fn format_signatures(&self, signatures: &SignatureTable) -> Result<String> {
        let rows: Vec<SignatureRow> = signatures
            .entries()
            .iter()
            .map(|entry| SignatureRow {
                extension: entry.extension().to_string(),
                pattern: entry.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_classified(&self, reports: &[ClassifyReport]) -> Result<String> {
        self.render(reports)
    }

    fn format_searches(&self, reports: &[SearchReport]) -> Result<String> {
        self.render(reports)
    }

    fn format_signatures(&self, table: &SignatureTable) -> Result<String> {
        let entries: Vec<SignatureJson> = table
            .entries()
            .iter()
            .map(|entry| SignatureJson {
                extension: entry.extension(),
                pattern: entry.to_string(),
            })
            .collect();
        self.render(&entries)
    }
}
