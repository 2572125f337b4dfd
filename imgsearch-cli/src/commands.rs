// ABOUTME: Per-file orchestration for the classify and search subcommands
// ABOUTME: Reads, classifies, filters to images, resolves result URLs, and hands them to a browser opener

use anyhow::{Context, Result};
use imgsearch_sdk::{read_header, ImageSource, SearchClient, SignatureTable};
use std::path::PathBuf;

use crate::cli_output::CliOutput;
use crate::types::{ClassifyReport, SearchOutcome, SearchReport};

/// Something that can show a results URL to the user
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the system's default browser
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open browser for {}", url))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Upload files that did not classify as an image
    pub force: bool,
    /// Hand each resolved URL to the opener
    pub open: bool,
}

/// Classify each file from only as many leading bytes as the longest signature needs
pub fn classify_files(table: &SignatureTable, paths: &[PathBuf]) -> Vec<ClassifyReport> {
    let header_len = table.max_pattern_len();

    paths
        .iter()
        .map(|path| match read_header(path, header_len) {
            Ok(header) => ClassifyReport::detected(path, table.classify(&header)),
            Err(e) => {
                log::debug!("Could not read {}: {}", path.display(), e);
                ClassifyReport::failed(path, e)
            }
        })
        .collect()
}

/// Run one reverse image search per file, in order.
///
/// A failing file is reported and the remaining files are still processed.
/// Failing to open the browser only produces a warning since the URL is
/// already part of the report.
pub async fn search_files(
    client: &SearchClient,
    table: &SignatureTable,
    paths: &[PathBuf],
    options: SearchOptions,
    opener: &dyn UrlOpener,
    output: &CliOutput,
) -> Vec<SearchReport> {
    let mut reports = Vec::with_capacity(paths.len());

    for path in paths {
        let source = match ImageSource::from_path(path) {
            Ok(source) => source,
            Err(e) => {
                output.file_failure(path, &e);
                reports.push(SearchReport {
                    path: path.display().to_string(),
                    format: None,
                    outcome: SearchOutcome::Failed,
                    url: None,
                    strategy: None,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        let format = source.classify(table).map(str::to_string);
        let image = format.as_deref().is_some_and(imgsearch_sdk::is_image);

        if !image && !options.force {
            output.warning(&format!(
                "{} is not a recognized image ({}), skipping. Use --force to upload it anyway",
                path.display(),
                format.as_deref().unwrap_or(crate::constants::status::UNKNOWN_FORMAT)
            ));
            reports.push(SearchReport {
                path: path.display().to_string(),
                format,
                outcome: SearchOutcome::Skipped,
                url: None,
                strategy: None,
                error: None,
            });
            continue;
        }

        match client.resolve_source(&source).await {
            Ok(resolved) => {
                log::debug!(
                    "{} resolved via {}: {}",
                    path.display(),
                    resolved.strategy,
                    resolved.url
                );
                if options.open {
                    if let Err(e) = opener.open(&resolved.url) {
                        output.warning(&format!("{:#}", e));
                    }
                }
                reports.push(SearchReport {
                    path: path.display().to_string(),
                    format,
                    outcome: SearchOutcome::Resolved,
                    url: Some(resolved.url),
                    strategy: Some(resolved.strategy),
                    error: None,
                });
            }
            Err(e) => {
                output.file_failure(path, &e);
                reports.push(SearchReport {
                    path: path.display().to_string(),
                    format,
                    outcome: SearchOutcome::Failed,
                    url: None,
                    strategy: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    reports
}
