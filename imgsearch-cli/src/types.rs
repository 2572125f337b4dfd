// ABOUTME: Per-file report types shared by the commands and the output formatters
// ABOUTME: Records detected format, search outcome, and any failure for each input file

use crate::constants;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOutcome {
    Resolved,
    Skipped,
    Failed,
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Resolved => write!(f, "{}", constants::status::RESOLVED),
            SearchOutcome::Skipped => write!(f, "{}", constants::status::SKIPPED),
            SearchOutcome::Failed => write!(f, "{}", constants::status::FAILED),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifyReport {
    pub path: String,
    pub format: Option<String>,
    pub image: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyReport {
    pub fn detected(path: &Path, format: Option<&str>) -> Self {
        Self {
            path: path.display().to_string(),
            format: format.map(str::to_string),
            image: format.is_some_and(imgsearch_sdk::is_image),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: impl fmt::Display) -> Self {
        Self {
            path: path.display().to_string(),
            format: None,
            image: false,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub path: String,
    pub format: Option<String>,
    pub outcome: SearchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchReport {
    pub fn is_failure(&self) -> bool {
        self.outcome == SearchOutcome::Failed
    }
}
