//! Export module for City Budgeter
//!
//! Writes comparison results in machine-readable formats:
//! - CSV: one row per city (spreadsheet-compatible)
//! - JSON: the budget plus results and skipped cities
//! - YAML: the same document as JSON, human-readable

pub mod csv;
pub mod document;

use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::{BudgeterError, BudgeterResult};
use crate::services::ComparisonReport;

pub use self::csv::export_results_csv;
pub use document::{export_json, export_yaml, ComparisonDocument, ResultRow};

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from an output file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export a comparison report in the given format
///
/// Advice text is written with `symbol` as the currency symbol.
pub fn export_report<W: Write>(
    report: &ComparisonReport,
    format: ExportFormat,
    symbol: &str,
    writer: &mut W,
) -> BudgeterResult<()> {
    match format {
        ExportFormat::Csv => export_results_csv(report, symbol, writer),
        ExportFormat::Json => export_json(report, symbol, writer),
        ExportFormat::Yaml => export_yaml(report, symbol, writer),
    }?;

    writer
        .flush()
        .map_err(|e| BudgeterError::Export(format!("Failed to flush output: {}", e)))
}
