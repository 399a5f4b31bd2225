// src/export/mod.rs

mod bundle;
mod csv;
mod fs_utils;
mod json;
pub mod logic;
pub(crate) mod model;
mod pdf;
pub(crate) mod pdf_export;
mod xlsx;

pub use logic::{ExportLogic, ExportRequest, ExportStyle};
pub use model::DailyRecordExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// What to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Daily attendance sheet for one date (PDF)
    Daily,
    /// ZIP archive with one daily sheet per date
    Bundle,
    /// Monthly presence recap (CSV, XLSX or JSON)
    Recap,
    /// Per-person-per-day classified records (CSV or JSON)
    Records,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Daily => "daily",
            ExportKind::Bundle => "bundle",
            ExportKind::Recap => "recap",
            ExportKind::Records => "records",
        }
    }

    /// Formats a kind can be written as; the first one is the default.
    pub fn formats(&self) -> &'static [ExportFormat] {
        match self {
            ExportKind::Daily => &[ExportFormat::Pdf],
            ExportKind::Bundle => &[ExportFormat::Zip],
            ExportKind::Recap => &[ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Json],
            ExportKind::Records => &[ExportFormat::Csv, ExportFormat::Json],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
    Zip,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Zip => "zip",
        }
    }
}
