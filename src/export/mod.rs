pub mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
pub mod range;
pub mod sink;

pub use logic::{ExportLogic, ExportOptions};
pub use range::parse_range;
pub use sink::{DownloadSink, FileSink, MemorySink};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
