use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::core::history::{HistoryLogic, group_by_month, to_overview};
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::{export_file_name, overviews_to_csv};
use crate::export::json::overviews_to_json;
use crate::export::sink::DownloadSink;
use crate::models::WorkDayOverview;

pub struct ExportOptions {
    pub format: ExportFormat,
    pub separator: String,
    pub target_ms: i64,
    /// Overrides the generated file name.
    pub file_name: Option<String>,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Overviews of the stored days inside `bounds` in history order:
    /// newest month first, newest day first within a month.
    pub fn load(
        store: &mut dyn DayStore,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<WorkDayOverview>> {
        let days = match bounds {
            Some((from, to)) => store.get_days_between(from, to)?,
            None => store.get_all_days()?,
        };
        let groups = group_by_month(days.iter().map(to_overview).collect());
        Ok(HistoryLogic::rows(&groups))
    }

    pub fn render(overviews: &[WorkDayOverview], opts: &ExportOptions) -> AppResult<String> {
        match opts.format {
            ExportFormat::Csv => overviews_to_csv(overviews, &opts.separator),
            ExportFormat::Json => overviews_to_json(overviews, opts.target_ms),
        }
    }

    /// Export the days inside `bounds` through `sink`. `Ok(None)` when there
    /// is nothing to export.
    pub fn export(
        store: &mut dyn DayStore,
        bounds: Option<(NaiveDate, NaiveDate)>,
        opts: &ExportOptions,
        sink: &mut dyn DownloadSink,
    ) -> AppResult<Option<PathBuf>> {
        let overviews = Self::load(store, bounds)?;

        let Some(default_name) = export_file_name(&overviews) else {
            return Ok(None);
        };

        let file_name = match &opts.file_name {
            Some(name) => name.clone(),
            None => match opts.format {
                ExportFormat::Csv => default_name,
                ExportFormat::Json => default_name.replace(".csv", ".json"),
            },
        };

        let text = Self::render(&overviews, opts)?;
        let path = sink.save(text.as_bytes(), &file_name)?;

        store.audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} day(s) as {}", overviews.len(), opts.format.as_str()),
        );
        info!("exported {} day(s) to {}", overviews.len(), path.display());

        Ok(Some(path))
    }
}
