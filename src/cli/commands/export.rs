use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ExportOptions, FileSink, notify_export_success, parse_range};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, store: &mut dyn DayStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        separator,
        force,
    } = cmd
    {
        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        // an explicit file splits into the sink directory and the name
        let (dir, file_name) = match file {
            Some(f) => {
                let path = expand_tilde(f);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .ok_or_else(|| AppError::Export(format!("not a file path: {f}")))?;
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                (dir, Some(name))
            }
            None => (expand_tilde(&cfg.export_dir), None),
        };

        let opts = ExportOptions {
            format: *format,
            separator: separator.clone().unwrap_or_else(|| cfg.csv_separator.clone()),
            target_ms: cfg.daily_target_ms()?,
            file_name,
        };

        let mut sink = FileSink::new(dir, *force);

        match ExportLogic::export(store, bounds, &opts, &mut sink)? {
            Some(path) => notify_export_success(&format.as_str().to_uppercase(), &path),
            None => warning("No days found for the selected range."),
        }
    }

    Ok(())
}
