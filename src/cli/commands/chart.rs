use std::fs;
use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartLogic;
use crate::core::clock::Clock;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::path::expand_tilde;

pub fn handle(
    cmd: &Commands,
    cfg: &Config,
    store: &mut dyn DayStore,
    clock: &dyn Clock,
) -> AppResult<()> {
    if let Commands::Chart { file, days, force } = cmd {
        let path = expand_tilde(file);
        let days = days.unwrap_or(cfg.chart_days);
        if days == 0 {
            return Err(AppError::Other("--days must be at least 1".into()));
        }

        let window = cfg.chart_window()?;
        let svg = ChartLogic::render(store, &window, clock.now().date_naive(), days)?;

        if path.exists()
            && !*force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                path.display()
            ))
        {
            info("Chart not written.");
            return Ok(());
        }

        write_file(&path, &svg)?;
        store.audit("chart", &path.to_string_lossy(), &format!("Last {days} day(s)"));
        success(format!("Chart written: {}", path.display()));
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
