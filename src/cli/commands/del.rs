use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, store: &mut dyn DayStore) -> AppResult<()> {
    if let Commands::Del { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        if store.get_day(d)?.is_none() {
            return Err(AppError::NoWorkDay(d.to_string()));
        }

        if !confirm(&format!(
            "Delete the whole day {}? This action is irreversible.",
            d
        )) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(store, d)?;
        success(format!("Day {} has been deleted.", d));
    }

    Ok(())
}
