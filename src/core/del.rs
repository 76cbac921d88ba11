use chrono::NaiveDate;
use tracing::info;

use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::day_key;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the whole day. Confirmation is the caller's business.
    pub fn apply(store: &mut dyn DayStore, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if !store.delete_day(day_key(date))? {
            return Err(AppError::NoWorkDay(date_str));
        }

        store.audit("del", &date_str, "Deleted work day");
        info!("deleted work day {date_str}");
        Ok(())
    }
}
