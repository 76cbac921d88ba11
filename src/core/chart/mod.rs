pub mod geometry;
pub mod svg;

pub use geometry::{
    Axis, Chart, DayRow, DisplayWindow, Header, Rect, Tick, TypeTotals, color_for, layout,
    totals_by_type,
};
pub use svg::render_svg;

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};

pub struct ChartLogic;

impl ChartLogic {
    /// Lay out the `days` calendar days ending with `last` (inclusive),
    /// oldest first. Days without a record are skipped.
    pub fn build(
        store: &mut dyn DayStore,
        window: &DisplayWindow,
        last: NaiveDate,
        days: u32,
    ) -> AppResult<Chart> {
        let first = last
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .ok_or_else(|| AppError::InvalidRange(format!("{days} days before {last}")))?;
        let loaded = store.get_days_between(first, last)?;

        debug!("chart over {first}..={last}: {} day(s)", loaded.len());

        Ok(layout(&loaded, window))
    }

    pub fn render(
        store: &mut dyn DayStore,
        window: &DisplayWindow,
        last: NaiveDate,
        days: u32,
    ) -> AppResult<String> {
        Ok(render_svg(&Self::build(store, window, last, days)?))
    }
}
