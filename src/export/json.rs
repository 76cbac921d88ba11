use serde::Serialize;

use crate::core::history::day_times;
use crate::errors::AppResult;
use crate::models::WorkDayOverview;

/// Overview plus the derived totals, as written to JSON exports.
#[derive(Serialize)]
struct JsonDay<'a> {
    #[serde(flatten)]
    overview: &'a WorkDayOverview,
    total: String,
    overtime: String,
}

pub fn overviews_to_json(overviews: &[WorkDayOverview], target_ms: i64) -> AppResult<String> {
    let days: Vec<JsonDay<'_>> = overviews
        .iter()
        .map(|ov| {
            let t = day_times(ov, target_ms);
            JsonDay {
                overview: ov,
                total: t.total,
                overtime: t.overtime,
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&days)?)
}
