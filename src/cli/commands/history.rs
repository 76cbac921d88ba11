use chrono::Datelike;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HistoryLogic, MonthGroup, day_times};
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::export::parse_range;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_overtime, colorize_optional};
use crate::utils::date::{format_day, month_name, weekday_name};
use crate::utils::formatting::span_cell;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hh_mm;

fn print_group(group: &MonthGroup, target_ms: i64) {
    header(format!(
        "{} {}",
        month_name(group.month.month()),
        group.month.year()
    ));

    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Day"),
        Column::new("To work"),
        Column::new("Work"),
        Column::new("Home"),
        Column::new("Total"),
        Column::new("Overtime"),
    ]);

    for ov in &group.days {
        let t = day_times(ov, target_ms);
        table.add_row(vec![
            format_day(ov.date, "dd.MM.yyyy"),
            weekday_name(ov.date).to_string(),
            colorize_optional(&span_cell(ov.start_to_work.as_ref(), ov.end_to_work.as_ref())),
            colorize_optional(&span_cell(ov.start_work.as_ref(), ov.end_work.as_ref())),
            colorize_optional(&span_cell(ov.start_to_home.as_ref(), ov.end_to_home.as_ref())),
            t.total,
            format!("{}{}{}", color_for_overtime(t.overtime_ms), t.overtime, RESET),
        ]);
    }

    print!("{}", table.render());
    println!(
        "Work {} · Commute {}\n",
        format_hh_mm(group.work_time_ms()),
        format_hh_mm(group.drive_time_ms())
    );
}

pub fn handle(cmd: &Commands, cfg: &Config, store: &mut dyn DayStore) -> AppResult<()> {
    if let Commands::History { period } = cmd {
        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };

        let groups = HistoryLogic::load(store, bounds)?;
        if groups.is_empty() {
            warning("No days recorded for the selected period.");
            return Ok(());
        }

        let target_ms = cfg.daily_target_ms()?;
        for g in &groups {
            print_group(g, target_ms);
        }
    }

    Ok(())
}
