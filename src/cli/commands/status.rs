use chrono::{DateTime, Local};
use std::future;
use std::io::{self, Write};
use std::time::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::action::ActionLogic;
use crate::core::active_day::ActiveWorkDay;
use crate::core::clock::Clock;
use crate::core::history::{day_times, to_overview};
use crate::core::ticker::{LiveTicker, cancel_on_ctrl_c};
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_kind, color_for_overtime, colorize_optional};
use crate::utils::date::{format_day, weekday_name};
use crate::utils::formatting::{bold, span_cell};
use crate::utils::runtime::single_thread_runtime;
use crate::utils::time::format_live_span;

/// Print the phase, the three spans and the totals of `day`.
pub fn print_day(day: &ActiveWorkDay, cfg: &Config, now: DateTime<Local>) -> AppResult<()> {
    let ov = to_overview(day.work_day());
    let status = ActionLogic::status_of(day);
    let times = day_times(&ov, cfg.daily_target_ms()?);

    header(format!(
        "{} {}",
        weekday_name(day.date()),
        format_day(day.date(), "dd.MM.yyyy")
    ));
    println!("Status          : {}", bold(&status.to_string()));
    println!(
        "Commute to work : {}",
        colorize_optional(&span_cell(ov.start_to_work.as_ref(), ov.end_to_work.as_ref()))
    );
    println!(
        "Work            : {}",
        colorize_optional(&span_cell(ov.start_work.as_ref(), ov.end_work.as_ref()))
    );
    println!(
        "Commute home    : {}",
        colorize_optional(&span_cell(ov.start_to_home.as_ref(), ov.end_to_home.as_ref()))
    );
    println!(
        "Total           : {}  ({}{}{})",
        times.total,
        color_for_overtime(times.overtime_ms),
        times.overtime,
        RESET
    );

    if let Some(current) = day.current_slice()
        && current.is_open()
        && let Some(start) = current.start
    {
        println!(
            "Running         : {}{}{} for {}",
            color_for_kind(current.kind),
            current.kind,
            RESET,
            format_live_span((now - start).num_milliseconds())
        );
    }

    Ok(())
}

/// Redraw the elapsed time of the running slice until Ctrl-C or `limit`.
fn watch(start: DateTime<Local>, period: Duration, limit: Option<Duration>) -> AppResult<()> {
    let rt = single_thread_runtime()?;

    rt.block_on(async move {
        let ticker = LiveTicker::start(period, move |_| {
            let elapsed = (Local::now() - start).num_milliseconds();
            print!("\r⏱  {}   ", format_live_span(elapsed));
            let _ = io::stdout().flush();
        });

        let stop = async {
            match limit {
                Some(d) => tokio::time::sleep(d).await,
                None => future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancel_on_ctrl_c(ticker.token()) => {}
            _ = stop => {}
        }

        ticker.cancel();
        ticker.join().await;
    });

    println!();
    Ok(())
}

pub fn handle(
    cmd: &Commands,
    cfg: &Config,
    store: &mut dyn DayStore,
    clock: &dyn Clock,
) -> AppResult<()> {
    if let Commands::Status { watch: w, for_secs } = cmd {
        let day = ActionLogic::load_today(store, clock)?;
        print_day(&day, cfg, clock.now())?;

        if !*w {
            return Ok(());
        }

        let running = day
            .current_slice()
            .filter(|s| s.is_open())
            .and_then(|s| s.start);

        match running {
            Some(start) => watch(start, cfg.refresh_interval(), for_secs.map(Duration::from_secs))?,
            None => info("Nothing is running right now."),
        }
    }

    Ok(())
}
