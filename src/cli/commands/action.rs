use crate::cli::commands::status::print_day;
use crate::config::Config;
use crate::core::action::{Action, ActionLogic};
use crate::core::clock::Clock;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle `start-transfer`, `start-work`, `end-work` and `end-transfer`.
pub fn handle(
    action: Action,
    cfg: &Config,
    store: &mut dyn DayStore,
    clock: &dyn Clock,
) -> AppResult<()> {
    let day = ActionLogic::run(store, clock, action)?;
    let status = ActionLogic::status_of(&day);

    success(format!(
        "{} at {}, now {}",
        action,
        clock.now().format("%H:%M"),
        status
    ));
    print_day(&day, cfg, clock.now())?;

    Ok(())
}
