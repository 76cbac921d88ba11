use std::fmt;

use crate::core::action::Action;
use crate::models::WorkDayOverview;

/// Phase of the tracked day, derived from its overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Initial,
    CommutingToWork,
    AtWork,
    CommutingHome,
    Finished,
}

impl DayStatus {
    /// Ordered decision chain: each arm assumes all previous ones failed.
    pub fn classify(view: &WorkDayOverview) -> Self {
        if view.start_to_work.is_none() {
            DayStatus::Initial
        } else if view.start_work.is_none() {
            DayStatus::CommutingToWork
        } else if view.start_to_home.is_none() {
            DayStatus::AtWork
        } else if view.end_to_home.is_none() {
            DayStatus::CommutingHome
        } else {
            DayStatus::Finished
        }
    }

    /// Actions that make sense in this phase.
    pub fn allowed_actions(&self) -> &'static [Action] {
        match self {
            DayStatus::Initial => &[Action::StartTransfer],
            DayStatus::CommutingToWork => &[Action::StartWork, Action::EndTransfer],
            DayStatus::AtWork => &[Action::StartTransfer, Action::EndWork],
            DayStatus::CommutingHome => &[Action::EndTransfer],
            DayStatus::Finished => &[],
        }
    }

    pub fn allows(&self, action: Action) -> bool {
        self.allowed_actions().contains(&action)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DayStatus::Initial => "not started",
            DayStatus::CommutingToWork => "commuting to work",
            DayStatus::AtWork => "at work",
            DayStatus::CommutingHome => "commuting home",
            DayStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}
