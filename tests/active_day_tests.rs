mod common;
use common::{at, date};

use rworkday::core::action::{Action, ActionLogic};
use rworkday::core::active_day::ActiveWorkDay;
use rworkday::core::clock::FixedClock;
use rworkday::core::status::DayStatus;
use rworkday::db::store::{DayStore, MemoryDayStore};
use rworkday::errors::AppError;
use rworkday::models::{TimeSlice, TimeSliceType, WorkDay};

fn open_slices(day: &ActiveWorkDay) -> Vec<usize> {
    day.slices()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_open())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn close_is_idempotent() {
    let d = date(2024, 2, 10);
    let mut day = ActiveWorkDay::new(d);
    day.open_if_none_running_at(TimeSliceType::Work, at(d, 8, 0));

    day.close_current_if_open_at(at(d, 12, 0));
    let once = day.clone();
    day.close_current_if_open_at(at(d, 13, 0));

    assert_eq!(day, once);
    assert_eq!(day.slices()[0].end, Some(at(d, 12, 0)));
}

#[test]
fn close_on_empty_day_is_noop() {
    let d = date(2024, 2, 10);
    let mut day = ActiveWorkDay::new(d);
    day.close_current_if_open_at(at(d, 9, 0));
    assert!(day.slices().is_empty());
}

#[test]
fn open_does_nothing_while_running() {
    let d = date(2024, 2, 10);
    let mut day = ActiveWorkDay::new(d);

    day.open_if_none_running_at(TimeSliceType::Transfer, at(d, 6, 0));
    day.open_if_none_running_at(TimeSliceType::Work, at(d, 6, 30));

    assert_eq!(day.slices().len(), 1);
    assert_eq!(day.slices()[0].kind, TimeSliceType::Transfer);
    assert!(day.is_running());
}

#[test]
fn at_most_one_open_slice_and_it_is_last() {
    let d = date(2024, 2, 10);
    let mut day = ActiveWorkDay::new(d);

    let steps: [(bool, TimeSliceType); 8] = [
        (false, TimeSliceType::Transfer),
        (false, TimeSliceType::Work),
        (true, TimeSliceType::Work),
        (false, TimeSliceType::Work),
        (true, TimeSliceType::Work),
        (true, TimeSliceType::Work),
        (false, TimeSliceType::Pause),
        (false, TimeSliceType::Transfer),
    ];

    for (i, (close, kind)) in steps.into_iter().enumerate() {
        let now = at(d, 6 + i as u32, 0);
        if close {
            day.close_current_if_open_at(now);
        } else {
            day.open_if_none_running_at(kind, now);
        }

        let open = open_slices(&day);
        assert!(open.len() <= 1, "step {i}: {open:?}");
        if let Some(&idx) = open.first() {
            assert_eq!(idx, day.slices().len() - 1);
        }
    }
}

#[test]
fn persisted_days_are_sorted_on_load() {
    let d = date(2024, 2, 10);
    let work = TimeSlice::new(Some(at(d, 7, 0)), Some(at(d, 16, 0)), TimeSliceType::Work);
    let commute = TimeSlice::new(Some(at(d, 6, 30)), Some(at(d, 7, 0)), TimeSliceType::Transfer);

    let day = ActiveWorkDay::from_work_day(WorkDay::new(d, vec![work.clone(), commute.clone()]));

    assert_eq!(day.slices(), &[commute, work]);
}

#[test]
fn full_day_through_actions() {
    let d = date(2024, 2, 10);
    let mut store = MemoryDayStore::new();

    let steps = [
        (Action::StartTransfer, (6, 0), DayStatus::CommutingToWork),
        (Action::StartWork, (6, 28), DayStatus::AtWork),
        (Action::StartTransfer, (17, 30), DayStatus::CommutingHome),
        (Action::EndTransfer, (17, 56), DayStatus::Finished),
    ];

    for (action, (h, m), expected) in steps {
        let clock = FixedClock(at(d, h, m));
        let day = ActionLogic::run(&mut store, &clock, action).unwrap();
        assert_eq!(ActionLogic::status_of(&day), expected, "after {action}");
    }

    let stored = store.get_day(d).unwrap().unwrap();
    assert_eq!(stored.slices.len(), 3);
    assert!(stored.slices.iter().all(|s| !s.is_open()));
    assert_eq!(stored.slices[1].start, Some(at(d, 6, 28)));
    assert_eq!(stored.slices[1].end, Some(at(d, 17, 30)));
}

#[test]
fn rejected_action_leaves_store_untouched() {
    let d = date(2024, 2, 10);
    let mut store = MemoryDayStore::new();

    let err = ActionLogic::run(&mut store, &FixedClock(at(d, 8, 0)), Action::EndWork).unwrap_err();

    assert!(matches!(
        err,
        AppError::ActionNotAvailable {
            action: Action::EndWork,
            status: DayStatus::Initial
        }
    ));
    assert!(store.is_empty());
}

#[test]
fn end_work_then_commute_home() {
    let d = date(2024, 2, 10);
    let mut store = MemoryDayStore::new();

    for (action, h) in [
        (Action::StartTransfer, 6),
        (Action::StartWork, 7),
        (Action::EndWork, 16),
    ] {
        ActionLogic::run(&mut store, &FixedClock(at(d, h, 0)), action).unwrap();
    }

    let day = ActionLogic::load_today(&mut store, &FixedClock(at(d, 16, 5))).unwrap();
    assert!(!day.is_running());
    assert_eq!(ActionLogic::status_of(&day), DayStatus::AtWork);

    let day = ActionLogic::run(&mut store, &FixedClock(at(d, 16, 10)), Action::StartTransfer).unwrap();
    assert_eq!(ActionLogic::status_of(&day), DayStatus::CommutingHome);
}
