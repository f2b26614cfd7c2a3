//! Next-due-date calculation.
//!
//! Everything here is a pure function over plain values so it can be tested
//! without a database.

use crate::date::LocalDate;
use crate::models::{Completion, IntervalType, RepeatMode, Schedule};

/// Advances `date` by `count` units of `interval_type`.
pub fn advance(date: LocalDate, count: u32, interval_type: IntervalType) -> LocalDate {
    match interval_type {
        IntervalType::Days => date.add_days(i64::from(count)),
        IntervalType::Months => date.add_months(i32::try_from(count).unwrap_or(i32::MAX)),
    }
}

/// Computes the due date that follows a completion on `completion_date`.
///
/// In [`RepeatMode::FromDueDate`] the anchor is the due date being satisfied,
/// so a late completion never shifts the cycle. In
/// [`RepeatMode::FromCompletionDate`] the anchor is the completion itself.
pub fn calculate_next_due_date(schedule: &Schedule, completion_date: LocalDate) -> LocalDate {
    let anchor = match schedule.repeat_mode {
        RepeatMode::FromCompletionDate => completion_date,
        RepeatMode::FromDueDate => schedule.next_due_date,
    };

    advance(anchor, schedule.interval_count, schedule.interval_type)
}

/// The due date a task returns to when `completion` is removed.
///
/// Taken from the stored record rather than recomputed, so the round trip holds
/// even if the interval was edited in between.
pub fn reverted_due_date(completion: &Completion) -> LocalDate {
    completion.due_date
}
