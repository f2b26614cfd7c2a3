use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;

use crate::date::LocalDate;

/// Unit of a task's repeat interval.
///
/// Variant order is the sort order used when bucketing (`days` < `months`).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type,
)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    Days,
    Months,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid interval type: {0}")]
pub struct ParseIntervalTypeError(String);

impl FromStr for IntervalType {
    type Err = ParseIntervalTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "days" | "day" | "d" => Ok(IntervalType::Days),
            "months" | "month" | "m" => Ok(IntervalType::Months),
            _ => Err(ParseIntervalTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for IntervalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalType::Days => write!(f, "days"),
            IntervalType::Months => write!(f, "months"),
        }
    }
}

/// Which date the next due date is computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum RepeatMode {
    FromDueDate,
    FromCompletionDate,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid repeat mode: {0}")]
pub struct ParseRepeatModeError(String);

impl FromStr for RepeatMode {
    type Err = ParseRepeatModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fromduedate" | "from-due-date" | "due" => Ok(RepeatMode::FromDueDate),
            "fromcompletiondate" | "from-completion-date" | "completion" => {
                Ok(RepeatMode::FromCompletionDate)
            }
            _ => Err(ParseRepeatModeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepeatMode::FromDueDate => write!(f, "fromDueDate"),
            RepeatMode::FromCompletionDate => write!(f, "fromCompletionDate"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub next_due_date: LocalDate,
    pub interval_count: u32,
    pub interval_type: IntervalType,
    pub repeat_mode: RepeatMode,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            next_due_date: self.next_due_date,
            interval_count: self.interval_count,
            interval_type: self.interval_type,
            repeat_mode: self.repeat_mode,
        }
    }
}

/// The recurrence-relevant part of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub next_due_date: LocalDate,
    pub interval_count: u32,
    pub interval_type: IntervalType,
    pub repeat_mode: RepeatMode,
}

/// One completion event: the due date that was satisfied and the day the
/// user marked it done. Unique per `(task_id, completion_date)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub id: i64,
    pub task_id: i64,
    pub due_date: LocalDate,
    pub completion_date: LocalDate,
}

#[derive(Debug, Clone)]
pub struct NewTaskData {
    pub title: String,
    pub next_due_date: LocalDate,
    pub interval_count: u32,
    pub interval_type: IntervalType,
    pub repeat_mode: RepeatMode,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub next_due_date: Option<LocalDate>,
    pub interval_count: Option<u32>,
    pub interval_type: Option<IntervalType>,
    pub repeat_mode: Option<RepeatMode>,
    pub archived: Option<bool>,
}

impl UpdateTaskData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.next_due_date.is_none()
            && self.interval_count.is_none()
            && self.interval_type.is_none()
            && self.repeat_mode.is_none()
            && self.archived.is_none()
    }
}

#[derive(Debug)]
pub struct CompletionResult {
    pub completion: Completion,
    /// The task with its due date already advanced.
    pub task: Task,
}

#[derive(Debug)]
pub struct UncompletionResult {
    pub removed: Completion,
    /// The task with its due date restored.
    pub task: Task,
}

/// A task as shown inside a bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: i64,
    pub title: String,
    pub next_due_date: LocalDate,
    pub interval_count: u32,
    pub interval_type: IntervalType,
    pub completed: bool,
}
