//! Sample tasks with completion history, for trying the tracker out.

use crate::date::LocalDate;
use crate::error::CoreError;
use crate::models::{IntervalType, NewTaskData, RepeatMode, Task};
use crate::repository::Repository;

#[derive(Debug, Clone)]
pub struct DemoTask {
    pub data: NewTaskData,
    /// `(due_date, completion_date)` pairs.
    pub completions: Vec<(LocalDate, LocalDate)>,
}

fn demo(
    title: &str,
    next_due_date: LocalDate,
    interval_count: u32,
    interval_type: IntervalType,
    repeat_mode: RepeatMode,
    completions: Vec<(LocalDate, LocalDate)>,
) -> DemoTask {
    DemoTask {
        data: NewTaskData {
            title: title.to_string(),
            next_due_date,
            interval_count,
            interval_type,
            repeat_mode,
        },
        completions,
    }
}

/// Builds the demo tasks relative to `today`.
pub fn demo_tasks(today: LocalDate) -> Vec<DemoTask> {
    let daily_history = (1..=5)
        .rev()
        .map(|n| (today.add_days(-n), today.add_days(-n)))
        .collect();

    let watch_due = today.add_days(4);
    let closing_due = today.add_days(8);

    vec![
        demo(
            "Informationen für Tag notieren",
            today,
            1,
            IntervalType::Days,
            RepeatMode::FromDueDate,
            daily_history,
        ),
        demo(
            "Putzen",
            today.add_days(5),
            7,
            IntervalType::Days,
            RepeatMode::FromCompletionDate,
            vec![
                (today.add_days(-3), today.add_days(-2)),
                (today.add_days(-10), today.add_days(-10)),
            ],
        ),
        demo(
            "Uhr aufladen",
            watch_due,
            12,
            IntervalType::Days,
            RepeatMode::FromCompletionDate,
            vec![
                (watch_due.add_days(-12), watch_due.add_days(-12)),
                (watch_due.add_days(-28), watch_due.add_days(-24)),
            ],
        ),
        demo(
            "Monatsabschluss",
            closing_due,
            1,
            IntervalType::Months,
            RepeatMode::FromCompletionDate,
            vec![
                (closing_due.add_months(-1), closing_due.add_months(-1)),
                (closing_due.add_months(-2), closing_due.add_months(-2)),
            ],
        ),
    ]
}

/// Inserts the demo tasks and their history. Returns the created tasks.
pub async fn seed_demo_data(
    repo: &(impl Repository + Sync),
    today: LocalDate,
) -> Result<Vec<Task>, CoreError> {
    let mut created = Vec::new();
    for demo in demo_tasks(today) {
        let task = repo.add_task(demo.data).await?;
        for (due_date, completion_date) in demo.completions {
            repo.import_completion(task.id, due_date, completion_date).await?;
        }
        created.push(task);
    }
    tracing::info!(count = created.len(), "seeded demo tasks");
    Ok(created)
}
