use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::models::{IntervalType, Task};
use cadence_core::repository::Repository;

pub async fn require_task(repo: &impl Repository, id: i64) -> Result<Task> {
    repo.find_task_by_id(id)
        .await?
        .ok_or_else(|| anyhow!(CoreError::task_not_found(id)))
}

/// Human description of an interval, e.g. "every 7 days".
pub fn describe_interval(count: u32, interval_type: IntervalType) -> String {
    match (count, interval_type) {
        (1, IntervalType::Days) => "every day".to_string(),
        (1, IntervalType::Months) => "every month".to_string(),
        (n, unit) => format!("every {} {}", n, unit),
    }
}
