use crate::bucket::{bucket_tasks, BucketEntry, Buckets};
use crate::date::LocalDate;
use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{
    Completion, CompletionResult, NewTaskData, Task, UncompletionResult, UpdateTaskData,
};
use async_trait::async_trait;
use std::collections::HashMap;

pub mod completions;
pub mod tasks;

/// Domain-specific trait for task operations
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Tasks ordered by due date, then title.
    async fn find_tasks(&self, include_archived: bool) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, id: i64, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn set_archived(&self, id: i64, archived: bool) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
}

/// Domain-specific trait for completion records
#[async_trait]
pub trait CompletionRepository {
    /// Records a completion and advances the task's due date.
    async fn complete_task(
        &self,
        id: i64,
        completion_date: LocalDate,
    ) -> Result<CompletionResult, CoreError>;
    /// Removes the completion on `completion_date` and restores the due date
    /// stored on it. Only the task's most recent completion can be removed.
    async fn uncomplete_task(
        &self,
        id: i64,
        completion_date: LocalDate,
    ) -> Result<UncompletionResult, CoreError>;
    /// Inserts a historical completion without touching the task.
    async fn import_completion(
        &self,
        task_id: i64,
        due_date: LocalDate,
        completion_date: LocalDate,
    ) -> Result<Completion, CoreError>;
    /// Completions of one task, newest first.
    async fn find_completions(&self, task_id: i64) -> Result<Vec<Completion>, CoreError>;
    async fn find_completions_on(&self, date: LocalDate) -> Result<Vec<Completion>, CoreError>;
}

/// Main repository trait that composes the domain traits
#[async_trait]
pub trait Repository: TaskRepository + CompletionRepository {
    /// Buckets all active tasks relative to `reference`.
    async fn find_buckets(&self, reference: LocalDate) -> Result<Buckets, CoreError>;
}

/// SQLite implementation of the repository pattern
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn find_buckets(&self, reference: LocalDate) -> Result<Buckets, CoreError> {
        let tasks = self.find_tasks(false).await?;
        let completions = self.find_completions_on(reference).await?;

        let mut dates_by_task: HashMap<i64, Vec<LocalDate>> = HashMap::new();
        for completion in completions {
            dates_by_task
                .entry(completion.task_id)
                .or_default()
                .push(completion.completion_date);
        }

        let entries: Vec<BucketEntry> = tasks
            .into_iter()
            .map(|task| {
                let dates = dates_by_task.remove(&task.id).unwrap_or_default();
                BucketEntry::new(task, dates)
            })
            .collect();

        Ok(bucket_tasks(&entries, reference))
    }
}

pub(crate) fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput("Title must not be empty.".to_string()));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_interval_count(count: u32) -> Result<(), CoreError> {
    if count < 1 {
        return Err(CoreError::InvalidInput(
            "Interval count must be at least 1.".to_string(),
        ));
    }
    Ok(())
}
