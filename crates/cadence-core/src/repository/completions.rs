use crate::date::LocalDate;
use crate::error::CoreError;
use crate::models::{Completion, CompletionResult, Task, UncompletionResult};
use crate::recurrence::{calculate_next_due_date, reverted_due_date};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};

impl SqliteRepository {
    async fn find_task_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<Task, CoreError> {
        sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    async fn find_completion_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        task_id: i64,
        completion_date: LocalDate,
    ) -> Result<Option<Completion>, CoreError> {
        let completion = sqlx::query_as(
            "SELECT * FROM task_completions WHERE task_id = ? AND completion_date = ?",
        )
        .bind(task_id)
        .bind(completion_date)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(completion)
    }

    async fn find_latest_completion_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        task_id: i64,
    ) -> Result<Option<Completion>, CoreError> {
        let completion = sqlx::query_as(
            "SELECT * FROM task_completions WHERE task_id = ? ORDER BY completion_date DESC LIMIT 1",
        )
        .bind(task_id)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(completion)
    }
}

fn map_unique_violation(err: sqlx::Error, task_id: i64, date: LocalDate) -> CoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            CoreError::AlreadyCompleted { task_id, date }
        }
        other => other.into(),
    }
}

#[async_trait]
impl super::CompletionRepository for SqliteRepository {
    async fn complete_task(
        &self,
        id: i64,
        completion_date: LocalDate,
    ) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task = Self::find_task_in_transaction(&mut tx, id).await?;
        if task.archived {
            return Err(CoreError::InvalidInput(format!(
                "Task {} is archived and cannot be completed.",
                id
            )));
        }
        if Self::find_completion_in_transaction(&mut tx, id, completion_date)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyCompleted { task_id: id, date: completion_date });
        }

        let completion: Completion = sqlx::query_as(
            r#"INSERT INTO task_completions (task_id, due_date, completion_date)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(task.next_due_date)
        .bind(completion_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, id, completion_date))?;

        let next_due_date = calculate_next_due_date(&task.schedule(), completion_date);
        let task: Task = sqlx::query_as("UPDATE tasks SET next_due_date = ? WHERE id = ? RETURNING *")
            .bind(next_due_date)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            task_id = id,
            due = %completion.due_date,
            completed = %completion.completion_date,
            next = %task.next_due_date,
            "completed task"
        );

        Ok(CompletionResult { completion, task })
    }

    async fn uncomplete_task(
        &self,
        id: i64,
        completion_date: LocalDate,
    ) -> Result<UncompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;

        Self::find_task_in_transaction(&mut tx, id).await?;
        let removed = Self::find_completion_in_transaction(&mut tx, id, completion_date)
            .await?
            .ok_or(CoreError::NotCompleted { task_id: id, date: completion_date })?;

        // Only the newest completion can be undone.
        if let Some(latest) = Self::find_latest_completion_in_transaction(&mut tx, id).await? {
            if latest.id != removed.id {
                return Err(CoreError::InvalidInput(format!(
                    "Only the most recent completion of task {} (on {}) can be reverted.",
                    id, latest.completion_date
                )));
            }
        }

        sqlx::query("DELETE FROM task_completions WHERE id = ?")
            .bind(removed.id)
            .execute(&mut *tx)
            .await?;

        let task: Task = sqlx::query_as("UPDATE tasks SET next_due_date = ? WHERE id = ? RETURNING *")
            .bind(reverted_due_date(&removed))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(
            task_id = id,
            completed = %removed.completion_date,
            restored = %task.next_due_date,
            "reverted completion"
        );

        Ok(UncompletionResult { removed, task })
    }

    async fn import_completion(
        &self,
        task_id: i64,
        due_date: LocalDate,
        completion_date: LocalDate,
    ) -> Result<Completion, CoreError> {
        let mut tx = self.pool().begin().await?;

        let completion: Completion = sqlx::query_as(
            r#"INSERT INTO task_completions (task_id, due_date, completion_date)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(task_id)
        .bind(due_date)
        .bind(completion_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, task_id, completion_date))?;

        tx.commit().await?;
        Ok(completion)
    }

    async fn find_completions(&self, task_id: i64) -> Result<Vec<Completion>, CoreError> {
        let completions = sqlx::query_as(
            "SELECT * FROM task_completions WHERE task_id = ? ORDER BY completion_date DESC",
        )
        .bind(task_id)
        .fetch_all(self.pool())
        .await?;
        Ok(completions)
    }

    async fn find_completions_on(&self, date: LocalDate) -> Result<Vec<Completion>, CoreError> {
        let completions = sqlx::query_as(
            "SELECT * FROM task_completions WHERE completion_date = ? ORDER BY task_id",
        )
        .bind(date)
        .fetch_all(self.pool())
        .await?;
        Ok(completions)
    }
}
