use crate::error::CoreError;
use crate::models::{NewTaskData, Task, UpdateTaskData};
use crate::repository::{validate_interval_count, validate_title, SqliteRepository};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        let title = validate_title(&data.title)?;
        validate_interval_count(data.interval_count)?;

        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as(
            r#"INSERT INTO tasks (title, next_due_date, interval_count, interval_type, repeat_mode, archived, created_at)
            VALUES (?, ?, ?, ?, ?, 0, ?)
            RETURNING *
            "#,
        )
        .bind(&title)
        .bind(data.next_due_date)
        .bind(data.interval_count)
        .bind(data.interval_type)
        .bind(data.repeat_mode)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(task_id = task.id, title = %task.title, "added task");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, include_archived: bool) -> Result<Vec<Task>, CoreError> {
        let sql = if include_archived {
            "SELECT * FROM tasks ORDER BY next_due_date, title"
        } else {
            "SELECT * FROM tasks WHERE archived = 0 ORDER BY next_due_date, title"
        };
        let tasks = sqlx::query_as(sql).fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn update_task(&self, id: i64, data: UpdateTaskData) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let mut task: Task = sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::task_not_found(id))?;

        if data.is_empty() {
            return Ok(task);
        }

        if let Some(title) = data.title {
            task.title = validate_title(&title)?;
        }
        if let Some(next_due_date) = data.next_due_date {
            task.next_due_date = next_due_date;
        }
        if let Some(interval_count) = data.interval_count {
            validate_interval_count(interval_count)?;
            task.interval_count = interval_count;
        }
        if let Some(interval_type) = data.interval_type {
            task.interval_type = interval_type;
        }
        if let Some(repeat_mode) = data.repeat_mode {
            task.repeat_mode = repeat_mode;
        }
        if let Some(archived) = data.archived {
            task.archived = archived;
        }

        let updated: Task = sqlx::query_as(
            r#"UPDATE tasks
            SET title = ?, next_due_date = ?, interval_count = ?, interval_type = ?, repeat_mode = ?, archived = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&task.title)
        .bind(task.next_due_date)
        .bind(task.interval_count)
        .bind(task.interval_type)
        .bind(task.repeat_mode)
        .bind(task.archived)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(task_id = id, "updated task");
        Ok(updated)
    }

    async fn set_archived(&self, id: i64, archived: bool) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;

        let task: Task = sqlx::query_as("UPDATE tasks SET archived = ? WHERE id = ? RETURNING *")
            .bind(archived)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::task_not_found(id))?;

        tx.commit().await?;
        tracing::debug!(task_id = id, archived, "changed archive state");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::task_not_found(id));
        }
        tracing::debug!(task_id = id, "deleted task");
        Ok(())
    }
}
