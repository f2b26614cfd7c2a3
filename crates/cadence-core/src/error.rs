use thiserror::Error;

use crate::date::{LocalDate, ParseDateError};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Date(#[from] ParseDateError),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Task {task_id} was already completed on {date}")]
    AlreadyCompleted { task_id: i64, date: LocalDate },

    #[error("Task {task_id} has no completion on {date}")]
    NotCompleted { task_id: i64, date: LocalDate },
}

impl CoreError {
    pub fn task_not_found(id: i64) -> Self {
        CoreError::NotFound(format!("No task with ID {}", id))
    }
}
