//! # Cadence Core Library
//!
//! Recurring-task tracking: tasks repeat every N days or months, counted
//! either from their due date or from the day they were completed.
//!
//! ## Core Modules
//!
//! - [`date`]: Whole-day calendar values (`LocalDate`)
//! - [`recurrence`]: Next-due-date calculation
//! - [`bucket`]: Sorting and partitioning tasks into display buckets
//! - [`models`]: Core data structures and transfer objects
//! - [`db`]: Database connection and migration management
//! - [`repository`]: Data access layer with Repository pattern
//! - [`seed`]: Demo data
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cadence_core::{
//!     date::LocalDate, db,
//!     models::{IntervalType, NewTaskData, RepeatMode},
//!     repository::{CompletionRepository, Repository, SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cadence_core::error::CoreError> {
//!     let pool = db::establish_connection("cadence.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let today = LocalDate::now("Europe/Berlin")?;
//!     let task = repo
//!         .add_task(NewTaskData {
//!             title: "Water the plants".to_string(),
//!             next_due_date: today,
//!             interval_count: 3,
//!             interval_type: IntervalType::Days,
//!             repeat_mode: RepeatMode::FromCompletionDate,
//!         })
//!         .await?;
//!
//!     repo.complete_task(task.id, today).await?;
//!     let buckets = repo.find_buckets(today).await?;
//!     println!("{} task(s) need attention", buckets.now.len());
//!     Ok(())
//! }
//! ```

pub mod bucket;
pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod seed;
