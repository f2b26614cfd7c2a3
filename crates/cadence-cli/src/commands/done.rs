use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::repository::Repository;
use owo_colors::OwoColorize;

use crate::cli::DoneCommand;
use crate::config::Config;
use crate::parser::parse_optional_date;

pub async fn complete_task(repo: &impl Repository, command: DoneCommand, config: &Config) -> Result<()> {
    let completion_date = parse_optional_date(command.date.as_deref(), config.today()?)?;
    let (format, locale) = (config.date_format()?, config.locale()?);

    match repo.complete_task(command.id, completion_date).await {
        Ok(result) => {
            println!("{} Completed task: '{}'", "✓".green().bold(), result.task.title);
            println!(
                "  Next due {} {}",
                result.task.next_due_date.format(format, locale).yellow(),
                format!("(was due {})", result.completion.due_date.format(format, locale)).bright_black()
            );
            Ok(())
        }
        Err(CoreError::AlreadyCompleted { task_id, date }) => Err(anyhow!(
            "Task {} is already marked done on {}. Use `cadence undo {}` to revert it.",
            task_id,
            date.format(format, locale),
            task_id
        )),
        Err(e) => Err(e.into()),
    }
}
