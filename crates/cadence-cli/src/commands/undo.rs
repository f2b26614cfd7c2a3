use anyhow::Result;
use cadence_core::repository::Repository;
use owo_colors::OwoColorize;

use crate::cli::UndoCommand;
use crate::config::Config;
use crate::parser::parse_optional_date;

pub async fn uncomplete_task(repo: &impl Repository, command: UndoCommand, config: &Config) -> Result<()> {
    let completion_date = parse_optional_date(command.date.as_deref(), config.today()?)?;
    let result = repo.uncomplete_task(command.id, completion_date).await?;

    println!("{} Reverted completion of '{}'", "↺".blue().bold(), result.task.title);
    println!(
        "  Due again {}",
        result
            .task
            .next_due_date
            .format(config.date_format()?, config.locale()?)
            .yellow()
    );
    Ok(())
}
