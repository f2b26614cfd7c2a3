use anyhow::{anyhow, Result};
use cadence_core::error::CoreError;
use cadence_core::models::UpdateTaskData;
use cadence_core::repository::Repository;
use owo_colors::OwoColorize;

use crate::cli::EditCommand;
use crate::config::Config;
use crate::parser::parse_date_input;
use crate::util::describe_interval;

pub async fn edit_task(repo: &impl Repository, command: EditCommand, config: &Config) -> Result<()> {
    let next_due_date = match command.due.as_deref() {
        Some(input) => Some(parse_date_input(input, config.today()?)?),
        None => None,
    };

    let update = UpdateTaskData {
        title: command.title,
        next_due_date,
        interval_count: command.every,
        interval_type: command.unit,
        repeat_mode: command.from,
        archived: None,
    };

    if update.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to change. Pass at least one of --title, --due, --every, --unit, --from."
                .to_string()
        )));
    }

    let task = repo.update_task(command.id, update).await?;
    println!("{} Updated task: '{}'", "✓".green().bold(), task.title);
    println!(
        "  Due {}, repeats {} ({})",
        task.next_due_date.format(config.date_format()?, config.locale()?),
        describe_interval(task.interval_count, task.interval_type),
        task.repeat_mode
    );
    Ok(())
}
