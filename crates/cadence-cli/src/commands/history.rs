use anyhow::Result;
use cadence_core::repository::Repository;

use crate::cli::TaskIdCommand;
use crate::config::Config;
use crate::util::require_task;
use crate::views::table::{display_history, DateStyle};

pub async fn show_history(repo: &impl Repository, command: TaskIdCommand, config: &Config) -> Result<()> {
    let task = require_task(repo, command.id).await?;
    let completions = repo.find_completions(task.id).await?;
    let style = DateStyle {
        format: config.date_format()?,
        locale: config.locale()?,
    };
    display_history(&task, &completions, style);
    Ok(())
}
