use anyhow::Result;
use cadence_core::repository::Repository;

use crate::cli::TasksCommand;
use crate::config::Config;
use crate::views::table::{display_tasks, DateStyle};

pub async fn list_tasks(repo: &impl Repository, command: TasksCommand, config: &Config) -> Result<()> {
    let tasks = repo.find_tasks(command.archived).await?;
    let style = DateStyle {
        format: config.date_format()?,
        locale: config.locale()?,
    };
    display_tasks(&tasks, config.today()?, style);
    Ok(())
}
