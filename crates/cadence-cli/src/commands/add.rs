use anyhow::Result;
use cadence_core::models::NewTaskData;
use cadence_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::config::Config;
use crate::parser::parse_optional_date;
use crate::util::describe_interval;

pub async fn add_task(repo: &impl Repository, command: AddCommand, config: &Config) -> Result<()> {
    let today = config.today()?;
    let next_due_date = parse_optional_date(command.due.as_deref(), today)?;

    let task = repo
        .add_task(NewTaskData {
            title: command.title,
            next_due_date,
            interval_count: command.every,
            interval_type: command.unit,
            repeat_mode: command.from,
        })
        .await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        task.title.bright_white().bold()
    );
    println!("  {} Task ID: {}", "→".style(info_style), task.id.to_string().yellow());
    println!(
        "  {} Due {}, repeats {} ({})",
        "→".style(info_style),
        next_due_date.format(config.date_format()?, config.locale()?),
        describe_interval(task.interval_count, task.interval_type),
        task.repeat_mode
    );

    Ok(())
}
