use anyhow::Result;
use cadence_core::repository::Repository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::parser::parse_optional_date;
use crate::views::table::{display_buckets, DateStyle};

pub async fn list_buckets(repo: &impl Repository, command: ListCommand, config: &Config) -> Result<()> {
    let reference = parse_optional_date(command.date.as_deref(), config.today()?)?;
    let buckets = repo.find_buckets(reference).await?;

    if command.json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    let style = DateStyle {
        format: config.date_format()?,
        locale: config.locale()?,
    };
    display_buckets(&buckets, reference, style);

    Ok(())
}
