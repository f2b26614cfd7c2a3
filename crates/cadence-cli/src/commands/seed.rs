use anyhow::Result;
use cadence_core::repository::Repository;
use cadence_core::seed::seed_demo_data;
use owo_colors::OwoColorize;

use crate::config::Config;

pub async fn seed(repo: &(impl Repository + Sync), config: &Config) -> Result<()> {
    let tasks = seed_demo_data(repo, config.today()?).await?;
    println!("{} Added {} demo tasks", "✓".green().bold(), tasks.len());
    for task in tasks {
        println!("  {} {}", task.id.to_string().yellow(), task.title);
    }
    Ok(())
}
