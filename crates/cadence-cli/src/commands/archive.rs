use anyhow::Result;
use cadence_core::repository::Repository;

use crate::cli::TaskIdCommand;

pub async fn set_archived(repo: &impl Repository, command: TaskIdCommand, archived: bool) -> Result<()> {
    let task = repo.set_archived(command.id, archived).await?;
    if archived {
        println!("Archived task: '{}'", task.title);
    } else {
        println!("Restored task: '{}'", task.title);
    }
    Ok(())
}
