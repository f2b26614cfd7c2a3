use cadence_core::models::{IntervalType, RepeatMode};
use clap::{ArgAction, Parser, Subcommand};

/// Cadence: a recurring-task tracker. Tasks repeat every N days or months,
/// counted from their due date or from the day they were done.
#[derive(Parser, Debug)]
#[command(name = "cadence", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new recurring task
    Add(AddCommand),
    /// Show active tasks grouped by when they are due
    List(ListCommand),
    /// List all tasks in a flat table
    Tasks(TasksCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Revert a completion
    Undo(UndoCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Archive a task so it no longer shows up
    Archive(TaskIdCommand),
    /// Restore an archived task
    Unarchive(TaskIdCommand),
    /// Delete a task and its history
    Delete(DeleteCommand),
    /// Show the completion history of a task
    History(TaskIdCommand),
    /// Insert a set of demo tasks
    Seed,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// First due date (YYYY-MM-DD, "today", "next friday", ...). Defaults to today
    #[arg(short, long)]
    pub due: Option<String>,
    /// Repeat every N units
    #[arg(short = 'n', long, default_value_t = 1)]
    pub every: u32,
    /// Interval unit (days|months)
    #[arg(short, long, default_value = "days")]
    pub unit: IntervalType,
    /// Count the interval from the due date or from the completion (due|completion)
    #[arg(short, long, default_value = "due")]
    pub from: RepeatMode,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Reference date. Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Print the buckets as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TasksCommand {
    /// Include archived tasks
    #[arg(short, long)]
    pub archived: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID of the task to mark as done
    pub id: i64,
    /// Completion date. Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct UndoCommand {
    /// The ID of the task
    pub id: i64,
    /// The completion date to revert. Defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    /// Set the next due date directly
    #[arg(long)]
    pub due: Option<String>,

    #[arg(short = 'n', long)]
    pub every: Option<u32>,

    #[arg(short, long)]
    pub unit: Option<IntervalType>,

    #[arg(short, long)]
    pub from: Option<RepeatMode>,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskIdCommand {
    /// The ID of the task
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,
}
