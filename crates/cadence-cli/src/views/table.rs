use cadence_core::bucket::{Bucket, Buckets};
use cadence_core::date::{DateFormat, LocalDate};
use cadence_core::models::{Completion, Task, TaskView};
use chrono::{Duration, Locale};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use owo_colors::OwoColorize;

use crate::util::describe_interval;

/// How dates are rendered in tables.
#[derive(Debug, Clone, Copy)]
pub struct DateStyle {
    pub format: DateFormat,
    pub locale: Locale,
}

impl DateStyle {
    pub fn render(&self, date: LocalDate) -> String {
        date.format(self.format, self.locale)
    }
}

/// "today", "in 3 days", "2 days ago" relative to `reference`.
pub fn relative_day(date: LocalDate, reference: LocalDate) -> String {
    match date.diff_days(&reference) {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        days => HumanTime::from(Duration::days(days)).to_string(),
    }
}

fn status_cell(view: &TaskView, reference: LocalDate) -> Cell {
    if view.completed {
        Cell::new("✓ done").fg(Color::Green)
    } else if view.next_due_date.is_before(&reference) {
        Cell::new("overdue").fg(Color::Red).add_attribute(Attribute::Bold)
    } else if view.next_due_date == reference {
        Cell::new("due").fg(Color::Yellow)
    } else {
        Cell::new("")
    }
}

fn bucket_table(views: &[TaskView], reference: LocalDate, style: DateStyle) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Due", "When", "Repeats", "Status"]);

    for view in views {
        let mut row = Row::new();
        row.add_cell(Cell::new(view.id));

        let mut title_cell = Cell::new(&view.title);
        if view.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(title_cell);

        row.add_cell(Cell::new(style.render(view.next_due_date)));
        row.add_cell(Cell::new(relative_day(view.next_due_date, reference)));
        row.add_cell(Cell::new(describe_interval(view.interval_count, view.interval_type)));
        row.add_cell(status_cell(view, reference));
        table.add_row(row);
    }

    table
}

pub fn display_buckets(buckets: &Buckets, reference: LocalDate, style: DateStyle) {
    if buckets.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{}", format!("Tasks for {}", style.render(reference)).bold());
    for (bucket, views) in buckets.iter() {
        if views.is_empty() {
            continue;
        }
        let heading = format!("{} ({})", bucket.label(), views.len());
        match bucket {
            Bucket::Now => println!("\n{}", heading.yellow().bold()),
            _ => println!("\n{}", heading.bold()),
        }
        println!("{}", bucket_table(views, reference, style));
    }
}

pub fn display_tasks(tasks: &[Task], reference: LocalDate, style: DateStyle) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Next due", "When", "Repeats", "From", "Archived"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut title_cell = Cell::new(&task.title);
        if task.archived {
            title_cell = title_cell.fg(Color::DarkGrey);
        }
        row.add_cell(title_cell);

        let mut due_cell = Cell::new(style.render(task.next_due_date));
        if !task.archived && task.next_due_date.is_before(&reference) {
            due_cell = due_cell.fg(Color::Red);
        }
        row.add_cell(due_cell);
        row.add_cell(Cell::new(relative_day(task.next_due_date, reference)));
        row.add_cell(Cell::new(describe_interval(task.interval_count, task.interval_type)));
        row.add_cell(Cell::new(task.repeat_mode.to_string()));
        row.add_cell(Cell::new(if task.archived { "yes" } else { "no" }));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_history(task: &Task, completions: &[Completion], style: DateStyle) {
    println!(
        "{} {} ({})",
        "History of".bold(),
        task.title.bright_white().bold(),
        describe_interval(task.interval_count, task.interval_type)
    );

    if completions.is_empty() {
        println!("No completions recorded.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Completed", "Was due", "Delay"]);

    for completion in completions {
        let delay = completion.completion_date.diff_days(&completion.due_date);
        let delay_cell = match delay {
            d if d > 0 => Cell::new(format!("{} day(s) late", d)).fg(Color::Red),
            d if d < 0 => Cell::new(format!("{} day(s) early", -d)).fg(Color::Green),
            _ => Cell::new("on time"),
        };

        let mut row = Row::new();
        row.add_cell(Cell::new(style.render(completion.completion_date)));
        row.add_cell(Cell::new(style.render(completion.due_date)));
        row.add_cell(delay_cell);
        table.add_row(row);
    }

    println!("{table}");
}
