use cadence_core::db;
use cadence_core::error::CoreError;
use cadence_core::repository::SqliteRepository;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,sqlx=warn",
        1 => "info,sqlx=warn",
        2 => "debug,sqlx=info",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = config::Config::new().unwrap_or_else(|e| {
        tracing::warn!(%e, "invalid configuration, using defaults");
        config::Config::default()
    });

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            handle_error(e.into());
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool.clone());

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command, &config).await,
        cli::Commands::List(command) => {
            commands::list::list_buckets(&repository, command, &config).await
        }
        cli::Commands::Tasks(command) => {
            commands::tasks::list_tasks(&repository, command, &config).await
        }
        cli::Commands::Done(command) => {
            commands::done::complete_task(&repository, command, &config).await
        }
        cli::Commands::Undo(command) => {
            commands::undo::uncomplete_task(&repository, command, &config).await
        }
        cli::Commands::Edit(command) => commands::edit::edit_task(&repository, command, &config).await,
        cli::Commands::Archive(command) => {
            commands::archive::set_archived(&repository, command, true).await
        }
        cli::Commands::Unarchive(command) => {
            commands::archive::set_archived(&repository, command, false).await
        }
        cli::Commands::Delete(command) => commands::delete::delete_task(&repository, command).await,
        cli::Commands::History(command) => {
            commands::history::show_history(&repository, command, &config).await
        }
        cli::Commands::Seed => commands::seed::seed(&repository, &config).await,
    };

    db_pool.close().await;

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Date(e) => {
                eprintln!("{} {}", "Error:".style(error_style), e);
            }
            CoreError::InvalidTimezone(tz) => {
                eprintln!(
                    "{} Invalid timezone '{}'. Set CADENCE_TIMEZONE to an IANA name like 'Europe/Berlin'",
                    "Error:".style(error_style),
                    tz.yellow()
                );
            }
            CoreError::NotCompleted { task_id, date } => {
                eprintln!(
                    "{} Task {} has no completion on {}",
                    "Error:".style(error_style),
                    task_id.yellow(),
                    date
                );
            }
            CoreError::Database(e) => {
                eprintln!("{} Database error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
