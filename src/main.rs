use clap::Parser;
use directories::ProjectDirs;

use todz::config::TodzConfig;
use todz::error::{Result, TodzError};
use todz::manager::{ManagerOptions, StatusFilter, TaskFilter, TaskManager};
use todz::sort::{sort_tasks, SortOrder};
use todz::store::SqliteStore;

mod args;
mod cli;

use args::{Cli, Commands, SortArg};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli_args = Cli::parse();
    let mut manager = open_manager(&cli_args)?;

    match cli_args.command {
        Commands::List {
            done,
            all,
            sort,
            project,
            context,
            attribute,
        } => {
            let status = if all {
                StatusFilter::All
            } else if done {
                StatusFilter::Done
            } else {
                StatusFilter::Pending
            };
            let filter = TaskFilter {
                status,
                project,
                context,
                attribute,
            };

            let mut tasks = manager.list(&filter)?;
            let order = match sort {
                SortArg::Pri => SortOrder::Priority,
                SortArg::Created => SortOrder::Created,
                SortArg::Due => SortOrder::Due,
            };
            sort_tasks(&mut tasks, order);

            cli::print_tasks(&tasks);
        }
        Commands::Add { todo } => {
            let id = manager.add(&todo)?;
            println!("Added todo {}", id);
        }
        Commands::Edit { id, todo } => {
            manager.update(id, &todo)?;
            println!("Updated todo {}", id);
        }
        Commands::Replace { id, todo } => {
            manager.replace(id, &todo)?;
            println!("Replaced todo {}", id);
        }
        Commands::Prepend { id, text } => {
            manager.prepend(id, &text)?;
            println!("Updated todo {}", id);
        }
        Commands::Append { id, text } => {
            manager.append(id, &text)?;
            println!("Updated todo {}", id);
        }
        Commands::Pri { id, priority } => {
            manager.prioritize(id, &priority)?;
            println!("Prioritized todo {}", id);
        }
        Commands::Depri { id } => {
            manager.deprioritize(id)?;
            println!("Deprioritized todo {}", id);
        }
        Commands::Do { id } => {
            manager.complete(id)?;
            println!("Completed todo {}", id);
        }
        Commands::Resume { id } => {
            manager.resume(id)?;
            println!("Resumed todo {}", id);
        }
        Commands::Remove { id } => {
            manager.delete(id)?;
            println!("Removed todo {}", id);
        }
        Commands::AddProject { id, project } => {
            manager.add_project(id, &project)?;
            println!("Updated todo {}", id);
        }
        Commands::AddContext { id, context } => {
            manager.add_context(id, &context)?;
            println!("Updated todo {}", id);
        }
        Commands::AddAttr { id, attribute } => {
            manager.add_attribute(id, &attribute)?;
            println!("Updated todo {}", id);
        }
        Commands::Projects => {
            cli::print_names(&manager.list_projects()?);
        }
        Commands::Contexts => {
            cli::print_names(&manager.list_contexts()?);
        }
        Commands::Attrs => {
            cli::print_names(&manager.list_attributes()?);
        }
    }

    Ok(())
}

/// Resolves config (flags over env over `todz.toml` over defaults), opens
/// the database and wraps it in a manager.
fn open_manager(cli_args: &Cli) -> Result<TaskManager<SqliteStore>> {
    let dirs = ProjectDirs::from("com", "todz", "todz")
        .ok_or_else(|| TodzError::Store("could not determine home directory".to_string()))?;

    let config = TodzConfig::load(dirs.config_dir())
        .map_err(|e| TodzError::Store(format!("bad config: {}", e)))?;

    let db_path = cli_args
        .db
        .clone()
        .unwrap_or_else(|| config.db_path(dirs.data_dir()));
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bucket = cli_args.bucket.clone().unwrap_or_else(|| config.bucket.clone());

    let store = SqliteStore::open(&db_path, &bucket)?;
    Ok(TaskManager::with_options(
        store,
        ManagerOptions {
            due_prioritization_rate: config.due_prioritization_rate,
        },
    ))
}
