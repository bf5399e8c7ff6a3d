use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todz")]
#[command(about = "A todo.txt task manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file to use (default: todz.db in the OS data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Todo bucket to use
    #[arg(long, global = true)]
    pub bucket: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum SortArg {
    /// By priority, unprioritized last
    #[default]
    Pri,
    /// By creation date
    Created,
    /// By due date
    Due,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(alias = "ls")]
    List {
        /// Only show completed todos
        #[arg(long, conflicts_with = "all")]
        done: bool,

        /// Show pending and completed todos
        #[arg(long)]
        all: bool,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Pri)]
        sort: SortArg,

        /// Filter todos by project
        #[arg(long, default_value = "")]
        project: String,

        /// Filter todos by context
        #[arg(long, default_value = "")]
        context: String,

        /// Filter todos by attribute key
        #[arg(long, default_value = "")]
        attribute: String,
    },

    /// Create a new todo from a todo.txt line
    Add {
        todo: String,
    },

    /// Rewrite a todo's text, keeping completion state and dates
    Edit {
        id: u64,
        todo: String,
    },

    /// Replace a todo wholesale from a todo.txt line
    Replace {
        id: u64,
        todo: String,
    },

    /// Add text to the front of a todo description
    Prepend {
        id: u64,
        text: String,
    },

    /// Add text to the end of a todo description
    Append {
        id: u64,
        text: String,
    },

    /// Set a todo's priority (A, B, ..., Z, AA, ...)
    Pri {
        id: u64,
        priority: String,
    },

    /// Clear a todo's priority
    Depri {
        id: u64,
    },

    /// Mark a todo complete
    #[command(name = "do", alias = "complete")]
    Do {
        id: u64,
    },

    /// Mark a completed todo pending again
    Resume {
        id: u64,
    },

    /// Remove a todo permanently
    #[command(alias = "rm")]
    Remove {
        id: u64,
    },

    /// Tag a todo with a project
    AddProject {
        id: u64,
        project: String,
    },

    /// Tag a todo with a context
    AddContext {
        id: u64,
        context: String,
    },

    /// Attach a key:value attribute to a todo
    AddAttr {
        id: u64,
        attribute: String,
    },

    /// List unique project names
    Projects,

    /// List unique context names
    Contexts,

    /// List unique attribute keys
    Attrs,
}
