use crate::core::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for superscheduler
#[derive(Parser)]
#[command(
    name = "superscheduler",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal scheduler store: events, tasks, categories and settings on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database (schema + default data)
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "edit", help = "Edit the configuration file")]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage calendar events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// List open tasks due in the next days
    Upcoming {
        #[arg(long, help = "Window size in days (default from config, 7)")]
        days: Option<u32>,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Read or change settings
    Setting {
        #[command(subcommand)]
        action: SettingAction,
    },

    /// Delete all events and tasks (categories and settings are kept)
    Clear {
        #[arg(long, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export collections to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "all")]
        collection: ExportTarget,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Offline asset cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event
    Add {
        #[arg(long)]
        title: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long = "end-date")]
        end_date: Option<String>,

        #[arg(long = "end-time")]
        end_time: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// Explicit id (default: generated)
        #[arg(long)]
        id: Option<String>,
    },

    /// List events, optionally on one date or in one category
    List {
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Show one event with its resolved start and end
    Show { id: String },

    /// Delete an event
    Del { id: String },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        #[arg(long)]
        title: String,

        /// Due date (YYYY-MM-DD or ISO timestamp)
        #[arg(long)]
        due: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        id: Option<String>,
    },

    /// List tasks
    List {
        #[arg(long, help = "Filter by stored status (pending, completed)")]
        status: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Mark a task completed
    Done { id: String },

    /// Mark a task pending again
    Reopen { id: String },

    /// Delete a task
    Del { id: String },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a category
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        color: String,
    },

    /// List categories
    List,

    /// Delete a category (tasks and events keep their category string)
    Del { id: String },
}

#[derive(Subcommand)]
pub enum SettingAction {
    /// Print a setting value
    Get { key: String },

    /// Set a setting value
    Set { key: String, value: String },

    /// List all settings
    List,
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Precache the app pages from the web root
    Install {
        #[arg(long, help = "Web root to read assets from (default from config)")]
        root: Option<String>,
    },

    /// Fetch an asset, cache first
    Fetch {
        path: String,

        #[arg(long, help = "Web root used when the asset is not cached")]
        root: Option<String>,

        #[arg(long, value_name = "FILE", help = "Write the asset here instead of stdout")]
        out: Option<String>,
    },
}
