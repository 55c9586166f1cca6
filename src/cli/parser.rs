use crate::core::listview::LogColumn;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for uphtrack
/// CLI application to track daily work output against UPH targets
#[derive(Parser)]
#[command(
    name = "uphtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A productivity tracking CLI: log daily work and measure units-per-hour against targets using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Use this database file instead of the configured one
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Test mode: leave the configuration file untouched
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty database
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the configuration as YAML")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Open the configuration file in an editor ($EDITOR, falling back to nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor command to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Database maintenance (migrations, checks, vacuum)
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run an integrity check")]
        check: bool,

        #[arg(long = "vacuum", help = "Reclaim space with VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Print database statistics")]
        info: bool,
    },

    /// Add or update the work log for one day
    Add {
        /// Date of the work log (YYYY-MM-DD)
        date: String,

        /// Shift start time (HH:MM)
        #[arg(long = "start", help = "Shift start time (HH:MM)")]
        start: Option<String>,

        /// Shift end time (HH:MM)
        #[arg(long = "end", help = "Shift end time (HH:MM)")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(long = "break", help = "Break duration in minutes")]
        break_minutes: Option<i64>,

        /// Training duration in minutes
        #[arg(long = "training", help = "Training duration in minutes")]
        training_minutes: Option<i64>,

        /// Documents completed
        #[arg(long = "docs", help = "Number of documents completed")]
        docs: Option<i64>,

        /// Video sessions completed
        #[arg(long = "videos", help = "Number of video sessions completed")]
        videos: Option<i64>,

        /// Free-text notes
        #[arg(long = "notes", help = "Free-text notes for the day")]
        notes: Option<String>,

        /// Record against this target instead of the active one
        #[arg(long = "target", value_name = "NAME")]
        target: Option<String>,
    },

    /// Delete the work log for one day
    Del {
        /// Date of the work log to delete (YYYY-MM-DD)
        date: String,
    },

    /// List work logs (filtered, sorted, paginated)
    List {
        #[arg(
            long = "filter",
            value_name = "TEXT",
            help = "Case-insensitive text filter over date, times, counts, notes and UPH"
        )]
        filter: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Start of date range (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "End of date range (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "sort", value_enum, default_value = "date", help = "Sort column")]
        sort: LogColumn,

        #[arg(long = "desc", help = "Sort descending instead of ascending")]
        desc: bool,

        #[arg(long = "page", help = "Page number (1-indexed)")]
        page: Option<usize>,

        #[arg(long = "page-size", value_name = "N", help = "Rows per page")]
        page_size: Option<usize>,
    },

    /// Manage UPH targets
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },

    /// View or update user settings (shift defaults, auto-switch)
    Settings {
        #[arg(long = "show", help = "Print the current settings")]
        show: bool,

        #[arg(long = "start", help = "Default shift start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Default shift end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "break", help = "Default break duration in minutes")]
        break_minutes: Option<i64>,

        #[arg(
            long = "auto-switch",
            value_name = "on|off",
            help = "Switch the active target automatically when adding with --target"
        )]
        auto_switch: Option<String>,
    },

    /// Show the day's productivity dashboard
    Status {
        /// Date to inspect (defaults to today)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,

        /// Pretend the current time is HH:MM (for projections)
        #[arg(long = "at", value_name = "HH:MM", hide = true)]
        at: Option<String>,

        /// Compute against this target instead of the entry's own
        #[arg(long = "target", value_name = "NAME")]
        target: Option<String>,
    },

    /// Print the audit trail
    Audit {
        #[arg(
            long = "action",
            value_name = "ACTION",
            help = "Filter by action: create, update, delete, activate, system"
        )]
        action: Option<String>,

        #[arg(
            long = "entity",
            value_name = "ENTITY",
            help = "Filter by entity: work_log, target, settings, system"
        )]
        entity: Option<String>,

        #[arg(long = "filter", value_name = "TEXT", help = "Case-insensitive text filter")]
        filter: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Start of date range (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "End of date range (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "page", help = "Page number (1-indexed)")]
        page: Option<usize>,
    },

    /// Export work log data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON state document into the database
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },

    /// Copy the database file to a backup location
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum TargetCommands {
    /// Create a new target
    Add {
        /// Unique target name
        name: String,

        #[arg(long = "uph", help = "Target rate in units per hour")]
        uph: f64,

        #[arg(
            long = "docs-per-unit",
            help = "How many completed documents equal one unit"
        )]
        docs_per_unit: f64,

        #[arg(
            long = "videos-per-unit",
            help = "How many completed video sessions equal one unit"
        )]
        videos_per_unit: f64,
    },

    /// Edit an existing target
    Edit {
        /// Name of the target to edit
        name: String,

        #[arg(long = "rename", value_name = "NEW_NAME", help = "Rename the target")]
        rename: Option<String>,

        #[arg(long = "uph", help = "New target rate in units per hour")]
        uph: Option<f64>,

        #[arg(long = "docs-per-unit", help = "New documents-per-unit divisor")]
        docs_per_unit: Option<f64>,

        #[arg(long = "videos-per-unit", help = "New video-sessions-per-unit divisor")]
        videos_per_unit: Option<f64>,
    },

    /// Delete a target (rejected for the active one)
    Del {
        /// Name of the target to delete
        name: String,
    },

    /// List all targets
    List,

    /// Make a target the active one
    SetActive {
        /// Name of the target to activate
        name: String,
    },
}
