use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkday
/// CLI application to track commutes and working time with SQLite
#[derive(Parser)]
#[command(
    name = "rworkday",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track commute and work time per day, chart it and export it (SQLite)",
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
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
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

    /// Leave for work, or leave work for home
    StartTransfer,

    /// Arrive at work
    StartWork,

    /// Stop working without leaving yet
    EndWork,

    /// Arrive at the destination of a commute
    EndTransfer,

    /// Show today's phase and spans
    Status {
        #[arg(long, help = "Keep refreshing the elapsed time of the running slice")]
        watch: bool,

        #[arg(
            long = "for",
            value_name = "SECS",
            requires = "watch",
            help = "Stop watching after SECS seconds"
        )]
        for_secs: Option<u64>,
    },

    /// Show stored days grouped by month
    History {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Render the timeline of the last days as SVG
    Chart {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Number of calendar days to look back, ending today; days without records are skipped")]
        days: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete a whole stored day
    Del {
        /// Date of the day (YYYY-MM-DD)
        date: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export day overviews
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: worktimes_<first>-<last>.csv in export_dir)"
        )]
        file: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, value_name = "CHAR", help = "CSV cell separator")]
        separator: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
