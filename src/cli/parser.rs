use crate::export::{ExportFormat, ExportKind};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// Turns fingerprint-scanner exports into daily shift sheets and monthly recaps
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance CLI: classify scanner punches into shifts and build monthly recaps",
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

/// Attendance input shared by the commands that process a scanner file.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Attendance CSV exported by the scanner
    #[arg(long = "file", value_name = "FILE")]
    pub file: String,

    /// CSV delimiter (defaults to the configured one)
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Roster CSV to use instead of the stored one
    #[arg(long = "roster", value_name = "FILE", conflicts_with = "roster_version")]
    pub roster: Option<String>,

    /// Stored roster version to use (default: latest)
    #[arg(long = "roster-version", value_name = "ID")]
    pub roster_version: Option<i64>,
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// Import a roster CSV as a new stored version
    Import {
        #[arg(long = "file", value_name = "FILE")]
        file: String,

        #[arg(long = "delimiter", value_name = "CHAR")]
        delimiter: Option<String>,
    },

    /// List stored roster versions
    List,

    /// Show the entries of a roster version (default: latest)
    Show {
        #[arg(long = "version", value_name = "ID")]
        version: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage stored employee rosters
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Show the classified sheet of one day
    Daily {
        #[command(flatten)]
        input: InputArgs,

        /// Day to show (YYYY-MM-DD, default: first day in the file)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,
    },

    /// Export daily sheets, monthly recaps or classified records
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value = "recap")]
        kind: ExportKind,

        /// Output format (default depends on --kind)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Absolute output file, or an existing directory
        #[arg(long = "out", value_name = "PATH")]
        out: String,

        /// Day for --kind daily / records (YYYY-MM-DD)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,

        /// Month to export (YYYY-MM)
        #[arg(long = "month", value_name = "MONTH")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Monthly headcount overview
    Dashboard {
        #[command(flatten)]
        input: InputArgs,

        /// Month to summarize (YYYY-MM, default: month of the first record)
        #[arg(long = "month", value_name = "MONTH")]
        month: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
