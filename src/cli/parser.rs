use crate::export::ReportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rDupCheck
/// CLI application to flag repeated check-ins in attendance CSV exports
#[derive(Parser)]
#[command(
    name = "rdupcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scan attendance-log CSV files and flag check-ins repeated within a short window",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path (default from config: duplicates_log.txt)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Run in test mode (no config file writes, no interactive prompts)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Scan a folder (or a single file) of attendance CSV exports
    Scan {
        /// Folder with *.csv files, or one CSV file (default from config: Data)
        path: Option<String>,

        /// Duplicate window in minutes (default from config: 5)
        #[arg(long, short = 'w', value_name = "MINUTES")]
        window: Option<i64>,

        /// Write a report of all diagnostics to FILE
        #[arg(long, value_name = "FILE")]
        report: Option<String>,

        /// Report format
        #[arg(long, value_enum, default_value = "csv", requires = "report")]
        format: ReportFormat,

        /// Overwrite the report file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Never ask to open the log file
        #[arg(long = "no-prompt")]
        no_prompt: bool,

        /// Exit with an error when duplicates are found
        #[arg(long)]
        strict: bool,
    },

    /// Print the log file of the last scan
    Log {
        #[arg(long = "print", help = "Print the log file with coloured levels")]
        print: bool,
    },
}
