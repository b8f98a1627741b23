use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for eco2ve-timesheet
#[derive(Parser)]
#[command(
    name = "eco2ve-timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge the monthly worklog spreadsheets into the eco2ve timesheet template",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Print diagnostic messages (overridden by ECO2VE_TIMESHEET_LOG)
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the timesheet for a month
    ///
    /// The base folder must contain the employee roster, the timesheet
    /// template and a `YYYY-MM` folder with the worklog files. The result is
    /// saved as `<YYYY-MM>-eco2veTimeSheet.xlsx` inside the month folder.
    ///
    /// Examples:
    ///   eco2ve-timesheet generate ~/Documents/eco2ve
    ///   eco2ve-timesheet generate ~/Documents/eco2ve --month 2025-10 --force
    Generate {
        /// Base folder holding the roster, the template and the month folders
        base_dir: String,

        /// Month folder to process (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,

        /// Overwrite an existing timesheet without asking
        #[arg(long)]
        force: bool,

        /// Order rows by date, personal number and start time
        #[arg(long)]
        sort: bool,
    },

    /// Validate the inputs of a month without writing anything
    Check {
        /// Base folder holding the roster, the template and the month folders
        base_dir: String,

        /// Month folder to check (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a configuration file with the default settings
        #[arg(long = "init", help = "Create the configuration file with default values")]
        init: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },
}
