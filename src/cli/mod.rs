pub mod init;
pub mod mark;
pub mod rebuild;
pub mod scan;
pub mod status;

use clap::{Parser, Subcommand};

use crate::fmt::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tenderscan",
    about = "Scan tender folders and track which ones have been loaded."
)]
pub struct Cli {
    /// Root of the YEAR/MONTH/FOLDER tree (overrides TENDERSCAN_ROOT and settings)
    #[arg(long, global = true)]
    pub root: Option<String>,
    /// Ledger file of loaded folder names (overrides TENDERSCAN_LEDGER and settings)
    #[arg(long, global = true)]
    pub ledger: Option<String>,
    /// Log skipped folders and other diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tender folders, flagging those present in the ledger.
    Scan {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Find folders holding a cargado.txt marker and rewrite the ledger from them.
    Rebuild {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Write the ledger here instead of the configured ledger path
        #[arg(long)]
        output: Option<String>,
    },
    /// Add a folder name to the ledger.
    Mark {
        /// Folder name, e.g. '2024 03 15 Hospital Central LP 123'
        name: String,
    },
    /// Remove a folder name from the ledger.
    Unmark {
        /// Folder name as stored in the ledger
        name: String,
    },
    /// Save the root and ledger paths to the settings file.
    Init,
    /// Show the resolved configuration and ledger size.
    Status,
}
