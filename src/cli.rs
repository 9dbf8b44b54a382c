use clap::{Parser, Subcommand};
use notion_exposure_audit::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "notion-exposure-audit",
    version,
    about = "Audit a Notion workspace for potentially public pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the workspace and export a risk-ranked report
    Scan {
        /// Report file format
        #[arg(long, short, value_enum)]
        format: OutputFormat,

        /// Output file path (in both mode, the CSV path is derived from it)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also probe each page URL without credentials (slower)
        #[arg(long)]
        probe: bool,
    },

    /// Validate the configuration and credential
    #[command(name = "check-config")]
    CheckConfig {
        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
