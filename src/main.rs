mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use notion_exposure_audit::{
    client::NotionClient,
    config::{Config, DEFAULT_JSON_OUTPUT},
    error::AuditError,
    output,
    scan::{self, ScanOptions},
};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            format,
            output: output_path,
            config: config_path,
            probe,
        } => {
            let config = load_config_or_exit(config_path.as_deref());

            if let Err(e) = config.validate_token() {
                eprintln!("{} {e}", "Error:".red().bold());
                print_setup_guidance();
                std::process::exit(e.exit_code());
            }

            let client = NotionClient::new(&config).unwrap_or_else(|e| {
                eprintln!("{} {e}", "Error:".red().bold());
                std::process::exit(e.exit_code());
            });

            let options = ScanOptions {
                probe,
                probe_timeout: Duration::from_secs(config.probe_timeout_secs),
            };

            eprintln!("Starting Notion exposure scan...");
            let outcome = scan::run_scan(&client, &options).await;

            let out_path =
                output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_OUTPUT));
            let written = output::write_reports(&outcome.report, &format, &out_path)
                .unwrap_or_else(|e| {
                    eprintln!("{} {e}", "Error:".red().bold());
                    std::process::exit(e.exit_code());
                });

            print!("{}", output::pretty::format(&outcome));
            for path in &written {
                eprintln!("Report written to {}", path.display());
            }
        }

        Commands::CheckConfig {
            config: config_path,
        } => {
            let config = load_config_or_exit(config_path.as_deref());

            match config.validate_token() {
                Ok(()) => {
                    println!(
                        "[{}] token present, API base {}",
                        "READY".green().bold(),
                        config.api_base
                    );
                }
                Err(e) => {
                    println!("[{}] {e}", "NOT CONFIGURED".red().bold());
                    print_setup_guidance();
                    std::process::exit(e.exit_code());
                }
            }
        }
    }
}

fn load_config_or_exit(path: Option<&std::path::Path>) -> Config {
    Config::load(path).unwrap_or_else(|e: AuditError| {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(e.exit_code());
    })
}

fn print_setup_guidance() {
    eprintln!();
    eprintln!("Setup steps:");
    eprintln!("  1. Create a new integration at https://www.notion.so/my-integrations");
    eprintln!("  2. Copy its token into the `token` field of notion-exposure-audit.toml");
    eprintln!("  3. Grant the integration access to your workspace");
    eprintln!("  4. Share the pages you want audited with the integration");
}
