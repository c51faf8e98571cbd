//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `newsletter_report` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use newsletter_report::app::print_results;
use newsletter_report::initialization::init_logger_with;
use newsletter_report::preview::inbox_previews;
use newsletter_report::{evaluate_exit_code, run_report, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting NEWSLETTER_AI_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config: Config = Cli::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    let fail_under = config.fail_under;
    let settings = config.settings.clone();

    match run_report(config).await {
        Ok(report) => {
            print_results(
                &report.view,
                report.result.links(),
                &inbox_previews(&settings),
            );
            println!();
            for path in &report.exports {
                println!("Report saved to {}", path.display());
            }
            if let Some(path) = &report.preview {
                println!("Preview saved to {}", path.display());
            }
            let code = evaluate_exit_code(fail_on, fail_under, &report);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("newsletter_report error: {:#}", e);
            process::exit(1);
        }
    }
}
