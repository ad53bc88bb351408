//! noop CLI - operations console for the AWS monitoring agents

use std::process::ExitCode;

use clap::Parser;
use noop_cli::cli::Cli;
use noop_cli::output::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json_mode = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            report_error(&e, json_mode);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("noop_cli=debug,noop_common=debug")
    } else {
        EnvFilter::try_from_env("NOOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(e: &anyhow::Error, json_mode: bool) {
    if json_mode {
        match json::format_error(&format!("{e:#}"), json::error_code(e)) {
            Ok(obj) => println!("{obj}"),
            Err(_) => eprintln!("Error: {e:#}"),
        }
    } else {
        eprintln!("Error: {e:#}");
    }
}
