//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::parse_request;

/// Operations console for the AWS monitoring agents
#[derive(Parser)]
#[command(
    name = "noop",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log debug detail to stderr (overrides NOOP_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a prompt to an agent and print its answer
    Invoke(commands::invoke::InvokeArgs),

    /// Reformat captured agent runtime output
    Format(commands::format::FormatArgs),

    /// Build the Lambda deployment package
    Package(commands::package::PackageArgs),

    /// Investigate a CloudWatch alarm event
    Investigate(commands::investigate::InvestigateArgs),

    /// List the agents that can be invoked
    Agents,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        // Argument errors outrank a broken config file.
        if let Command::Invoke(args) = &command {
            parse_request(args.agent.as_deref(), args.prompt.as_deref())?;
        }
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        })?;

        match command {
            Command::Invoke(args) => commands::invoke::run(&app, args).await,
            Command::Format(args) => commands::format::run(&app, &args),
            Command::Package(args) => commands::package::run(&app, args).await,
            Command::Investigate(args) => commands::investigate::run(&app, args).await,
            Command::Agents => commands::agents::run(&app),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
