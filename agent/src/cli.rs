//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::modus::Modus;

/// Host monitoring agent with controller lifecycle supervision
#[derive(Parser)]
#[command(
    name = "argus",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Operating context of this invocation
    #[arg(long, global = true, value_enum, env = "ARGUS_MODUS", default_value_t = Modus::Service)]
    pub modus: Modus,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install and start the controller
    Start,

    /// Stop the controller and remove its binary
    Stop,

    /// Show controller and legacy-mode status
    Status,

    /// Run one artifact reconciliation pass
    Reconcile(commands::reconcile::ReconcileArgs),

    /// Show agent and controller versions
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the context cannot be built or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            modus,
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            modus,
            json,
            quiet,
            no_color,
        })?;
        match command {
            Command::Start => commands::start::run(&app),
            Command::Stop => commands::stop::run(&app).await,
            Command::Status => commands::status::run(&app).await,
            Command::Reconcile(args) => commands::reconcile::run(&app, &args),
            Command::Version => commands::version::run(&app).await,
        }
    }
}
