//! Bosun CLI - Inspect job content and preview hire pools
//!
//! Usage:
//!   bosun init [dir]                    - Initialize a new project
//!   bosun jobs list                     - List all jobs
//!   bosun jobs show <id> [--variant N]  - Show a job and its items
//!   bosun hire preview [--amount N]     - Generate a hire pool for a location

use clap::{Parser, Subcommand};
use cli::commands::{HireCommand, InitCommand, JobsCommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bosun")]
#[command(about = "Bosun - Crew job definitions and hiring")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Log content problems and generation details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Bosun project
    Init(InitCommand),
    /// Inspect job content
    Jobs(JobsCommand),
    /// Preview hire candidates
    Hire(HireCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Init(cmd) => cmd.run(),
        Commands::Jobs(cmd) => cmd.run(&cli.project),
        Commands::Hire(cmd) => cmd.run(&cli.project),
    }
}
