//! Genesis CLI - Command-line interface for the Genesis content host
//!
//! Usage:
//!   genesis validate                        - Check prototypes and locale files
//!   genesis mind check --jobs A --blacklist A,B
//!                                           - Evaluate a job filter for one mind
//!   genesis serve                           - Run the host until Ctrl-C

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{MindCommand, ServeCommand, ValidateCommand};
use shared::ServerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genesis")]
#[command(about = "Genesis - Game content host and content tooling")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate prototypes and locale files
    Validate(ValidateCommand),
    /// Mind filter checks
    Mind(MindCommand),
    /// Run the server host
    Serve(ServeCommand),
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load_or_default(path.map(PathBuf::as_path))?;
    // Relative directories in a config file are relative to that file
    let config = match path.and_then(|p| p.parent()) {
        Some(base) => config.rebase(base),
        None => config,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate(cmd) => cmd.run(&config),
        Commands::Mind(cmd) => cmd.run(),
        Commands::Serve(cmd) => cmd.run(config).await,
    }
}
