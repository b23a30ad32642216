//! Inspect and validate the playback bridge configuration.
use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use playback_bridge::{
    config::{Config, ConfigPaths, LogLevel},
    tracing_config,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "bridge-config")]
#[command(about = "Inspect and validate the playback bridge configuration")]
struct Cli {
    /// Also write logs to the bridge's rolling log file
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of the configuration file
    Path,
    /// Read the configuration and print the effective settings
    ///
    /// Never creates or modifies the file.
    Check {
        /// Configuration file to check instead of the default one
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Print the JSON schema of the configuration
    Schema,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.log_file {
        tracing_config::init_with_file(LogLevel::default())?;
    } else {
        tracing_config::init(LogLevel::default())?;
    }

    match cli.command {
        Commands::Path => println!("{}", ConfigPaths::main_config()?.display()),
        Commands::Check { path } => {
            let path = match path {
                Some(path) => path,
                None => ConfigPaths::main_config()?,
            };
            debug!("Checking {}", path.display());

            match Config::read_from(&path) {
                Ok(config) => print!("{}", toml::to_string(&config)?),
                Err(e) => {
                    error!("{e}");
                    process::exit(1);
                }
            }
        }
        Commands::Schema => println!("{}", Config::schema_json()?),
    }

    Ok(())
}
