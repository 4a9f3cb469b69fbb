//! buildmeta CLI tool.

use buildmeta_config::{ConfigService, DEFAULT_FILE_NAME};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "buildmeta")]
#[command(about = "Inspect and apply build.yml project configuration", long_about = None)]
struct Cli {
    /// Configuration file name inside the project directory
    #[arg(long, global = true, env = "BUILDMETA_FILE_NAME", default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project configuration
    Validate {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Print a one-line summary of a project configuration
    Summary {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Print the mapped configuration as JSON
    Show {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Show the host actions applying the configuration would perform
    Plan {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Group the host project already has
        #[arg(long)]
        group: Option<String>,
        /// Version the host project already has
        #[arg(long)]
        version: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = ConfigService::default().with_file_name(cli.file_name);

    match cli.command {
        Commands::Validate { dir } => {
            commands::validate(&service, &dir)?;
        }
        Commands::Summary { dir } => {
            commands::summary(&service, &dir)?;
        }
        Commands::Show { dir } => {
            commands::show(&service, &dir)?;
        }
        Commands::Plan {
            dir,
            group,
            version,
            json,
        } => {
            commands::plan::plan(&service, &dir, group, version, json)?;
        }
    }

    Ok(())
}
