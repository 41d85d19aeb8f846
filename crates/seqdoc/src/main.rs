//! seqdoc CLI - generates the Music Sequences tutorial page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::build::BuildOverrides;

#[derive(Parser)]
#[command(name = "seqdoc")]
#[command(about = "Generate the Music Sequences tutorial page")]
#[command(version)]
pub struct Cli {
    /// Defaults to `build` when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to seqdoc.toml config file
    #[arg(short, long, default_value = "seqdoc.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default seqdoc.toml and create the tutorial directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Render every tutorial example into one HTML page
    Build {
        /// Tutorial source directory (defaults to config or "tutorial")
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output HTML file (defaults to config or "web/tutorial.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title
        #[arg(short, long)]
        title: Option<String>,

        /// Only include files with this extension
        #[arg(short, long)]
        extension: Option<String>,

        /// Minify the inline stylesheet
        #[arg(long, conflicts_with = "no_minify")]
        minify: bool,

        /// Keep the inline stylesheet readable
        #[arg(long)]
        no_minify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Init { yes }) => {
            commands::init::run(&cli.config, yes)?;
        }
        Some(Commands::Build {
            source,
            output,
            title,
            extension,
            minify,
            no_minify,
        }) => {
            let minify = if no_minify {
                Some(false)
            } else if minify {
                Some(true)
            } else {
                None
            };
            let overrides = BuildOverrides {
                source,
                output,
                title,
                extension,
                minify,
            };
            commands::build::run(&cli.config, overrides)?;
        }
        None => {
            commands::build::run(&cli.config, BuildOverrides::default())?;
        }
    }

    Ok(())
}
