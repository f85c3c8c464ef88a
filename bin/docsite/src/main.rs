//! docsite CLI
//!
//! Inspects a documentation site's configuration and reports the page routes
//! produced by its plugins.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docsite.
#[derive(Parser)]
#[command(
    name = "docsite",
    version,
    about = "Inspect documentation site configuration and page routes"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docsite.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Print the clean URL form of page paths
    Normalize {
        /// Page paths, e.g. /guide/install.html
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// List page routes after plugins run
    Routes {
        /// Project root (defaults to the config file's directory)
        #[arg(long)]
        root: Option<std::path::PathBuf>,
    },
    /// Validate configuration and docs
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Normalize { paths } => {
            docsite::cmd::normalize::run(&paths)?;
        }
        Commands::Routes { root } => {
            docsite::cmd::routes::run(&cli.config, root.as_deref())?;
        }
        Commands::Check { strict } => {
            docsite::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
