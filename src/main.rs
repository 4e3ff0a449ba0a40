//! CLI entry point for gowncare

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gowncare")]
#[command(version)]
#[command(about = "Content loader and review cache for a wedding-garment care site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content (services, features, testimonials, preservation, cta, gallery, reviews)
        #[arg(default_value = "services")]
        r#type: String,
    },

    /// Export content and reviews as JSON
    #[command(alias = "e")]
    Export {
        /// Export again whenever content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Show customer reviews
    Reviews {
        /// Fetch even if the cached list is still fresh
        #[arg(short, long)]
        refresh: bool,
    },

    /// Remove the review cache and exported data
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is normal
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = if cli.debug {
        "gowncare=debug,info"
    } else {
        "gowncare=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let site = gowncare::Site::new(&base_dir)?;
            gowncare::commands::list::run(&site, &r#type).await?;
        }

        Commands::Export { watch } => {
            let site = gowncare::Site::new(&base_dir)?;
            tracing::info!("Exporting site data...");
            site.export().await?;
            println!("Exported to {:?}", site.public_dir);

            if watch {
                gowncare::commands::export::watch(&site).await?;
            }
        }

        Commands::Reviews { refresh } => {
            let site = gowncare::Site::new(&base_dir)?;
            gowncare::commands::reviews::run(&site, refresh).await?;
        }

        Commands::Clean => {
            let site = gowncare::Site::new(&base_dir)?;
            tracing::info!("Cleaning cache and export folders...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("gowncare version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
