//! CLI entry point for blog-catalog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_catalog::commands::check::OutputFormat;

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(version)]
#[command(about = "Article catalog, link checks and home page for a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every catalog entry links to an existing article
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the document path each link resolves to
        #[arg(long)]
        explain: bool,
    },

    /// List catalog information
    List {
        /// What to list (entries, rows, tags, orphans)
        #[arg(default_value = "entries")]
        r#type: String,
    },

    /// Generate the home page
    #[command(alias = "b")]
    Build {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Resolve a reference through the configured path aliases
    Alias {
        /// Reference such as `@/components/Hero`
        reference: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_catalog=debug,info"
    } else {
        "blog_catalog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Check { format, explain } => {
            let site = blog_catalog::Site::new(&base_dir)?;
            blog_catalog::commands::check::run(&site, format, explain)?;
        }

        Commands::List { r#type } => {
            let site = blog_catalog::Site::new(&base_dir)?;
            blog_catalog::commands::list::run(&site, &r#type)?;
        }

        Commands::Build { watch } => {
            let site = blog_catalog::Site::new(&base_dir)?;
            tracing::info!("Generating home page...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                blog_catalog::commands::build::watch(&site)?;
            }
        }

        Commands::Alias { reference } => {
            let site = blog_catalog::Site::new(&base_dir)?;
            blog_catalog::commands::alias::run(&site, &reference)?;
        }

        Commands::Clean => {
            let site = blog_catalog::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blog-catalog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
