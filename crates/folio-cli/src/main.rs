//! Folio - headless tools for the portfolio page
//!
//! Runs the same startup pipeline the browser runs, against an in-memory
//! copy of the page shell:
//! - `check` validates a shell and its data document end to end
//! - `render` prints project card markup for a data document

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use folio_core::Category;

mod commands;
mod shell;

/// Folio - portfolio page tools
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Validate and preview a portfolio page without a browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./folio.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page shell and data document, and run the full startup
    Check {
        /// HTML page shell
        #[arg(short, long, default_value = "index.html")]
        shell: PathBuf,

        /// Data document path or http(s) URL (defaults to the configured
        /// data URL, next to the shell)
        #[arg(short, long)]
        data: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print project card markup
    Render {
        /// Data document path or http(s) URL
        #[arg(short, long)]
        data: String,

        /// Only this category (excel or sql)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
}

fn parse_category(key: &str) -> Result<Category> {
    Category::parse(key).ok_or_else(|| anyhow!("unknown category {key:?}, expected excel or sql"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { shell, data, json } => {
            let report = commands::check(&shell, data.as_deref(), config).await?;
            report.print(json)?;
        }
        Commands::Render { data, category } => {
            print!("{}", commands::render(&data, category).await?);
        }
    }

    Ok(())
}
