//! qdigital. - the agency site in your terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use qdigital_app::config;
use tracing::info;

/// qdigital. - the agency site in your terminal
#[derive(Parser, Debug)]
#[command(name = "qdigital")]
#[command(about = "Browse the qdigital. agency site in the terminal", long_about = None)]
struct Args {
    /// Site directory holding `.qdigital/config.toml`
    #[arg(value_name = "SITE_DIR")]
    site_dir: Option<PathBuf>,

    /// Page to open first (overrides `ui.start_page`)
    #[arg(long, value_name = "ID")]
    page: Option<String>,

    /// Content file, relative to the working directory (overrides `content.path`)
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    qdigital_core::logging::init()?;

    let site_dir = args
        .site_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = config::load_settings(&site_dir);
    if let Some(page) = args.page {
        settings.ui.start_page = page;
    }

    let content = config::resolve_content(&site_dir, &settings, args.content.as_deref())?;
    info!("Serving {} from {}", content.brand, site_dir.display());

    let content = Arc::new(content);
    if args.headless {
        qdigital_site::run_headless(content, settings).await?;
    } else {
        qdigital_site::run(content, settings).await?;
    }
    Ok(())
}
