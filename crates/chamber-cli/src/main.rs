//! Chamber directory CLI - renders the member directory and spotlight
//! panels for one page view.
//!
//! The rendered HTML fragment goes to stdout. Diagnostics go to stderr
//! (and optionally a log file); a failed load still prints a fallback
//! message rather than exiting with an error.

mod config;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chamber_core::selector::random::{self, StdRng};
use chamber_core::{
    DirectoryPage, HtmlContainer, MemberLoader, PageOutcome, SpotlightPanel, ViewMode,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "chamber", version, about = "Render chamber member panels as HTML")]
struct Cli {
    /// Member data file path or URL
    #[arg(long, env = "CHAMBER_SOURCE", global = true)]
    source: Option<String>,

    /// Directory prefixed to relative member images and logos
    #[arg(long, env = "CHAMBER_IMAGE_BASE", global = true)]
    image_base: Option<String>,

    /// Start from a built-in page profile instead of the saved config
    #[arg(long, value_enum, global = true)]
    profile: Option<Profile>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Member directory page (data/members.json)
    Directory,
    /// Chamber landing page (data/chamber.json)
    Chamber,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the full member directory
    Directory {
        #[arg(long, default_value_t = ViewMode::Grid)]
        view: ViewMode,
    },
    /// Render the gold/silver member spotlight
    Spotlight {
        /// Seed the draw for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the effective configuration
    Config {
        /// Save it as the default configuration
        #[arg(long)]
        save: bool,
    },
}

/// Initialize the tracing subscriber for logging
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(guard)
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.profile {
        Some(Profile::Directory) => Config::directory_page(),
        Some(Profile::Chamber) => Config::chamber_page(),
        None => Config::load()?,
    };
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(image_base) = &cli.image_base {
        config.image_base = image_base.clone();
    }
    Ok(config)
}

fn report(outcome: PageOutcome) {
    match outcome {
        PageOutcome::Rendered { count } => info!(count, "Page rendered"),
        PageOutcome::Fallback(kind) => {
            info!(fallback = kind.as_class(), "Page rendered a fallback")
        }
    }
}

fn directory_page(config: &Config, view: ViewMode) -> Result<DirectoryPage> {
    let loader = MemberLoader::new()?;
    Ok(DirectoryPage::new(loader, config.data_source(), config.image_base.as_str()).with_view(view))
}

fn spotlight_panel(config: &Config, seed: Option<u64>) -> Result<SpotlightPanel<StdRng>> {
    let loader = MemberLoader::new()?;
    let rng = match seed {
        Some(seed) => random::seeded(seed),
        None => random::from_entropy(),
    };
    Ok(SpotlightPanel::new(loader, config.data_source(), rng)
        .with_image_base(config.image_base.as_str()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let config = resolve_config(&cli)?;
    info!(
        source = %config.source,
        image_base = %config.image_base,
        "Chamber directory starting"
    );

    match cli.command {
        Command::Directory { view } => {
            let mut page = directory_page(&config, view)?;
            let mut members = HtmlContainer::new("div", "members");

            let outcome = page.load(&mut members).await;
            let status = page.set_view(view, &mut members);
            report(outcome);

            println!("{}", members.to_html());
            println!(r#"<p id="viewStatus">{}</p>"#, status);
        }
        Command::Spotlight { seed } => {
            let mut panel = spotlight_panel(&config, seed)?;
            let mut grid = HtmlContainer::new("div", "spotlightGrid");

            report(panel.load(&mut grid).await);
            println!("{}", grid.to_html());
        }
        Command::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                config.save()?;
                eprintln!("Saved to {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
