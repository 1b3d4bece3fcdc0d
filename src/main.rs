use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use folio::ThemeMode;
use folio::config::{Overrides, Settings};
use folio::logging::init_logging;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page designer portfolio")]
struct Cli {
    /// Theme to use when no preference has been saved yet
    #[arg(long, value_name = "light|dark")]
    theme: Option<ThemeMode>,

    /// Path to a TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User agent used to decide whether the custom cursor is shown
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Disable the custom cursor overlay
    #[arg(long)]
    no_cursor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let settings = Settings::load_or_default(args.config.as_deref())
        .context("failed to load settings")?
        .with_overrides(Overrides {
            theme: args.theme,
            user_agent: args.user_agent,
            no_cursor: args.no_cursor,
        });

    init_logging(args.verbose, settings.log_filter.as_deref())?;
    tracing::debug!(?settings, "settings resolved");

    run(settings)
}

#[cfg(feature = "gui")]
fn run(settings: Settings) -> anyhow::Result<()> {
    folio::gui::run(settings).context("portfolio window failed")
}

#[cfg(not(feature = "gui"))]
fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(theme = %settings.default_theme, "built without the gui feature; nothing to show");
    Ok(())
}
