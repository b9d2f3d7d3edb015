use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_library::catalog::load_catalog;
use music_library::{AppConfig, CliConfig, FileConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path_buf))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML file describing the catalog. The demo catalog is used if omitted.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Only list the catalog, do not play anything.
    #[clap(long)]
    pub list_only: bool,

    /// Titles to play, in order. Overrides the play list of the config file.
    pub titles: Vec<String>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            debug!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        titles: cli_args.titles,
        list_only: cli_args.list_only,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let catalog = load_catalog(&config.media, config.strict)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    catalog.display_all(&mut out)?;

    for title in config.play.iter() {
        writeln!(out, "\n")?;
        catalog
            .play_by_title(title.as_str(), &mut out)
            .with_context(|| format!("Could not play \"{}\"", title))?;
    }
    out.flush()?;

    Ok(())
}
