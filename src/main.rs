//! Assistant picker - choose an AI assistant persona from the terminal

use anyhow::{Context, Result};
use assistant_picker::persona::final_llm;
use assistant_picker::{App, Catalog, Config, paths};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Pick an AI assistant persona
#[derive(Parser)]
#[command(name = "assistant-picker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Persona catalog (JSON). The built-in demo catalog is used when omitted.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file. Defaults to the platform config directory.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the effective config (defaults plus any existing file) and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let log_path = paths::log_path();
        // Start each run with an empty log
        if let Err(e) = std::fs::write(&log_path, "") {
            eprintln!("Warning: Failed to clear log file: {e}");
        }
        let directory = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_name = log_path
            .file_name()
            .map_or_else(|| format!("{}.log", paths::APP_DIR).into(), ToOwned::to_owned);
        let file_appender = tracing_appender::rolling::never(directory, file_name);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) if cli.write_config && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.write_config {
        let path = cli.config.unwrap_or_else(Config::default_path);
        config.save_to(&path)?;
        println!("Wrote config to {}", path.display());
        return Ok(());
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from(path).context("Failed to load persona catalog")?,
        None => Catalog::demo(),
    };
    tracing::info!(
        personas = catalog.personas.len(),
        providers = catalog.llm_providers.len(),
        "Starting assistant picker"
    );

    let providers = catalog.llm_providers.clone();
    let app = App::new(config, catalog);

    if let Some(persona) = assistant_picker::tui::run(app)? {
        let (provider, model) = final_llm(&providers, Some(&persona), None);
        println!("{} (id {})", persona.name, persona.id);
        if !model.is_empty() {
            println!("model: {provider}/{model}");
        }
    }

    Ok(())
}
