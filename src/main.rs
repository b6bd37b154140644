use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use writerdesk::catalog::{CatalogProvider, FileCatalog, SampleCatalog};
use writerdesk::config::Config;
use writerdesk::logger::{setup_logging, Logger};
use writerdesk::ui;

const USAGE: &str = "\
writerdesk - terminal storefront and menu bar

USAGE:
    writerdesk [OPTIONS]

OPTIONS:
    --config <PATH>              Use this configuration file
    --generate-config [PATH]     Write a default configuration file and exit
    --help, -h                   Show this help message
    --version, -V                Show version";

enum Command {
    Run(Option<PathBuf>),
    GenerateConfig(Option<PathBuf>),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args = args.into_iter();
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--generate-config" => return Ok(Command::GenerateConfig(args.next().map(PathBuf::from))),
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }
    Ok(Command::Run(config_path))
}

async fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    setup_logging(&config.logging)?;
    let logger = Logger::new();

    let provider: Arc<dyn CatalogProvider> = match &config.catalog.file {
        Some(path) => Arc::new(FileCatalog::new(path)),
        None => Arc::new(SampleCatalog),
    };
    logger.log(format!("Catalog source: {}", provider.source_name()));

    ui::run_app(config, provider, logger).await
}

#[tokio::main]
async fn main() {
    let result = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            Ok(())
        }
        Ok(Command::Version) => {
            println!("writerdesk {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Ok(Command::GenerateConfig(path)) => match path.map_or_else(Config::get_default_config_path, Ok) {
            Ok(path) => Config::generate_default_config(path),
            Err(e) => Err(e),
        },
        Ok(Command::Run(config_path)) => run(config_path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
