//! Stanza - build-time content collections for static sites.

mod build;
mod cli;
mod collections;
mod config;
mod content;
mod logger;

use anyhow::{Result, bail};
use build::build_collections;
use clap::Parser;
use cli::{Cli, Commands};
use collections::CollectionRegistry;
use config::SiteConfig;
use content::loader::load_collection;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build => {
            let summary = build_collections(config)?;
            log!("build"; "{} collections from {} items", summary.collections, summary.items);
            Ok(())
        }
        Commands::Show { name } => show_collection(config, name),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Print a single named collection as JSON to stdout.
fn show_collection(config: &'static SiteConfig, name: &str) -> Result<()> {
    let collection = load_collection(&config.build.content)?;
    let registry = CollectionRegistry::with_builtins(config);
    let json = registry.to_json(name, &collection)?;
    println!("{json}");
    Ok(())
}
