//! CLI command implementations.

pub mod plan;

use anyhow::{Context, Result};
use buildmeta_config::ConfigService;
use std::path::Path;

pub fn validate(service: &ConfigService, dir: &Path) -> Result<()> {
    let path = service.config_path(dir);
    if !service.has_config(dir) {
        println!("No {} found, defaults apply", path.display());
        return Ok(());
    }

    match service.load(dir) {
        Ok(config) => {
            println!("Configuration is valid");
            println!("{}", ConfigService::summarize(&config));
            Ok(())
        }
        Err(e) => {
            println!("Configuration error in {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

pub fn summary(service: &ConfigService, dir: &Path) -> Result<()> {
    let config = service
        .load(dir)
        .with_context(|| format!("Failed to load {}", service.config_path(dir).display()))?;
    println!("{}", ConfigService::summarize(&config));
    Ok(())
}

pub fn show(service: &ConfigService, dir: &Path) -> Result<()> {
    let config = service
        .load(dir)
        .with_context(|| format!("Failed to load {}", service.config_path(dir).display()))?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
