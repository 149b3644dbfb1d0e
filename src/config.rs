//! Configuration file support for commission-ledger.
//!
//! Provides YAML-based configuration through `commission-ledger.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use commission_ledger::application::dto::{ExportFormat, StoreBackend};
use commission_ledger::shared::Result;

pub const CONFIG_FILENAME: &str = "commission-ledger.config.yml";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub store: Option<String>,
    pub store_path: Option<PathBuf>,
    pub store_url: Option<String>,
    pub collection: Option<String>,
    pub export_format: Option<String>,
    pub bind: Option<String>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn store_backend(&self) -> Result<Option<StoreBackend>> {
        parse_field(self.store.as_deref(), "store")
    }

    pub fn export_format(&self) -> Result<Option<ExportFormat>> {
        parse_field(self.export_format.as_deref(), "export_format")
    }
}

fn parse_field<T>(value: Option<&str>, field: &str) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    match value {
        None => Ok(None),
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => bail!("Invalid config: {}: {}", field, e),
        },
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.store_backend()?;
    config.export_format()?;

    if let Some(ref collection) = config.collection {
        if collection.trim().is_empty() {
            bail!(
                "Invalid config: collection must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default collection 'lines'."
            );
        }
    }

    if let Some(ref bind) = config.bind {
        if bind.parse::<std::net::SocketAddr>().is_err() {
            bail!(
                "Invalid config: bind '{}' is not a socket address.\n\n\
                 💡 Hint: Use host:port, e.g. \"127.0.0.1:8080\".",
                bind
            );
        }
    }

    if let Some(ref level) = config.log_level {
        if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            bail!(
                "Invalid config: log_level '{}' is not recognized.\n\n\
                 💡 Hint: Use one of {}.",
                level,
                LOG_LEVELS.join(", ")
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
