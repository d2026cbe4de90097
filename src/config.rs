// src/config.rs
use anyhow::{anyhow, Context, Result};
use configparser::ini::Ini;
use log::info;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/fred.cfg";

/// Read the FRED API key from the `[FRED]` section of the config file.
///
/// Fails if the file is unreadable or the key is absent; there is no
/// environment fallback.
pub fn load_fred_api_key(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut ini = Ini::new();
    ini.load(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

    let api_key = ini
        .get("FRED", "api_key")
        .with_context(|| format!("No [FRED] api_key entry in {}", path.display()))?;

    info!("Loaded FRED API key ({} chars)", api_key.len());
    Ok(api_key)
}
