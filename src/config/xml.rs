//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Unknown fields are rejected so typos surface instead of being ignored.
//!
//! ```xml
//! <config>
//!   <log_level>info</log_level>
//!   <log_file>/var/log/reliability.log</log_file>
//!   <json_logs>false</json_logs>
//! </config>
//! ```

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{CONFIG_ENV, default_config_path};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "json_logs")]
    json_logs: Option<bool>,
}

fn xml_to_config(parsed: XmlConfig, origin: &Path) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s
            .parse::<LogLevel>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("log_level in '{}'", origin.display()))?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.json = parsed.json_logs.unwrap_or(false);

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, path)
}

/// Load the active config file.
///
/// - `$RELIABILITY_CONFIG` set: the file must exist and parse.
/// - Otherwise the OS default location is used; a missing file means `Ok(None)`.
pub fn load_config() -> Result<Option<Config>> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let path = default_config_path()?;

    if !path.exists() {
        if explicit {
            bail!("{CONFIG_ENV} points to '{}', which does not exist", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }

    load_config_from_xml_path(&path).map(Some)
}
