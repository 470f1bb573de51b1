//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{Result, anyhow};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RELIABILITY_CONFIG";

/// Config file path: `$RELIABILITY_CONFIG` if set, otherwise
/// `<config dir>/reliability/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("reliability");
        base.push("config.xml");
        return Ok(base);
    }
    env::var("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("reliability")
                .join("config.xml")
        })
        .map_err(|_| anyhow!("cannot determine a config directory (no config dir and no HOME)"))
}

/// Suggested log file location (data dir). Nothing is created.
pub fn default_log_path() -> Result<PathBuf> {
    data_dir()
        .map(|base| base.join("reliability").join("reliability.log"))
        .ok_or_else(|| anyhow!("cannot determine a data directory"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
