//! CLI definition and parsing.
//! Defines Args/Command and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Global flags override values loaded from the XML config.

use clap::{Parser, Subcommand, ValueHint};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Safe path and file-tree operations from the command line.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Reliable path and file-tree operations")]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, global = true, value_parser = clap::value_parser!(LogLevel))]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also append logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the last path component
    Basename { path: String },
    /// Print the last path component without its extension
    Filename { path: String },
    /// Print the parent directory, optionally several levels up
    Dirname {
        path: String,
        #[arg(long, default_value = "1")]
        levels: NonZeroUsize,
    },
    /// Resolve a path against the nearest existing ancestor
    Absolute { path: String },
    /// Does the path exist
    Exists { path: String },
    /// Is the path an existing directory
    IsDir { path: String },
    /// Is the path an existing file
    IsFile { path: String },
    /// Print the lines of a file
    ReadLines { path: String },
    CopyFile { from: String, to: String },
    MoveFile { from: String, to: String },
    RemoveFile { path: String },
    CopyDir { from: String, to: String },
    MoveDir { from: String, to: String },
    RemoveDir {
        path: String,
        /// Empty the directory but keep it
        #[arg(long)]
        contents_only: bool,
    },
    /// Print the config file location that would be used
    PrintConfig,
}

impl Args {
    /// Effective log level: --debug > --log-level > None (keep config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config in place. Unset flags are no-ops.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.json {
            cfg.json = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Args {
        Args::try_parse_from(v).unwrap()
    }

    #[test]
    fn dirname_levels_default_to_one() {
        let a = args(&["reliability", "dirname", "/a/b/c"]);
        assert_eq!(
            a.command,
            Command::Dirname {
                path: "/a/b/c".into(),
                levels: NonZeroUsize::MIN
            }
        );
    }

    #[test]
    fn zero_levels_are_rejected() {
        assert!(Args::try_parse_from(["reliability", "dirname", "/a", "--levels", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let a = args(&["reliability", "exists", "/tmp", "--debug", "--json"]);
        assert_eq!(a.effective_log_level(), Some(LogLevel::Debug));
        assert!(a.json);
    }

    #[test]
    fn overrides_only_touch_set_flags() {
        let mut cfg = Config {
            log_level: LogLevel::Quiet,
            log_file: Some(PathBuf::from("/tmp/keep.log")),
            json: true,
        };
        args(&["reliability", "print-config"]).apply_overrides(&mut cfg);
        assert_eq!(cfg.log_level, LogLevel::Quiet);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/keep.log")));
        assert!(cfg.json);

        args(&["reliability", "--log-level", "info", "--log-file", "/tmp/x.log", "print-config"])
            .apply_overrides(&mut cfg);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn exists_help_makes_no_extension_claim() {
        use clap::CommandFactory;
        let cmd = Args::command();
        let exists = cmd.find_subcommand("exists").unwrap();
        assert_eq!(exists.get_about().unwrap().to_string(), "Does the path exist");
    }

    #[test]
    fn remove_dir_contents_only_flag() {
        let a = args(&["reliability", "remove-dir", "/tmp/x", "--contents-only"]);
        assert_eq!(
            a.command,
            Command::RemoveDir {
                path: "/tmp/x".into(),
                contents_only: true
            }
        );
    }
}
