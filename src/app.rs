//! Application orchestrator.
//! Loads/merges config, initializes logging and dispatches the subcommand to the
//! `Reliability` service.

use anyhow::Result;
use tracing::{debug, error};

use reliability::cli::{Args, Command};
use reliability::output as out;
use reliability::{CONFIG_ENV, Config, Reliability, ReliabilityError, default_config_path, load_config};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // print-config must work even when the config file itself is broken.
    if args.command == Command::PrintConfig {
        return print_config();
    }

    let mut cfg = load_config()
        .inspect_err(|e| out::print_error(&format!("failed to load config: {e:#}")))?
        .unwrap_or_default();
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json)
        .inspect_err(|e| out::print_error(&format!("failed to initialize logging: {e}")))?;

    debug!(command = ?args.command, "starting");

    let fs = Reliability::new();
    let result = dispatch(&fs, &args.command);
    if let Err(e) = &result {
        report(e);
    }
    result
}

fn dispatch(fs: &Reliability, command: &Command) -> Result<()> {
    match command {
        Command::Basename { path } => out::print_user(&fs.basename(path)),
        Command::Filename { path } => out::print_user(&fs.filename(path)),
        Command::Dirname { path, levels } => out::print_user(&fs.dirname_levels(path, *levels)),
        Command::Absolute { path } => match fs.absolute_path(path) {
            Some(abs) => out::print_user(&abs),
            None => anyhow::bail!("cannot resolve '{path}' to an absolute path"),
        },
        Command::Exists { path } => out::print_user(out::yes_no(fs.exists(path))),
        Command::IsDir { path } => out::print_user(out::yes_no(fs.is_directory(path))),
        Command::IsFile { path } => out::print_user(out::yes_no(fs.is_file(path))),
        Command::ReadLines { path } => {
            for line in fs.read_file_lines(path)? {
                out::print_user(&line);
            }
        }
        Command::CopyFile { from, to } => {
            let bytes = fs.copy_file(from, to)?;
            out::print_user(&format!("Copied {from} -> {to} ({bytes} bytes)"));
        }
        Command::MoveFile { from, to } => {
            fs.move_file(from, to)?;
            out::print_user(&format!("Moved {from} -> {to}"));
        }
        Command::RemoveFile { path } => {
            fs.remove_file(path)?;
            out::print_user(&format!("Removed {path}"));
        }
        Command::CopyDir { from, to } => {
            let files = fs.copy_directory(from, to)?;
            out::print_user(&format!("Copied {from} -> {to} ({files} files)"));
        }
        Command::MoveDir { from, to } => {
            let files = fs.move_directory(from, to)?;
            out::print_user(&format!("Moved {from} -> {to} ({files} files)"));
        }
        Command::RemoveDir { path, contents_only } => {
            fs.remove_directory(path, *contents_only)?;
            if *contents_only {
                out::print_user(&format!("Emptied {path}"));
            } else {
                out::print_user(&format!("Removed {path}"));
            }
        }
        Command::PrintConfig => print_config()?,
    }
    Ok(())
}

fn print_config() -> Result<()> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}",
            explicit.to_string_lossy()
        ));
        return Ok(());
    }
    let path = default_config_path()?;
    out::print_info(&format!("Default config path:\n  {}", path.display()));
    if path.exists() {
        out::print_info("A config file exists at that location.");
    } else {
        out::print_info(&format!(
            "No config file there; defaults apply. Example:\n\n{}",
            example_config()
        ));
    }
    Ok(())
}

fn example_config() -> String {
    let defaults = Config::default();
    format!(
        "<config>\n  <log_level>{}</log_level>\n  <log_file></log_file>\n  <json_logs>{}</json_logs>\n</config>\n",
        defaults.log_level, defaults.json
    )
}

/// Structured log line for a failed command.
fn report(e: &anyhow::Error) {
    match e.downcast_ref::<ReliabilityError>() {
        Some(re) => {
            let (code, kind) = (re.code(), re.kind());
            match re {
                ReliabilityError::InvalidPath { path, reason } => {
                    error!(code, kind, path = %path, %reason, "Operation failed")
                }
                ReliabilityError::UnreadableSource { path, source } => {
                    error!(code, kind, path = %path, error = %source, "Operation failed")
                }
                ReliabilityError::Mount { root, source } => {
                    error!(code, kind, root = %root, error = %source, "Operation failed")
                }
                ReliabilityError::Adapter { op, path, source } => {
                    error!(code, kind, op = *op, path = %path, error = %source, "Operation failed")
                }
            }
        }
        None => error!(error = %format!("{e:#}"), "Operation failed"),
    }
}
