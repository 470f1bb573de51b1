//! User-facing console output.
//! Prefixed status lines are colored only when stdout is a TTY; `print_user` lines are
//! plain so scripts can consume them.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn prefixed(tag: &str, msg: &str, color: bool) -> String {
    if !color {
        return format!("{tag} {msg}");
    }
    let tag = match tag {
        "info:" => tag.cyan().bold().to_string(),
        "warn:" => tag.yellow().bold().to_string(),
        _ => tag.red().bold().to_string(),
    };
    format!("{tag} {msg}")
}

pub fn print_info(msg: &str) {
    println!("{}", prefixed("info:", msg, is_tty()));
}

pub fn print_warn(msg: &str) {
    eprintln!("{}", prefixed("warn:", msg, is_tty()));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", prefixed("error:", msg, is_tty()));
}

/// Plain result line, no prefix.
pub fn print_user(msg: &str) {
    println!("{msg}");
}

/// Render a boolean answer the way scripts expect it.
pub fn yes_no(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefix_without_tty() {
        assert_eq!(prefixed("warn:", "careful", false), "warn: careful");
    }

    #[test]
    fn colored_prefix_keeps_message() {
        let s = prefixed("error:", "boom", true);
        assert!(s.ends_with(" boom"));
        assert!(s.contains("error:"));
    }

    #[test]
    fn booleans_render_as_words() {
        assert_eq!(yes_no(true), "true");
        assert_eq!(yes_no(false), "false");
    }
}
