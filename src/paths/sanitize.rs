//! Raw path text cleanup.
//! Drops invisible code points (control, format, private-use, noncharacters) and collapses
//! leading current-directory markers until nothing changes.

use std::path::is_separator;

/// Clean raw path text. Works on code points, never on bytes.
///
/// `"././x"` becomes `"x"`, `"\u{0}/tmp/a\u{200B}b"` becomes `"/tmp/ab"`.
pub fn sanitize(raw: &str) -> String {
    let mut current: String = raw.chars().filter(|c| !is_invisible(*c)).collect();
    loop {
        match strip_current_dir(&current) {
            Some(rest) => current = rest.to_string(),
            None => return current,
        }
    }
}

/// `"./rest"` -> `Some("rest")`. Separators doubled after the marker go with it so
/// `".//x"` stays relative.
fn strip_current_dir(path: &str) -> Option<&str> {
    let mut chars = path.chars();
    if chars.next() != Some('.') {
        return None;
    }
    match chars.next() {
        Some(c) if is_separator(c) => Some(chars.as_str().trim_start_matches(is_separator)),
        _ => None,
    }
}

/// Unicode "Other" code points that can be decided without tables:
/// Cc, Cf, Co and the noncharacters.
pub(crate) fn is_invisible(c: char) -> bool {
    if c.is_control() {
        return true;
    }
    let cp = c as u32;
    is_format(cp) || is_private_use(cp) || is_noncharacter(cp)
}

fn is_format(cp: u32) -> bool {
    matches!(
        cp,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

fn is_private_use(cp: u32) -> bool {
    matches!(cp, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

fn is_noncharacter(cp: u32) -> bool {
    matches!(cp, 0xFDD0..=0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}
