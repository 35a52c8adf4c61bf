//! Warning and status messages for CLI output.
//!
//! Everything here goes to stderr so stdout carries nothing but passwords.

use super::quiet;
use crate::entropy::Source;
use crate::terminal::{calculate_entropy, entropy_strength};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Plain status line, suppressed in quiet mode.
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn length_not_a_number(raw: &str) {
    warn(&format!(
        "Warning: length {raw:?} is not a number, passwords will be empty"
    ));
}

pub fn length_negative(raw: &str) {
    warn(&format!(
        "Warning: length {raw:?} is negative, passwords will be empty"
    ));
}

pub fn summary(length: usize, pool: usize, source: Source) {
    info(&summary_line(length, pool, source));
}

fn summary_line(length: usize, pool: usize, source: Source) -> String {
    let bits = calculate_entropy(length, pool);
    format!(
        "Length: {length} • Pool: {pool} chars • Entropy: {bits:.1} bits ({}) • Source: {}",
        entropy_strength(bits),
        source.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_everything() {
        let line = summary_line(15, 91, Source::Fast);
        assert!(line.contains("Length: 15"));
        assert!(line.contains("Pool: 91 chars"));
        assert!(line.contains("97.6 bits (Strong)"));
        assert!(line.ends_with("Source: SmallRng"));
    }

    #[test]
    fn summary_for_empty_output() {
        let line = summary_line(0, 52, Source::Os);
        assert!(line.contains("0.0 bits (Weak)"));
        assert!(line.ends_with("Source: OsRng"));
    }
}
