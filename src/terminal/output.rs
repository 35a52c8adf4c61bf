//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy readout.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    println!("{}", top_line(title));
}

/// │ content          │
pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

/// │     content      │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// ├──────────────────┤
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// └──────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Key/description pair for menus: `│ 1) Length       15 │`
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 8;
    let padded = if key.len() < key_col {
        format!("{}{}", key, " ".repeat(key_col - key.len()))
    } else {
        key.to_string()
    };
    box_line(&format!("{padded}{desc}"));
}

fn top_line(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

fn content_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        format!("│ {}{} │", content, " ".repeat(inner_width - display_len))
    } else {
        format!("│ {} │", content)
    }
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Split a long string into box-width chunks. Passwords have no spaces to
/// wrap on, so this cuts at fixed columns.
pub fn chunk_for_box(s: &str) -> Vec<&str> {
    let width = BOX_WIDTH - 4;
    if s.is_empty() {
        return vec![""];
    }
    let mut out = Vec::with_capacity(s.len() / width + 1);
    let mut rest = s;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        out.push(head);
        rest = tail;
    }
    out
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
