//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy display.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;42m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("│ {} │", pad(content, 0));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let left_pad = inner_width.saturating_sub(console_width(content)) / 2;
    println!("│ {} │", pad(content, left_pad));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap_words(desc, desc_col);

    match lines.first() {
        Some(first) => box_line(&format!("{flag_padded}{first}")),
        None => box_line(&flag_padded),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{indent}{line}"));
    }
}

/// Pad `content` to the inner box width, with `left` spaces before it.
fn pad(content: &str, left: usize) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content) + left;
    let right = inner_width.saturating_sub(display_len);
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
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

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_ansi() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("[x] box"), 7);
    }

    #[test]
    fn pad_fills_inner_width() {
        assert_eq!(pad("abc", 0).chars().count(), BOX_WIDTH - 4);
        assert_eq!(pad("abc", 2), format!("  abc{}", " ".repeat(BOX_WIDTH - 9)));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_words("copy the password to the system clipboard", 16);
        assert_eq!(
            lines,
            vec!["copy the", "password to the", "system clipboard"]
        );
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn entropy_bits() {
        assert_eq!(calculate_entropy(8, 0), 0.0);
        assert!((calculate_entropy(8, 26) - 37.6035).abs() < 1e-3);
        assert!((calculate_entropy(16, 74) - 99.3513).abs() < 1e-3);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(entropy_strength(0.0), "Weak");
        assert_eq!(entropy_strength(37.6), "Fair");
        assert_eq!(entropy_strength(99.3), "Strong");
        assert_eq!(entropy_strength(128.0), "Very Strong");
    }
}
