//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - errors are always shown
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn empty_pool() {
    warn("Warning: no character classes selected, the password is empty.");
    warn("Enable one with --lower, -U, -D, -S or -a");
}

pub fn legacy_sampling() {
    warn("Note: legacy sampling may produce passwords shorter than requested");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} PASSWORD(S) TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprintln!("{YELLOW}{reason}{RESET}");
    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
