use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;
use std::io::{self, Write};

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}{ICON_INFO} {RESET}{msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK} {RESET}{msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN} {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR} {RESET}{msg}");
}

/// Section title, e.g. `=== 2025-03-01 ===`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// Yes/no question on stdin; anything but `y`/`yes` (or a read error) is no.
pub fn confirm<T: fmt::Display>(question: T) -> bool {
    warning(question);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
