/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

const PALETTE: [&str; 6] = [YELLOW, BLUE, CYAN, MAGENTA, GREEN, RED];

/// Stable color per demand on the day bar. Unclassified entries keep the
/// terminal default.
pub fn color_for_demand(demand: &str) -> &'static str {
    match demand.to_lowercase().as_str() {
        "" => RESET,
        "personal" => YELLOW,
        "work" => BLUE,
        "mobility" => CYAN,
        "social" => MAGENTA,
        other => {
            let h = other.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
            PALETTE[h % PALETTE.len()]
        }
    }
}

/// Score color: strong suggestions green, weak ones grey.
pub fn color_for_score(score: u8) -> &'static str {
    match score {
        60.. => GREEN,
        30..=59 => YELLOW,
        _ => GREY,
    }
}
