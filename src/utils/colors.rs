/// ANSI escape sequences shared by the status view and summaries.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Remaining-units color:
/// \>0 → red (behind goal)
/// ≤0 → green (goal met or exceeded)
pub fn color_for_remaining(value: f64) -> &'static str {
    if value > 0.0 { RED } else { GREEN }
}

/// Pace color against the target rate:
/// at or above → green, within 90% → yellow, below → red.
pub fn color_for_pace(pace: f64, target_rate: f64) -> &'static str {
    if pace >= target_rate {
        GREEN
    } else if pace >= target_rate * 0.9 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out placeholder values (`--`, empty) in summary output.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
