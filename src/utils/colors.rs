/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Color of a category dot, by the seeded color names.
pub fn for_category_color(color: &str) -> &'static str {
    match color {
        "blue" => "\x1b[34m",
        "green" => GREEN,
        "red" => RED,
        "purple" => "\x1b[35m",
        _ => GREY,
    }
}

/// Color for a derived task state label.
pub fn for_task_state(state: &str) -> &'static str {
    match state {
        "completed" => GREEN,
        "overdue" => RED,
        "pending" => YELLOW,
        _ => RESET,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
