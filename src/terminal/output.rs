//! Terminal output utilities.
//!
//! Box drawing, widgets, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const GREY: &str = "\x1b[90m";

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
    print!("{RESET}\x1b[?25h");
    flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print success message in green.
pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (48 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 48;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content              │
pub fn box_line(content: &str) {
    println!("{}", pad_line(content));
}

/// Print centered box content line: │     content     │
pub fn box_line_center(content: &str) {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
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

/// Print a label on the left and a value flush right.
pub fn box_pair(label: &str, value: &str) {
    let used = console_width(label) + console_width(value);
    let gap = INNER_WIDTH.saturating_sub(used).max(1);
    box_line(&format!("{}{}{}", label, " ".repeat(gap), value));
}

/// Print box bottom: └──────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

fn pad_line(content: &str) -> String {
    let display_len = console_width(content);
    if display_len <= INNER_WIDTH {
        format!("│ {}{} │", content, " ".repeat(INNER_WIDTH - display_len))
    } else {
        format!("│ {} │", content)
    }
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
// Widgets
// ============================================================================

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Render a horizontal slider track `├──●──┤` of `width` cells.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = max.saturating_sub(min).max(1);
    let pos = value.clamp(min, max) - min;
    let knob = pos * (width - 1) / span;

    let mut track = String::with_capacity(width * 3 + 2);
    track.push('├');
    for i in 0..width {
        track.push(if i == knob { '●' } else { '─' });
    }
    track.push('┤');
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_escape_codes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width(""), 0);
    }

    #[test]
    fn pad_line_fills_box() {
        let line = pad_line("hi");
        assert_eq!(line.chars().count(), BOX_WIDTH);
        assert!(line.starts_with("│ hi"));
        assert!(line.ends_with(" │"));
    }

    #[test]
    fn slider_places_knob_at_ends() {
        assert_eq!(slider(6, 6, 20, 5), "├●────┤");
        assert_eq!(slider(20, 6, 20, 5), "├────●┤");
        assert_eq!(slider(99, 6, 20, 5), "├────●┤");
        assert_eq!(slider(13, 6, 20, 3), "├─●─┤");
    }

    #[test]
    fn checkbox_marks() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
