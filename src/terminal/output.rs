//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, frame output.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
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

/// Redraw the whole screen from `lines`. Raw mode safe.
pub fn draw_frame(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(b"\x1b[2J\x1b[H")?;
    for line in lines {
        out.write_all(b"\r")?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\x1b[K\r\n")?;
    }
    out.flush()
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red on stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Wrap `text` in `style`, resetting afterwards.
pub fn styled(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 48;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Horizontal rule inside a box.
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option with flag and description, word-wrapped to the box.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 20;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut out = Vec::with_capacity(lines.len().max(1));
    match lines.split_first() {
        Some((first, rest)) => {
            out.push(box_line(&format!("{flag_padded}{first}")));
            for line in rest {
                out.push(box_line(&format!("{indent}{line}")));
            }
        }
        None => out.push(box_line(&flag_padded)),
    }
    out
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
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
