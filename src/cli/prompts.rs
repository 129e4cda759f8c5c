//! Help, version and error output for the command line.

use crate::terminal::{box_bottom, box_line, box_opt, box_rule, box_top, print_error};

pub fn print_help() {
    let mut lines = vec![box_top("pwform")];
    lines.push(box_line("Interactive password generator form."));
    lines.push(box_rule());
    lines.push(box_line("Usage: pwform [OPTIONS]"));
    lines.push(box_line(""));
    lines.extend(box_opt("-h, --help", "Show this help"));
    lines.extend(box_opt("-v, --version", "Show version"));
    lines.extend(box_opt(
        "--verbose",
        "Raise log level (repeat for trace); only with --log-file",
    ));
    lines.extend(box_opt("--log-file PATH", "Append diagnostic logs to PATH"));
    lines.extend(box_opt("--seed N", "Reproducible passwords from seed N"));
    lines.push(box_rule());
    lines.extend(box_opt("Up/Down, Tab", "Move between controls"));
    lines.extend(box_opt("Left/Right, +/-", "Change length (6-15)"));
    lines.extend(box_opt("Space, Enter", "Activate focused control"));
    lines.extend(box_opt("1-4", "Toggle lowercase, uppercase, numbers, symbols"));
    lines.extend(box_opt("g / c", "Generate / copy"));
    lines.extend(box_opt("q, Esc", "Quit"));
    lines.push(box_bottom());

    for line in lines {
        println!("{line}");
    }
}

pub fn print_version() {
    println!("pwform {}", env!("CARGO_PKG_VERSION"));
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    print_error(&format!("error: {msg}"));
}
