// Rust guideline compliant 2026-10-18

//! Terminal UI utilities for the jira-util CLI.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Maps the color decision to a termcolor choice.
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to color the prefix
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
pub fn print_success(message: &str, use_color: bool) {
    print_status("✓", Color::Green, message, use_color);
}

/// Prints a warning message.
pub fn print_warning(message: &str, use_color: bool) {
    print_status("⚠", Color::Yellow, message, use_color);
}

/// Prints an info message.
pub fn print_info(message: &str, use_color: bool) {
    print_status("ℹ", Color::Cyan, message, use_color);
}
