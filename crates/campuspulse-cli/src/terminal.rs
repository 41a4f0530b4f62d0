// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the CampusPulse CLI.
//!
//! Color support, terminal width detection and text fitting for the
//! table views.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Width assumed when the terminal size cannot be detected.
const DEFAULT_WIDTH: usize = 80;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Wraps text to fit within the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - Indentation applied to continuation lines (in spaces)
///
/// # Returns
/// The wrapped text
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_text_to(text, indent, get_terminal_width())
}

/// Wraps text to a fixed width.
///
/// Continuation lines are indented by `indent` spaces. Words longer than the
/// available width are left intact.
pub fn wrap_text_to(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let indent_str = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.chars().count() <= available_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            let needed = current.chars().count() + 1 + word.chars().count();
            if current.is_empty() {
                current.push_str(word);
            } else if needed <= available_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines.join(&format!("\n{}", indent_str))
}

/// Shortens text to at most `max` characters, marking the cut with `...`.
///
/// Newlines are flattened to spaces so the result fits in one table cell.
pub fn truncate(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max {
        return flat;
    }

    let keep = max.saturating_sub(3);
    let mut cut: String = flat.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Renders text with ANSI color codes.
///
/// # Arguments
/// * `text` - The text to render
/// * `color` - Foreground color
/// * `bold` - Whether to use bold text
///
/// # Returns
/// The colored text, or the text unchanged if rendering fails
pub fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    match write_colored(&mut buffer, text, color, bold) {
        Ok(()) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        Err(_) => text.to_string(),
    }
}

fn write_colored(buffer: &mut Buffer, text: &str, color: Color, bold: bool) -> std::io::Result<()> {
    buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(buffer, "{}", text)?;
    buffer.reset()
}
