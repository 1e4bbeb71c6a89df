//! User interface module - colours and output formatting.
//!
//! - `formatter` - commit listing and result messages
//! - This module - the colour palette shared by the formatter

use console::Style;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_bump, display_commits, display_empty_outcome, display_error, display_range,
    format_commit_line, Placeholders,
};

fn paint(style: Style, s: &str) -> String {
    style.apply_to(s).to_string()
}

pub fn red(s: &str) -> String {
    paint(Style::new().color256(202), s)
}

pub fn extra_red(s: &str) -> String {
    paint(Style::new().color256(222), s)
}

pub fn green(s: &str) -> String {
    paint(Style::new().color256(82), s)
}

pub fn blue(s: &str) -> String {
    paint(Style::new().blue().bold(), s)
}

pub fn yellow(s: &str) -> String {
    paint(Style::new().yellow(), s)
}

pub fn grey(s: &str) -> String {
    paint(Style::new().color256(242), s)
}

/// Accent used for commits that carry no work item
pub fn purple(s: &str) -> String {
    paint(Style::new().color256(92), s)
}
