//! Output formatting for the interactive session

use colored::Colorize;

pub mod report;
pub mod table;

/// Indentation used for nested list items
const INDENT: &str = "   ";

/// Bold text for emphasis inside status lines
pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

/// Indent a nested line
pub fn indent(text: &str) -> String {
    format!("{}{}", INDENT, text)
}

/// Styled error line, e.g. `ERROR: not permitted to access org 'acme'`
pub fn error_line(message: &str) -> String {
    format!("{}: {}", "ERROR".bold().red(), message)
}
