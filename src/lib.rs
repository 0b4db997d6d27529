#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod cursor;
pub mod errors;
pub mod evaluator;
pub mod macros;
pub mod parser;

/// Character offset into the input read by a [`cursor::cursor::Cursor`].
///
/// Offsets saturate at `u32::MAX`, so characters past the first 4Gi all
/// report the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the character at `position`.
///
/// Returns the 1-based line number, the line text and the character offset
/// of `position` within that line. Positions past the end of the source map
/// to just after the last non-whitespace character, which is where
/// end-of-input errors point.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut last_visible = (1, String::new(), 0);

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let len = line.chars().count();

        if (start..start + len).contains(&pos) {
            return (index + 1, line.to_string(), pos - start);
        }

        let visible = line.trim_end().chars().count();
        if visible > 0 {
            last_visible = (index + 1, line.to_string(), visible);
        }
        start += len;
    }

    last_visible
}

/// Renders an error against the source text it was produced from.
///
/// ```text
/// Error: UnexpectedCharacter (Expected `)` but found end of input)
///   |
/// 1 | (1 + 2
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
