//! Terminal output of classified display lines.
//!
//! Colors fragments by category:
//! - Strings (keys included) in green
//! - Numbers in yellow
//! - Booleans and null in magenta
//! - Punctuation and indentation unstyled

use std::io::{self, Write};

use crossterm::style::Stylize;

use super::json_printer::{Category, DisplayLine, Fragment};

/// Write display lines, one per output line.
///
/// When `use_color` is false the output is the plain serialization,
/// suitable for piping.
pub fn write_lines<W: Write>(
    out: &mut W,
    lines: &[DisplayLine],
    use_color: bool,
) -> io::Result<()> {
    for line in lines {
        for fragment in line {
            if use_color {
                write!(out, "{}", paint(fragment))?;
            } else {
                out.write_all(fragment.text.as_bytes())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn paint(fragment: &Fragment) -> String {
    let text = fragment.text.as_str();
    match fragment.category {
        Category::String => text.green().to_string(),
        Category::Number => text.yellow().to_string(),
        Category::BooleanOrNull => text.magenta().to_string(),
        Category::Text => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::display::json_printer::{render, render_to_text};

    #[test]
    fn test_plain_output_matches_serialization() {
        let value = json!({"alg": "RS256", "n": [1, true]});
        let mut out = Vec::new();
        write_lines(&mut out, &render(&value), false).unwrap();

        let expected = format!("{}\n", render_to_text(&value).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        crossterm::style::force_color_output(true);
        let mut out = Vec::new();
        write_lines(&mut out, &render(&json!({"a": 1})), true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("\"a\""));
    }

    #[test]
    fn test_text_fragments_are_not_styled() {
        let fragment = Fragment::new("{", Category::Text);
        assert_eq!(paint(&fragment), "{");
    }
}
