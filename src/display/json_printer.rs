//! Classified JSON pretty-printing.
//!
//! Serializes a JSON value with 4-space indentation, sorted keys and
//! literal non-ASCII text, and splits the output into display lines made
//! of `(text, category)` fragments.
//!
//! Classification is chunk-granular. An incremental encoder emits the
//! serialization as a stream of chunks (see [`encode_chunks`]) and each
//! chunk is tagged by its leading characters alone, without knowing
//! whether it is an object key or a value. Object keys are emitted as
//! chunks of their own and therefore come out as [`Category::String`];
//! array elements carry their indentation inside the same fragment.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::JoseViewError;

const INDENT: &str = "    ";

/// Syntax category of a display fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A quoted string literal (object keys included).
    String,
    /// A numeric literal starting with a digit.
    Number,
    /// `true`, `false` or `null`.
    BooleanOrNull,
    /// Punctuation, indentation and anything else.
    Text,
}

/// A run of raw text with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub category: Category,
}

impl Fragment {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// One output line. Carries no trailing newline.
pub type DisplayLine = Vec<Fragment>;

/// Render a JSON value as classified display lines.
///
/// Always yields at least one line. Joining the fragments of all lines
/// with `\n` reproduces [`render_to_text`] exactly.
pub fn render(value: &Value) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    let mut current = DisplayLine::new();

    for chunk in encode_chunks(value) {
        let mut chunk = chunk.as_str();
        if let Some((rest_of_line, next)) = chunk.split_once('\n') {
            // rest_of_line is a delimiter such as `,` or `[`
            current.push(Fragment::new(rest_of_line, Category::Text));
            lines.push(std::mem::take(&mut current));
            chunk = next;
        }
        current.push(Fragment::new(chunk, classify(chunk)));
    }

    lines.push(current);
    lines
}

/// Serialize a JSON value with 4-space indentation and sorted keys.
///
/// Non-ASCII characters are written literally.
///
/// # Errors
///
/// Returns [`JoseViewError::Serialize`] if serialization fails.
pub fn render_to_text(value: &Value) -> Result<String, JoseViewError> {
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|e| JoseViewError::Serialize {
            reason: e.to_string(),
        })?;

    String::from_utf8(out).map_err(|e| JoseViewError::Serialize {
        reason: e.to_string(),
    })
}

/// Join display lines back into plain text.
pub fn lines_to_text(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(|line| line.iter().map(|f| f.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Classify a chunk by its leading characters.
fn classify(chunk: &str) -> Category {
    let trimmed = chunk.trim_start();
    if trimmed.starts_with('"') {
        Category::String
    } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        Category::Number
    } else if ["true", "false", "null"]
        .iter()
        .any(|literal| trimmed.starts_with(literal))
    {
        Category::BooleanOrNull
    } else {
        Category::Text
    }
}

/// Serialize a JSON value as the chunk stream of an incremental encoder.
///
/// Objects yield `{`, the newline and indentation, then per entry the key,
/// `": "` and the value; separators are `",\n"` plus indentation. Arrays
/// fuse the opening bracket or separator with a following scalar element
/// into one chunk. Concatenating the chunks gives [`render_to_text`].
pub fn encode_chunks(value: &Value) -> Vec<String> {
    let mut chunks = Vec::new();
    encode_value(value, 0, &mut chunks);
    chunks
}

fn encode_value(value: &Value, level: usize, chunks: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                chunks.push("{}".to_string());
                return;
            }

            let newline_indent = format!("\n{}", INDENT.repeat(level + 1));
            chunks.push("{".to_string());
            chunks.push(newline_indent.clone());

            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    chunks.push(format!(",{newline_indent}"));
                }
                chunks.push(Value::from(key.as_str()).to_string());
                chunks.push(": ".to_string());
                encode_value(item, level + 1, chunks);
            }

            chunks.push(format!("\n{}", INDENT.repeat(level)));
            chunks.push("}".to_string());
        }
        Value::Array(items) => {
            if items.is_empty() {
                chunks.push("[]".to_string());
                return;
            }

            let newline_indent = format!("\n{}", INDENT.repeat(level + 1));
            let mut buf = format!("[{newline_indent}");

            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf = format!(",{newline_indent}");
                }
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        chunks.push(std::mem::take(&mut buf));
                        encode_value(item, level + 1, chunks);
                    }
                    scalar => chunks.push(format!("{buf}{scalar}")),
                }
            }

            chunks.push(format!("\n{}", INDENT.repeat(level)));
            chunks.push("]".to_string());
        }
        scalar => chunks.push(scalar.to_string()),
    }
}
