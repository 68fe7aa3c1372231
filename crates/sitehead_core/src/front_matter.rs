//! Page header block parsing
//!
//! A page starts with `key: value` lines, terminated by the first blank line.
//! Everything after that is the Markdown body.

use thiserror::Error;

use crate::model::{PageMetadataInput, StructuredDataType, TextDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    #[default]
    Error,
    Warn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFrontMatter {
    pub input: PageMetadataInput,
    pub unknown_keys: Vec<String>,
}

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid header line: {0}")]
    InvalidLine(String),
    #[error("invalid header key: {0}")]
    InvalidKey(String),
    #[error("unknown header key: {0}")]
    UnknownKey(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

pub fn parse_front_matter(
    input: &str,
    policy: UnknownKeyPolicy,
) -> Result<ParsedFrontMatter, FrontMatterError> {
    let mut parsed = ParsedFrontMatter::default();
    let meta = &mut parsed.input;
    for raw_line in input.lines() {
        if raw_line.trim().is_empty() || raw_line.trim_start().starts_with('#') {
            continue;
        }
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| FrontMatterError::InvalidLine(line.to_string()))?;
        let key = key.trim();
        if !is_valid_key(key) {
            return Err(FrontMatterError::InvalidKey(key.to_string()));
        }
        let value = value.trim();
        match key {
            "title" => meta.title = value.to_string(),
            "description" => meta.description = non_empty(value),
            "image" => meta.image = non_empty(value),
            "canonical" => meta.canonical_path = non_empty(value),
            "language" | "lang" => meta.language = non_empty(value),
            "direction" | "dir" => meta.direction = parse_optional::<TextDirection>(key, value)?,
            "noindex" => meta.noindex = parse_flag(key, value)?,
            "schema" => {
                meta.structured_data_type = parse_optional::<StructuredDataType>(key, value)?
            }
            _ => match policy {
                UnknownKeyPolicy::Error => {
                    return Err(FrontMatterError::UnknownKey(key.to_string()));
                }
                UnknownKeyPolicy::Warn => parsed.unknown_keys.push(key.to_string()),
            },
        }
    }
    Ok(parsed)
}

/// Splits a page source into its header block and body. Sources whose first
/// non-comment line is not a `key: value` line have no header.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let mut offset = 0;
    let mut saw_header_line = false;
    for line in raw.split_inclusive('\n') {
        if line.trim().is_empty() {
            if !saw_header_line {
                return (None, raw);
            }
            return (Some(&raw[..offset]), &raw[offset + line.len()..]);
        }
        if !line.trim_start().starts_with('#') {
            if !looks_like_header_line(line) {
                return (None, raw);
            }
            saw_header_line = true;
        }
        offset += line.len();
    }
    if saw_header_line {
        (Some(raw), "")
    } else {
        (None, raw)
    }
}

fn looks_like_header_line(line: &str) -> bool {
    match line.trim_start().split_once(':') {
        Some((key, _)) => is_valid_key(key.trim_end()),
        None => false,
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// An inline comment starts at a `#` preceded by at least two whitespace
/// characters, so values like `Eid Special #2` survive intact.
fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b'#'
            && idx > 1
            && bytes[idx - 1].is_ascii_whitespace()
            && bytes[idx - 2].is_ascii_whitespace()
        {
            return line[..idx].trim_end();
        }
    }
    line
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_optional<T: std::str::FromStr>(key: &str, value: &str) -> Result<Option<T>, FrontMatterError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| FrontMatterError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_flag(key: &str, value: &str) -> Result<Option<bool>, FrontMatterError> {
    match value.to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" => Ok(Some(true)),
        "false" | "no" => Ok(Some(false)),
        _ => Err(FrontMatterError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
