//! Conversion of resolved values into template text

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::value::Value;

/// How resolved values are written into the template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Scalars as bare text: strings lose their quotes, composites are rejected
    #[default]
    Plain,
    /// Every value as its JSON text
    Json,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Plain => f.write_str("plain"),
            Mode::Json => f.write_str("json"),
        }
    }
}

/// Errors produced while formatting a single value
#[derive(Debug, Error)]
pub enum FormatError {
    /// An object or list was requested in a mode that only renders scalars
    #[error("composite value can't be written with {mode} serialization")]
    Unrepresentable { mode: Mode },

    /// The JSON serializer rejected the value
    ///
    /// Unreachable for [`Value`], which always has a JSON form; kept so a
    /// serializer failure surfaces as an error instead of a panic.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Canonical JSON text for a value
pub fn canonicalize(value: &Value<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Format a resolved value for substitution
///
/// The canonical JSON text is the only input to the decision; host types are
/// never inspected. In [`Mode::Plain`] a JSON string loses exactly its
/// outer quotes. Escape sequences inside it are kept as serialized, so a
/// value `say "hi"` is written as `say \"hi\"`.
pub fn format_value(value: &Value<'_>, mode: Mode) -> Result<String, FormatError> {
    let canonical = canonicalize(value)?;
    match mode {
        Mode::Json => Ok(canonical),
        Mode::Plain => plain_text(canonical),
    }
}

fn plain_text(canonical: String) -> Result<String, FormatError> {
    if canonical == "null" {
        return Ok(canonical);
    }

    if let Some(inner) = canonical.strip_prefix('"') {
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        return Ok(inner.to_string());
    }

    if canonical.starts_with('{') || canonical.starts_with('[') {
        return Err(FormatError::Unrepresentable { mode: Mode::Plain });
    }

    // numbers and booleans
    Ok(canonical)
}
