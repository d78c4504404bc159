//! Placeholder scanner for `${path}` spans

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Span;

/// `${` followed by everything up to the first `}`
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// A single placeholder and the literal text preceding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Literal text since the end of the previous placeholder
    pub prefix: &'t str,
    /// Path expression between the braces
    pub path: &'t str,
    /// Byte range of the whole `${...}` span in the template
    pub span: Span,
}

/// Result of scanning a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'t> {
    /// Placeholders in template order
    pub placeholders: Vec<Placeholder<'t>>,
    /// Literal text after the last placeholder
    pub suffix: &'t str,
}

impl Scan<'_> {
    pub fn is_literal(&self) -> bool {
        self.placeholders.is_empty()
    }
}

/// Split a template into placeholders, left to right and non-overlapping
pub fn scan(template: &str) -> Scan<'_> {
    let mut placeholders = Vec::new();
    let mut last_end = 0;

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        placeholders.push(Placeholder {
            prefix: &template[last_end..whole.start()],
            path: path.as_str(),
            span: whole.range(),
        });
        last_end = whole.end();
    }

    Scan {
        placeholders,
        suffix: &template[last_end..],
    }
}
