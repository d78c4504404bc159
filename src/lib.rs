//! textmerge - merge `${path}` placeholders with values from an object graph
//!
//! A template is plain text containing `${path}` placeholders. Each path is a
//! dotted property chain (`customer.address.street`) resolved against a root
//! [`Record`], and the value found is written back in one of two modes:
//!
//! - [`Mode::Plain`]: strings without quotes, numbers and booleans as-is,
//!   `null` for null; objects and lists are rejected
//! - [`Mode::Json`]: every value as JSON text
//!
//! Rendering is all-or-nothing: the first placeholder that fails aborts the
//! call and no partial output is returned.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use textmerge::{render, Mode};
//!
//! let data = json!({ "customer": { "name": "João", "tags": ["a", "b"] } });
//!
//! let text = render("Name: ${customer.name}.", &data, Mode::Plain).unwrap();
//! assert_eq!(text, "Name: João.");
//!
//! let text = render(r#"{ "tags": ${customer.tags} }"#, &data, Mode::Json).unwrap();
//! assert_eq!(text, r#"{ "tags": ["a","b"] }"#);
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod resolver;
pub mod scanner;
pub mod value;

pub use config::{ConfigError, MergeConfig};
pub use error::{Span, TemplateError};
pub use formatter::{format_value, FormatError, Mode};
pub use resolver::{resolve, PropertyNotFound, PropertyPath};
pub use scanner::{scan, Placeholder, Scan};
pub use value::{IntoValue, Record, Value};

use tracing::{debug, trace};

/// Configuration for a render call
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Serialization mode applied to every placeholder
    pub mode: Mode,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serialization mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Render a template against a root record
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use textmerge::{render, Mode, TemplateError};
///
/// let data = json!({ "id": "123456" });
/// assert_eq!(render("Id: ${id}.", &data, Mode::Json).unwrap(), r#"Id: "123456"."#);
/// assert_eq!(render("Id: ${id}.", &data, Mode::Plain).unwrap(), "Id: 123456.");
///
/// let err = render("${missing}", &data, Mode::Plain).unwrap_err();
/// assert!(matches!(err, TemplateError::PropertyNotFound { .. }));
/// ```
pub fn render(template: &str, root: &dyn Record, mode: Mode) -> Result<String, TemplateError> {
    render_with_config(template, root, &RenderConfig::new().with_mode(mode))
}

/// Render a template in [`Mode::Plain`]
pub fn render_plain(template: &str, root: &dyn Record) -> Result<String, TemplateError> {
    render(template, root, Mode::Plain)
}

/// Render a template with custom configuration
pub fn render_with_config(
    template: &str,
    root: &dyn Record,
    config: &RenderConfig,
) -> Result<String, TemplateError> {
    let scan = scan(template);
    debug!(
        placeholders = scan.placeholders.len(),
        mode = %config.mode,
        root = %root.type_name(),
        "rendering template"
    );

    let mut output = String::with_capacity(template.len());
    for placeholder in &scan.placeholders {
        output.push_str(placeholder.prefix);
        output.push_str(&substitute(root, placeholder, config.mode)?);
    }
    output.push_str(scan.suffix);

    Ok(output)
}

/// Resolve and format a single placeholder
fn substitute(
    root: &dyn Record,
    placeholder: &Placeholder<'_>,
    mode: Mode,
) -> Result<String, TemplateError> {
    let value = resolve(root, placeholder.path)
        .map_err(|err| TemplateError::not_found(err, placeholder.span.clone()))?;
    trace!(path = placeholder.path, value = ?value, "resolved placeholder");

    // Formatting failures are reported against the full path and the root type.
    format_value(&value, mode).map_err(|err| {
        TemplateError::unformattable(err, placeholder.path, root.type_name(), placeholder.span.clone())
    })
}
