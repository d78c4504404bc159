//! Error types for template rendering

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::formatter::{FormatError, Mode};
use crate::resolver::PropertyNotFound;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Errors that abort a render
///
/// Each variant identifies the placeholder that failed through its `span`,
/// the property that was being read or written, and the host type at that
/// point.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A path segment could not be read
    #[error("can't get property {property} from {host_type}")]
    PropertyNotFound {
        property: String,
        host_type: String,
        span: Span,
    },

    /// A composite value was resolved in a mode that can't write it inline
    #[error("can't serialize property {property} from {host_type} with {mode} serialization")]
    UnrepresentableValue {
        property: String,
        host_type: String,
        mode: Mode,
        span: Span,
    },

    /// The JSON serializer failed on a resolved value
    ///
    /// Resolved values always serialize, so this is not produced in practice.
    #[error("can't serialize property {property} from {host_type}: {source}")]
    Serialization {
        property: String,
        host_type: String,
        span: Span,
        source: serde_json::Error,
    },
}

impl TemplateError {
    /// Attach the failing placeholder to a resolution error
    pub fn not_found(err: PropertyNotFound, span: Span) -> Self {
        Self::PropertyNotFound {
            property: err.segment,
            host_type: err.host_type,
            span,
        }
    }

    /// Attach the failing placeholder to a formatting error
    pub fn unformattable(
        err: FormatError,
        property: impl Into<String>,
        host_type: impl Into<String>,
        span: Span,
    ) -> Self {
        let property = property.into();
        let host_type = host_type.into();
        match err {
            FormatError::Unrepresentable { mode } => Self::UnrepresentableValue {
                property,
                host_type,
                mode,
                span,
            },
            FormatError::Serialize(source) => Self::Serialization {
                property,
                host_type,
                span,
                source,
            },
        }
    }

    pub fn property(&self) -> &str {
        match self {
            Self::PropertyNotFound { property, .. }
            | Self::UnrepresentableValue { property, .. }
            | Self::Serialization { property, .. } => property,
        }
    }

    pub fn host_type(&self) -> &str {
        match self {
            Self::PropertyNotFound { host_type, .. }
            | Self::UnrepresentableValue { host_type, .. }
            | Self::Serialization { host_type, .. } => host_type,
        }
    }

    /// Byte range of the failing placeholder in the template
    pub fn span(&self) -> &Span {
        match self {
            Self::PropertyNotFound { span, .. }
            | Self::UnrepresentableValue { span, .. }
            | Self::Serialization { span, .. } => span,
        }
    }

    /// Format the error with template context using ariadne
    ///
    /// Falls back to the plain message if the span doesn't fit the template.
    pub fn format(&self, template: &str, filename: &str, color: bool) -> String {
        let Some(span) = char_span(template, self.span()) else {
            return self.to_string();
        };

        let label = match self {
            Self::PropertyNotFound { property, .. } => format!("no readable property `{}`", property),
            Self::UnrepresentableValue { mode, .. } => {
                format!("composite value can't be written with {} serialization", mode)
            }
            Self::Serialization { source, .. } => source.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(template)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a byte span into the character span ariadne expects
fn char_span(text: &str, span: &Span) -> Option<Span> {
    let start = text.get(..span.start)?.chars().count();
    let len = text.get(span.clone())?.chars().count();
    Some(start..start + len)
}
