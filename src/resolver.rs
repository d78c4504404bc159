//! Property path resolution
//!
//! Walks a dotted path such as `customer.address.street` one segment at a
//! time, reading each segment as a property of the value produced by the
//! previous step.

use std::fmt;

use thiserror::Error;

use crate::value::{Record, Value};

/// A dotted property path split into its segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath<'p>(Vec<&'p str>);

impl<'p> PropertyPath<'p> {
    /// Split a path expression on `.`
    ///
    /// Empty segments are kept so that resolution can report them.
    pub fn parse(expr: &'p str) -> Self {
        Self(expr.split('.').collect())
    }

    pub fn segments(&self) -> &[&'p str] {
        &self.0
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A path segment that could not be read from its host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("can't get property {segment} from {host_type}")]
pub struct PropertyNotFound {
    /// The segment being read
    pub segment: String,
    /// Type of the value the segment was read from
    pub host_type: String,
}

/// Resolve a dotted path against a root record
///
/// Fails at the first segment that is empty, names no readable property, or
/// is read from a null or non-record value.
pub fn resolve<'a>(root: &'a dyn Record, path: &str) -> Result<Value<'a>, PropertyNotFound> {
    let mut current = Value::Record(root);
    for segment in PropertyPath::parse(path).segments() {
        current = read_property(&current, segment)?;
    }
    Ok(current)
}

fn read_property<'a>(host: &Value<'a>, segment: &str) -> Result<Value<'a>, PropertyNotFound> {
    let found = match host.as_record() {
        Some(record) if !segment.is_empty() => record.field(segment),
        _ => None,
    };

    found.ok_or_else(|| PropertyNotFound {
        segment: segment.to_string(),
        host_type: host.type_name().into_owned(),
    })
}
