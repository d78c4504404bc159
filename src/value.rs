//! Property model for merge roots
//!
//! The engine never inspects host types directly. Anything used as a root, or
//! reached while walking a path, exposes a uniform key-value view through the
//! [`Record`] trait, and every property read yields a [`Value`].
//!
//! # Example
//!
//! ```rust
//! use textmerge::{record, render, Mode};
//!
//! struct Address {
//!     street: String,
//!     number: u32,
//! }
//! record!(Address { street, number });
//!
//! let home = Address { street: "Silveira Martins".into(), number: 30 };
//! let text = render("${street}, ${number}", &home, Mode::Plain).unwrap();
//! assert_eq!(text, "Silveira Martins, 30");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// Read-only named-property access on a host object
pub trait Record {
    /// Name reported in errors when a property can't be read from this record
    fn type_name(&self) -> Cow<'_, str>;

    /// Readable property names in declaration order
    fn field_names(&self) -> Vec<&str>;

    /// Read a property by exact name, `None` if no such readable property exists
    fn field(&self, name: &str) -> Option<Value<'_>>;
}

/// A property value borrowed from a record graph
#[derive(Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Number(Number),
    Text(Cow<'a, str>),
    List(Vec<Value<'a>>),
    Record(&'a dyn Record),
}

impl<'a> Value<'a> {
    /// Host type name used in error reports
    pub fn type_name(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(_) => Cow::Borrowed("bool"),
            Value::Number(_) => Cow::Borrowed("number"),
            Value::Text(_) => Cow::Borrowed("string"),
            Value::List(_) => Cow::Borrowed("list"),
            Value::Record(record) => record.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the record behind this value, if it is one
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Value::Record(record) => Some(*record),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Record(record) => write!(f, "Record({})", record.type_name()),
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Record(record) => {
                let names = record.field_names();
                let mut map = serializer.serialize_map(Some(names.len()))?;
                for name in names {
                    let value = record.field(name).unwrap_or(Value::Null);
                    map.serialize_entry(name, &value)?;
                }
                map.end()
            }
        }
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(json: &'a serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.clone()),
            serde_json::Value::String(s) => Value::Text(Cow::Borrowed(s)),
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Record(map),
        }
    }
}

/// Conversion of a host field into a [`Value`]
///
/// Implemented for the common scalar and container types; [`record!`](crate::record)
/// implements it for structs.
pub trait IntoValue {
    fn to_value(&self) -> Value<'_>;
}

impl IntoValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self))
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_str()))
    }
}

impl IntoValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Borrowed(self.as_ref()))
    }
}

impl IntoValue for char {
    fn to_value(&self) -> Value<'_> {
        Value::Text(Cow::Owned(self.to_string()))
    }
}

impl IntoValue for bool {
    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

macro_rules! integer_values {
    ($($ty:ty),*) => {
        $(
            impl IntoValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Non-finite floats have no JSON form and become null, as serde_json does.
impl IntoValue for f64 {
    fn to_value(&self) -> Value<'_> {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

// Widened through the shortest decimal form so 0.1f32 stays 0.1.
impl IntoValue for f32 {
    fn to_value(&self) -> Value<'_> {
        self.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, IntoValue::to_value)
    }
}

impl<T: IntoValue> IntoValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(IntoValue::to_value).collect())
    }
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl IntoValue for serde_json::Value {
    fn to_value(&self) -> Value<'_> {
        Value::from(self)
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<T: IntoValue> IntoValue for HashMap<String, T> {
    fn to_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

impl<T: IntoValue> Record for BTreeMap<String, T> {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("map")
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(IntoValue::to_value)
    }
}

// Keys are sorted so the JSON form doesn't depend on hash order.
impl<T: IntoValue> Record for HashMap<String, T> {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("map")
    }

    fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(IntoValue::to_value)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("object")
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(Value::from)
    }
}

/// A whole JSON document can be a root; only objects have readable properties.
impl Record for serde_json::Value {
    fn type_name(&self) -> Cow<'_, str> {
        let name = match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "list",
            serde_json::Value::Object(_) => "object",
        };
        Cow::Borrowed(name)
    }

    fn field_names(&self) -> Vec<&str> {
        match self {
            serde_json::Value::Object(map) => map.field_names(),
            _ => Vec::new(),
        }
    }

    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.as_object()?.get(name).map(Value::from)
    }
}

/// Generate [`Record`] and [`IntoValue`] for a struct from its field list
///
/// Every listed field must implement [`IntoValue`]. A field can be exposed
/// under a different property name with `field as "name"`.
///
/// ```rust
/// use textmerge::{record, render, Mode};
///
/// struct Customer {
///     full_name: String,
///     age: u8,
/// }
/// record!(Customer { full_name as "fullName", age });
///
/// let c = Customer { full_name: "João".into(), age: 32 };
/// assert_eq!(
///     render("${fullName} (${age})", &c, Mode::Plain).unwrap(),
///     "João (32)"
/// );
/// ```
#[macro_export]
macro_rules! record {
    (@name $field:ident) => {
        stringify!($field)
    };
    (@name $field:ident $name:literal) => {
        $name
    };
    ($ty:ident { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn type_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(stringify!($ty))
            }

            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$($crate::record!(@name $field $($name)?)),*]
            }

            #[allow(unused_variables)]
            fn field(&self, name: &str) -> ::std::option::Option<$crate::Value<'_>> {
                $(
                    if name == $crate::record!(@name $field $($name)?) {
                        return ::std::option::Option::Some($crate::IntoValue::to_value(&self.$field));
                    }
                )*
                ::std::option::Option::None
            }
        }

        impl $crate::IntoValue for $ty {
            fn to_value(&self) -> $crate::Value<'_> {
                $crate::Value::Record(self)
            }
        }
    };
}
