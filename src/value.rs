//! The value payload resolved by containers.
//!
//! The core is value-agnostic: decorators pass [`Value`]s through untouched
//! except where their contract explicitly inspects structure (path walking
//! descends into [`Value::Container`], hierarchy wrapping rewrites
//! [`Value::Map`]). Leaf containers such as [`Dictionary`](crate::Dictionary)
//! are the first point where concrete shapes are known.
//!
//! Plain data variants bridge losslessly to and from [`serde_json::Value`],
//! so nested JSON configuration can seed dictionaries and hierarchies
//! directly. [`Value::Container`] and [`Value::Opaque`] have no JSON
//! representation and make [`Value::to_json`] fail.

use crate::container::ContainerRef;
use crate::error::{ContainerError, Result};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// An arbitrary payload held or resolved by a container.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent/empty value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// String-keyed mapping of values
    Map(BTreeMap<String, Value>),
    /// A nested container, as produced by path and hierarchy decorators
    Container(ContainerRef),
    /// An arbitrary shared payload the core never inspects
    Opaque(Rc<dyn Any>),
}

impl Value {
    /// Returns the boolean payload, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a [`Value::Float`].
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the map payload, if this is a [`Value::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the nested container, if this is a [`Value::Container`].
    #[must_use]
    pub fn as_container(&self) -> Option<&ContainerRef> {
        match self {
            Self::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts a plain data value into its JSON representation.
    ///
    /// # Errors
    ///
    /// Fails with [`ContainerError::Misconfigured`] when the value (or any
    /// nested element) is a [`Value::Container`] or [`Value::Opaque`], which
    /// have no JSON form.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Self::Null => Ok(serde_json::Value::Null),
            Self::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Self::Int(i) => Ok(serde_json::Value::from(*i)),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    ContainerError::misconfigured(format!(
                        "float {f} has no JSON representation"
                    ))
                }),
            Self::Str(s) => Ok(serde_json::Value::String(s.clone())),
            Self::List(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),
            Self::Map(entries) => entries
                .iter()
                .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                .collect::<Result<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Self::Container(_) => Err(ContainerError::misconfigured(
                "a container value has no JSON representation",
            )),
            Self::Opaque(_) => Err(ContainerError::misconfigured(
                "an opaque value has no JSON representation",
            )),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::List(l) => f.debug_tuple("List").field(l).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Self::Container(c) => {
                write!(f, "Container({:p})", Rc::as_ptr(c))
            }
            Self::Opaque(o) => write!(f, "Opaque({:p})", Rc::as_ptr(o)),
        }
    }
}

/// Data variants compare structurally; `Container` and `Opaque` compare by
/// pointer identity, which is the only meaningful notion of equality for
/// shared, type-erased payloads.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Container(a), Self::Container(b)) => Rc::ptr_eq(a, b),
            (Self::Opaque(a), Self::Opaque(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Self::List(l)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(m: BTreeMap<String, Value>) -> Self {
        Self::Map(m)
    }
}

impl From<ContainerRef> for Value {
    fn from(c: ContainerRef) -> Self {
        Self::Container(c)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                // Integral JSON numbers stay integers; everything else
                // becomes a float.
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use serde_json::json;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(42).as_int(), Some(42));
        assert_eq!(Value::from(2.5).as_float(), Some(2.5));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(42).as_str(), None);
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_from_json_preserves_structure() {
        let value = Value::from(json!({
            "name": "keystack",
            "retries": 3,
            "ratio": 0.5,
            "tags": ["a", "b"],
            "nested": {"on": true}
        }));
        let map = value.as_map().unwrap();
        assert_eq!(map["name"].as_str(), Some("keystack"));
        assert_eq!(map["retries"].as_int(), Some(3));
        assert_eq!(map["ratio"].as_float(), Some(0.5));
        assert_eq!(map["tags"].as_list().unwrap().len(), 2);
        assert_eq!(map["nested"].as_map().unwrap()["on"].as_bool(), Some(true));
    }

    #[test]
    fn test_to_json_round_trip_for_data() {
        let original = json!({"a": [1, 2, {"b": null}], "c": "x"});
        let value = Value::from(original.clone());
        assert_eq!(value.to_json().unwrap(), original);
    }

    #[test]
    fn test_to_json_rejects_containers() {
        let c: ContainerRef = Rc::new(Dictionary::default());
        let err = Value::Container(c).to_json().unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_container_equality_is_pointer_identity() {
        let a: ContainerRef = Rc::new(Dictionary::default());
        let b: ContainerRef = Rc::new(Dictionary::default());
        assert_eq!(Value::Container(a.clone()), Value::Container(a.clone()));
        assert_ne!(Value::Container(a), Value::Container(b));
    }
}
