//! The JSON value tree.
//!
//! A [`Value`] holds exactly one of six variants and exclusively owns every
//! value nested below it. Cloning is a deep copy; [`Value::take`] moves the
//! payload out and leaves `Null` behind.

use std::collections::HashMap;
use std::fmt;

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// Mapping from key to value. Iteration order is unspecified.
pub type Object = HashMap<String, Value>;

/// The variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON value.
///
/// Numbers are always `f64`; there is no integer/float distinction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`, the default state
    #[default]
    Null,

    /// `true` or `false`
    Boolean(bool),

    /// Any number
    Number(f64),

    /// String content, stored verbatim
    String(String),

    /// `[a, b, c]`
    Array(Array),

    /// `{"key": value}`
    Object(Object),
}

impl Value {
    /// The active variant.
    #[inline]
    pub fn json_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Boolean(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Independent copy of the whole subtree.
    pub fn deep_copy(&self) -> Value {
        self.clone()
    }

    /// Move the payload out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Replace the active variant with a new payload.
    ///
    /// The previous payload is dropped before the new one is adopted.
    pub fn set<T: Into<Value>>(&mut self, payload: T) -> &mut Self {
        *self = payload.into();
        self
    }

    /// Replace this value with a deep copy of `other`.
    pub fn assign(&mut self, other: &Value) -> &mut Self {
        self.clone_from(other);
        self
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

macro_rules! from_lossless_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(f64::from(n))
                }
            }
        )*
    };
}

from_lossless_number!(f32, i8, i16, i32, u8, u16, u32);

macro_rules! from_wide_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                /// Values beyond 2^53 lose precision.
                #[allow(clippy::cast_precision_loss)]
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_wide_number!(i64, u64, isize, usize);

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert_eq!(Value::default().json_type(), JsonType::Null);
    }

    #[test]
    fn test_construction_fixes_variant() {
        assert_eq!(Value::from(true).json_type(), JsonType::Boolean);
        assert_eq!(Value::from(1.5).json_type(), JsonType::Number);
        assert_eq!(Value::from(7_i32), Value::Number(7.0));
        assert_eq!(Value::from(7_usize), Value::Number(7.0));
        assert_eq!(Value::from("hi").json_type(), JsonType::String);
        assert_eq!(Value::from(Array::new()).json_type(), JsonType::Array);
        assert_eq!(Value::from(Object::new()).json_type(), JsonType::Object);
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Null.is_null());
        assert!(Value::Boolean(false).is_boolean());
        assert!(Value::Number(0.0).is_number());
        assert!(Value::String(String::new()).is_string());
        assert!(Value::Array(vec![]).is_array());
        assert!(Value::Object(Object::new()).is_object());
        assert!(!Value::Null.is_object());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(JsonType::Null.as_str(), "null");
        assert_eq!(JsonType::Boolean.as_str(), "boolean");
        assert_eq!(JsonType::Number.as_str(), "number");
        assert_eq!(JsonType::String.as_str(), "string");
        assert_eq!(JsonType::Array.as_str(), "array");
        assert_eq!(JsonType::Object.to_string(), "object");
    }

    #[test]
    fn test_take_leaves_null() {
        let mut v = Value::from(vec![Value::from(1), Value::from(2)]);
        let moved = v.take();
        assert!(v.is_null());
        assert_eq!(moved, Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]));
    }

    #[test]
    fn test_set_replaces_variant() {
        let mut v = Value::from("text");
        v.set(3.0);
        assert_eq!(v, Value::Number(3.0));
        v.set(vec![Value::Null]);
        assert_eq!(v.json_type(), JsonType::Array);
    }

    #[test]
    fn test_assign_deep_copies() {
        let source: Value = vec![Value::from("a")].into_iter().collect();
        let mut target = Value::from(false);
        target.assign(&source);
        assert_eq!(target, source);

        if let Value::Array(items) = &mut target {
            items.push(Value::Null);
        }
        assert_ne!(target, source);
    }

    #[test]
    fn test_collect_object() {
        let v: Value = [("a", Value::from(1)), ("a", Value::from(2))].into_iter().collect();
        match v {
            Value::Object(map) => {
                assert_eq!(map.len(), 1);
                assert_eq!(map["a"], Value::Number(2.0));
            }
            other => panic!("expected object, got {other:?}"),
        }
    }
}
