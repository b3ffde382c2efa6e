//! Typed and positional access to a [`Value`].
//!
//! Every accessor checks the active variant first and fails with
//! [`Error::TypeMismatch`] instead of reinterpreting the payload. Mutable
//! accessors never convert the variant, with one exception: [`Value::field_mut`]
//! inserts a `Null` entry for an absent key of an existing object.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::value::{Array, JsonType, Object, Value};

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for super::Array {}
    impl Sealed for super::Object {}
}

/// A payload type that a [`Value`] variant can hold.
///
/// Implemented for `bool`, `f64`, `String`, [`Array`] and [`Object`].
pub trait Payload: sealed::Sealed + Sized {
    /// The variant holding this payload.
    const TYPE: JsonType;

    fn from_ref(value: &Value) -> Option<&Self>;
    fn from_mut(value: &mut Value) -> Option<&mut Self>;
    fn from_owned(value: Value) -> std::result::Result<Self, Value>;
}

macro_rules! payload {
    ($t:ty, $variant:ident) => {
        impl Payload for $t {
            const TYPE: JsonType = JsonType::$variant;

            #[inline]
            fn from_ref(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn from_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            #[inline]
            fn from_owned(value: Value) -> std::result::Result<Self, Value> {
                match value {
                    Value::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl TryFrom<Value> for $t {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                value.into_inner()
            }
        }
    };
}

payload!(bool, Boolean);
payload!(f64, Number);
payload!(String, String);
payload!(Array, Array);
payload!(Object, Object);

impl Value {
    /// Borrow the payload if the active variant is `T`.
    ///
    /// ```
    /// use jsontree_core::Value;
    ///
    /// let v = Value::from(2.5);
    /// assert_eq!(*v.get::<f64>().unwrap(), 2.5);
    /// assert!(v.get::<bool>().is_err());
    /// ```
    pub fn get<T: Payload>(&self) -> Result<&T> {
        T::from_ref(self).ok_or_else(|| Error::mismatch(T::TYPE, self.json_type()))
    }

    /// Mutably borrow the payload if the active variant is `T`.
    pub fn get_mut<T: Payload>(&mut self) -> Result<&mut T> {
        let actual = self.json_type();
        T::from_mut(self).ok_or_else(|| Error::mismatch(T::TYPE, actual))
    }

    /// Consume the value and return its payload if the active variant is `T`.
    pub fn into_inner<T: Payload>(self) -> Result<T> {
        T::from_owned(self).map_err(|other| Error::mismatch(T::TYPE, other.json_type()))
    }

    /// Array element at `index`.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let items = self.get::<Array>()?;
        let length = items.len();
        items.get(index).ok_or(Error::IndexOutOfRange { index, length })
    }

    /// Mutable array element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let items = self.get_mut::<Array>()?;
        let length = items.len();
        items.get_mut(index).ok_or(Error::IndexOutOfRange { index, length })
    }

    /// Object entry for `key`; fails with [`Error::KeyNotFound`] when absent.
    pub fn field(&self, key: &str) -> Result<&Value> {
        self.get::<Object>()?
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))
    }

    /// Object entry for `key`, inserting `Null` when absent.
    pub fn field_mut(&mut self, key: &str) -> Result<&mut Value> {
        let map = self.get_mut::<Object>()?;
        Ok(map.entry(key.to_owned()).or_default())
    }

    /// Element count of an array or entry count of an object.
    pub fn size(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(map) => Ok(map.len()),
            other => Err(Error::mismatch(JsonType::Array, other.json_type())),
        }
    }

    /// Character count of a string.
    pub fn length(&self) -> Result<usize> {
        self.get::<String>().map(|s| s.chars().count())
    }
}

impl TryFrom<&Value> for bool {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.get::<bool>().copied()
    }
}

impl TryFrom<&Value> for f64 {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        value.get::<f64>().copied()
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        value.get::<String>().map(String::as_str)
    }
}

// Operator indexing panics on failure, like slice and map indexing.

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.at(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.at_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.field(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.field_mut(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}
