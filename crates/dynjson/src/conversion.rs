//! Scalar conversion helpers shared by [`Object`] fields and list [`Item`]s.
//!
//! A conversion succeeds only on an exact kind match. There is no coercion:
//! `"1"` is not a number, `true` is not a number and `null` converts to
//! nothing. `as_f32` and `as_i64` are derived from `as_f64`, so they succeed
//! exactly when the value is a number.
//!
//! [`Item`]: crate::Item

use crate::list::List;
use crate::object::Object;
use crate::value::Value;

impl Value {
    /// Returns a handle sharing the nested object's storage.
    pub fn as_object(&self) -> Option<Object> {
        match self {
            Value::Object(object) => Some(object.clone()),
            _ => None,
        }
    }

    /// Returns a handle sharing the nested list's storage.
    pub fn as_list(&self) -> Option<List> {
        match self {
            Value::List(list) => Some(list.clone()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        self.as_str().map(str::to_owned)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Narrowed from [`Value::as_f64`]; out-of-range numbers become `±inf`.
    pub fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|n| n as f32)
    }

    /// Truncated toward zero from [`Value::as_f64`], saturating at the `i64`
    /// bounds.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
