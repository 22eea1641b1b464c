//! Object accessor: typed getters and setters over a string-keyed mapping.
//!
//! Getters come in three tiers per type:
//!
//! | Method                  | Absent / wrong kind |
//! |-------------------------|---------------------|
//! | `string_ok(field)`      | `None`              |
//! | `string_default(f, d)`  | `d`                 |
//! | `string(field)`         | zero value (`""`)   |
//!
//! `float32` and `int` are derived from the `float64` lookup and succeed
//! exactly when the field holds a number.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::codec;
use crate::error::{DynJsonError, Result};
use crate::guard;
use crate::list::List;
use crate::value::{Kind, Value};

pub(crate) type Fields = IndexMap<String, Value>;

/// Shared handle to a JSON object.
///
/// Clones share storage: a setter called through any clone, or through a
/// handle obtained from a parent with [`Object::object`], is visible through
/// all of them.
///
/// Storage is reference-counted, so an object that contains itself, directly
/// or through nested containers, is never freed until the caller breaks the
/// loop (for example with [`Object::remove`]). Such an object fails to
/// encode with [`DynJsonError::Cycle`].
#[derive(Clone, Default)]
pub struct Object {
    fields: Rc<RefCell<Fields>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON text whose root is an object.
    pub fn parse(text: &str) -> Result<Self> {
        match codec::decode(text)? {
            Value::Object(object) => Ok(object),
            other => {
                let err = DynJsonError::UnexpectedRoot {
                    expected: Kind::Object,
                    found: other.kind(),
                };
                tracing::debug!(error = %err, "rejected JSON text");
                Err(err)
            }
        }
    }

    /// Returns true when both handles share the same storage.
    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Rc::ptr_eq(&a.fields, &b.fields)
    }

    pub(crate) fn fields(&self) -> Ref<'_, Fields> {
        self.fields.borrow()
    }

    pub(crate) fn storage_ptr(&self) -> *const () {
        Rc::as_ptr(&self.fields).cast()
    }

    fn lookup<T>(&self, field: &str, convert: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        self.fields.borrow().get(field).and_then(convert)
    }

    pub fn len(&self) -> usize {
        self.fields.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.borrow().is_empty()
    }

    /// Keys in storage order.
    pub fn keys(&self) -> Vec<String> {
        self.fields.borrow().keys().cloned().collect()
    }

    /// True when `field` is present, even if it holds `null`.
    pub fn has(&self, field: &str) -> bool {
        self.fields.borrow().contains_key(field)
    }

    /// Raw lookup without kind narrowing.
    pub fn get(&self, field: &str) -> Option<Value> {
        self.fields.borrow().get(field).cloned()
    }

    // ── Getters ───────────────────────────────────────────────────────────

    /// Nested object under `field`, sharing storage with `self`.
    pub fn object_ok(&self, field: &str) -> Option<Object> {
        self.lookup(field, Value::as_object)
    }

    /// Like [`Object::object_ok`], falling back to `def`.
    pub fn object_default(&self, field: &str, def: Object) -> Object {
        self.object_ok(field).unwrap_or(def)
    }

    /// Nested object, or a fresh empty object not attached to `self`.
    pub fn object(&self, field: &str) -> Object {
        self.object_ok(field).unwrap_or_default()
    }

    /// Nested list under `field`, sharing storage with `self`.
    pub fn list_ok(&self, field: &str) -> Option<List> {
        self.lookup(field, Value::as_list)
    }

    /// Like [`Object::list_ok`], falling back to `def`.
    pub fn list_default(&self, field: &str, def: List) -> List {
        self.list_ok(field).unwrap_or(def)
    }

    /// Nested list, or a fresh empty list not attached to `self`.
    pub fn list(&self, field: &str) -> List {
        self.list_ok(field).unwrap_or_default()
    }

    /// String under `field`. Numbers and booleans are not stringified.
    pub fn string_ok(&self, field: &str) -> Option<String> {
        self.lookup(field, Value::as_string)
    }

    /// String under `field`, or an owned copy of `def`.
    pub fn string_default(&self, field: &str, def: &str) -> String {
        self.string_ok(field).unwrap_or_else(|| def.to_owned())
    }

    pub fn string(&self, field: &str) -> String {
        self.string_ok(field).unwrap_or_default()
    }

    /// Number under `field`.
    pub fn float64_ok(&self, field: &str) -> Option<f64> {
        self.lookup(field, Value::as_f64)
    }

    pub fn float64_default(&self, field: &str, def: f64) -> f64 {
        self.float64_ok(field).unwrap_or(def)
    }

    pub fn float64(&self, field: &str) -> f64 {
        self.float64_ok(field).unwrap_or_default()
    }

    /// Number under `field`, narrowed to `f32`.
    pub fn float32_ok(&self, field: &str) -> Option<f32> {
        self.lookup(field, Value::as_f32)
    }

    pub fn float32_default(&self, field: &str, def: f32) -> f32 {
        self.float32_ok(field).unwrap_or(def)
    }

    pub fn float32(&self, field: &str) -> f32 {
        self.float32_ok(field).unwrap_or_default()
    }

    /// Number under `field`, truncated toward zero and saturated to `i64`.
    pub fn int_ok(&self, field: &str) -> Option<i64> {
        self.lookup(field, Value::as_i64)
    }

    pub fn int_default(&self, field: &str, def: i64) -> i64 {
        self.int_ok(field).unwrap_or(def)
    }

    /// `0` when absent; `1.9` reads as `1`.
    pub fn int(&self, field: &str) -> i64 {
        self.int_ok(field).unwrap_or_default()
    }

    /// Boolean under `field`.
    pub fn bool_ok(&self, field: &str) -> Option<bool> {
        self.lookup(field, Value::as_bool)
    }

    pub fn bool_default(&self, field: &str, def: bool) -> bool {
        self.bool_ok(field).unwrap_or(def)
    }

    /// `false` unless `field` holds `true`.
    pub fn bool(&self, field: &str) -> bool {
        self.bool_ok(field).unwrap_or_default()
    }

    /// Walk nested objects by key.
    ///
    /// Returns `None` at the first step whose key is absent or does not hold
    /// an object. An empty path returns a handle to `self`.
    pub fn chain<I>(&self, fields: I) -> Option<Object>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut current = self.clone();
        for field in fields {
            current = current.object_ok(field.as_ref())?;
        }
        Some(current)
    }

    // ── Setters ───────────────────────────────────────────────────────────

    /// Insert or overwrite `field`. Numbers of any Rust type are stored as
    /// `f64`.
    pub fn set(&self, field: impl Into<String>, value: impl Into<Value>) {
        // Convert before borrowing: `value` may be a handle to this object.
        let value = value.into();
        self.fields.borrow_mut().insert(field.into(), value);
    }

    pub fn set_object(&self, field: impl Into<String>, value: Object) {
        self.set(field, Value::Object(value));
    }

    pub fn set_list(&self, field: impl Into<String>, value: List) {
        self.set(field, Value::List(value));
    }

    pub fn set_number(&self, field: impl Into<String>, value: f64) {
        self.set(field, Value::Number(value));
    }

    pub fn set_string(&self, field: impl Into<String>, value: impl Into<String>) {
        self.set(field, Value::String(value.into()));
    }

    pub fn set_bool(&self, field: impl Into<String>, value: bool) {
        self.set(field, Value::Bool(value));
    }

    /// Remove `field`, keeping the order of the remaining keys.
    pub fn remove(&self, field: &str) -> Option<Value> {
        self.fields.borrow_mut().shift_remove(field)
    }

    // ── Serialization ─────────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String> {
        codec::encode_object(self, false)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        codec::encode_object(self, true)
    }
}

impl From<Fields> for Object {
    fn from(fields: Fields) -> Self {
        Self {
            fields: Rc::new(RefCell::new(fields)),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Fields>()
            .into()
    }
}

impl FromStr for Object {
    type Err = DynJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Object::ptr_eq(self, other)
            || guard::eq_once(self.storage_ptr(), other.storage_ptr(), || {
                *self.fields.borrow() == *other.fields.borrow()
            })
    }
}

/// A container that is already being formatted prints as `<cycle>`.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        guard::debug_once(self.storage_ptr(), f, |f| {
            f.debug_map().entries(self.fields.borrow().iter()).finish()
        })
    }
}

/// Compact JSON text, or nothing when encoding fails.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_lossy(f, self.to_json())
    }
}
