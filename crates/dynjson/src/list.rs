//! List accessor and the per-element [`Item`] view.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::codec;
use crate::error::{DynJsonError, Result};
use crate::guard;
use crate::object::Object;
use crate::value::{Kind, Value};

/// Shared handle to a JSON array.
///
/// Like [`Object`], clones share storage; [`List::append`] and
/// [`List::prepend`] are visible through every clone, including the handle
/// held by a parent container.
///
/// A list that ends up containing itself keeps its storage alive until the
/// loop is broken, and fails to encode with [`DynJsonError::Cycle`].
#[derive(Clone, Default)]
pub struct List {
    items: Rc<RefCell<Vec<Value>>>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every value as an element. Kinds are resolved on access, not here.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        values.into_iter().collect()
    }

    /// Parse JSON text whose root is an array.
    pub fn parse(text: &str) -> Result<Self> {
        match codec::decode(text)? {
            Value::List(list) => Ok(list),
            other => {
                let err = DynJsonError::UnexpectedRoot {
                    expected: Kind::List,
                    found: other.kind(),
                };
                tracing::debug!(error = %err, "rejected JSON text");
                Err(err)
            }
        }
    }

    /// Returns true when both handles share the same storage.
    pub fn ptr_eq(a: &List, b: &List) -> bool {
        Rc::ptr_eq(&a.items, &b.items)
    }

    pub(crate) fn values(&self) -> Ref<'_, Vec<Value>> {
        self.items.borrow()
    }

    pub(crate) fn storage_ptr(&self) -> *const () {
        Rc::as_ptr(&self.items).cast()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Item> {
        self.items.borrow().get(index).cloned().map(Item::new)
    }

    /// Iterate element views by index.
    ///
    /// Each step takes a fresh snapshot of one element, so the list may be
    /// modified while iterating; items appended meanwhile are visited.
    pub fn iter(&self) -> Items {
        Items {
            list: self.clone(),
            index: 0,
        }
    }

    /// Add `values` at the tail, keeping their order.
    pub fn append<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = normalize(values);
        self.items.borrow_mut().extend(values);
    }

    /// Add `values` at the head, keeping their order.
    pub fn prepend<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = normalize(values);
        self.items.borrow_mut().splice(0..0, values);
    }

    pub fn to_json(&self) -> Result<String> {
        codec::encode_list(self, false)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        codec::encode_list(self, true)
    }
}

/// Collected up front so the source iterator may read the target list.
fn normalize<I>(values: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values.into_iter().map(Into::into).collect()
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: Rc::new(RefCell::new(normalize(iter))),
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for List {
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl FromStr for List {
    type Err = DynJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        List::ptr_eq(self, other)
            || guard::eq_once(self.storage_ptr(), other.storage_ptr(), || {
                *self.items.borrow() == *other.items.borrow()
            })
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        guard::debug_once(self.storage_ptr(), f, |f| {
            f.debug_list().entries(self.items.borrow().iter()).finish()
        })
    }
}

/// Compact JSON text, or nothing when encoding fails.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_lossy(f, self.to_json())
    }
}

impl IntoIterator for &List {
    type Item = Item;
    type IntoIter = Items;

    fn into_iter(self) -> Items {
        self.iter()
    }
}

impl IntoIterator for List {
    type Item = Item;
    type IntoIter = Items;

    fn into_iter(self) -> Items {
        Items {
            list: self,
            index: 0,
        }
    }
}

/// Iterator returned by [`List::iter`].
#[derive(Debug, Clone)]
pub struct Items {
    list: List,
    index: usize,
}

impl Iterator for Items {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

// ── Item ──────────────────────────────────────────────────────────────────

/// Value-only view of one list element.
///
/// Exposes the same typed getters as [`Object`] fields, minus `bool`. A
/// nested container fetched from an item still shares the list's storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    value: Value,
}

impl Item {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The wrapped element.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// The element as an object, sharing storage with the list.
    pub fn object_ok(&self) -> Option<Object> {
        self.value.as_object()
    }

    /// Like [`Item::object_ok`], falling back to `def`.
    pub fn object_default(&self, def: Object) -> Object {
        self.object_ok().unwrap_or(def)
    }

    pub fn object(&self) -> Object {
        self.object_ok().unwrap_or_default()
    }

    /// The element as a nested list, sharing storage with the parent.
    pub fn list_ok(&self) -> Option<List> {
        self.value.as_list()
    }

    pub fn list_default(&self, def: List) -> List {
        self.list_ok().unwrap_or(def)
    }

    pub fn list(&self) -> List {
        self.list_ok().unwrap_or_default()
    }

    /// The element as a string.
    pub fn string_ok(&self) -> Option<String> {
        self.value.as_string()
    }

    pub fn string_default(&self, def: &str) -> String {
        self.string_ok().unwrap_or_else(|| def.to_owned())
    }

    /// The element as a string, or `""`.
    pub fn string(&self) -> String {
        self.string_ok().unwrap_or_default()
    }

    /// The element as a number.
    pub fn float64_ok(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// The number, or `def` for any other kind.
    pub fn float64_default(&self, def: f64) -> f64 {
        self.float64_ok().unwrap_or(def)
    }

    pub fn float64(&self) -> f64 {
        self.float64_ok().unwrap_or_default()
    }

    /// The element as a number, narrowed to `f32`.
    pub fn float32_ok(&self) -> Option<f32> {
        self.value.as_f32()
    }

    pub fn float32_default(&self, def: f32) -> f32 {
        self.float32_ok().unwrap_or(def)
    }

    pub fn float32(&self) -> f32 {
        self.float32_ok().unwrap_or_default()
    }

    /// The element truncated toward zero to `i64`.
    pub fn int_ok(&self) -> Option<i64> {
        self.value.as_i64()
    }

    pub fn int_default(&self, def: i64) -> i64 {
        self.int_ok().unwrap_or(def)
    }

    /// Zero for non-numbers.
    pub fn int(&self) -> i64 {
        self.int_ok().unwrap_or_default()
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        item.value
    }
}
