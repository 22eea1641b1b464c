//! Bridge to `serde_json`, the only code that touches JSON text.
//!
//! Decoding goes text -> `serde_json::Value` -> [`Value`]. Encoding walks the
//! shared handles back into a `serde_json::Value`, refusing cycles and
//! non-finite numbers, then lets `serde_json` render the text.

use std::fmt;

use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{DynJsonError, Result};
use crate::list::List;
use crate::object::Object;
use crate::value::Value;

pub(crate) fn decode(text: &str) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(text).map_err(|err| {
        tracing::debug!(error = %err, "failed to parse JSON text");
        DynJsonError::Syntax(err)
    })?;
    Ok(Value::from(json))
}

pub(crate) fn encode_object(object: &Object, pretty: bool) -> Result<String> {
    let json = Encoder::default().object(object)?;
    render(&json, pretty)
}

pub(crate) fn encode_list(list: &List, pretty: bool) -> Result<String> {
    let json = Encoder::default().list(list)?;
    render(&json, pretty)
}

fn render(json: &JsonValue, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(json)
    } else {
        serde_json::to_string(json)
    };
    text.map_err(DynJsonError::Encode)
}

/// Best-effort rendering used by the `Display` impls.
pub(crate) fn write_lossy(f: &mut fmt::Formatter<'_>, text: Result<String>) -> fmt::Result {
    match text {
        Ok(text) => f.write_str(&text),
        Err(err) => {
            tracing::warn!(error = %err, "JSON encoding failed, rendering empty text");
            Ok(())
        }
    }
}

/// Integral values in the i64 range are written without a fraction, so a
/// stored `5.0` renders as `5`.
fn number(n: f64) -> Result<Number> {
    let integral = n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64;
    if integral && !(n == 0.0 && n.is_sign_negative()) {
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n).ok_or(DynJsonError::NonFiniteNumber(n))
}

#[derive(Default)]
struct Encoder {
    // Storage of every container currently being encoded, root first.
    open: Vec<*const ()>,
}

impl Encoder {
    fn value(&mut self, value: &Value) -> Result<JsonValue> {
        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(number(*n)?),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::List(list) => self.list(list)?,
            Value::Object(object) => self.object(object)?,
        })
    }

    fn enter(&mut self, storage: *const ()) -> Result<()> {
        if self.open.contains(&storage) {
            return Err(DynJsonError::Cycle);
        }
        self.open.push(storage);
        Ok(())
    }

    fn list(&mut self, list: &List) -> Result<JsonValue> {
        self.enter(list.storage_ptr())?;
        let items = list
            .values()
            .iter()
            .map(|item| self.value(item))
            .collect::<Result<Vec<_>>>()?;
        self.open.pop();
        Ok(JsonValue::Array(items))
    }

    fn object(&mut self, object: &Object) -> Result<JsonValue> {
        self.enter(object.storage_ptr())?;
        let mut map = Map::new();
        for (key, value) in object.fields().iter() {
            map.insert(key.clone(), self.value(value)?);
        }
        self.open.pop();
        Ok(JsonValue::Object(map))
    }
}

// ── serde_json interop ────────────────────────────────────────────────────

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            // `as_f64` only fails under serde_json's arbitrary_precision.
            JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(items.into_iter().collect()),
            JsonValue::Object(map) => Value::Object(map.into()),
        }
    }
}

impl From<Map<String, JsonValue>> for Object {
    fn from(map: Map<String, JsonValue>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = DynJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Encoder::default().value(value)
    }
}

impl TryFrom<&Object> for JsonValue {
    type Error = DynJsonError;

    fn try_from(object: &Object) -> Result<Self> {
        Encoder::default().object(object)
    }
}

impl TryFrom<&List> for JsonValue {
    type Error = DynJsonError;

    fn try_from(list: &List) -> Result<Self> {
        Encoder::default().list(list)
    }
}
