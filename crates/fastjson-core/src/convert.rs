//! Conversions between the codec [`Value`] tree and host-native values.
//!
//! This is the only module aware of host types. For the Rust host the
//! dynamic value of record is [`serde_json::Value`] (built with
//! `preserve_order`, so object order survives in both directions); plain
//! `From` impls cover the common native scalars and containers. Mapping
//! keys that are not strings are handled here too: [`MapKey`] coerces them
//! to canonical string form once, at construction time, so the `Value`
//! tree itself never holds a non-string object key.

use num_bigint::BigInt;

use crate::error::{JsonError, Result};
use crate::serializer::format_float;
use crate::value::{insert_entry, Value};

/// A mapping key on its way into a JSON object.
///
/// Non-string keys print exactly as they would in number position: a float
/// key `-1.99` becomes the string key `"-1.99"`, an integer key keeps its
/// exact decimal digits at any magnitude, and a boolean key becomes
/// `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq)]
pub enum MapKey {
    Str(String),
    Int(BigInt),
    Float(f64),
    Bool(bool),
}

impl MapKey {
    /// The canonical JSON object key for this value. Fails for floats with
    /// no JSON representation (NaN, infinities, negative zero).
    pub fn into_json_key(self) -> Result<String> {
        match self {
            MapKey::Str(s) => Ok(s),
            MapKey::Int(i) => Ok(i.to_string()),
            MapKey::Float(f) => format_float(f),
            MapKey::Bool(b) => Ok(if b { "true" } else { "false" }.to_string()),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Str(s)
    }
}

impl From<i64> for MapKey {
    fn from(n: i64) -> Self {
        MapKey::Int(BigInt::from(n))
    }
}

impl From<u64> for MapKey {
    fn from(n: u64) -> Self {
        MapKey::Int(BigInt::from(n))
    }
}

impl From<BigInt> for MapKey {
    fn from(n: BigInt) -> Self {
        MapKey::Int(n)
    }
}

impl From<f64> for MapKey {
    fn from(f: f64) -> Self {
        MapKey::Float(f)
    }
}

impl From<bool> for MapKey {
    fn from(b: bool) -> Self {
        MapKey::Bool(b)
    }
}

/// Build an object from key/value pairs, coercing non-string keys to their
/// canonical string form. Duplicates follow the tree-wide policy: the last
/// write wins in both value and position.
pub fn object_from_pairs<I>(pairs: I) -> Result<Value>
where
    I: IntoIterator<Item = (MapKey, Value)>,
{
    let mut members = Vec::new();
    for (key, value) in pairs {
        insert_entry(&mut members, key.into_json_key()?, value);
    }
    Ok(Value::Object(members))
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Convert a host [`serde_json::Value`] into a codec [`Value`].
///
/// Numbers keep the integer/float split serde_json recorded from their
/// source form; a number representable neither as `i64`/`u64` nor `f64`
/// degrades to `Null` (unreachable with serde_json's default features).
pub fn to_value(host: &serde_json::Value) -> Value {
    match host {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(BigInt::from(i))
            } else if let Some(u) = n.as_u64() {
                Value::Int(BigInt::from(u))
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(to_value).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, member)| (key.clone(), to_value(member)))
                .collect(),
        ),
    }
}

/// Convert a codec [`Value`] into a host [`serde_json::Value`], preserving
/// object member order.
///
/// Fails when an integer exceeds the 64-bit range a serde_json number can
/// hold, or when a hand-built tree carries a non-finite float.
pub fn from_value(value: &Value) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Int(i) => {
            if let Ok(n) = i64::try_from(i) {
                Ok(serde_json::Value::from(n))
            } else if let Ok(n) = u64::try_from(i) {
                Ok(serde_json::Value::from(n))
            } else {
                Err(JsonError::IntOutOfRange(i.clone()))
            }
        }
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(JsonError::InvalidFloat(*f)),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Array(items) => Ok(serde_json::Value::Array(
            items.iter().map(from_value).collect::<Result<Vec<_>>>()?,
        )),
        Value::Object(members) => {
            let mut map = serde_json::Map::with_capacity(members.len());
            for (key, member) in members {
                map.insert(key.clone(), from_value(member)?);
            }
            Ok(serde_json::Value::Object(map))
        }
    }
}
