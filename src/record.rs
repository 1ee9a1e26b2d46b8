//! Attribute records as polymorphic values: the engine accepts both mutable
//! key->value records and immutable tuple-like records, unified behind a
//! `get_field`/`with_count` capability set. Ported from the dual shape the
//! original tolerates (a plain dict, or a `NamedTuple` like `loader.py`'s
//! `WordValue`).

use std::collections::HashMap;
use std::fmt;

pub const ORIGINAL_KEY: &str = "original_key";
pub const COUNT: &str = "count";

/// A record field value. Kept small and concrete (no trait-object
/// attribute values) since the engine only ever reads `original_key` and
/// `count` itself; everything else is opaque user data round-tripped
/// through `get_field`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttributeValue::Str(s) => write!(f, "{}", s),
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A word record: arbitrary user attributes plus the two engine-reserved
/// fields `original_key` and `count`.
pub trait WordRecord: Send + Sync {
    fn get_field(&self, field: &str) -> Option<AttributeValue>;

    /// Returns the current `count`, or 0 if absent.
    fn count(&self) -> u64 {
        self.get_field(COUNT).and_then(|v| v.as_int()).map(|i| i.max(0) as u64).unwrap_or(0)
    }

    fn original_key(&self) -> Option<String> {
        self.get_field(ORIGINAL_KEY).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Returns a new record with `field` set, possibly a fresh allocation
    /// for immutable (tuple-backed) records. The general form of the
    /// "possibly new record" capability from the Design Notes; `with_count`
    /// is the one case the engine itself needs.
    fn with_field(&self, field: &str, value: AttributeValue) -> Box<dyn WordRecord>;

    fn with_count(&self, count: u64) -> Box<dyn WordRecord> {
        self.with_field(COUNT, AttributeValue::Int(count as i64))
    }

    fn with_original_key(&self, key: &str) -> Box<dyn WordRecord> {
        self.with_field(ORIGINAL_KEY, AttributeValue::Str(key.to_string()))
    }
}

/// Mutable key -> value record; `with_count` mutates a clone in place.
#[derive(Debug, Clone, Default)]
pub struct MapRecord {
    pub fields: HashMap<String, AttributeValue>,
}

impl MapRecord {
    pub fn new() -> Self {
        MapRecord { fields: HashMap::new() }
    }

    pub fn set_field(mut self, field: &str, value: AttributeValue) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }
}

impl WordRecord for MapRecord {
    fn get_field(&self, field: &str) -> Option<AttributeValue> {
        self.fields.get(field).cloned()
    }

    fn with_field(&self, field: &str, value: AttributeValue) -> Box<dyn WordRecord> {
        let mut clone = self.clone();
        clone.fields.insert(field.to_string(), value);
        Box::new(clone)
    }
}

/// Immutable tuple-like record, matching `loader.py`'s `WordValue`
/// NamedTuple: `context`, `display`, `count`, `original_key`.
#[derive(Debug, Clone)]
pub struct TupleRecord {
    pub context: String,
    pub display: String,
    pub count: u64,
    pub original_key: Option<String>,
}

impl WordRecord for TupleRecord {
    fn get_field(&self, field: &str) -> Option<AttributeValue> {
        match field {
            "context" => Some(AttributeValue::Str(self.context.clone())),
            "display" => Some(AttributeValue::Str(self.display.clone())),
            COUNT => Some(AttributeValue::Int(self.count as i64)),
            ORIGINAL_KEY => self.original_key.clone().map(AttributeValue::Str),
            _ => None,
        }
    }

    fn with_field(&self, field: &str, value: AttributeValue) -> Box<dyn WordRecord> {
        let mut clone = self.clone();
        match field {
            "context" => clone.context = value.as_str().unwrap_or_default().to_string(),
            "display" => clone.display = value.as_str().unwrap_or_default().to_string(),
            COUNT => clone.count = value.as_int().unwrap_or(0).max(0) as u64,
            ORIGINAL_KEY => clone.original_key = value.as_str().map(|s| s.to_string()),
            _ => {}
        }
        Box::new(clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_record_defaults_count_to_zero() {
        let record = MapRecord::new();
        assert_eq!(record.count(), 0);
    }

    #[test]
    fn map_record_with_count_returns_updated_clone() {
        let record = MapRecord::new();
        let updated = record.with_count(5);
        assert_eq!(updated.count(), 5);
        assert_eq!(record.count(), 0);
    }

    #[test]
    fn tuple_record_with_count_replaces_field_only() {
        let record = TupleRecord { context: "ctx".into(), display: "Disp".into(), count: 0, original_key: None };
        let updated = record.with_count(3);
        assert_eq!(updated.count(), 3);
        assert_eq!(updated.get_field("display").unwrap().as_str(), Some("Disp"));
    }
}
