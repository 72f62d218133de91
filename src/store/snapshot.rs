//! Snapshot codec - JSON encode/decode for the persisted car list.
//!
//! Decode never trusts the stored shape: every field is coerced with a
//! default, and only a malformed top level empties the whole load.

use serde_json::Value;

use crate::car::Car;

/// Encode the full collection as the JSON snapshot.
pub(crate) fn encode(cars: &[Car]) -> Result<String, serde_json::Error> {
    serde_json::to_string(cars)
}

/// Decode a snapshot, coercing each record field by field.
///
/// Returns an empty list when the payload is not valid JSON or its top
/// level is not an array; a malformed record never aborts the rest.
pub(crate) fn decode(raw: &str) -> Vec<Car> {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding malformed snapshot: {}", err);
            return Vec::new();
        }
    };
    match parsed {
        Value::Array(items) => items.iter().map(coerce_car).collect(),
        _ => {
            log::warn!("discarding snapshot with non-array top level");
            Vec::new()
        }
    }
}

fn coerce_car(value: &Value) -> Car {
    Car {
        id: coerce_int(value.get("id")),
        brand: coerce_string(value.get("brand")),
        model: coerce_string(value.get("model")),
        year: coerce_int(value.get("year")) as i32,
        color: coerce_string(value.get("color")),
        sold: coerce_bool(value.get("sold")),
    }
}

/// Numeric coercion, with 0 standing in for anything unparseable.
fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => *b as i64,
        _ => 0,
    }
}

/// String coercion: null and missing map to the empty string, scalars are
/// rendered to text.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Truthiness: false, 0, "", null, and missing are false; anything else true.
fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}
