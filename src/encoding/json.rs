//! JSON rendering of msgpack values
//!
//! Binary fields become standard base64 strings; non-string map keys are
//! rendered with their msgpack debug form.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rmpv::Value;
use serde_json::{Map, Number, Value as Json};

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Nil => Json::Null,
        Value::Boolean(b) => Json::Bool(*b),
        Value::Integer(i) => {
            if let Some(n) = i.as_u64() {
                Json::Number(Number::from(n))
            } else if let Some(n) = i.as_i64() {
                Json::Number(Number::from(n))
            } else {
                Json::Null
            }
        }
        Value::F32(f) => Number::from_f64(f64::from(*f)).map_or(Json::Null, Json::Number),
        Value::F64(f) => Number::from_f64(*f).map_or(Json::Null, Json::Number),
        Value::String(s) => match s.as_str() {
            Some(text) => Json::String(text.to_string()),
            None => Json::String(STANDARD.encode(s.as_bytes())),
        },
        Value::Binary(b) => Json::String(STANDARD.encode(b)),
        Value::Array(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Map(entries) => {
            let mut out = Map::new();
            for (k, v) in entries {
                let key = match k.as_str() {
                    Some(text) => text.to_string(),
                    None => k.to_string(),
                };
                out.insert(key, value_to_json(v));
            }
            Json::Object(out)
        }
        Value::Ext(tag, data) => serde_json::json!({
            "ext": tag,
            "data": STANDARD.encode(data),
        }),
    }
}
