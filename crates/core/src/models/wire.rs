use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// A view model that is read from the backend's snake_case JSON.
///
/// The field mapping itself lives in each type's serde attributes, so the
/// wire name and the view name of a field are declared in one place.
pub trait FromWire: DeserializeOwned {
    /// Entity name used in mapping errors.
    const ENTITY: &'static str;

    fn from_wire(value: Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::mapping(Self::ENTITY, e))
    }
}

/// Map a backend JSON array into view models.
pub fn list_from_wire<T: FromWire>(value: Value) -> Result<Vec<T>, CoreError> {
    match value {
        Value::Array(items) => items.into_iter().map(T::from_wire).collect(),
        other => Err(CoreError::Mapping {
            entity: T::ENTITY.to_string(),
            message: format!("expected an array, got {}", json_kind(&other)),
        }),
    }
}

/// Serialize a view model into its camelCase JSON view shape.
pub fn to_view<T: Serialize>(model: &T) -> Result<Value, CoreError> {
    serde_json::to_value(model).map_err(|e| CoreError::mapping("view", e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accept identifiers sent either as JSON strings or integers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Uint(n) => n.to_string(),
    })
}
