use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::{PageNumber, PageSize};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
/// Untyped request parameters accepted by every raw resource method.
///
/// Keys keep insertion order. For `GET`/`DELETE` calls the map is encoded as a deepObject
/// query string; for `POST`/`PATCH` calls it becomes the JSON body.
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a typed params struct into raw params.
    ///
    /// The value must serialize to a JSON object; `null` serializes to an empty map.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self, ValidationError> {
        let value = serde_json::to_value(params).map_err(|err| {
            ValidationError::Unserializable {
                message: err.to_string(),
            }
        })?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            Value::Array(_) => Err(ValidationError::NotAnObject { found: "array" }),
            Value::String(_) => Err(ValidationError::NotAnObject { found: "string" }),
            Value::Number(_) => Err(ValidationError::NotAnObject { found: "number" }),
            Value::Bool(_) => Err(ValidationError::NotAnObject { found: "boolean" }),
        }
    }

    /// Insert or replace a parameter, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Move every entry of `other` into `self`, replacing duplicates.
    pub fn extend(&mut self, other: RequestParams) {
        self.0.extend(other.0);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
/// Number-based pagination, serialized under the `page` key (`page[number]`, `page[size]`).
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<PageNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PageSize>,
}

impl PageParams {
    pub fn new(number: PageNumber, size: PageSize) -> Self {
        Self {
            number: Some(number),
            size: Some(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.size.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// Cursor-based pagination, serialized under the `page` key
/// (`page[after]`, `page[before]`, `page[limit]`).
pub struct CursorParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<PageSize>,
}

impl CursorParams {
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            after: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub fn before(cursor: impl Into<String>) -> Self {
        Self {
            before: Some(cursor.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none() && self.limit.is_none()
    }
}
