use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON payload is not an object")]
    NotAnObject,
    #[error("Value under `{key}` is not {expected}")]
    UnexpectedType { key: String, expected: &'static str },
    #[error("Item {index} under `{key}` could not be decoded: {source}")]
    ListItem {
        key: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Keyed, typed access to a JSON object.
///
/// A key holding JSON `null` is treated the same as a missing key.
pub trait TypedDocument {
    fn get_value(&self, key: &str) -> Option<&Value>;
    fn set_value(&mut self, key: &str, value: Value);
    fn remove_value(&mut self, key: &str) -> Option<Value>;

    fn has(&self, key: &str) -> bool {
        self.get_value(key).is_some_and(|value| !value.is_null())
    }

    fn get_string(&self, key: &str) -> Option<&str> {
        self.get_value(key).and_then(Value::as_str)
    }

    /// Missing or non-boolean values read as `false`
    fn get_bool(&self, key: &str) -> bool {
        self.get_value(key)
            .and_then(Value::as_bool)
            .unwrap_or_default()
    }

    fn get_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DocumentError> {
        let items = match self.get_value(key) {
            None | Some(Value::Null) => return Ok(vec![]),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(DocumentError::UnexpectedType {
                    key: key.to_owned(),
                    expected: "a list",
                });
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::deserialize(item).map_err(|source| DocumentError::ListItem {
                    key: key.to_owned(),
                    index,
                    source,
                })
            })
            .collect()
    }

    fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.set_value(key, value.into());
    }

    /// Appends to the list under `key`, creating it when missing
    fn add(&mut self, key: &str, value: impl Into<Value>) -> Result<(), DocumentError> {
        let list = match self.remove_value(key) {
            None | Some(Value::Null) => vec![value.into()],
            Some(Value::Array(mut items)) => {
                items.push(value.into());
                items
            }
            Some(other) => {
                self.set_value(key, other);
                return Err(DocumentError::UnexpectedType {
                    key: key.to_owned(),
                    expected: "a list",
                });
            }
        };

        self.set_value(key, Value::Array(list));
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonDocument {
    data: Map<String, Value>,
}

impl JsonDocument {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Uses the object stored under `key` when present, otherwise the payload itself
    pub fn from_response(json: &Value, key: &str) -> Result<Self, DocumentError> {
        let object = match json.get(key) {
            Some(Value::Object(inner)) => inner,
            Some(Value::Null) | None => json.as_object().ok_or(DocumentError::NotAnObject)?,
            Some(_) => {
                return Err(DocumentError::UnexpectedType {
                    key: key.to_owned(),
                    expected: "an object",
                });
            }
        };

        Ok(Self::new(object.to_owned()))
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl TypedDocument for JsonDocument {
    fn get_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    fn set_value(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_owned(), value);
    }

    fn remove_value(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }
}
