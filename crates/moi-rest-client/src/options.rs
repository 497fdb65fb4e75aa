//! Per-call request options

use serde::Serialize;

use crate::error::Result;

/// Options attached to individual calls: request id, extra headers and
/// query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub request_id: Option<String>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sent as `X-Request-ID`.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Extra header; overrides client default headers with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Query parameter that is skipped when `None`.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Repeated query parameter (`key=a&key=b`).
    pub fn query_list<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let key = key.into();
        for value in values {
            self.query.push((key.clone(), value.to_string()));
        }
        self
    }

    /// Merge another set of options on top of this one.
    pub fn merged(&self, other: &CallOptions) -> CallOptions {
        let mut merged = self.clone();
        if other.request_id.is_some() {
            merged.request_id = other.request_id.clone();
        }
        merged.headers.extend(other.headers.iter().cloned());
        merged.query.extend(other.query.iter().cloned());
        merged
    }
}

/// Flatten a serializable struct into query pairs. Null fields are skipped
/// and arrays become repeated keys.
pub fn query_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    let value = serde_json::to_value(params)?;

    if let serde_json::Value::Object(map) = value {
        for (key, val) in map {
            match val {
                serde_json::Value::Null => {}
                serde_json::Value::Array(items) => {
                    for item in items {
                        if !item.is_null() {
                            pairs.push((key.clone(), scalar_to_string(item)));
                        }
                    }
                }
                other => pairs.push((key, scalar_to_string(other))),
            }
        }
    }

    Ok(pairs)
}

fn scalar_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
