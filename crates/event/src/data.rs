//! Event payload.

use serde_json::Value;

use crate::{media_type, EventError};

/// The `data` of a CloudEvent.
///
/// A built [`CloudEvent`](crate::CloudEvent) holds its payload in the shape
/// its `datacontenttype` calls for: `Json` under a JSON media type, `String`
/// under a textual one and `Binary` otherwise. Text or JSON handed over
/// without a content type is stored as JSON under `application/json`.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Opaque bytes.
    Binary(Vec<u8>),
    /// Text, e.g. `text/plain` or `text/xml` content.
    String(String),
    /// A structured JSON document.
    Json(serde_json::Value),
}

impl Data {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Data::Binary(b) => Some(b),
            Data::String(s) => Some(s.as_bytes()),
            Data::Json(_) => None,
        }
    }
}

/// Brings `data` into the shape `content_type` calls for.
pub(crate) fn canonical(data: Data, content_type: &str) -> Result<Data, EventError> {
    let mismatch = |reason| EventError::DataContentType {
        content_type: content_type.to_owned(),
        reason,
    };
    if media_type::is_json(content_type) {
        return match data {
            Data::Json(value) => Ok(Data::Json(value)),
            Data::String(s) => Ok(Data::Json(Value::String(s))),
            Data::Binary(bytes) => serde_json::from_slice(&bytes)
                .map(Data::Json)
                .map_err(|_| mismatch("bytes are not a JSON document")),
        };
    }
    let text = media_type::is_text(content_type);
    match data {
        Data::Json(Value::String(s)) | Data::String(s) if text => Ok(Data::String(s)),
        Data::Json(Value::String(s)) | Data::String(s) => Ok(Data::Binary(s.into_bytes())),
        Data::Json(_) => Err(mismatch("JSON value under a non-JSON media type")),
        Data::Binary(bytes) if text => String::from_utf8(bytes)
            .map(Data::String)
            .map_err(|_| mismatch("bytes are not valid UTF-8")),
        Data::Binary(bytes) => Ok(Data::Binary(bytes)),
    }
}

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Data::Binary(value)
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Data::String(value.to_owned())
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Data::String(value)
    }
}

impl From<serde_json::Value> for Data {
    fn from(value: serde_json::Value) -> Self {
        Data::Json(value)
    }
}
