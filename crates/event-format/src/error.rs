//! Event format error type.

use cloudevents_event::EventError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unsupported media type `{0}`")]
    UnsupportedMediaType(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("structured event must be a JSON object")]
    NotAnObject,
    #[error("unsupported JSON value for attribute `{0}`")]
    InvalidAttributeValue(String),
    #[error("event carries both `data` and `data_base64`")]
    DuplicateData,
    #[error("invalid base64 in `{0}`")]
    Base64(String, #[source] base64::DecodeError),
    #[error("JSON data cannot be rendered as `{0}`")]
    DataContentTypeMismatch(String),
    #[error("invalid UTF-8 in text data")]
    InvalidUtf8,
    #[error(transparent)]
    Event(#[from] EventError),
}
