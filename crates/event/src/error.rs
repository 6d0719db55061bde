//! CloudEvent construction error type.

use thiserror::Error;

use crate::AttributeKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("missing required attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("unknown spec version `{0}`")]
    UnknownSpecVersion(String),
    #[error("invalid URI reference `{0}`")]
    InvalidUri(String),
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
    #[error("invalid extension attribute name `{0}`")]
    InvalidExtensionName(String),
    #[error("attribute `{name}` expects {expected}, got {found}")]
    AttributeType {
        name: String,
        expected: AttributeKind,
        found: AttributeKind,
    },
    #[error("attribute `specversion` is `{expected}`, cannot be set to `{found}`")]
    SpecVersionMismatch { expected: String, found: String },
    #[error("data does not fit content type `{content_type}`: {reason}")]
    DataContentType {
        content_type: String,
        reason: &'static str,
    },
}
