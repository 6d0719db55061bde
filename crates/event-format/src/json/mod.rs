//! CloudEvents JSON event format.
//!
//! Structured documents are JSON objects with one member per attribute.
//! `data` is embedded as JSON when it is a JSON value or text, and as a
//! base64 string under `data_base64` when it is binary.

mod decoder;
mod encoder;

use cloudevents_event::{CloudEvent, Data};

use crate::{media_type, EventFormatter, FormatError};

pub use decoder::event_from_json;
pub use encoder::event_to_json;

/// Media type of a structured JSON CloudEvent.
pub const JSON_STRUCTURED_MEDIA_TYPE: &str = "application/cloudevents+json";

/// The JSON event format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventFormatter;

impl JsonEventFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl EventFormatter for JsonEventFormatter {
    fn structured_media_type(&self) -> &str {
        JSON_STRUCTURED_MEDIA_TYPE
    }

    fn encode_structured_event(&self, event: &CloudEvent) -> Result<(String, Vec<u8>), FormatError> {
        let document = serde_json::Value::Object(event_to_json(event));
        let bytes = serde_json::to_vec(&document)?;
        Ok((JSON_STRUCTURED_MEDIA_TYPE.to_owned(), bytes))
    }

    fn decode_structured_event(
        &self,
        bytes: &[u8],
        media_type: &str,
    ) -> Result<CloudEvent, FormatError> {
        if media_type::essence(media_type) != JSON_STRUCTURED_MEDIA_TYPE {
            return Err(FormatError::UnsupportedMediaType(media_type.to_owned()));
        }
        let document: serde_json::Value = serde_json::from_slice(bytes)?;
        event_from_json(document)
    }

    /// Renders `data` for `content_type`: JSON media types (or none) get a
    /// JSON document, everything else the raw text or bytes.
    fn encode_binary_data(
        &self,
        data: &Data,
        content_type: Option<&str>,
    ) -> Result<Vec<u8>, FormatError> {
        let json = content_type.map_or(true, media_type::is_json);
        match data {
            Data::Binary(bytes) => Ok(bytes.clone()),
            Data::String(s) if json => Ok(serde_json::to_vec(s)?),
            Data::String(s) => Ok(s.as_bytes().to_vec()),
            Data::Json(value) if json => Ok(serde_json::to_vec(value)?),
            Data::Json(serde_json::Value::String(s)) => Ok(s.as_bytes().to_vec()),
            Data::Json(_) => Err(FormatError::DataContentTypeMismatch(
                content_type.unwrap_or_default().to_owned(),
            )),
        }
    }

    fn decode_binary_data(&self, bytes: &[u8], content_type: &str) -> Result<Data, FormatError> {
        if media_type::is_json(content_type) {
            return Ok(Data::Json(serde_json::from_slice(bytes)?));
        }
        if media_type::is_text(content_type) {
            let text = std::str::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)?;
            return Ok(Data::String(text.to_owned()));
        }
        Ok(Data::Binary(bytes.to_vec()))
    }

    fn supports_data_content_type(&self, content_type: &str) -> bool {
        media_type::is_json(content_type) || media_type::is_text(content_type)
    }
}
