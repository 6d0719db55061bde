//! The event formatter capability.

use cloudevents_event::{CloudEvent, Data};

use crate::FormatError;

/// A serializer for the structured form of a CloudEvent and for its
/// binary-mode payload.
///
/// Implementations must round-trip: decoding what they encoded for a given
/// media type yields the same event or data.
pub trait EventFormatter {
    /// Media type produced by [`encode_structured_event`](Self::encode_structured_event),
    /// e.g. `application/cloudevents+json`.
    fn structured_media_type(&self) -> &str;

    /// Serializes the whole event. Returns the media type and the document.
    fn encode_structured_event(&self, event: &CloudEvent) -> Result<(String, Vec<u8>), FormatError>;

    fn decode_structured_event(&self, bytes: &[u8], media_type: &str)
        -> Result<CloudEvent, FormatError>;

    /// Renders a non-binary payload for the given `datacontenttype`.
    fn encode_binary_data(&self, data: &Data, content_type: Option<&str>)
        -> Result<Vec<u8>, FormatError>;

    fn decode_binary_data(&self, bytes: &[u8], content_type: &str) -> Result<Data, FormatError>;

    /// Whether [`decode_binary_data`](Self::decode_binary_data) understands
    /// `content_type`. Payloads of other types stay opaque bytes.
    fn supports_data_content_type(&self, content_type: &str) -> bool;
}

impl<F: EventFormatter + ?Sized> EventFormatter for &F {
    fn structured_media_type(&self) -> &str {
        (**self).structured_media_type()
    }

    fn encode_structured_event(&self, event: &CloudEvent) -> Result<(String, Vec<u8>), FormatError> {
        (**self).encode_structured_event(event)
    }

    fn decode_structured_event(
        &self,
        bytes: &[u8],
        media_type: &str,
    ) -> Result<CloudEvent, FormatError> {
        (**self).decode_structured_event(bytes, media_type)
    }

    fn encode_binary_data(
        &self,
        data: &Data,
        content_type: Option<&str>,
    ) -> Result<Vec<u8>, FormatError> {
        (**self).encode_binary_data(data, content_type)
    }

    fn decode_binary_data(&self, bytes: &[u8], content_type: &str) -> Result<Data, FormatError> {
        (**self).decode_binary_data(bytes, content_type)
    }

    fn supports_data_content_type(&self, content_type: &str) -> bool {
        (**self).supports_data_content_type(content_type)
    }
}
