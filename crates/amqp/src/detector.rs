//! Content mode detection.

use cloudevents_amqp_message::{AmqpMessage, AmqpValue};
use cloudevents_event_format::{media_type, EventFormatter};

use crate::mapping::{attribute_name, SPEC_VERSION_PROPERTY};
use crate::ContentMode;

const STRUCTURED_MEDIA_TYPE_PREFIX: &str = "application/cloudevents+";

/// `application/cloudevents+<format>`, compared on the media type essence.
pub fn is_structured_media_type(content_type: &str) -> bool {
    media_type::essence(content_type).starts_with(STRUCTURED_MEDIA_TYPE_PREFIX)
}

/// The content mode `message` is encoded in, or `None` if it does not carry
/// a CloudEvent.
///
/// A structured content type wins over a `specversion` application-property.
pub fn detect_mode(message: &AmqpMessage) -> Option<ContentMode> {
    if message.content_type().is_some_and(is_structured_media_type) {
        return Some(ContentMode::Structured);
    }
    if spec_version_property(message).is_some() {
        return Some(ContentMode::Binary);
    }
    None
}

pub fn is_cloud_event(message: &AmqpMessage) -> bool {
    detect_mode(message).is_some()
}

/// Like [`is_cloud_event`], but a structured message only counts when its
/// content type is the structured media type of `formatter`.
pub fn is_cloud_event_with<F>(message: &AmqpMessage, formatter: &F) -> bool
where
    F: EventFormatter + ?Sized,
{
    match detect_mode(message) {
        Some(ContentMode::Binary) => true,
        Some(ContentMode::Structured) => message.content_type().is_some_and(|ct| {
            media_type::essence(ct) == media_type::essence(formatter.structured_media_type())
        }),
        None => false,
    }
}

/// The `specversion` application-property under any accepted prefix.
pub(crate) fn spec_version_property(message: &AmqpMessage) -> Option<&AmqpValue> {
    if let Some(value) = message.application_property(SPEC_VERSION_PROPERTY) {
        return Some(value);
    }
    message
        .application_properties
        .iter()
        .find(|(key, _)| attribute_name(key).as_deref() == Some("specversion"))
        .map(|(_, value)| value)
}
