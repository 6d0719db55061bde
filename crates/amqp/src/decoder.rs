//! AMQP message to CloudEvent.

use cloudevents_amqp_message::{AmqpMessage, AmqpValue, Body};
use cloudevents_event::{CloudEvent, CloudEventBuilder, Data, SpecVersion};
use cloudevents_event_format::EventFormatter;
use tracing::{debug, trace};

use crate::detector::{detect_mode, spec_version_property};
use crate::mapping::{attribute_name, decode_attribute};
use crate::{AmqpBindingError, ContentMode};

/// Reconstructs the CloudEvent carried by `message`.
///
/// The content mode is detected first; messages that carry no event fail
/// with [`AmqpBindingError::NotACloudEvent`].
pub fn to_cloud_event<F>(message: &AmqpMessage, formatter: &F) -> Result<CloudEvent, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    let mode = detect_mode(message).ok_or(AmqpBindingError::NotACloudEvent)?;
    debug!(%mode, "decoding CloudEvent from AMQP message");
    match mode {
        ContentMode::Structured => decode_structured(message, formatter),
        ContentMode::Binary => decode_binary(message, formatter),
    }
}

fn decode_structured<F>(message: &AmqpMessage, formatter: &F) -> Result<CloudEvent, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    let content_type = message.content_type().unwrap_or_default();
    let bytes = body_bytes(&message.body)?.unwrap_or_default();
    Ok(formatter.decode_structured_event(bytes, content_type)?)
}

fn decode_binary<F>(message: &AmqpMessage, formatter: &F) -> Result<CloudEvent, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    let spec_version = read_spec_version(message)?;
    let mut builder = CloudEventBuilder::new(spec_version);

    for (key, value) in &message.application_properties {
        let Some(name) = attribute_name(key) else {
            trace!(property = key.as_str(), "ignoring application-property");
            continue;
        };
        if name == "specversion" {
            continue;
        }
        let declared = spec_version.attribute_kind(&name);
        let attribute = decode_attribute(&name, declared, value)?;
        builder.set_attribute(&name, attribute)?;
    }

    let content_type = message.content_type();
    if let Some(content_type) = content_type {
        builder.set_data_content_type(Some(content_type.to_owned()));
    }

    let data = match body_bytes(&message.body)? {
        None => None,
        Some(bytes) => Some(match content_type {
            Some(ct) if formatter.supports_data_content_type(ct) => {
                formatter.decode_binary_data(bytes, ct)?
            }
            _ => Data::Binary(bytes.to_vec()),
        }),
    };
    builder.set_data(data);

    Ok(builder.build()?)
}

fn read_spec_version(message: &AmqpMessage) -> Result<SpecVersion, AmqpBindingError> {
    let value = spec_version_property(message).ok_or(AmqpBindingError::NotACloudEvent)?;
    let text = value
        .as_str()
        .ok_or_else(|| AmqpBindingError::AttributeCoercion {
            attribute: "specversion".to_owned(),
            expected: "string",
            found: value.type_name(),
        })?;
    text.parse::<SpecVersion>()
        .map_err(|_| AmqpBindingError::UnsupportedSpecVersion(text.to_owned()))
}

/// Payload bytes of the body, `None` when there is no payload.
fn body_bytes(body: &Body) -> Result<Option<&[u8]>, AmqpBindingError> {
    match body {
        Body::Empty | Body::Value(AmqpValue::Null) => Ok(None),
        Body::Data(bytes) | Body::Value(AmqpValue::Binary(bytes)) => Ok(Some(bytes.as_slice())),
        Body::Value(AmqpValue::String(text)) => Ok(Some(text.as_bytes())),
        Body::Sequence(_) => Err(AmqpBindingError::UnsupportedBody("amqp-sequence")),
        Body::Value(_) => Err(AmqpBindingError::UnsupportedBody(
            "amqp-value other than binary or string",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudevents_event::AttributeValue;
    use cloudevents_event_format::JsonEventFormatter;

    fn binary_message() -> AmqpMessage {
        let mut message = AmqpMessage::new();
        for (key, value) in [
            ("cloudEvents:specversion", "1.0"),
            ("cloudEvents:id", "A234-1234-1234"),
            ("cloudEvents:source", "urn:example-com:mysource:abc"),
            ("cloudEvents:type", "com.github.pull.create"),
        ] {
            message
                .application_properties
                .insert(key.into(), AmqpValue::String(value.into()));
        }
        message
    }

    #[test]
    fn ignores_unprefixed_properties() {
        let mut message = binary_message();
        message
            .application_properties
            .insert("x-opt-partition".into(), AmqpValue::Int(3));
        let event = to_cloud_event(&message, &JsonEventFormatter::new()).unwrap();
        assert!(event.extensions().is_empty());
        assert_eq!(event.data(), None);
    }

    #[test]
    fn lowercases_attribute_names() {
        let mut message = binary_message();
        message
            .application_properties
            .insert("CloudEvents:MyExt".into(), AmqpValue::Long(7));
        let event = to_cloud_event(&message, &JsonEventFormatter::new()).unwrap();
        assert_eq!(event.extension("myext"), Some(&AttributeValue::Integer(7)));
    }

    #[test]
    fn body_shapes() {
        assert_eq!(body_bytes(&Body::Empty).unwrap(), None);
        assert_eq!(body_bytes(&Body::Value(AmqpValue::Null)).unwrap(), None);
        assert_eq!(
            body_bytes(&Body::Value(AmqpValue::String("hi".into()))).unwrap(),
            Some(&b"hi"[..])
        );
        assert!(matches!(
            body_bytes(&Body::Sequence(vec![])),
            Err(AmqpBindingError::UnsupportedBody(_))
        ));
        assert!(matches!(
            body_bytes(&Body::Value(AmqpValue::Map(vec![]))),
            Err(AmqpBindingError::UnsupportedBody(_))
        ));
    }

    #[test]
    fn unknown_payload_types_stay_binary() {
        let mut message = binary_message();
        message.set_content_type("application/octet-stream");
        message.body = Body::Data(vec![0xde, 0xad]);
        let event = to_cloud_event(&message, &JsonEventFormatter::new()).unwrap();
        assert_eq!(event.data(), Some(&Data::Binary(vec![0xde, 0xad])));
        assert_eq!(event.data_content_type(), Some("application/octet-stream"));
    }
}
