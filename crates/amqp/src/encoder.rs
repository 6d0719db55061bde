//! CloudEvent to AMQP message.

use cloudevents_amqp_message::{AmqpMessage, Body};
use cloudevents_event::{CloudEvent, Data};
use cloudevents_event_format::EventFormatter;
use tracing::trace;

use crate::mapping::{encode_attribute, property_name};
use crate::{AmqpBindingError, ContentMode};

/// Builds an AMQP message carrying `event` in the given content mode.
///
/// Structured mode delegates the whole body to `formatter`; binary mode maps
/// each attribute onto an application-property and asks `formatter` to
/// render `data` only when it is not already raw bytes.
pub fn encode<F>(
    event: &CloudEvent,
    mode: ContentMode,
    formatter: &F,
) -> Result<AmqpMessage, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    trace!(id = event.id(), %mode, "encoding CloudEvent");
    match mode {
        ContentMode::Structured => encode_structured(event, formatter),
        ContentMode::Binary => encode_binary(event, formatter),
    }
}

fn encode_structured<F>(event: &CloudEvent, formatter: &F) -> Result<AmqpMessage, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    let (media_type, bytes) = formatter.encode_structured_event(event)?;
    let mut message = AmqpMessage::new();
    message.set_content_type(media_type);
    message.body = Body::Data(bytes);
    Ok(message)
}

fn encode_binary<F>(event: &CloudEvent, formatter: &F) -> Result<AmqpMessage, AmqpBindingError>
where
    F: EventFormatter + ?Sized,
{
    let mut message = AmqpMessage::new();
    for (name, value) in event.attributes() {
        let Some(key) = property_name(name) else {
            continue;
        };
        message
            .application_properties
            .insert(key, encode_attribute(&value));
    }
    if let Some(content_type) = event.data_content_type() {
        message.set_content_type(content_type);
    }
    message.body = match event.data() {
        None => Body::Empty,
        Some(Data::Binary(bytes)) => Body::Data(bytes.clone()),
        Some(data) => Body::Data(formatter.encode_binary_data(data, event.data_content_type())?),
    };
    Ok(message)
}
