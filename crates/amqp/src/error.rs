//! Binding error type.

use cloudevents_amqp_message::codec::AmqpCodecError;
use cloudevents_event::EventError;
use cloudevents_event_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmqpBindingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("message is not a CloudEvent")]
    NotACloudEvent,
    #[error("unsupported spec version `{0}`")]
    UnsupportedSpecVersion(String),
    #[error("attribute `{attribute}`: cannot coerce AMQP {found} to {expected}")]
    AttributeCoercion {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("unsupported message body: {0}")]
    UnsupportedBody(&'static str),
    #[error("event format error: {0}")]
    Formatter(#[from] FormatError),
    #[error("invalid event: {0}")]
    Event(#[from] EventError),
    #[error("AMQP codec error: {0}")]
    Codec(#[from] AmqpCodecError),
}
