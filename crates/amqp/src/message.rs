//! Message wrapper and extension methods.

use cloudevents_amqp_message::{codec, AmqpMessage};
use cloudevents_event::CloudEvent;
use cloudevents_event_format::EventFormatter;

use crate::{decoder, detector, encoder, AmqpBindingError, ContentMode};

/// An AMQP message built from a CloudEvent.
#[derive(Debug, Clone, PartialEq)]
pub struct AmqpCloudEventMessage {
    mode: ContentMode,
    message: AmqpMessage,
}

impl AmqpCloudEventMessage {
    pub fn new<F>(event: &CloudEvent, mode: ContentMode, formatter: &F) -> Result<Self, AmqpBindingError>
    where
        F: EventFormatter + ?Sized,
    {
        let message = encoder::encode(event, mode, formatter)?;
        Ok(Self { mode, message })
    }

    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    pub fn message(&self) -> &AmqpMessage {
        &self.message
    }

    pub fn into_message(self) -> AmqpMessage {
        self.message
    }

    pub fn is_cloud_event(&self) -> bool {
        detector::is_cloud_event(&self.message)
    }

    /// AMQP 1.0 encoding of the bare message, ready for a transfer frame.
    pub fn encode(&self) -> Result<Vec<u8>, AmqpBindingError> {
        Ok(codec::encode_message(&self.message)?)
    }
}

impl From<AmqpCloudEventMessage> for AmqpMessage {
    fn from(value: AmqpCloudEventMessage) -> Self {
        value.message
    }
}

/// CloudEvents operations on a received [`AmqpMessage`].
pub trait MessageExt {
    fn is_cloud_event(&self) -> bool;

    fn is_cloud_event_with<F>(&self, formatter: &F) -> bool
    where
        F: EventFormatter + ?Sized;

    fn content_mode(&self) -> Option<ContentMode>;

    fn to_cloud_event<F>(&self, formatter: &F) -> Result<CloudEvent, AmqpBindingError>
    where
        F: EventFormatter + ?Sized;
}

impl MessageExt for AmqpMessage {
    fn is_cloud_event(&self) -> bool {
        detector::is_cloud_event(self)
    }

    fn is_cloud_event_with<F>(&self, formatter: &F) -> bool
    where
        F: EventFormatter + ?Sized,
    {
        detector::is_cloud_event_with(self, formatter)
    }

    fn content_mode(&self) -> Option<ContentMode> {
        detector::detect_mode(self)
    }

    fn to_cloud_event<F>(&self, formatter: &F) -> Result<CloudEvent, AmqpBindingError>
    where
        F: EventFormatter + ?Sized,
    {
        decoder::to_cloud_event(self, formatter)
    }
}
