//! Bare message sections.

use indexmap::IndexMap;

use crate::AmqpValue;

/// The AMQP `properties` section.
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    pub message_id: Option<AmqpValue>,
    pub user_id: Option<Vec<u8>>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub reply_to: Option<String>,
    pub correlation_id: Option<AmqpValue>,
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub absolute_expiry_time: Option<i64>,
    pub creation_time: Option<i64>,
    pub group_id: Option<String>,
    pub group_sequence: Option<u32>,
    pub reply_to_group_id: Option<String>,
}

impl Properties {
    pub fn is_empty(&self) -> bool {
        *self == Properties::default()
    }
}

/// The message body.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    /// One or more `data` sections, concatenated.
    Data(Vec<u8>),
    /// One or more `amqp-sequence` sections, concatenated.
    Sequence(Vec<AmqpValue>),
    /// A single `amqp-value` section.
    Value(AmqpValue),
}

/// An AMQP 1.0 bare message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmqpMessage {
    pub properties: Properties,
    pub application_properties: IndexMap<String, AmqpValue>,
    pub body: Body,
}

impl AmqpMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.properties.content_type.as_deref()
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.properties.content_type = Some(content_type.into());
    }

    pub fn application_property(&self, key: &str) -> Option<&AmqpValue> {
        self.application_properties.get(key)
    }
}
