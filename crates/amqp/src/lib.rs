//! CloudEvents AMQP 1.0 protocol binding.
//!
//! Converts a [`CloudEvent`] into an [`AmqpMessage`] and back, in either
//! content mode:
//!
//! - **Structured**: the event format renders the whole event as one
//!   document; it becomes the message body and the format's media type
//!   (`application/cloudevents+json`) becomes the message `content-type`.
//! - **Binary**: every attribute becomes a `cloudEvents:`-prefixed
//!   application-property, `datacontenttype` becomes the message
//!   `content-type` and `data` becomes the body.
//!
//! # Example
//!
//! ```
//! use cloudevents_amqp::{encode, to_cloud_event, is_cloud_event, ContentMode};
//! use cloudevents_event::CloudEventBuilder;
//! use cloudevents_event_format::JsonEventFormatter;
//!
//! let formatter = JsonEventFormatter::new();
//! let event = CloudEventBuilder::default()
//!     .id("A234-1234-1234")
//!     .source("https://github.com/cloudevents/spec/pull/123")
//!     .ty("com.github.pull.create")
//!     .data_content_type("text/xml")
//!     .data("<much wow=\"xml\"/>")
//!     .build()
//!     .unwrap();
//!
//! let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
//! assert!(is_cloud_event(&message));
//! assert_eq!(message.content_type(), Some("text/xml"));
//! assert_eq!(to_cloud_event(&message, &formatter).unwrap(), event);
//! ```
//!
//! [`CloudEvent`]: cloudevents_event::CloudEvent
//! [`AmqpMessage`]: cloudevents_amqp_message::AmqpMessage

mod decoder;
mod detector;
mod encoder;
mod error;
pub mod mapping;
mod message;
mod mode;

pub use decoder::to_cloud_event;
pub use detector::{detect_mode, is_cloud_event, is_cloud_event_with, is_structured_media_type};
pub use encoder::encode;
pub use error::AmqpBindingError;
pub use message::{AmqpCloudEventMessage, MessageExt};
pub use mode::ContentMode;
