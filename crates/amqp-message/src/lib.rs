//! AMQP 1.0 bare message model.
//!
//! [`AmqpMessage`] holds the sections a CloudEvents binding reads and
//! writes: the immutable `properties`, the `application-properties` map and
//! the body. The [`codec`] module turns a message into AMQP 1.0 type-system
//! bytes and back.
//!
//! # Example
//!
//! ```
//! use cloudevents_amqp_message::{codec, AmqpMessage, AmqpValue, Body};
//!
//! let mut message = AmqpMessage::new();
//! message.set_content_type("text/plain");
//! message
//!     .application_properties
//!     .insert("cloudEvents:id".into(), AmqpValue::String("1".into()));
//! message.body = Body::Data(b"hello".to_vec());
//!
//! let bytes = codec::encode_message(&message).unwrap();
//! assert_eq!(codec::decode_message(&bytes).unwrap(), message);
//! ```

pub mod codec;
mod message;
mod value;

pub use message::{AmqpMessage, Body, Properties};
pub use value::AmqpValue;
