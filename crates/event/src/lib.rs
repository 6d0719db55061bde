//! CloudEvent value type and attribute model.
//!
//! A [`CloudEvent`] is an immutable envelope: a fixed set of typed context
//! attributes, an ordered bag of extension attributes and an optional
//! [`Data`] payload. Events are assembled with [`CloudEventBuilder`], which
//! validates the mandatory attributes and extension names before handing
//! out the value.
//!
//! # Example
//!
//! ```
//! use cloudevents_event::{AttributeValue, CloudEventBuilder, Data};
//!
//! let event = CloudEventBuilder::default()
//!     .id("A234-1234-1234")
//!     .source("https://github.com/cloudevents/spec/pull/123")
//!     .ty("com.github.pull.create")
//!     .data_content_type("text/xml")
//!     .data(Data::String("<much wow=\"xml\"/>".into()))
//!     .extension("comexampleextension1", "value")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(event.id(), "A234-1234-1234");
//! assert_eq!(
//!     event.extension("comexampleextension1"),
//!     Some(&AttributeValue::String("value".into()))
//! );
//! ```

mod attributes;
mod builder;
mod data;
mod error;
mod event;
pub mod media_type;
mod spec_version;
mod uri;

pub use attributes::{AttributeKind, AttributeValue};
pub use builder::{CloudEventBuilder, DEFAULT_DATA_CONTENT_TYPE};
pub use data::Data;
pub use error::EventError;
pub use event::CloudEvent;
pub use spec_version::SpecVersion;
pub use uri::UriRef;

/// Timestamp type carried by `time` and timestamp-typed extensions.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
