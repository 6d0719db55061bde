//! Event formats for CloudEvents.
//!
//! An event format renders a whole [`CloudEvent`](cloudevents_event::CloudEvent)
//! as a single document (structured content mode) and converts `data`
//! payloads to and from bytes for a given `datacontenttype` (binary content
//! mode). Protocol bindings depend only on the [`EventFormatter`] trait.

mod error;
mod formatter;
pub mod json;
pub use cloudevents_event::media_type;

pub use error::FormatError;
pub use formatter::EventFormatter;
pub use json::JsonEventFormatter;
