//! The CloudEvent value type.

use indexmap::IndexMap;

use crate::{AttributeValue, CloudEventBuilder, Data, SpecVersion, Timestamp, UriRef};

/// An immutable CloudEvent.
///
/// Instances are produced by [`CloudEventBuilder::build`], which guarantees
/// that `id`, `source` and `type` are present and that every extension name
/// is valid for the event's [`SpecVersion`].
#[derive(Debug, Clone, PartialEq)]
pub struct CloudEvent {
    pub(crate) spec_version: SpecVersion,
    pub(crate) id: String,
    pub(crate) source: UriRef,
    pub(crate) ty: String,
    pub(crate) data_content_type: Option<String>,
    pub(crate) data_content_encoding: Option<String>,
    pub(crate) data_schema: Option<UriRef>,
    pub(crate) subject: Option<String>,
    pub(crate) time: Option<Timestamp>,
    pub(crate) extensions: IndexMap<String, AttributeValue>,
    pub(crate) data: Option<Data>,
}

impl CloudEvent {
    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &UriRef {
        &self.source
    }

    /// The `type` attribute.
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn data_content_type(&self) -> Option<&str> {
        self.data_content_type.as_deref()
    }

    /// `datacontentencoding`, only defined for spec version 0.3.
    pub fn data_content_encoding(&self) -> Option<&str> {
        self.data_content_encoding.as_deref()
    }

    /// `dataschema` (1.0) or `schemaurl` (0.3).
    pub fn data_schema(&self) -> Option<&UriRef> {
        self.data_schema.as_ref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn time(&self) -> Option<&Timestamp> {
        self.time.as_ref()
    }

    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    pub fn extensions(&self) -> &IndexMap<String, AttributeValue> {
        &self.extensions
    }

    pub fn extension(&self, name: &str) -> Option<&AttributeValue> {
        self.extensions.get(name)
    }

    /// Looks up any attribute (reserved or extension) by name.
    pub fn attribute(&self, name: &str) -> Option<AttributeValue> {
        self.attributes()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// All attributes present on the event, reserved ones first in their
    /// canonical order, then extensions in insertion order.
    pub fn attributes(&self) -> Vec<(&str, AttributeValue)> {
        let mut out: Vec<(&str, AttributeValue)> = vec![
            (
                "specversion",
                AttributeValue::String(self.spec_version.as_str().to_owned()),
            ),
            ("id", AttributeValue::String(self.id.clone())),
            ("source", AttributeValue::Uri(self.source.clone())),
            ("type", AttributeValue::String(self.ty.clone())),
        ];
        if let Some(ct) = &self.data_content_type {
            out.push(("datacontenttype", AttributeValue::String(ct.clone())));
        }
        if let Some(enc) = &self.data_content_encoding {
            out.push(("datacontentencoding", AttributeValue::String(enc.clone())));
        }
        if let Some(schema) = &self.data_schema {
            out.push((
                self.spec_version.data_schema_attribute(),
                AttributeValue::Uri(schema.clone()),
            ));
        }
        if let Some(subject) = &self.subject {
            out.push(("subject", AttributeValue::String(subject.clone())));
        }
        if let Some(time) = &self.time {
            out.push(("time", AttributeValue::Timestamp(*time)));
        }
        for (name, value) in &self.extensions {
            out.push((name.as_str(), value.clone()));
        }
        out
    }

    /// Returns a builder seeded with every attribute and the data of this event.
    pub fn to_builder(&self) -> CloudEventBuilder {
        CloudEventBuilder::from(self.clone())
    }
}
