//! Validating CloudEvent builder.

use chrono::DateTime;
use indexmap::IndexMap;

use crate::data;
use crate::{
    AttributeKind, AttributeValue, CloudEvent, Data, EventError, SpecVersion, Timestamp, UriRef,
};

/// Content type given to text or JSON data that arrives without one.
pub const DEFAULT_DATA_CONTENT_TYPE: &str = "application/json";

/// Assembles a [`CloudEvent`].
///
/// Fluent setters never fail; all validation happens in [`build`](Self::build).
/// [`set_attribute`](Self::set_attribute) is the by-name entry point used by
/// decoders: it coerces string values into the declared type of reserved
/// attributes (`source` to a URI, `time` to a timestamp) and files any other
/// name under the extensions.
#[derive(Debug, Clone, Default)]
pub struct CloudEventBuilder {
    spec_version: SpecVersion,
    id: Option<String>,
    source: Option<String>,
    ty: Option<String>,
    data_content_type: Option<String>,
    data_content_encoding: Option<String>,
    data_schema: Option<String>,
    subject: Option<String>,
    time: Option<Timestamp>,
    extensions: IndexMap<String, AttributeValue>,
    data: Option<Data>,
}

impl CloudEventBuilder {
    pub fn new(spec_version: SpecVersion) -> Self {
        Self {
            spec_version,
            ..Default::default()
        }
    }

    pub fn spec_version(&self) -> SpecVersion {
        self.spec_version
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the `type` attribute.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn time(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn data_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.data_content_type = Some(content_type.into());
        self
    }

    pub fn data_schema(mut self, schema: impl Into<String>) -> Self {
        self.data_schema = Some(schema.into());
        self
    }

    pub fn extension(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.extensions.insert(name.into(), value.into());
        self
    }

    pub fn data(mut self, data: impl Into<Data>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn set_data(&mut self, data: Option<Data>) {
        self.data = data;
    }

    pub fn set_data_content_type(&mut self, content_type: Option<String>) {
        self.data_content_type = content_type;
    }

    /// Sets an attribute by name.
    ///
    /// Reserved attributes of the builder's spec version are checked against
    /// their declared type; everything else becomes an extension.
    pub fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), EventError> {
        let Some(kind) = self.spec_version.attribute_kind(name) else {
            self.extensions.insert(name.to_owned(), value);
            return Ok(());
        };
        match name {
            "specversion" => {
                let found = expect_string(name, kind, value)?;
                if found != self.spec_version.as_str() {
                    return Err(EventError::SpecVersionMismatch {
                        expected: self.spec_version.as_str().to_owned(),
                        found,
                    });
                }
            }
            "id" => self.id = Some(expect_string(name, kind, value)?),
            "source" => self.source = Some(expect_uri(name, kind, value)?.into_string()),
            "type" => self.ty = Some(expect_string(name, kind, value)?),
            "datacontenttype" => self.data_content_type = Some(expect_string(name, kind, value)?),
            "datacontentencoding" => {
                self.data_content_encoding = Some(expect_string(name, kind, value)?)
            }
            "dataschema" | "schemaurl" => {
                self.data_schema = Some(expect_uri(name, kind, value)?.into_string())
            }
            "subject" => self.subject = Some(expect_string(name, kind, value)?),
            "time" => self.time = Some(expect_timestamp(name, kind, value)?),
            _ => {
                self.extensions.insert(name.to_owned(), value);
            }
        }
        Ok(())
    }

    /// Validates the attributes and brings `data` into the shape its
    /// content type calls for (see [`Data`]).
    pub fn build(self) -> Result<CloudEvent, EventError> {
        let id = non_empty(self.id).ok_or(EventError::MissingAttribute("id"))?;
        let source = non_empty(self.source).ok_or(EventError::MissingAttribute("source"))?;
        let ty = non_empty(self.ty).ok_or(EventError::MissingAttribute("type"))?;
        let source = UriRef::parse(&source)?;
        let data_schema = self
            .data_schema
            .as_deref()
            .map(UriRef::parse)
            .transpose()?;
        for name in self.extensions.keys() {
            validate_extension_name(name, self.spec_version)?;
        }
        let data_content_type = match (&self.data, self.data_content_type) {
            (Some(Data::String(_) | Data::Json(_)), None) => {
                Some(DEFAULT_DATA_CONTENT_TYPE.to_owned())
            }
            (_, content_type) => content_type,
        };
        let data = match (self.data, data_content_type.as_deref()) {
            (Some(data), Some(content_type)) => Some(data::canonical(data, content_type)?),
            (data, _) => data,
        };
        Ok(CloudEvent {
            spec_version: self.spec_version,
            id,
            source,
            ty,
            data_content_type,
            data_content_encoding: self.data_content_encoding,
            data_schema,
            subject: self.subject,
            time: self.time,
            extensions: self.extensions,
            data,
        })
    }
}

impl From<CloudEvent> for CloudEventBuilder {
    fn from(event: CloudEvent) -> Self {
        Self {
            spec_version: event.spec_version,
            id: Some(event.id),
            source: Some(event.source.into_string()),
            ty: Some(event.ty),
            data_content_type: event.data_content_type,
            data_content_encoding: event.data_content_encoding,
            data_schema: event.data_schema.map(UriRef::into_string),
            subject: event.subject,
            time: event.time,
            extensions: event.extensions,
            data: event.data,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn type_error(name: &str, expected: AttributeKind, value: &AttributeValue) -> EventError {
    EventError::AttributeType {
        name: name.to_owned(),
        expected,
        found: value.kind(),
    }
}

fn expect_string(
    name: &str,
    kind: AttributeKind,
    value: AttributeValue,
) -> Result<String, EventError> {
    match value {
        AttributeValue::String(s) => Ok(s),
        other => Err(type_error(name, kind, &other)),
    }
}

fn expect_uri(name: &str, kind: AttributeKind, value: AttributeValue) -> Result<UriRef, EventError> {
    match value {
        AttributeValue::Uri(u) => Ok(u),
        AttributeValue::String(s) => UriRef::parse(&s),
        other => Err(type_error(name, kind, &other)),
    }
}

fn expect_timestamp(
    name: &str,
    kind: AttributeKind,
    value: AttributeValue,
) -> Result<Timestamp, EventError> {
    match value {
        AttributeValue::Timestamp(t) => Ok(t),
        AttributeValue::String(s) => {
            DateTime::parse_from_rfc3339(&s).map_err(|_| EventError::InvalidTimestamp(s))
        }
        other => Err(type_error(name, kind, &other)),
    }
}

/// Extension names are lowercase ASCII letters and digits and must not
/// shadow a reserved attribute or the `data` member.
fn validate_extension_name(name: &str, spec_version: SpecVersion) -> Result<(), EventError> {
    let well_formed = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    if !well_formed || name == "data" || spec_version.is_reserved(name) {
        return Err(EventError::InvalidExtensionName(name.to_owned()));
    }
    Ok(())
}
