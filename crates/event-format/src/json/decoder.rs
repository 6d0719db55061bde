use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cloudevents_event::{AttributeValue, CloudEvent, CloudEventBuilder, Data, EventError, SpecVersion};
use serde_json::Value;

use crate::FormatError;

/// Rebuilds an event from a parsed structured JSON document.
///
/// `null` members are treated as absent. Extension members must be JSON
/// strings, booleans or integers. `data` is handed to the builder as JSON,
/// which reshapes it for the event's `datacontenttype`.
pub fn event_from_json(document: Value) -> Result<CloudEvent, FormatError> {
    let Value::Object(mut object) = document else {
        return Err(FormatError::NotAnObject);
    };

    let spec_version: SpecVersion = match object.remove("specversion") {
        Some(Value::String(s)) => s.parse()?,
        Some(Value::Null) | None => return Err(EventError::MissingAttribute("specversion").into()),
        Some(_) => return Err(FormatError::InvalidAttributeValue("specversion".into())),
    };

    let data = object.remove("data").filter(|v| !v.is_null());
    let data_base64 = object.remove("data_base64").filter(|v| !v.is_null());

    let mut builder = CloudEventBuilder::new(spec_version);
    for (name, value) in object {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => AttributeValue::String(s),
            Value::Bool(b) => AttributeValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttributeValue::Integer(i),
                None => return Err(FormatError::InvalidAttributeValue(name)),
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(FormatError::InvalidAttributeValue(name))
            }
        };
        builder.set_attribute(&name, value)?;
    }

    let data = match (data, data_base64) {
        (Some(_), Some(_)) => return Err(FormatError::DuplicateData),
        (Some(value), None) => Some(Data::Json(value)),
        (None, Some(Value::String(encoded))) => {
            let bytes = STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| FormatError::Base64("data_base64".into(), e))?;
            Some(Data::Binary(bytes))
        }
        (None, Some(_)) => return Err(FormatError::InvalidAttributeValue("data_base64".into())),
        (None, None) => None,
    };
    builder.set_data(data);
    Ok(builder.build()?)
}

