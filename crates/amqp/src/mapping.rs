//! Attribute mapping table.
//!
//! Binary content mode carries every attribute except `datacontenttype` as
//! an application-property named `cloudEvents:<attribute>`. Values map to
//! their AMQP counterparts:
//!
//! | attribute type | AMQP type                          |
//! |----------------|------------------------------------|
//! | string         | string                             |
//! | uri            | string                             |
//! | boolean        | boolean                            |
//! | integer        | long                               |
//! | binary         | binary                             |
//! | timestamp      | timestamp (UTC milliseconds)       |
//!
//! Decoding goes the other way. Reserved attributes are coerced into their
//! declared type; extensions take the type of the AMQP value.

use chrono::{DateTime, Utc};
use cloudevents_amqp_message::AmqpValue;
use cloudevents_event::{AttributeKind, AttributeValue, EventError, Timestamp, UriRef};

use crate::AmqpBindingError;

/// Prefix written in front of every attribute name.
pub const PROPERTY_PREFIX: &str = "cloudEvents:";

/// Prefix used by the AMQP binding 1.0 text; accepted on decode.
pub const ALT_PROPERTY_PREFIX: &str = "cloudEvents_";

/// Application-property carrying `specversion`; also the binary-mode
/// detection signal.
pub const SPEC_VERSION_PROPERTY: &str = "cloudEvents:specversion";

/// The attribute carried by the message `content-type` instead of an
/// application-property.
pub const CONTENT_TYPE_ATTRIBUTE: &str = "datacontenttype";

/// Application-property key for `attribute`, or `None` for
/// `datacontenttype`.
pub fn property_name(attribute: &str) -> Option<String> {
    if attribute == CONTENT_TYPE_ATTRIBUTE {
        return None;
    }
    Some(format!("{PROPERTY_PREFIX}{attribute}"))
}

/// Attribute name for an application-property key, or `None` if the key
/// does not carry a CloudEvents prefix.
///
/// The prefix is matched ASCII case-insensitively and the attribute name is
/// lowercased.
pub fn attribute_name(property: &str) -> Option<String> {
    [PROPERTY_PREFIX, ALT_PROPERTY_PREFIX]
        .iter()
        .find_map(|prefix| {
            let head = property.get(..prefix.len())?;
            if !head.eq_ignore_ascii_case(prefix) {
                return None;
            }
            let name = &property[prefix.len()..];
            (!name.is_empty()).then(|| name.to_ascii_lowercase())
        })
}

pub fn encode_attribute(value: &AttributeValue) -> AmqpValue {
    match value {
        AttributeValue::String(s) => AmqpValue::String(s.clone()),
        AttributeValue::Uri(u) => AmqpValue::String(u.as_str().to_owned()),
        AttributeValue::Boolean(b) => AmqpValue::Boolean(*b),
        AttributeValue::Integer(i) => AmqpValue::Long(*i),
        AttributeValue::Binary(b) => AmqpValue::Binary(b.clone()),
        AttributeValue::Timestamp(t) => AmqpValue::Timestamp(encode_timestamp(t)),
    }
}

/// The instant in UTC milliseconds; the offset is discarded.
pub fn encode_timestamp(timestamp: &Timestamp) -> i64 {
    timestamp.timestamp_millis()
}

/// A UTC timestamp (zero offset) for `millis` since the epoch.
pub fn decode_timestamp(attribute: &str, millis: i64) -> Result<Timestamp, AmqpBindingError> {
    let utc: DateTime<Utc> =
        DateTime::from_timestamp_millis(millis).ok_or_else(|| AmqpBindingError::AttributeCoercion {
            attribute: attribute.to_owned(),
            expected: "timestamp in range",
            found: "timestamp",
        })?;
    Ok(utc.into())
}

/// Converts an application-property value back into an attribute value.
///
/// `declared` is the type of a reserved attribute; `None` marks an
/// extension.
pub fn decode_attribute(
    attribute: &str,
    declared: Option<AttributeKind>,
    value: &AmqpValue,
) -> Result<AttributeValue, AmqpBindingError> {
    let coercion = |expected: &'static str| AmqpBindingError::AttributeCoercion {
        attribute: attribute.to_owned(),
        expected,
        found: value.type_name(),
    };

    let Some(kind) = declared else {
        return match value {
            AmqpValue::String(s) | AmqpValue::Symbol(s) => Ok(AttributeValue::String(s.clone())),
            AmqpValue::Boolean(b) => Ok(AttributeValue::Boolean(*b)),
            AmqpValue::Binary(b) => Ok(AttributeValue::Binary(b.clone())),
            AmqpValue::Timestamp(ms) => Ok(AttributeValue::Timestamp(decode_timestamp(attribute, *ms)?)),
            other => other
                .as_i64()
                .map(AttributeValue::Integer)
                .ok_or_else(|| coercion("extension attribute value")),
        };
    };

    match kind {
        AttributeKind::String => value
            .as_str()
            .map(|s| AttributeValue::String(s.to_owned()))
            .ok_or_else(|| coercion(kind.as_str())),
        AttributeKind::Uri => match value.as_str() {
            Some(s) => Ok(AttributeValue::Uri(UriRef::parse(s)?)),
            None => Err(coercion(kind.as_str())),
        },
        AttributeKind::Boolean => match value {
            AmqpValue::Boolean(b) => Ok(AttributeValue::Boolean(*b)),
            _ => Err(coercion(kind.as_str())),
        },
        AttributeKind::Integer => value
            .as_i64()
            .map(AttributeValue::Integer)
            .ok_or_else(|| coercion(kind.as_str())),
        AttributeKind::Binary => match value {
            AmqpValue::Binary(b) => Ok(AttributeValue::Binary(b.clone())),
            _ => Err(coercion(kind.as_str())),
        },
        AttributeKind::Timestamp => match value {
            AmqpValue::Timestamp(ms) => Ok(AttributeValue::Timestamp(decode_timestamp(attribute, *ms)?)),
            // Some producers send RFC 3339 strings.
            AmqpValue::String(s) => DateTime::parse_from_rfc3339(s)
                .map(AttributeValue::Timestamp)
                .map_err(|_| EventError::InvalidTimestamp(s.clone()).into()),
            _ => Err(coercion(kind.as_str())),
        },
    }
}
