use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::SecondsFormat;
use cloudevents_event::{AttributeValue, CloudEvent, Data};
use serde_json::{Map, Value};

/// Renders an event as a JSON object in canonical attribute order.
pub fn event_to_json(event: &CloudEvent) -> Map<String, Value> {
    let mut object = Map::new();
    for (name, value) in event.attributes() {
        object.insert(name.to_owned(), attribute_to_json(&value));
    }
    match event.data() {
        Some(Data::Json(value)) => {
            object.insert("data".to_owned(), value.clone());
        }
        Some(Data::String(text)) => {
            object.insert("data".to_owned(), Value::String(text.clone()));
        }
        Some(Data::Binary(bytes)) => {
            object.insert("data_base64".to_owned(), Value::String(STANDARD.encode(bytes)));
        }
        None => {}
    }
    object
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::String(s) => Value::String(s.clone()),
        AttributeValue::Uri(u) => Value::String(u.as_str().to_owned()),
        AttributeValue::Boolean(b) => Value::Bool(*b),
        AttributeValue::Integer(i) => Value::from(*i),
        AttributeValue::Binary(b) => Value::String(STANDARD.encode(b)),
        AttributeValue::Timestamp(t) => {
            Value::String(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
    }
}
