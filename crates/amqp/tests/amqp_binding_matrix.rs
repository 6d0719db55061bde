use chrono::{FixedOffset, TimeZone, Utc};
use cloudevents_amqp::mapping::SPEC_VERSION_PROPERTY;
use cloudevents_amqp::{
    detect_mode, encode, is_cloud_event, is_cloud_event_with, to_cloud_event, AmqpBindingError,
    AmqpCloudEventMessage, ContentMode, MessageExt,
};
use cloudevents_amqp_message::codec::{decode_message, encode_message};
use cloudevents_amqp_message::{AmqpMessage, AmqpValue, Body};
use cloudevents_event::{
    AttributeValue, CloudEvent, CloudEventBuilder, Data, EventError, SpecVersion,
};
use cloudevents_event_format::{FormatError, JsonEventFormatter};
use serde_json::json;

fn xml_event() -> CloudEventBuilder {
    let plus_one = FixedOffset::east_opt(3600).unwrap();
    CloudEventBuilder::default()
        .id("A234-1234-1234")
        .source("urn:example-com:mysource:abc")
        .ty("com.github.pull.create")
        .time(plus_one.with_ymd_and_hms(2018, 4, 5, 18, 31, 0).unwrap())
        .data_content_type("text/xml")
        .data("<much wow=\"xml\"/>")
        .extension("comexampleextension1", "value")
}

/// Encodes to AMQP bytes and decodes them again, as a sender and a receiver would.
fn over_the_wire(message: &AmqpMessage) -> AmqpMessage {
    decode_message(&encode_message(message).unwrap()).unwrap()
}

fn assert_xml_event(event: &CloudEvent) {
    assert_eq!(event.spec_version(), SpecVersion::V10);
    assert_eq!(event.id(), "A234-1234-1234");
    assert_eq!(event.source().as_str(), "urn:example-com:mysource:abc");
    assert_eq!(event.ty(), "com.github.pull.create");
    assert_eq!(event.data_content_type(), Some("text/xml"));
    assert_eq!(
        event.time().copied(),
        Some(Utc.with_ymd_and_hms(2018, 4, 5, 17, 31, 0).unwrap().fixed_offset())
    );
    assert_eq!(
        event.extension("comexampleextension1"),
        Some(&AttributeValue::String("value".into()))
    );
    assert_eq!(event.data(), Some(&Data::String("<much wow=\"xml\"/>".into())));
}

#[test]
fn amqp_structured_message_roundtrip() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event().build().unwrap();
    let message = encode(&event, ContentMode::Structured, &formatter).unwrap();
    assert_eq!(message.content_type(), Some("application/cloudevents+json"));
    assert!(message.application_properties.is_empty());

    let received = over_the_wire(&message);
    assert!(is_cloud_event(&received));
    assert!(is_cloud_event_with(&received, &formatter));
    assert_eq!(detect_mode(&received), Some(ContentMode::Structured));
    let decoded = to_cloud_event(&received, &formatter).unwrap();
    assert_xml_event(&decoded);
    assert_eq!(decoded, event);
}

#[test]
fn amqp_binary_message_roundtrip() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event().build().unwrap();
    let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(message.content_type(), Some("text/xml"));
    assert_eq!(
        message.application_property("cloudEvents:id"),
        Some(&AmqpValue::String("A234-1234-1234".into()))
    );
    assert_eq!(
        message.application_property("cloudEvents:time"),
        Some(&AmqpValue::Timestamp(1_522_949_460_000))
    );
    assert_eq!(
        message.application_property("cloudEvents:comexampleextension1"),
        Some(&AmqpValue::String("value".into()))
    );
    assert_eq!(message.application_property("cloudEvents:datacontenttype"), None);
    assert_eq!(message.body, Body::Data(b"<much wow=\"xml\"/>".to_vec()));

    let received = over_the_wire(&message);
    assert_eq!(detect_mode(&received), Some(ContentMode::Binary));
    let decoded = to_cloud_event(&received, &formatter).unwrap();
    assert_xml_event(&decoded);
    assert_eq!(decoded.time().map(|t| t.offset().local_minus_utc()), Some(0));
    assert_eq!(decoded, event);
}

#[test]
fn amqp_binary_pull_request_scenario() {
    let formatter = JsonEventFormatter::new();
    let event = CloudEventBuilder::default()
        .ty("com.github.pull.create")
        .source("https://github.com/cloudevents/spec/pull/123")
        .id("A234-1234-1234")
        .time(Utc.with_ymd_and_hms(2018, 4, 5, 17, 31, 0).unwrap())
        .data_content_type("text/xml")
        .data("<much wow=\"xml\"/>")
        .build()
        .unwrap();
    let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(message.content_type(), Some("text/xml"));
    assert_eq!(message.body, Body::Data(b"<much wow=\"xml\"/>".to_vec()));
    assert_eq!(
        message.application_property("cloudEvents:id"),
        Some(&AmqpValue::String("A234-1234-1234".into()))
    );
    assert_eq!(to_cloud_event(&message, &formatter).unwrap(), event);
}

#[test]
fn amqp_binary_payload_matrix() {
    let formatter = JsonEventFormatter::new();
    let base = || {
        CloudEventBuilder::default()
            .id("1")
            .source("/sensors/7")
            .ty("reading")
    };
    let cases = vec![
        base()
            .data_content_type("application/json")
            .data(json!({"temperature": 21.5, "tags": ["a", "b"]}))
            .build()
            .unwrap(),
        base()
            .data_content_type("application/octet-stream")
            .data(vec![0u8, 1, 2, 255])
            .build()
            .unwrap(),
        base()
            .data_content_type("text/plain; charset=utf-8")
            .data("héllo")
            .build()
            .unwrap(),
        base()
            .data_content_type("application/json")
            .data("hello")
            .build()
            .unwrap(),
        base()
            .data_content_type("text/plain")
            .data(json!("21.5"))
            .build()
            .unwrap(),
        base()
            .data_content_type("application/vnd.sensor+json")
            .data(vec![b'4', b'2'])
            .build()
            .unwrap(),
        base().data(vec![9u8, 8, 7]).build().unwrap(),
        base().build().unwrap(),
    ];
    for event in cases {
        let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
        let decoded = to_cloud_event(&over_the_wire(&message), &formatter).unwrap();
        assert_eq!(decoded, event);
    }
}

#[test]
fn amqp_binary_text_without_content_type_is_sent_as_json() {
    let formatter = JsonEventFormatter::new();
    let event = CloudEventBuilder::default()
        .id("1")
        .source("/s")
        .ty("t")
        .data("plain")
        .build()
        .unwrap();
    let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(message.content_type(), Some("application/json"));
    assert_eq!(message.body, Body::Data(br#""plain""#.to_vec()));
    let decoded = to_cloud_event(&over_the_wire(&message), &formatter).unwrap();
    assert_eq!(decoded.data(), Some(&Data::Json(json!("plain"))));
    assert_eq!(decoded, event);
}

#[test]
fn amqp_structured_text_without_content_type_roundtrips() {
    let formatter = JsonEventFormatter::new();
    let event = CloudEventBuilder::default()
        .id("1")
        .source("/s")
        .ty("t")
        .data(Data::String("hello".into()))
        .build()
        .unwrap();
    let message = encode(&event, ContentMode::Structured, &formatter).unwrap();
    let decoded = to_cloud_event(&over_the_wire(&message), &formatter).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn amqp_json_number_under_text_content_type_is_rejected() {
    let err = CloudEventBuilder::default()
        .id("1")
        .source("/sensors/7")
        .ty("reading")
        .data_content_type("text/plain")
        .data(json!(21.5))
        .build()
        .unwrap_err();
    assert!(matches!(err, EventError::DataContentType { .. }));
}

#[test]
fn amqp_binary_typed_extension_matrix() {
    let formatter = JsonEventFormatter::new();
    let at = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
    let event = CloudEventBuilder::default()
        .id("1")
        .source("/s")
        .ty("t")
        .subject("subject-1")
        .data_schema("https://example.com/schema.json")
        .extension("flag", true)
        .extension("count", -42i64)
        .extension("blob", vec![1u8, 2, 3])
        .extension("seen", at.fixed_offset())
        .extension("label", "x")
        .build()
        .unwrap();
    let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(
        message.application_property("cloudEvents:count"),
        Some(&AmqpValue::Long(-42))
    );
    assert_eq!(
        message.application_property("cloudEvents:dataschema"),
        Some(&AmqpValue::String("https://example.com/schema.json".into()))
    );

    let decoded = to_cloud_event(&over_the_wire(&message), &formatter).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn amqp_structured_extensions_survive() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event()
        .extension("flag", true)
        .extension("count", 7i64)
        .build()
        .unwrap();
    let message = encode(&event, ContentMode::Structured, &formatter).unwrap();
    let decoded = to_cloud_event(&over_the_wire(&message), &formatter).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn amqp_spec_version_03_binary_roundtrip() {
    let formatter = JsonEventFormatter::new();
    let mut builder = CloudEventBuilder::new(SpecVersion::V03)
        .id("1")
        .source("/s")
        .ty("t")
        .data_schema("https://example.com/schema.json");
    builder
        .set_attribute("datacontentencoding", AttributeValue::String("base64".into()))
        .unwrap();
    let event = builder.build().unwrap();

    let message = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(
        message.application_property(SPEC_VERSION_PROPERTY),
        Some(&AmqpValue::String("0.3".into()))
    );
    assert!(message.application_property("cloudEvents:schemaurl").is_some());
    let decoded = to_cloud_event(&message, &formatter).unwrap();
    assert_eq!(decoded.spec_version(), SpecVersion::V03);
    assert_eq!(decoded.data_content_encoding(), Some("base64"));
    assert_eq!(decoded, event);
}

#[test]
fn amqp_detection_matrix() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event().build().unwrap();

    let plain = AmqpMessage::new();
    assert!(!is_cloud_event(&plain));
    assert!(!plain.is_cloud_event());

    let mut json = AmqpMessage::new();
    json.set_content_type("application/json");
    json.body = Body::Data(b"{}".to_vec());
    assert_eq!(json.content_mode(), None);

    let structured = encode(&event, ContentMode::Structured, &formatter).unwrap();
    assert_eq!(structured.content_mode(), Some(ContentMode::Structured));

    let binary = encode(&event, ContentMode::Binary, &formatter).unwrap();
    assert_eq!(binary.content_mode(), Some(ContentMode::Binary));

    let mut parameters = structured.clone();
    parameters.set_content_type("application/cloudevents+json; charset=utf-8");
    assert_eq!(to_cloud_event(&parameters, &formatter).unwrap(), event);
}

#[test]
fn amqp_structured_wins_over_spec_version_property() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event().build().unwrap();
    let mut message = encode(&event, ContentMode::Structured, &formatter).unwrap();
    message
        .application_properties
        .insert(SPEC_VERSION_PROPERTY.into(), AmqpValue::String("0.3".into()));
    message
        .application_properties
        .insert("cloudEvents:id".into(), AmqpValue::String("other".into()));

    assert_eq!(detect_mode(&message), Some(ContentMode::Structured));
    let decoded = to_cloud_event(&message, &formatter).unwrap();
    assert_eq!(decoded.id(), "A234-1234-1234");
    assert_eq!(decoded.spec_version(), SpecVersion::V10);
}

#[test]
fn amqp_accepts_underscore_and_mixed_case_prefixes() {
    let formatter = JsonEventFormatter::new();
    let mut message = AmqpMessage::new();
    for (key, value) in [
        ("cloudEvents_specversion", "1.0"),
        ("cloudEvents_id", "1"),
        ("CLOUDEVENTS:source", "/s"),
        ("cloudevents_type", "t"),
        ("cloudEvents_Extension", "v"),
    ] {
        message
            .application_properties
            .insert(key.into(), AmqpValue::String(value.into()));
    }
    let event = to_cloud_event(&message, &formatter).unwrap();
    assert_eq!(event.id(), "1");
    assert_eq!(event.source().as_str(), "/s");
    assert_eq!(event.ty(), "t");
    assert_eq!(
        event.extension("extension"),
        Some(&AttributeValue::String("v".into()))
    );
}

#[test]
fn amqp_binding_error_matrix() {
    let formatter = JsonEventFormatter::new();

    assert!(matches!(
        to_cloud_event(&AmqpMessage::new(), &formatter),
        Err(AmqpBindingError::NotACloudEvent)
    ));

    let with_version = |value: AmqpValue| {
        let mut message = AmqpMessage::new();
        message
            .application_properties
            .insert(SPEC_VERSION_PROPERTY.into(), value);
        message
            .application_properties
            .insert("cloudEvents:id".into(), AmqpValue::String("1".into()));
        message
            .application_properties
            .insert("cloudEvents:source".into(), AmqpValue::String("/s".into()));
        message
            .application_properties
            .insert("cloudEvents:type".into(), AmqpValue::String("t".into()));
        message
    };

    match to_cloud_event(&with_version(AmqpValue::String("2.0".into())), &formatter) {
        Err(AmqpBindingError::UnsupportedSpecVersion(version)) => assert_eq!(version, "2.0"),
        other => panic!("unexpected result {other:?}"),
    }
    assert!(matches!(
        to_cloud_event(&with_version(AmqpValue::Long(1)), &formatter),
        Err(AmqpBindingError::AttributeCoercion { expected: "string", .. })
    ));

    let mut bad_time = with_version(AmqpValue::String("1.0".into()));
    bad_time
        .application_properties
        .insert("cloudEvents:time".into(), AmqpValue::Boolean(true));
    match to_cloud_event(&bad_time, &formatter) {
        Err(AmqpBindingError::AttributeCoercion {
            attribute,
            expected,
            found,
        }) => {
            assert_eq!(attribute, "time");
            assert_eq!(expected, "timestamp");
            assert_eq!(found, "boolean");
        }
        other => panic!("unexpected result {other:?}"),
    }

    let mut missing_id = with_version(AmqpValue::String("1.0".into()));
    missing_id.application_properties.shift_remove("cloudEvents:id");
    assert!(matches!(
        to_cloud_event(&missing_id, &formatter),
        Err(AmqpBindingError::Event(EventError::MissingAttribute("id")))
    ));

    let mut sequence = with_version(AmqpValue::String("1.0".into()));
    sequence.body = Body::Sequence(vec![AmqpValue::Int(1)]);
    assert!(matches!(
        to_cloud_event(&sequence, &formatter),
        Err(AmqpBindingError::UnsupportedBody(_))
    ));

    let mut avro = AmqpMessage::new();
    avro.set_content_type("application/cloudevents+avro");
    avro.body = Body::Data(vec![0]);
    assert!(matches!(
        to_cloud_event(&avro, &formatter),
        Err(AmqpBindingError::Formatter(FormatError::UnsupportedMediaType(_)))
    ));

    let mut broken = AmqpMessage::new();
    broken.set_content_type("application/cloudevents+json");
    broken.body = Body::Data(b"{not json".to_vec());
    assert!(matches!(
        to_cloud_event(&broken, &formatter),
        Err(AmqpBindingError::Formatter(FormatError::Json(_)))
    ));

    assert!(matches!(
        "batched".parse::<ContentMode>(),
        Err(AmqpBindingError::InvalidArgument(_))
    ));
}

#[test]
fn amqp_cloud_event_message_wrapper() {
    let formatter = JsonEventFormatter::new();
    let event = xml_event().build().unwrap();
    for mode in [ContentMode::Structured, ContentMode::Binary] {
        let wrapped = AmqpCloudEventMessage::new(&event, mode, &formatter).unwrap();
        assert!(wrapped.is_cloud_event());
        let received = decode_message(&wrapped.encode().unwrap()).unwrap();
        assert_eq!(received.content_mode(), Some(mode));
        assert_eq!(received.to_cloud_event(&formatter).unwrap(), event);
        assert_eq!(wrapped.into_message(), received);
    }
}
