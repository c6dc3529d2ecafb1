use courier_encoding::{
    CompressedJsonCodec, DeserializationError, EncodingFormat, JsonCodec, MessageCodec,
    MessageData, MessageEncoder, MessageValue, MsgPackCodec, NativeData, NativeValue,
    SerializationError,
};

fn obj(fields: &[(&str, MessageValue)]) -> MessageData {
    fields
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

fn sample_data() -> MessageData {
    obj(&[
        ("queue_name", MessageValue::from("default")),
        ("actor_name", MessageValue::from("process_order")),
        (
            "args",
            MessageValue::Array(vec![
                MessageValue::Integer(123),
                MessageValue::from("eu-west"),
                MessageValue::Null,
            ]),
        ),
        (
            "options",
            MessageValue::Object(vec![
                ("max_retries".to_owned(), MessageValue::UInteger(20)),
                ("backoff_factor".to_owned(), MessageValue::Float(1.5)),
                ("pinned".to_owned(), MessageValue::Bool(false)),
            ]),
        ),
    ])
}

fn roundtrip_codec<C: MessageCodec>(
    codec: &C,
    expected_id: &str,
    expected_format: EncodingFormat,
    data: &C::Data,
) where
    C::Data: PartialEq + std::fmt::Debug,
{
    assert_eq!(codec.id(), expected_id);
    assert_eq!(codec.format(), expected_format);
    let bytes = codec.encode(data).unwrap();
    let decoded = codec.decode(&bytes).unwrap();
    assert_eq!(decoded, *data);
}

#[test]
fn codecs_individual_matrix() {
    let data = sample_data();

    let json = JsonCodec::new();
    roundtrip_codec(&json, "json", EncodingFormat::Json, &data);

    let compressed = CompressedJsonCodec::new();
    roundtrip_codec(
        &compressed,
        "compressed-json",
        EncodingFormat::CompressedJson,
        &data,
    );

    let native: NativeData = vec![
        ("payload".to_owned(), NativeValue::Binary(vec![0, 159, 146])),
        ("marker".to_owned(), NativeValue::Ext(7, vec![1, 2, 3])),
        ("count".to_owned(), NativeValue::from(42u64)),
    ];
    let msgpack = MsgPackCodec::new();
    roundtrip_codec(&msgpack, "msgpack", EncodingFormat::MsgPack, &native);
}

#[test]
fn json_encode_is_compact_and_deterministic() {
    let data = obj(&[
        ("a", MessageValue::Integer(1)),
        (
            "b",
            MessageValue::Array(vec![
                MessageValue::Integer(1),
                MessageValue::Integer(2),
                MessageValue::Integer(3),
            ]),
        ),
    ]);
    let codec = JsonCodec::new();
    assert_eq!(codec.encode(&data).unwrap(), b"{\"a\":1,\"b\":[1,2,3]}");
    assert_eq!(codec.encode(&data).unwrap(), codec.encode(&data).unwrap());
}

#[test]
fn json_field_order_is_preserved() {
    let data = obj(&[
        ("zeta", MessageValue::Integer(1)),
        ("alpha", MessageValue::Integer(2)),
        ("mu", MessageValue::Integer(3)),
    ]);
    let codec = JsonCodec::new();
    let decoded = codec.decode(&codec.encode(&data).unwrap()).unwrap();
    let keys: Vec<&str> = decoded.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["zeta", "alpha", "mu"]);
}

#[test]
fn json_numeric_subtypes_survive_roundtrip() {
    let data = obj(&[
        ("int", MessageValue::Integer(1)),
        ("float", MessageValue::Float(1.0)),
        ("big", MessageValue::UInteger(u64::MAX)),
    ]);
    let codec = JsonCodec::new();
    let decoded = codec.decode(&codec.encode(&data).unwrap()).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn json_rejects_invalid_input() {
    let codec = JsonCodec::new();
    assert!(matches!(
        codec.decode(b"not json"),
        Err(DeserializationError::Json(_))
    ));
    assert!(matches!(
        codec.decode(b"{\"a\":"),
        Err(DeserializationError::Json(_))
    ));
    assert!(matches!(
        codec.decode(b"{} {}"),
        Err(DeserializationError::Json(_))
    ));
    // invalid UTF-8 inside a string token
    assert!(matches!(
        codec.decode(b"{\"a\":\"\xff\xfe\"}"),
        Err(DeserializationError::Json(_))
    ));
    // structurally valid JSON, but not a mapping
    assert!(matches!(
        codec.decode(b"[1,2,3]"),
        Err(DeserializationError::Json(_))
    ));
}

#[test]
fn json_rejects_non_finite_numbers() {
    let codec = JsonCodec::new();
    let data = obj(&[("bad", MessageValue::Float(f64::NAN))]);
    assert!(matches!(
        codec.encode(&data),
        Err(SerializationError::Json(_))
    ));
}

#[test]
fn compressed_json_scenario_roundtrip() {
    let codec = CompressedJsonCodec::new();
    let data = obj(&[("x", MessageValue::from("y"))]);
    let decoded = codec.decode(&codec.encode(&data).unwrap()).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn compression_shrinks_repetitive_payloads() {
    let row = MessageValue::from("the same field value over and over again");
    let data = obj(&[(
        "rows",
        MessageValue::Array(vec![row; 256]),
    )]);

    let plain = JsonCodec::new().encode(&data).unwrap();
    let compressed = CompressedJsonCodec::new().encode(&data).unwrap();
    assert!(compressed.len() < plain.len());
}

#[test]
fn compressed_json_rejects_bad_streams() {
    let codec = CompressedJsonCodec::new();

    // not a zlib stream at all
    assert!(matches!(
        codec.decode(b"no magic here"),
        Err(DeserializationError::Decompression(_))
    ));

    // truncated stream
    let mut bytes = codec.encode(&sample_data()).unwrap();
    bytes.truncate(bytes.len() / 2);
    assert!(matches!(
        codec.decode(&bytes),
        Err(DeserializationError::Decompression(_))
    ));

    // valid stream, invalid JSON inside: the inner error propagates unchanged
    let inner_garbage = courier_encoding::zlib::compress(b"not json").unwrap();
    assert!(matches!(
        codec.decode(&inner_garbage),
        Err(DeserializationError::Json(_))
    ));
}

#[test]
fn compressed_json_enforces_decoded_size_limit() {
    let data = obj(&[(
        "blob",
        MessageValue::Str("x".repeat(1 << 20)),
    )]);
    let bytes = CompressedJsonCodec::new().encode(&data).unwrap();

    let bounded = CompressedJsonCodec::with_max_decoded_len(4096);
    assert!(matches!(
        bounded.decode(&bytes),
        Err(DeserializationError::Decompression(_))
    ));

    let generous = CompressedJsonCodec::with_max_decoded_len(2 << 20);
    assert_eq!(generous.decode(&bytes).unwrap(), data);
}

#[test]
fn msgpack_rejects_invalid_input() {
    let codec = MsgPackCodec::new();
    let data: NativeData = vec![("k".to_owned(), NativeValue::Binary(vec![9; 64]))];
    let bytes = codec.encode(&data).unwrap();

    let mut truncated = bytes.clone();
    truncated.truncate(truncated.len() / 2);
    assert!(matches!(
        codec.decode(&truncated),
        Err(DeserializationError::MsgPack(_))
    ));

    let mut trailing = bytes;
    trailing.push(0xc0);
    assert!(matches!(
        codec.decode(&trailing),
        Err(DeserializationError::MsgPack(_))
    ));

    // a top-level array is not a mapping
    let mut array_bytes = Vec::new();
    rmpv_write(&mut array_bytes, &NativeValue::Array(vec![NativeValue::Nil]));
    assert!(matches!(
        codec.decode(&array_bytes),
        Err(DeserializationError::MsgPack(_))
    ));
}

fn rmpv_write(out: &mut Vec<u8>, value: &NativeValue) {
    rmpv::encode::write_value(out, value).unwrap();
}

#[test]
fn opaque_values_fail_json_but_pass_msgpack() {
    let data: NativeData = vec![
        ("id".to_owned(), NativeValue::from("task-17")),
        ("payload".to_owned(), NativeValue::Binary(vec![1, 2, 3, 4])),
    ];

    let json = MessageEncoder::from_format(EncodingFormat::Json);
    assert!(matches!(
        json.encode(&data),
        Err(SerializationError::Unrepresentable(_))
    ));

    let msgpack = MessageEncoder::from_format(EncodingFormat::MsgPack);
    let bytes = msgpack.encode(&data).unwrap();
    assert_eq!(msgpack.decode(&bytes).unwrap(), data);
}

#[test]
fn configured_encoder_matrix() {
    let data: NativeData = vec![
        ("queue_name".to_owned(), NativeValue::from("default")),
        ("attempt".to_owned(), NativeValue::from(3u64)),
        (
            "args".to_owned(),
            NativeValue::Array(vec![NativeValue::from("a"), NativeValue::from(-1i64)]),
        ),
    ];

    for format in [
        EncodingFormat::Json,
        EncodingFormat::CompressedJson,
        EncodingFormat::MsgPack,
    ] {
        let encoder = MessageEncoder::from_format(format);
        assert_eq!(encoder.format(), format);
        assert_eq!(encoder.id(), format.id());
        let bytes = encoder.encode(&data).unwrap();
        assert_eq!(encoder.decode(&bytes).unwrap(), data, "{}", format.id());
    }
}

#[test]
fn codecs_aggregate_matrix() {
    let codecs = courier_encoding::Codecs::new();
    let data = sample_data();

    let json_bytes = codecs.json.encode(&data).unwrap();
    let compressed_bytes = codecs.compressed_json.encode(&data).unwrap();
    assert_eq!(codecs.json.decode(&json_bytes).unwrap(), data);
    assert_eq!(
        codecs.compressed_json.decode(&compressed_bytes).unwrap(),
        data
    );

    let native: NativeData = vec![("raw".to_owned(), NativeValue::Binary(vec![0xde, 0xad]))];
    let msgpack_bytes = codecs.msgpack.encode(&native).unwrap();
    assert_eq!(codecs.msgpack.decode(&msgpack_bytes).unwrap(), native);
}
