use fastjson_core::{dumps, from_value, loads, to_value, JsonError, Value};
use num_bigint::BigInt;

/// Canonical documents: compact text the serializer reproduces byte for
/// byte after a parse.
const CANONICAL: &[&str] = &[
    "null",
    "true",
    "false",
    "12",
    "-12",
    "12.3",
    "-12.3",
    "2.14",
    "0",
    "\"hello world\"",
    "\"\"",
    "[]",
    "{}",
    "[null]",
    "[1,null]",
    "[false,-50.3]",
    r#"["test",[1,"hello"]]"#,
    r#"{"20":null}"#,
    r#"{"hoge":null,"huga":134}"#,
    r#"{"test":[1,"hello"]}"#,
    r#"{"test":{"hello":["world","!!"]}}"#,
    "\"こんにちは\"",
    r#""line1\nline2""#,
    r#""say \"hi\"""#,
    "429496729501234567",
    "123456789012345678901234567890",
];

#[test]
fn canonical_documents_round_trip_exactly() {
    for text in CANONICAL {
        let value = loads(text).unwrap();
        assert_eq!(&dumps(&value).unwrap(), text, "document {text:?}");
    }
}

#[test]
fn reparse_is_identity() {
    for text in CANONICAL {
        let value = loads(text).unwrap();
        assert_eq!(loads(&dumps(&value).unwrap()).unwrap(), value);
    }
}

#[test]
fn escapes_normalize_to_canonical_form() {
    // Input may escape more than the canonical output does.
    assert_eq!(dumps(&loads(r#""\u0041\/b""#).unwrap()).unwrap(), "\"A/b\"");
    assert_eq!(
        dumps(&loads("\"\\u00e9\"").unwrap()).unwrap(),
        "\"é\""
    );
}

#[test]
fn key_order_survives_the_cycle() {
    let text = r#"{"b":1,"a":2,"c":3}"#;
    assert_eq!(dumps(&loads(text).unwrap()).unwrap(), text);
}

// ============================================================================
// Host conversions (serde_json interop)
// ============================================================================

/// The one canonical document serde_json cannot mirror: its integer exceeds
/// the u64 range, which serde_json would quietly parse as a float.
const PAST_U64: &str = "123456789012345678901234567890";

#[test]
fn from_value_matches_a_direct_serde_parse() {
    for text in CANONICAL {
        let ours = loads(text).unwrap();
        let Ok(host) = from_value(&ours) else {
            assert_eq!(text, &PAST_U64);
            continue;
        };
        let direct: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(host, direct, "document {text:?}");
    }
}

#[test]
fn dumps_matches_serde_for_float_free_documents() {
    for text in [
        r#"{"hoge":null,"huga":134}"#,
        r#"["test",[1,"hello"],{"k":true}]"#,
        "\"こんにちは\"",
        r#""say \"hi\"""#,
    ] {
        let ours = loads(text).unwrap();
        let host = from_value(&ours).unwrap();
        assert_eq!(dumps(&ours).unwrap(), serde_json::to_string(&host).unwrap());
    }
}

#[test]
fn to_value_matches_our_own_parse() {
    for text in CANONICAL {
        if text == &PAST_U64 {
            continue;
        }
        let host: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(to_value(&host), loads(text).unwrap(), "document {text:?}");
    }
}

#[test]
fn conversion_round_trip_is_structural_identity() {
    let value = loads(r#"{"a":[1,"x",null,true],"b":{"c":-7}}"#).unwrap();
    assert_eq!(to_value(&from_value(&value).unwrap()), value);
}

#[test]
fn conversion_preserves_key_order() {
    let value = loads(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let host = from_value(&value).unwrap();
    let keys: Vec<&str> = host.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn oversized_integers_refuse_host_conversion() {
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert!(matches!(
        from_value(&Value::Int(big)),
        Err(JsonError::IntOutOfRange(_))
    ));
}

#[test]
fn hand_built_nan_refuses_host_conversion() {
    assert!(matches!(
        from_value(&Value::Float(f64::NAN)),
        Err(JsonError::InvalidFloat(_))
    ));
}
