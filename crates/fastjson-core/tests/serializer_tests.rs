use fastjson_core::{dumps, loads, object_from_pairs, serializer, JsonError, MapKey, Value};
use num_bigint::BigInt;

fn int(n: i64) -> Value {
    Value::Int(BigInt::from(n))
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn dump_null() {
    assert_eq!(dumps(&Value::Null).unwrap(), "null");
}

#[test]
fn dump_booleans() {
    assert_eq!(dumps(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(dumps(&Value::Bool(false)).unwrap(), "false");
}

#[test]
fn dump_integers() {
    assert_eq!(dumps(&int(1)).unwrap(), "1");
    assert_eq!(dumps(&int(-100)).unwrap(), "-100");
    assert_eq!(dumps(&int(0)).unwrap(), "0");
}

#[test]
fn dump_floats() {
    assert_eq!(dumps(&Value::Float(12.3)).unwrap(), "12.3");
    assert_eq!(dumps(&Value::Float(-12.3)).unwrap(), "-12.3");
    assert_eq!(dumps(&Value::Float(2.14)).unwrap(), "2.14");
}

#[test]
fn dump_string() {
    assert_eq!(
        dumps(&Value::String("hello world".to_string())).unwrap(),
        "\"hello world\""
    );
}

// ============================================================================
// Number formatting
// ============================================================================

#[test]
fn integers_never_grow_a_decimal_point() {
    assert_eq!(dumps(&int(12)).unwrap(), "12");
    assert_eq!(dumps(&loads("12").unwrap()).unwrap(), "12");
}

#[test]
fn floats_always_keep_a_fractional_marker() {
    // A whole-valued float must not collapse into integer form.
    assert_eq!(dumps(&Value::Float(12.0)).unwrap(), "12.0");
    assert_eq!(dumps(&Value::Float(1000.0)).unwrap(), "1000.0");
    assert_eq!(dumps(&loads("12.0").unwrap()).unwrap(), "12.0");
}

#[test]
fn large_integers_reproduce_exact_digits() {
    for text in [
        "4294967295012345678",
        "9223372036854775807",
        "-9223372036854775808",
        "123456789012345678901234567890",
    ] {
        assert_eq!(dumps(&loads(text).unwrap()).unwrap(), text);
    }
}

#[test]
fn float_digits_round_trip() {
    for f in [0.1, 1.5, -127.5, 1e-7, 3.141592653589793] {
        let text = dumps(&Value::Float(f)).unwrap();
        assert_eq!(loads(&text).unwrap(), Value::Float(f));
    }
}

#[test]
fn non_finite_floats_refused() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            dumps(&Value::Float(f)),
            Err(JsonError::InvalidFloat(_))
        ));
    }
}

#[test]
fn negative_zero_refused() {
    assert!(matches!(
        dumps(&Value::Float(-0.0)),
        Err(JsonError::InvalidFloat(_))
    ));
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn minimal_escaping_only() {
    assert_eq!(
        dumps(&Value::String("say \"hi\"".to_string())).unwrap(),
        r#""say \"hi\"""#
    );
    assert_eq!(
        dumps(&Value::String("path\\to\\file".to_string())).unwrap(),
        r#""path\\to\\file""#
    );
    assert_eq!(
        dumps(&Value::String("line1\nline2\tend".to_string())).unwrap(),
        r#""line1\nline2\tend""#
    );
}

#[test]
fn control_characters_escape_as_unicode() {
    assert_eq!(
        dumps(&Value::String("\u{0001}".to_string())).unwrap(),
        "\"\\u0001\""
    );
    assert_eq!(
        dumps(&Value::String("\u{0008}\u{000C}".to_string())).unwrap(),
        r#""\b\f""#
    );
    assert_eq!(
        dumps(&Value::String("\u{001F}".to_string())).unwrap(),
        "\"\\u001f\""
    );
}

#[test]
fn non_ascii_passes_through_as_utf8() {
    assert_eq!(
        dumps(&Value::String("こんにちは".to_string())).unwrap(),
        "\"こんにちは\""
    );
    assert_eq!(
        dumps(&Value::String("café ✓".to_string())).unwrap(),
        "\"café ✓\""
    );
}

#[test]
fn solidus_is_not_escaped() {
    assert_eq!(
        dumps(&Value::String("a/b".to_string())).unwrap(),
        "\"a/b\""
    );
}

// ============================================================================
// Containers: compact form
// ============================================================================

#[test]
fn dump_list_with_null() {
    assert_eq!(
        dumps(&Value::Array(vec![int(1), Value::Null])).unwrap(),
        "[1,null]"
    );
}

#[test]
fn dump_list_size_two() {
    assert_eq!(
        dumps(&Value::Array(vec![Value::Bool(false), Value::Float(-50.3)])).unwrap(),
        "[false,-50.3]"
    );
}

#[test]
fn dump_object_compact() {
    let value = Value::Object(vec![(
        "test".to_string(),
        Value::Array(vec![int(1), Value::String("hello".to_string())]),
    )]);
    assert_eq!(dumps(&value).unwrap(), r#"{"test":[1,"hello"]}"#);
}

#[test]
fn dump_nested_objects() {
    let value = loads(r#"{"test": {"hello": ["world", "!!"]}}"#).unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"test":{"hello":["world","!!"]}}"#);
}

#[test]
fn dump_empty_containers() {
    assert_eq!(dumps(&Value::Array(vec![])).unwrap(), "[]");
    assert_eq!(dumps(&Value::Object(vec![])).unwrap(), "{}");
}

// ============================================================================
// Key coercion
// ============================================================================

#[test]
fn float_key_coerces_to_its_numeral() {
    let value = object_from_pairs([(MapKey::from(-1.99), int(1))]).unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"-1.99":1}"#);
}

#[test]
fn integer_key_coerces_to_its_digits() {
    let value = object_from_pairs([(MapKey::from(429496729501234567i64), int(1))]).unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"429496729501234567":1}"#);
}

#[test]
fn small_integer_key() {
    let value = object_from_pairs([(MapKey::from(1i64), int(1))]).unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"1":1}"#);
}

#[test]
fn bool_key_coerces_to_keyword_text() {
    let value = object_from_pairs([(MapKey::from(true), Value::Null)]).unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"true":null}"#);
}

#[test]
fn nan_key_refused() {
    assert!(matches!(
        object_from_pairs([(MapKey::from(f64::NAN), Value::Null)]),
        Err(JsonError::InvalidFloat(_))
    ));
}

#[test]
fn coerced_duplicates_follow_last_write_wins() {
    // "1" as a string key and 1 as an integer key collide after coercion.
    let value = object_from_pairs([
        (MapKey::from("1"), int(10)),
        (MapKey::from(1i64), int(20)),
    ])
    .unwrap();
    assert_eq!(dumps(&value).unwrap(), r#"{"1":20}"#);
}

// ============================================================================
// Writer endpoint and depth guard
// ============================================================================

#[test]
fn to_writer_matches_to_string() {
    let value = loads(r#"{"test":[1,"hello",null,2.5]}"#).unwrap();
    let mut buf = Vec::new();
    serializer::to_writer(&mut buf, &value).unwrap();
    assert_eq!(buf, dumps(&value).unwrap().into_bytes());
}

#[test]
fn overdeep_tree_refused_instead_of_overflowing() {
    let mut value = Value::Null;
    for _ in 0..600 {
        value = Value::Array(vec![value]);
    }
    assert!(matches!(dumps(&value), Err(JsonError::DepthLimit(_))));
}
