use json_node::{decode_str, encode, Map, Value};
use serde_json::json;

/// Helper: compact serialization as a UTF-8 string.
fn compact(v: &Value) -> String {
    String::from_utf8(v.serialize_compact()).expect("serializer emits UTF-8")
}

// ============================================================================
// Tree shape
// ============================================================================

#[test]
fn encode_scalars() {
    assert_eq!(encode(&Value::Null), json!(null));
    assert_eq!(encode(&Value::from("hi")), json!("hi"));
    assert_eq!(encode(&Value::Integer(-3)), json!(-3));
    assert_eq!(encode(&Value::Float(2.5)), json!(2.5));
    assert_eq!(encode(&Value::Boolean(true)), json!(true));
}

#[test]
fn encode_integer_is_i64_number() {
    let tree = encode(&Value::Integer(i64::MIN));
    assert_eq!(tree.as_i64(), Some(i64::MIN));
    assert!(!tree.is_f64());
}

#[test]
fn encode_float_is_f64_number() {
    let tree = encode(&Value::Float(5.0));
    assert!(tree.is_f64());
    assert_eq!(tree.as_f64(), Some(5.0));
}

#[test]
fn encode_nested_containers() {
    let doc = decode_str(r#"{"a":{"b":[1,{"c":null}]},"d":[]}"#).unwrap();
    assert_eq!(encode(&doc), json!({"a": {"b": [1, {"c": null}]}, "d": []}));
}

#[test]
fn encode_keeps_null_entries() {
    let mut map = Map::new();
    map.insert("present".to_string(), Value::Null);
    let tree = encode(&Value::Object(map));
    assert_eq!(tree.get("present"), Some(&serde_json::Value::Null));
}

#[test]
fn encode_keeps_insertion_order() {
    let v: Value = [("z", Value::Integer(1)), ("a", Value::Integer(2)), ("m", Value::Integer(3))]
        .into_iter()
        .collect();
    assert_eq!(compact(&v), r#"{"z":1,"a":2,"m":3}"#);
}

// ============================================================================
// Bytes
// ============================================================================

#[test]
fn serialize_compact_output() {
    let doc = decode_str(r#"{ "name" : "Ada", "tags" : [ "x" , 1 , 2.5 , true , null ] }"#).unwrap();
    assert_eq!(compact(&doc), r#"{"name":"Ada","tags":["x",1,2.5,true,null]}"#);
}

#[test]
fn serialize_is_pretty_printed() {
    let doc = decode_str(r#"{"a":[1]}"#).unwrap();
    let pretty = String::from_utf8(doc.serialize()).unwrap();
    assert_eq!(pretty, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[test]
fn serialize_escapes_strings() {
    let v = Value::from("line1\n\"quoted\"\\");
    assert_eq!(compact(&v), r#""line1\n\"quoted\"\\""#);
}

#[test]
fn serialize_scalar_roots() {
    assert_eq!(compact(&Value::Null), "null");
    assert_eq!(compact(&Value::Boolean(false)), "false");
    assert_eq!(compact(&Value::Float(-0.0)), "-0.0");
}

#[test]
fn serde_json_to_string_uses_value_serialize() {
    let doc = decode_str(r#"{"k":[1,2]}"#).unwrap();
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"k":[1,2]}"#);
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn hand_built_non_finite_floats_still_serialize() {
    let v: Value = vec![
        Value::Float(f64::NAN),
        Value::Float(f64::INFINITY),
        Value::Float(f64::NEG_INFINITY),
    ]
    .into();
    assert_eq!(compact(&v), "[null,null,null]");
    assert_eq!(encode(&v), json!([null, null, null]));
}

#[test]
fn decoded_documents_always_serialize() {
    let inputs = [
        "null",
        "0",
        "-1.5e300",
        r#""""#,
        "[]",
        "{}",
        r#"{"deep":[[[[{"x":[null,{"y":"z"}]}]]]]}"#,
        "18446744073709551615",
    ];
    for input in inputs {
        let doc = decode_str(input).unwrap();
        let bytes = doc.serialize_compact();
        assert_eq!(decode_str(std::str::from_utf8(&bytes).unwrap()).unwrap(), doc, "input: {input}");
    }
}

#[test]
fn serde_serialize_callable_with_qualified_path() {
    use serde::Serialize;
    let v = Value::Array(vec![Value::Integer(1), Value::from("two")]);
    let mut out = Vec::new();
    Serialize::serialize(&v, &mut serde_json::Serializer::new(&mut out)).unwrap();
    assert_eq!(out, v.serialize_compact());
}
