// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_fixtures::{PERSON, PHONE_NUMBER};
use yare::parameterized;

fn ada() -> DynamicMessage {
    let mut phone = DynamicMessage::new(&PHONE_NUMBER);
    phone.set(1, "555");
    phone.set(2, Value::Enum(1));

    let mut person = DynamicMessage::new(&PERSON);
    person.set(1, "Ada");
    person.set(2, 7);
    person.push(4, phone);
    person.push(5, "x");
    person.push(5, "y");
    person
}

fn decode_person(input: &str) -> Result<DynamicMessage, ProtoError> {
    decode(input, &PERSON, &DecodeOptions::default())
}

#[test]
fn test_encode_compact() {
    assert_eq!(
        encode(&ada()),
        r#"name: "Ada" id: 7 phones: {number: "555" type: HOME} tags: "x" tags: "y""#
    );
}

#[test]
fn test_encode_empty_message() {
    assert_eq!(encode(&DynamicMessage::new(&PERSON)), "");
}

#[test]
fn test_to_string_pretty() {
    assert_eq!(
        to_string_pretty(&ada()).unwrap(),
        "name: \"Ada\"\n\
         id: 7\n\
         phones {\n  number: \"555\"\n  type: HOME\n}\n\
         tags: \"x\"\n\
         tags: \"y\"\n"
    );
}

#[test]
fn test_decode_inverts_pretty_output() {
    let pretty = to_string_pretty(&ada()).unwrap();
    assert_eq!(decode_person(&pretty).unwrap(), ada());
}

#[test]
fn test_decode_nested_recursive_message() {
    let message = decode_person(r#"name: "Ada" manager { name: "Bob" manager { id: 1 } }"#).unwrap();
    let manager = message.get(9).and_then(Value::as_message).unwrap();
    assert_eq!(manager.get(1).and_then(Value::as_str), Some("Bob"));
    let top = manager.get(9).and_then(Value::as_message).unwrap();
    assert_eq!(top.get(2).and_then(Value::as_i32), Some(1));
}

#[test]
fn test_decode_list_syntax_for_repeated_field() {
    let message = decode_person(r#"tags: ["a", "b"] tags: "c""#).unwrap();
    let tags = message.get(5).and_then(Value::as_list).unwrap();
    assert_eq!(tags.len(), 3);
}

#[test]
fn test_decode_unknown_field() {
    let err = decode_person("nickname: \"ace\"").unwrap_err();
    assert!(matches!(err, ProtoError::UnknownField { .. }));
    assert_eq!(
        err.to_string(),
        "unknown field \"nickname\" in message tutorial.Person"
    );

    let options = DecodeOptions {
        discard_unknown: true,
    };
    let message = decode("nickname: \"ace\" id: 3", &PERSON, &options).unwrap();
    assert_eq!(message.get(2), Some(&Value::I32(3)));
}

#[test]
fn test_decode_duplicate_singular_field() {
    let err = decode_person("id: 1 id: 2").unwrap_err();
    assert!(matches!(err, ProtoError::DuplicateField { ref field } if field == "id"));
}

#[test]
fn test_decode_list_on_singular_field() {
    let err = decode_person("id: [1, 2]").unwrap_err();
    assert!(matches!(err, ProtoError::InvalidValue { .. }));
}

#[parameterized(
    lower = { "true", true },
    title = { "True", true },
    short = { "t", true },
    one = { "1", true },
    lower_false = { "false", false },
    title_false = { "False", false },
    short_false = { "f", false },
    zero = { "0", false },
)]
fn test_decode_bool_spellings(text: &str, expected: bool) {
    let message = decode_person(&format!("active: {text}")).unwrap();
    assert_eq!(message.has(10), expected);
}

#[parameterized(
    decimal = { "id: 42", 42 },
    hex = { "id: 0x2A", 42 },
    negative = { "id: -7", -7 },
)]
fn test_decode_integers(text: &str, expected: i32) {
    let message = decode_person(text).unwrap();
    assert_eq!(message.get(2).and_then(Value::as_i32), Some(expected));
}

#[test]
fn test_decode_integer_out_of_range() {
    assert!(decode_person("id: 3000000000").is_err());
    assert!(decode_person("id: 1.5").is_err());
    assert!(decode_person("last_seen: 3000000000").is_ok());
}

#[test]
fn test_decode_floats() {
    let message = decode_person("score: 2.5").unwrap();
    assert_eq!(message.get(6).and_then(Value::as_f64), Some(2.5));

    let message = decode_person("score: -inf").unwrap();
    assert_eq!(
        message.get(6).and_then(Value::as_f64),
        Some(f64::NEG_INFINITY)
    );

    let message = decode_person("score: nan").unwrap();
    assert!(message.get(6).and_then(Value::as_f64).unwrap().is_nan());
}

#[test]
fn test_encode_non_finite_floats() {
    let mut person = DynamicMessage::new(&PERSON);
    person.set(6, f64::INFINITY);
    assert_eq!(encode(&person), "score: inf");
    person.set(6, f64::NAN);
    assert_eq!(encode(&person), "score: nan");
}

#[test]
fn test_decode_enum_by_name_and_number() {
    let message = decode("type: WORK", &PHONE_NUMBER, &DecodeOptions::default()).unwrap();
    assert_eq!(message.get(2), Some(&Value::Enum(2)));

    let message = decode("type: 1", &PHONE_NUMBER, &DecodeOptions::default()).unwrap();
    assert_eq!(message.get(2), Some(&Value::Enum(1)));

    assert!(decode("type: FAX", &PHONE_NUMBER, &DecodeOptions::default()).is_err());
}

#[test]
fn test_decode_strings_and_bytes() {
    let message = decode_person(r#"avatar: "\377\000""#).unwrap();
    assert_eq!(
        message.get(7).and_then(Value::as_bytes),
        Some(&[0xff, 0x00][..])
    );

    let err = decode_person(r#"name: "\377""#).unwrap_err();
    assert!(matches!(err, ProtoError::InvalidUtf8 { .. }));
}

#[test]
fn test_decode_type_mismatch() {
    let err = decode_person("name: 5").unwrap_err();
    assert_eq!(err.to_string(), "field name expects string, found number 5");
    assert!(decode_person("manager: 5").is_err());
    assert!(decode_person("id { }").is_err());
}
