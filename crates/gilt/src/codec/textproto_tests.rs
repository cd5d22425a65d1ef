// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::codec::unmarshal;
use crate::compare::{Cmp, Comparer};
use crate::test_support::{Address, Journal, Person};
use gilt_proto::wrappers::{
    BytesValue, DoubleValue, FloatValue, Int64Value, StringValue, UInt64Value,
};
use proptest::prelude::*;

const ADA: &str = r#"name: "Ada Lovelace"
id: 1815
address {
  street: "12 St James's Square"
  city: "London"
}
tags: "math"
tags: "engines"
"#;

#[test]
fn test_marshal_message() {
    let bytes = TextProtoCodec::new().marshal(&Person::ada()).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), ADA);
}

#[test]
fn test_unmarshal_message() {
    let person: Person = unmarshal(&TextProtoCodec::new(), ADA.as_bytes()).unwrap();
    assert_eq!(person, Person::ada());
}

#[test]
fn test_unmarshal_accepts_alternate_syntax() {
    let input = "name: 'Ada' address: < city: \"Paris\" > tags: [\"a\", \"b\"]";
    let person: Person = unmarshal(&TextProtoCodec::new(), input.as_bytes()).unwrap();
    assert_eq!(person.name, "Ada");
    assert_eq!(person.address.unwrap().city, "Paris");
    assert_eq!(person.tags, vec!["a", "b"]);
}

#[test]
fn test_multiline_string_is_split() {
    let bytes = TextProtoCodec::new()
        .marshal(&StringValue::new("hello\nworld\n"))
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "value:\n  \"hello\\n\"\n  \"world\\n\"\n"
    );
}

#[test]
fn test_empty_message() {
    let codec = TextProtoCodec::new();
    assert!(codec.marshal(&Person::default()).unwrap().is_empty());
    let person: Person = unmarshal(&codec, b"").unwrap();
    assert_eq!(person, Person::default());
}

#[test]
fn test_unknown_fields() {
    let input = b"name: \"Ada\" nickname: \"Countess\"";
    let err = unmarshal::<_, Person>(&TextProtoCodec::new(), input).unwrap_err();
    assert!(matches!(err, Error::Proto(_)));

    let codec = TextProtoCodec {
        unmarshal_options: DecodeOptions {
            discard_unknown: true,
        },
        ..TextProtoCodec::new()
    };
    let person: Person = unmarshal(&codec, input).unwrap();
    assert_eq!(person.name, "Ada");
}

#[test]
fn test_rejects_plain_values() {
    let codec = TextProtoCodec::new();
    assert!(matches!(
        codec.marshal(&"text".to_string()),
        Err(Error::InvalidValue(_))
    ));
    assert!(matches!(
        unmarshal::<_, String>(&codec, b"value: \"x\""),
        Err(Error::InvalidValue(_))
    ));
}

#[test]
fn test_unmarshal_replaces_message_contents() {
    let mut journal = Journal {
        entries: vec!["stale".to_string()],
    };
    TextProtoCodec::new()
        .unmarshal_into(b"entries: \"fresh\"", &mut journal)
        .unwrap();
    assert_eq!(journal.entries, vec!["fresh"]);
}

#[test]
fn test_failed_unmarshal_keeps_message() {
    let mut journal = Journal {
        entries: vec!["kept".to_string()],
    };
    assert!(TextProtoCodec::new()
        .unmarshal_into(b"entries: 1", &mut journal)
        .is_err());
    assert_eq!(journal.entries, vec!["kept"]);
}

#[test]
fn test_extreme_doubles_round_trip() {
    let codec = TextProtoCodec::new();
    for value in [-2.422302625753309e143, f64::MAX, f64::MIN_POSITIVE, 5e-324] {
        let value = DoubleValue::new(value);
        let restored: DoubleValue = unmarshal(&codec, &codec.marshal(&value).unwrap()).unwrap();
        assert_eq!(restored, value);
    }
}

fn arb_person() -> impl Strategy<Value = Person> {
    (
        any::<String>(),
        any::<i32>(),
        any::<String>(),
        proptest::option::of((any::<String>(), any::<String>())),
        proptest::collection::vec(any::<String>(), 0..4),
    )
        .prop_map(|(name, id, email, address, tags)| Person {
            name,
            id,
            email,
            address: address.map(|(street, city)| Address { street, city }),
            tags,
        })
}

fn round_trip<T: Subject>(value: &T) -> std::result::Result<(), TestCaseError> {
    let codec = TextProtoCodec::new();
    let bytes = codec.marshal(value).unwrap();
    let restored: T = unmarshal(&codec, &bytes).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    prop_assert!(Cmp::new().equal(value, &restored).is_ok(), "{}", text);
    Ok(())
}

proptest! {
    #[test]
    fn wrapper_messages_round_trip(
        text in any::<String>(),
        bytes in any::<Vec<u8>>(),
        signed in any::<i64>(),
        unsigned in any::<u64>(),
        double in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        float in any::<f32>().prop_filter("finite", |v| v.is_finite()),
    ) {
        round_trip(&StringValue::new(text))?;
        round_trip(&BytesValue::new(bytes))?;
        round_trip(&Int64Value::new(signed))?;
        round_trip(&UInt64Value::new(unsigned))?;
        round_trip(&DoubleValue::new(double))?;
        round_trip(&FloatValue::new(float))?;
    }

    #[test]
    fn person_round_trips(person in arb_person()) {
        round_trip(&person)?;
    }

    #[test]
    fn output_ends_with_one_newline(person in arb_person()) {
        let out = TextProtoCodec::new().marshal(&person).unwrap();
        if !out.is_empty() {
            prop_assert!(out.ends_with(b"\n"));
            prop_assert!(!out.ends_with(b"\n\n"));
        }
    }
}
