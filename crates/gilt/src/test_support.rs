// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture types shared by the unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::error::{Error, Result};
use crate::subject::{TextMarshal, TextUnmarshal};
use gilt_proto::{
    DynamicMessage, FieldDescriptor, Kind, Message, MessageDescriptor, ProtoError, Value,
};
use serde::{Deserialize, Serialize};

static ADDRESS: MessageDescriptor = MessageDescriptor {
    full_name: "example.Address",
    fields: &[
        FieldDescriptor::new("street", 1, Kind::String),
        FieldDescriptor::new("city", 2, Kind::String),
    ],
};

static PERSON: MessageDescriptor = MessageDescriptor {
    full_name: "example.Person",
    fields: &[
        FieldDescriptor::new("name", 1, Kind::String),
        FieldDescriptor::new("id", 2, Kind::Int32),
        FieldDescriptor::new("email", 3, Kind::String),
        FieldDescriptor::new("address", 4, Kind::Message(address_descriptor)),
        FieldDescriptor::repeated("tags", 5, Kind::String),
    ],
};

static JOURNAL: MessageDescriptor = MessageDescriptor {
    full_name: "example.Journal",
    fields: &[FieldDescriptor::repeated("entries", 1, Kind::String)],
};

fn address_descriptor() -> &'static MessageDescriptor {
    &ADDRESS
}

fn check_descriptor(
    expected: &'static MessageDescriptor,
    message: &DynamicMessage,
) -> std::result::Result<(), ProtoError> {
    if message.descriptor() == expected {
        return Ok(());
    }
    Err(ProtoError::InvalidValue {
        field: expected.full_name.to_string(),
        expected: "a message of the same type",
        found: message.descriptor().full_name.to_string(),
    })
}

fn string_field(message: &DynamicMessage, number: u32) -> String {
    message
        .get(number)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

impl Message for Address {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &ADDRESS
    }

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&ADDRESS);
        message.set(1, self.street.as_str());
        message.set(2, self.city.as_str());
        message
    }

    fn merge_dynamic(&mut self, message: &DynamicMessage) -> std::result::Result<(), ProtoError> {
        check_descriptor(&ADDRESS, message)?;
        self.street = string_field(message, 1);
        self.city = string_field(message, 2);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub id: i32,
    pub email: String,
    pub address: Option<Address>,
    pub tags: Vec<String>,
}

impl Person {
    pub fn ada() -> Self {
        Person {
            name: "Ada Lovelace".to_string(),
            id: 1815,
            email: String::new(),
            address: Some(Address {
                street: "12 St James's Square".to_string(),
                city: "London".to_string(),
            }),
            tags: vec!["math".to_string(), "engines".to_string()],
        }
    }
}

impl Message for Person {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &PERSON
    }

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&PERSON);
        message.set(1, self.name.as_str());
        message.set(2, self.id);
        message.set(3, self.email.as_str());
        if let Some(address) = &self.address {
            message.set(4, address.to_dynamic());
        }
        for tag in &self.tags {
            message.push(5, tag.as_str());
        }
        message
    }

    fn merge_dynamic(&mut self, message: &DynamicMessage) -> std::result::Result<(), ProtoError> {
        check_descriptor(&PERSON, message)?;
        self.name = string_field(message, 1);
        self.id = message.get(2).and_then(Value::as_i32).unwrap_or_default();
        self.email = string_field(message, 3);
        self.address = match message.get(4).and_then(Value::as_message) {
            Some(inner) => {
                let mut address = Address::default();
                address.merge_dynamic(inner)?;
                Some(address)
            }
            None => None,
        };
        self.tags = message
            .get(5)
            .and_then(Value::as_list)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        Ok(())
    }
}

/// Merges the way generated message code does: repeated fields append.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub entries: Vec<String>,
}

impl Message for Journal {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &JOURNAL
    }

    fn to_dynamic(&self) -> DynamicMessage {
        let mut message = DynamicMessage::new(&JOURNAL);
        for entry in &self.entries {
            message.push(1, entry.as_str());
        }
        message
    }

    fn merge_dynamic(&mut self, message: &DynamicMessage) -> std::result::Result<(), ProtoError> {
        check_descriptor(&JOURNAL, message)?;
        let entries = message.get(1).and_then(Value::as_list).unwrap_or_default();
        self.entries
            .extend(entries.iter().filter_map(Value::as_str).map(str::to_string));
        Ok(())
    }
}

crate::message_subject!(Address, Person, Journal);

/// A `major.minor` version with its own text encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl TextMarshal for Version {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(format!("{}.{}", self.major, self.minor).into_bytes())
    }
}

impl TextUnmarshal for Version {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(text)?;
        let (major, minor) = text
            .trim()
            .split_once('.')
            .ok_or_else(|| Error::codec(format!("not a version: {text:?}")))?;
        self.major = major.parse().map_err(Error::codec)?;
        self.minor = minor.parse().map_err(Error::codec)?;
        Ok(())
    }
}

crate::text_subject!(Version);

/// Serializes fine but always decodes to the default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lossy {
    pub value: u32,
}

impl<'de> Deserialize<'de> for Lossy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Lossy::default())
    }
}

impl crate::Subject for Lossy {}
