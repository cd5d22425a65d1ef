// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schemas shared by the unit tests.

use crate::descriptor::{EnumDescriptor, FieldDescriptor, Kind, MessageDescriptor};

pub static PHONE_TYPE: EnumDescriptor = EnumDescriptor {
    full_name: "tutorial.PhoneType",
    values: &[("MOBILE", 0), ("HOME", 1), ("WORK", 2)],
};

pub static PHONE_NUMBER: MessageDescriptor = MessageDescriptor {
    full_name: "tutorial.PhoneNumber",
    fields: &[
        FieldDescriptor::new("number", 1, Kind::String),
        FieldDescriptor::new("type", 2, Kind::Enum(&PHONE_TYPE)),
    ],
};

pub static PERSON: MessageDescriptor = MessageDescriptor {
    full_name: "tutorial.Person",
    fields: &[
        FieldDescriptor::new("name", 1, Kind::String),
        FieldDescriptor::new("id", 2, Kind::Int32),
        FieldDescriptor::new("email", 3, Kind::String),
        FieldDescriptor::repeated("phones", 4, Kind::Message(phone_number)),
        FieldDescriptor::repeated("tags", 5, Kind::String),
        FieldDescriptor::new("score", 6, Kind::Double),
        FieldDescriptor::new("avatar", 7, Kind::Bytes),
        FieldDescriptor::new("last_seen", 8, Kind::Int64),
        FieldDescriptor::new("manager", 9, Kind::Message(person)),
        FieldDescriptor::new("active", 10, Kind::Bool),
    ],
};

pub fn phone_number() -> &'static MessageDescriptor {
    &PHONE_NUMBER
}

pub fn person() -> &'static MessageDescriptor {
    &PERSON
}
