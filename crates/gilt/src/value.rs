// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value normalization.
//!
//! Callers hand a value to an assertion as an [`Operand`]: absent, owned,
//! borrowed, or a reference to another operand. [`normalize`] collapses that
//! into exactly one handle to a concrete value so codecs and comparers never
//! deal with reference depth.

use crate::error::{Error, Result};
use crate::subject::{Form, Subject};
use std::any::TypeId;
use std::fmt;
use std::ops::Deref;

/// A value as submitted to an assertion.
#[derive(Debug)]
pub enum Operand<'a, T> {
    Absent,
    Owned(T),
    Borrowed(&'a T),
    Nested(&'a Operand<'a, T>),
}

impl<'a, T> From<&'a T> for Operand<'a, T> {
    fn from(value: &'a T) -> Self {
        Operand::Borrowed(value)
    }
}

impl<'a, T> From<Option<&'a T>> for Operand<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Operand::Borrowed(v),
            None => Operand::Absent,
        }
    }
}

/// The single reference a normalized operand resolves to.
#[derive(Debug)]
pub enum Handle<'a, T> {
    /// A bare value moved into fresh storage.
    Boxed(Box<T>),
    Borrowed(&'a T),
}

impl<T> Deref for Handle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Handle::Boxed(v) => v,
            Handle::Borrowed(v) => v,
        }
    }
}

/// Runtime descriptor of a value's type.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    pub name: &'static str,
    pub id: TypeId,
}

impl ValueType {
    pub fn of<T: 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Result of [`normalize`]. Both parts are absent together.
#[derive(Debug)]
pub struct Normalized<'a, T> {
    value: Option<Handle<'a, T>>,
    value_type: Option<ValueType>,
}

impl<'a, T> Normalized<'a, T> {
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_deref()
    }

    pub fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    pub fn into_parts(self) -> (Option<Handle<'a, T>>, Option<ValueType>) {
        (self.value, self.value_type)
    }
}

/// Collapse an operand to one handle plus its type.
pub fn normalize<T: 'static>(operand: Operand<'_, T>) -> Normalized<'_, T> {
    let value = match operand {
        Operand::Absent => None,
        Operand::Owned(v) => Some(Handle::Boxed(Box::new(v))),
        Operand::Borrowed(r) => Some(Handle::Borrowed(r)),
        Operand::Nested(mut current) => loop {
            match current {
                Operand::Nested(inner) => current = *inner,
                Operand::Borrowed(r) => break Some(Handle::Borrowed(*r)),
                Operand::Owned(v) => break Some(Handle::Borrowed(v)),
                Operand::Absent => break None,
            }
        },
    };
    let value_type = value.as_ref().map(|_| ValueType::of::<T>());
    Normalized { value, value_type }
}

/// Reject operands no assertion can work with.
///
/// An absent value, including one at the end of a reference chain, is
/// invalid. So is a bare structured message: messages are decoded in place
/// and must be passed by reference.
pub fn validate<T: Subject>(operand: &Operand<'_, T>) -> Result<()> {
    if let Operand::Owned(v) = operand {
        if matches!(v.form(), Form::Message(_)) {
            return Err(Error::InvalidValue(format!(
                "structured messages must be passed by reference, got {}",
                std::any::type_name::<T>()
            )));
        }
    }

    let mut current = operand;
    loop {
        match current {
            Operand::Absent => {
                return Err(Error::InvalidValue("value must not be absent".to_string()))
            }
            Operand::Nested(inner) => current = *inner,
            Operand::Owned(_) | Operand::Borrowed(_) => return Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
