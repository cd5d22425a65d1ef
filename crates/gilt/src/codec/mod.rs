// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden file encodings.
//!
//! Codecs only take references, so a value always has a stable destination
//! when it is decoded in place. Round-trip stability is checked by the
//! assertion engine, not here.

mod json;
mod text;
mod textproto;

pub use json::JsonCodec;
pub use text::TextCodec;
pub use textproto::TextProtoCodec;

use crate::error::Result;
use crate::subject::{FormMut, Subject};

/// Marshals values to bytes and back.
pub trait Codec {
    fn marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode `data` into `dest`, replacing its contents.
    ///
    /// `dest` keeps its previous value when decoding fails.
    fn unmarshal_into<T: Subject>(&self, data: &[u8], dest: &mut T) -> Result<()>;
}

impl<C: Codec> Codec for &C {
    fn marshal<T: Subject>(&self, value: &T) -> Result<Vec<u8>> {
        (**self).marshal(value)
    }

    fn unmarshal_into<T: Subject>(&self, data: &[u8], dest: &mut T) -> Result<()> {
        (**self).unmarshal_into(data, dest)
    }
}

/// Run `decode` against a fresh `T`, then move the result into `dest`.
///
/// Message merges and user text decoders only add to what is already there,
/// so they never see the old contents of `dest`.
fn decode_fresh<T: Subject>(
    dest: &mut T,
    decode: impl FnOnce(FormMut<'_>) -> Result<()>,
) -> Result<()> {
    let mut fresh = T::default();
    decode(fresh.form_mut())?;
    *dest = fresh;
    Ok(())
}

/// Decode `data` into a freshly allocated `T`.
pub fn unmarshal<C: Codec, T: Subject>(codec: &C, data: &[u8]) -> Result<T> {
    let mut dest = T::default();
    codec.unmarshal_into(data, &mut dest)?;
    Ok(dest)
}
