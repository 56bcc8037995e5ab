//! Wire codec traits, container combinators, and whole-buffer entry
//! points.
//!
//! [`WireEncode`] and [`WireDecode`] are the seams every type in the
//! protocol plugs into. This module provides the implementations for the
//! primitive types and the three container shapes (`Option<T>`, `Vec<T>`,
//! `BTreeMap<K, V>`); structs and the message union implement the traits
//! in their own modules.
//!
//! # Canonical map encoding
//!
//! Map entries are emitted in ascending byte-lexicographic order of their
//! *encoded key bytes* — not insertion order, and not the keys' natural
//! ordering. Each `(key, value)` pair is encoded into a scratch buffer,
//! the pairs are sorted by their key bytes, and the sorted pairs are
//! appended to the output. With length-prefixed keys this differs from
//! natural ordering: the length bytes compare first, so a shorter key
//! always precedes a longer one.
//!
//! The decoder enforces the same order and rejects anything else, so a
//! map value has exactly one byte representation on the wire.

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::{
    decode::{Decoder, KeySpan},
    encode::Encoder,
    errors::{ProtocolError, Result},
};

/// Types that can be written to the wire format.
pub trait WireEncode {
    /// Append this value's encoding to the encoder's buffer.
    ///
    /// # Errors
    ///
    /// Encoding well-formed in-memory values does not fail; the only
    /// failure mode is [`ProtocolError::DepthExceeded`] when a value
    /// nests containers past the encoder's limit.
    fn encode(&self, enc: &mut Encoder) -> Result<()>;
}

/// Types that can be read back from the wire format.
pub trait WireDecode: Sized {
    /// Decode one value, advancing the decoder's cursor past it.
    ///
    /// # Errors
    ///
    /// Any [`ProtocolError`] surfaced by the reads this decode performs.
    /// A failed decode aborts immediately and yields no partial value.
    fn decode(dec: &mut Decoder<'_>) -> Result<Self>;
}

/// Serialize a value into a standalone wire buffer.
///
/// # Errors
///
/// Only [`ProtocolError::DepthExceeded`], and only for values nested
/// deeper than the encoder's limit; well-formed protocol values always
/// succeed.
pub fn to_bytes<T: WireEncode + ?Sized>(value: &T) -> Result<Bytes> {
    let mut enc = Encoder::new();
    value.encode(&mut enc)?;
    let bytes = enc.into_bytes();
    tracing::trace!(len = bytes.len(), "encoded wire buffer");
    Ok(bytes)
}

/// Deserialize exactly one value from a wire buffer.
///
/// # Errors
///
/// - [`ProtocolError::NullInput`] if `input` is empty.
/// - [`ProtocolError::TrailingBytes`] if any input remains after one
///   complete value. The format never permits padding or concatenated
///   values in a single buffer.
/// - Any error surfaced while decoding the value itself.
pub fn from_bytes<T: WireDecode>(input: &[u8]) -> Result<T> {
    if input.is_empty() {
        return Err(ProtocolError::NullInput);
    }
    tracing::trace!(len = input.len(), "decoding wire buffer");
    let mut dec = Decoder::new(input);
    let value = T::decode(&mut dec)?;
    if dec.remaining() > 0 {
        return Err(ProtocolError::TrailingBytes { count: dec.remaining() });
    }
    Ok(value)
}

impl WireEncode for bool {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.write_bool(*self);
        Ok(())
    }
}

impl WireDecode for bool {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.read_bool()
    }
}

impl WireEncode for u64 {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.write_u64(*self);
        Ok(())
    }
}

impl WireDecode for u64 {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.read_u64()
    }
}

impl WireEncode for String {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.write_str(self);
        Ok(())
    }
}

impl WireDecode for String {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.read_str()
    }
}

/// One presence tag byte, then the value iff present.
impl<T: WireEncode> WireEncode for Option<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        match self {
            Some(value) => {
                enc.write_option_tag(true);
                value.encode(enc)
            }
            None => {
                enc.write_option_tag(false);
                Ok(())
            }
        }
    }
}

impl<T: WireDecode> WireDecode for Option<T> {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        if dec.read_option_tag()? {
            Ok(Some(T::decode(dec)?))
        } else {
            Ok(None)
        }
    }
}

/// Length prefix, then the elements back to back in encounter order.
impl<T: WireEncode> WireEncode for Vec<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.write_len(self.len());
        for item in self {
            item.encode(enc)?;
        }
        Ok(())
    }
}

impl<T: WireDecode> WireDecode for Vec<T> {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let len = dec.read_len()?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::decode(dec)?);
        }
        Ok(items)
    }
}

/// Length prefix, then `(key, value)` pairs in ascending encoded-key
/// byte order.
impl<K: WireEncode, V: WireEncode> WireEncode for BTreeMap<K, V> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.write_len(self.len());
        let mut pairs = Vec::with_capacity(self.len());
        for (key, value) in self {
            let mut pair = enc.scratch();
            key.encode(&mut pair)?;
            let key_len = pair.offset();
            value.encode(&mut pair)?;
            pairs.push((pair.into_vec(), key_len));
        }
        pairs.sort_by(|(a, a_key), (b, b_key)| a[..*a_key].cmp(&b[..*b_key]));
        for (pair, _) in &pairs {
            enc.write_raw(pair);
        }
        Ok(())
    }
}

impl<K: WireDecode + Ord, V: WireDecode> WireDecode for BTreeMap<K, V> {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        let len = dec.read_len()?;
        let mut map = BTreeMap::new();
        let mut previous: Option<KeySpan> = None;
        for _ in 0..len {
            let start = dec.position();
            let key = K::decode(dec)?;
            let span = KeySpan { start, end: dec.position() };
            if let Some(previous) = previous {
                dec.check_keys_increasing(previous, span)?;
            }
            previous = Some(span);
            let value = V::decode(dec)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
