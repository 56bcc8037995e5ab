//! # Plump Protocol: Wire Format
//!
//! This crate implements the binary wire format for plump game messages:
//! the client/server traffic of a turn-based trick-taking card game
//! (guess phase, play phase, trick resolution, scoreboard, winners,
//! game over).
//!
//! ## Protocol Design
//!
//! The encoding is a fixed-layout binary format with no self-description
//! overhead:
//!
//! - **Fixed-width integers**: `u64` values are 8 bytes Little Endian, no
//!   varint. Lengths are 8-byte LE prefixes; variant discriminants are
//!   4-byte LE.
//! - **Untagged structs**: fields are encoded in declared order with no
//!   per-field tags. A given value has exactly one encoding.
//! - **Canonical maps**: map entries appear on the wire in ascending order
//!   of their *encoded key bytes*. The decoder rejects any other order, so
//!   every map value also has exactly one valid encoding. This keeps
//!   encodings stable for hashing and byte-exact test fixtures.
//!
//! ## Security Properties
//!
//! The decoder is safe to run on untrusted input:
//!
//! - **Bounded reads**: every read is checked against the remaining buffer;
//!   a truncated buffer yields [`ProtocolError::BufferUnderrun`], never an
//!   over-read.
//! - **Bounded allocation**: declared lengths are validated against the
//!   remaining input before any allocation proportional to them.
//! - **Bounded recursion**: nested containers are counted against
//!   [`MAX_CONTAINER_DEPTH`]; exceeding it yields
//!   [`ProtocolError::DepthExceeded`] instead of a stack overflow.
//! - **Exact consumption**: [`from_bytes`] decodes exactly one value and
//!   rejects unconsumed trailing bytes.
//!
//! A failed decode yields no partial value and is never retried here;
//! retry policy belongs to the transport.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod encode;
pub mod errors;
pub mod kind;
pub mod message;
pub mod types;
pub mod wire;

pub use decode::Decoder;
pub use encode::Encoder;
pub use errors::{ProtocolError, Result};
pub use kind::MessageKind;
pub use message::Message;
pub use types::{Card, Player, PlayerName, PublicState, Trick};
pub use wire::{WireDecode, WireEncode, from_bytes, to_bytes};

/// Maximum nesting depth of containers (structs and variants) within a
/// single encode or decode call tree.
///
/// The schema's own nesting is shallow, but the guard keeps an
/// attacker-controlled buffer from driving recursion past the call stack
/// if the format is ever embedded in a deeper structure.
pub const MAX_CONTAINER_DEPTH: usize = 100;
