//! Error types for the plump wire protocol.
//!
//! All errors are decode-time failures: encoding a well-formed in-memory
//! value does not fail (the depth guard is the one theoretical exception,
//! shared by both directions). Every variant is structured and comparable
//! so tests can assert on exact failures.

use thiserror::Error;

/// Errors produced while encoding or decoding wire buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Deserialization was invoked on an empty buffer
    #[error("no input: cannot deserialize an empty buffer")]
    NullInput,

    /// A read would run past the end of the buffer
    #[error("buffer underrun: needed {needed} more bytes, {remaining} available")]
    BufferUnderrun {
        /// Bytes the current read required
        needed: usize,
        /// Bytes actually remaining in the buffer
        remaining: usize,
    },

    /// A value outside its type's valid byte patterns (bad boolean byte,
    /// bad option tag, invalid UTF-8, unrepresentable length)
    #[error("malformed value: {0}")]
    MalformedValue(String),

    /// Variant discriminant outside the closed set of known variants
    #[error("unknown variant index: {0}")]
    UnknownVariant(u32),

    /// Map keys not in strictly ascending encoded-byte order (covers
    /// duplicate keys, whose encodings compare equal)
    #[error("map entries are not in canonical order")]
    NonCanonicalEncoding,

    /// Container nesting exceeded the configured maximum
    #[error("container depth exceeded maximum of {max}")]
    DepthExceeded {
        /// The depth limit that was hit
        max: usize,
    },

    /// Input contained unconsumed bytes after one complete value
    #[error("{count} trailing bytes after a complete value")]
    TrailingBytes {
        /// Number of unconsumed bytes
        count: usize,
    },
}

/// Convenient Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;
