//! Variant discriminants for [`Message`](crate::Message).
//!
//! Every message carries a 4-byte Little Endian discriminant on the wire
//! identifying the active variant. The numeric values are frozen: they are
//! shared with every other implementation of this protocol, and reordering
//! them breaks wire compatibility.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Message variant discriminant.
///
/// # Representation
///
/// Discriminants are serialized as 4-byte Little Endian `u32` values. The
/// `#[repr(u32)]` pins the numeric values for wire compatibility.
///
/// # Security
///
/// - **Unknown Discriminants**: [`MessageKind::from_u32`] returns `None`
///   for values outside the closed 0–11 set. Decoders must reject such
///   buffers with
///   [`ProtocolError::UnknownVariant`](crate::ProtocolError::UnknownVariant);
///   there is no default or fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u32)]
pub enum MessageKind {
    /// Ask a player for their guess, with full context
    RequestGuessContext = 0,
    /// Broadcast everyone's guesses
    Guesses = 1,
    /// Announce whose turn it is
    Turn = 2,
    /// Ask a player for a card, with full context
    PlayRequestContext = 3,
    /// Broadcast the cards played this round
    Trick = 4,
    /// Broadcast the scoreboard
    Scoreboard = 5,
    /// Announce the round winner
    Winner = 6,
    /// Announce the game winners
    Winners = 7,
    /// Ask a client for their player name
    RequestPlayerName = 8,
    /// Ask a player for a card
    PlayRequest = 9,
    /// Ask a player for their guess
    RequestGuess = 10,
    /// The game is over
    GameOver = 11,
}

impl MessageKind {
    /// Every discriminant, in wire order.
    pub const ALL: [Self; 12] = [
        Self::RequestGuessContext,
        Self::Guesses,
        Self::Turn,
        Self::PlayRequestContext,
        Self::Trick,
        Self::Scoreboard,
        Self::Winner,
        Self::Winners,
        Self::RequestPlayerName,
        Self::PlayRequest,
        Self::RequestGuess,
        Self::GameOver,
    ];

    /// Convert to the raw wire value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Convert from a raw wire value.
    ///
    /// Total over all `u32` values; returns `None` for anything outside
    /// the known set so callers can reject it explicitly.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::RequestGuessContext),
            1 => Some(Self::Guesses),
            2 => Some(Self::Turn),
            3 => Some(Self::PlayRequestContext),
            4 => Some(Self::Trick),
            5 => Some(Self::Scoreboard),
            6 => Some(Self::Winner),
            7 => Some(Self::Winners),
            8 => Some(Self::RequestPlayerName),
            9 => Some(Self::PlayRequest),
            10 => Some(Self::RequestGuess),
            11 => Some(Self::GameOver),
            _ => None,
        }
    }
}
