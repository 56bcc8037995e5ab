//! Players and player names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    decode::Decoder,
    encode::Encoder,
    errors::Result,
    types::Card,
    wire::{WireDecode, WireEncode},
};

/// Opaque player identifier.
///
/// Wire form is the string codec (8-byte length prefix + UTF-8 bytes).
/// The derived `Ord` gives a total, deterministic in-memory ordering so
/// the name can serve as a map key; the *wire* ordering of map entries is
/// decided by encoded key bytes, which for length-prefixed strings is not
/// the same thing (length compares first).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerName(pub String);

impl PlayerName {
    /// View the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for PlayerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl WireEncode for PlayerName {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| self.0.encode(enc))
    }
}

impl WireDecode for PlayerName {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| Ok(Self(String::decode(dec)?)))
    }
}

/// A player: name, whether a human is driving, and their current hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player's name
    pub name: PlayerName,
    /// Whether this seat is played by a human
    pub human: bool,
    /// Cards currently held
    pub hand: Vec<Card>,
}

impl Player {
    /// Create a player.
    #[must_use]
    pub fn new(name: impl Into<PlayerName>, human: bool, hand: Vec<Card>) -> Self {
        Self { name: name.into(), human, hand }
    }
}

impl WireEncode for Player {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| {
            self.name.encode(enc)?;
            enc.write_bool(self.human);
            self.hand.encode(enc)
        })
    }
}

impl WireDecode for Player {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| {
            let name = PlayerName::decode(dec)?;
            let human = dec.read_bool()?;
            let hand = Vec::decode(dec)?;
            Ok(Self { name, human, hand })
        })
    }
}
