//! The message union: every client/server message in the game protocol.
//!
//! On the wire a message is a 4-byte LE discriminant (see
//! [`MessageKind`]) followed by the active variant's payload fields in
//! declared order. Unit variants are the discriminant alone.
//!
//! # Invariants
//!
//! - **Closed set**: the discriminant↔variant mapping is fixed and total.
//!   Decoding rejects anything outside the known set with
//!   [`ProtocolError::UnknownVariant`](crate::ProtocolError::UnknownVariant);
//!   there is no fallback variant.
//!
//! - **Exhaustive dispatch**: `kind()`, `encode`, and `decode` all match
//!   exhaustively, so adding a variant without wiring it everywhere is a
//!   compile error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    decode::Decoder,
    encode::Encoder,
    errors::{ProtocolError, Result},
    kind::MessageKind,
    types::{Card, Player, PlayerName, PublicState, Trick},
    wire::{WireDecode, WireEncode},
};

/// A game protocol message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Ask `player` for their guess, carrying everything a client needs
    /// to render the prompt.
    RequestGuessContext {
        /// The player being asked
        player: Player,
        /// Their current hand
        hand: Vec<Card>,
        /// Guesses made so far, in seating order
        guesses: Vec<u64>,
        /// Number of players at the table
        players: u64,
    },
    /// Broadcast everyone's guesses.
    Guesses {
        /// Published state per player
        state: BTreeMap<PlayerName, PublicState>,
    },
    /// Announce whose turn it is.
    Turn {
        /// The player whose turn it is
        whose: Player,
    },
    /// Ask `player` for a card, carrying everything a client needs to
    /// render the prompt.
    PlayRequestContext {
        /// The player being asked
        player: Player,
        /// Their current hand
        hand: Vec<Card>,
        /// Cards on the table so far
        trick: Trick,
        /// Indices into `hand` that are legal plays, when restricted
        valid_cards: Option<Vec<u64>>,
    },
    /// Broadcast the cards played this round.
    Trick(
        /// The trick so far
        Trick,
    ),
    /// Broadcast the scoreboard.
    Scoreboard {
        /// Published state per player
        state: BTreeMap<PlayerName, PublicState>,
    },
    /// Announce the round winner.
    Winner(
        /// The winning player
        Player,
    ),
    /// Announce the game winners (ties possible).
    Winners {
        /// Final standings
        players: Vec<Player>,
        /// Indices into `players` of the winners
        winner_indices: Vec<u64>,
    },
    /// Ask a client for their player name.
    RequestPlayerName,
    /// Ask a player for a card.
    PlayRequest(
        /// The player being asked
        Player,
    ),
    /// Ask a player for their guess.
    RequestGuess,
    /// The game is over.
    GameOver,
}

impl Message {
    /// The discriminant for this message's variant.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::RequestGuessContext { .. } => MessageKind::RequestGuessContext,
            Self::Guesses { .. } => MessageKind::Guesses,
            Self::Turn { .. } => MessageKind::Turn,
            Self::PlayRequestContext { .. } => MessageKind::PlayRequestContext,
            Self::Trick(_) => MessageKind::Trick,
            Self::Scoreboard { .. } => MessageKind::Scoreboard,
            Self::Winner(_) => MessageKind::Winner,
            Self::Winners { .. } => MessageKind::Winners,
            Self::RequestPlayerName => MessageKind::RequestPlayerName,
            Self::PlayRequest(_) => MessageKind::PlayRequest,
            Self::RequestGuess => MessageKind::RequestGuess,
            Self::GameOver => MessageKind::GameOver,
        }
    }
}

impl WireEncode for Message {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| {
            enc.write_variant_index(self.kind().to_u32());
            match self {
                Self::RequestGuessContext { player, hand, guesses, players } => {
                    player.encode(enc)?;
                    hand.encode(enc)?;
                    guesses.encode(enc)?;
                    enc.write_u64(*players);
                    Ok(())
                }
                Self::Guesses { state } | Self::Scoreboard { state } => state.encode(enc),
                Self::Turn { whose } => whose.encode(enc),
                Self::PlayRequestContext { player, hand, trick, valid_cards } => {
                    player.encode(enc)?;
                    hand.encode(enc)?;
                    trick.encode(enc)?;
                    valid_cards.encode(enc)
                }
                Self::Trick(trick) => trick.encode(enc),
                Self::Winner(player) | Self::PlayRequest(player) => player.encode(enc),
                Self::Winners { players, winner_indices } => {
                    players.encode(enc)?;
                    winner_indices.encode(enc)
                }
                Self::RequestPlayerName | Self::RequestGuess | Self::GameOver => Ok(()),
            }
        })
    }
}

impl WireDecode for Message {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| {
            let index = dec.read_variant_index()?;
            let kind =
                MessageKind::from_u32(index).ok_or(ProtocolError::UnknownVariant(index))?;
            match kind {
                MessageKind::RequestGuessContext => {
                    let player = Player::decode(dec)?;
                    let hand = Vec::decode(dec)?;
                    let guesses = Vec::decode(dec)?;
                    let players = dec.read_u64()?;
                    Ok(Self::RequestGuessContext { player, hand, guesses, players })
                }
                MessageKind::Guesses => Ok(Self::Guesses { state: BTreeMap::decode(dec)? }),
                MessageKind::Turn => Ok(Self::Turn { whose: Player::decode(dec)? }),
                MessageKind::PlayRequestContext => {
                    let player = Player::decode(dec)?;
                    let hand = Vec::decode(dec)?;
                    let trick = Trick::decode(dec)?;
                    let valid_cards = Option::decode(dec)?;
                    Ok(Self::PlayRequestContext { player, hand, trick, valid_cards })
                }
                MessageKind::Trick => Ok(Self::Trick(Trick::decode(dec)?)),
                MessageKind::Scoreboard => {
                    Ok(Self::Scoreboard { state: BTreeMap::decode(dec)? })
                }
                MessageKind::Winner => Ok(Self::Winner(Player::decode(dec)?)),
                MessageKind::Winners => {
                    let players = Vec::decode(dec)?;
                    let winner_indices = Vec::decode(dec)?;
                    Ok(Self::Winners { players, winner_indices })
                }
                MessageKind::RequestPlayerName => Ok(Self::RequestPlayerName),
                MessageKind::PlayRequest => Ok(Self::PlayRequest(Player::decode(dec)?)),
                MessageKind::RequestGuess => Ok(Self::RequestGuess),
                MessageKind::GameOver => Ok(Self::GameOver),
            }
        })
    }
}
