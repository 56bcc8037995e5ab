//! Published per-player game state and its text rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    decode::Decoder,
    encode::Encoder,
    errors::Result,
    types::PlayerName,
    wire::{WireDecode, WireEncode},
};

const PLUMPED_FACE: &str = "\u{1F643}";
const MADE_IT_FACE: &str = "\u{1F642}";

/// A player's published state: their guess (once made), tricks won this
/// round, and running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Tricks the player guessed they will win, absent until guessed
    pub guess: Option<u64>,
    /// Tricks won in the current round
    pub wins: u64,
    /// Total score
    pub score: u64,
}

impl WireEncode for PublicState {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| {
            self.guess.encode(enc)?;
            enc.write_u64(self.wins);
            enc.write_u64(self.score);
            Ok(())
        })
    }
}

impl WireDecode for PublicState {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| {
            let guess = Option::decode(dec)?;
            let wins = dec.read_u64()?;
            let score = dec.read_u64()?;
            Ok(Self { guess, wins, score })
        })
    }
}

/// Render everyone's guesses, e.g. `Guesses: ann: 2, bo: -`.
///
/// A player who has not guessed yet renders as `-`.
#[must_use]
pub fn format_guesses(state: &BTreeMap<PlayerName, PublicState>) -> String {
    let guesses = state
        .iter()
        .map(|(name, state)| match state.guess {
            Some(guess) => format!("{name}: {guess}"),
            None => format!("{name}: -"),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Guesses: {guesses}")
}

/// Render the scoreboard, one entry per player in name order.
///
/// Each entry shows `wins/guess`, a face marking whether the player
/// plumped (missed their guess), and the running total, e.g.
/// `ann: 2/2 🙂 (total: 12), bo: 0/1 🙃 (total: 3)`.
#[must_use]
pub fn format_scoreboard(state: &BTreeMap<PlayerName, PublicState>) -> String {
    state
        .iter()
        .map(|(name, state)| {
            let guess = match state.guess {
                Some(guess) => guess.to_string(),
                None => "-".to_owned(),
            };
            let plumped = state.guess != Some(state.wins);
            let face = if plumped { PLUMPED_FACE } else { MADE_IT_FACE };
            format!("{name}: {}/{guess} {face} (total: {})", state.wins, state.score)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
