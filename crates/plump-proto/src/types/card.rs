//! Cards and tricks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    decode::Decoder,
    encode::Encoder,
    errors::Result,
    wire::{WireDecode, WireEncode},
};

const SUIT_SYMBOLS: [&str; 4] = ["♥", "♣", "♦", "♠"];
const VALUE_SYMBOLS: [&str; 13] =
    ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];

/// A playing card: suit index and value index.
///
/// `suit` indexes hearts/clubs/diamonds/spades; `value` indexes `2`
/// through ace. The codec carries both as full `u64` fields and imposes
/// no range invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Suit index
    pub suit: u64,
    /// Value index, `0` = two .. `12` = ace
    pub value: u64,
}

impl WireEncode for Card {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| {
            enc.write_u64(self.suit);
            enc.write_u64(self.value);
            Ok(())
        })
    }
}

impl WireDecode for Card {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| {
            let suit = dec.read_u64()?;
            let value = dec.read_u64()?;
            Ok(Self { suit, value })
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = usize::try_from(self.suit).ok().and_then(|i| SUIT_SYMBOLS.get(i));
        let value = usize::try_from(self.value).ok().and_then(|i| VALUE_SYMBOLS.get(i));
        match (suit, value) {
            (Some(suit), Some(value)) => write!(f, "{suit}{value}"),
            // Out-of-range indices render numerically rather than panic.
            _ => write!(f, "{}/{}", self.suit, self.value),
        }
    }
}

/// The cards played in the current round, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick(pub Vec<Card>);

impl Trick {
    /// An empty trick.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }
}

impl Default for Trick {
    fn default() -> Self {
        Self::new()
    }
}

impl WireEncode for Trick {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.in_container(|enc| self.0.encode(enc))
    }
}

impl WireDecode for Trick {
    fn decode(dec: &mut Decoder<'_>) -> Result<Self> {
        dec.in_container(|dec| Ok(Self(Vec::decode(dec)?)))
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hand(&self.0))
    }
}

/// Render a hand as space-separated card symbols.
#[must_use]
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::wire::{from_bytes, to_bytes};

    impl Arbitrary for Card {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<u64>(), any::<u64>())
                .prop_map(|(suit, value)| Card { suit, value })
                .boxed()
        }
    }

    impl Arbitrary for Trick {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::collection::vec(any::<Card>(), 0..8).prop_map(Trick).boxed()
        }
    }

    #[test]
    fn card_wire_layout_is_two_u64s() {
        let bytes = to_bytes(&Card { suit: 0, value: 12 }).unwrap();
        assert_eq!(
            &bytes[..],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0x0C, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(from_bytes::<Card>(&bytes), Ok(Card { suit: 0, value: 12 }));
    }

    #[test]
    fn card_display_uses_symbols() {
        assert_eq!(Card { suit: 0, value: 12 }.to_string(), "♥A");
        assert_eq!(Card { suit: 3, value: 0 }.to_string(), "♠2");
        // Out of range falls back to numbers.
        assert_eq!(Card { suit: 9, value: 1 }.to_string(), "9/1");
    }

    #[test]
    fn trick_formats_cards_in_play_order() {
        let trick = Trick(vec![Card { suit: 1, value: 5 }, Card { suit: 2, value: 8 }]);
        assert_eq!(trick.to_string(), "♣7 ♦10");
    }

    proptest! {
        #[test]
        fn card_round_trips(card in any::<Card>()) {
            let bytes = to_bytes(&card).unwrap();
            prop_assert_eq!(bytes.len(), 16);
            prop_assert_eq!(from_bytes::<Card>(&bytes), Ok(card));
        }

        #[test]
        fn trick_round_trips(trick in any::<Trick>()) {
            let bytes = to_bytes(&trick).unwrap();
            prop_assert_eq!(from_bytes::<Trick>(&bytes), Ok(trick));
        }
    }
}
