//! Byte-exact wire vectors and whole-buffer validation, end to end
//! through the public API.

use std::collections::BTreeMap;

use plump_proto::{
    Card, Decoder, Encoder, Message, Player, PlayerName, ProtocolError, PublicState, Trick,
    WireDecode, WireEncode, from_bytes, to_bytes,
};

fn two_player_state() -> BTreeMap<PlayerName, PublicState> {
    let mut state = BTreeMap::new();
    state.insert(PlayerName::from("ann"), PublicState { guess: Some(1), wins: 1, score: 11 });
    state.insert(PlayerName::from("bo"), PublicState { guess: None, wins: 2, score: 5 });
    state
}

fn encoded_pair(name: &str, state: &PublicState) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(name.len() as u64).to_le_bytes());
    bytes.extend_from_slice(name.as_bytes());
    match state.guess {
        Some(guess) => {
            bytes.push(1);
            bytes.extend_from_slice(&guess.to_le_bytes());
        }
        None => bytes.push(0),
    }
    bytes.extend_from_slice(&state.wins.to_le_bytes());
    bytes.extend_from_slice(&state.score.to_le_bytes());
    bytes
}

#[test]
fn card_vector() {
    let bytes = to_bytes(&Card { suit: 0, value: 12 }).unwrap();
    assert_eq!(&bytes[..], &[0, 0, 0, 0, 0, 0, 0, 0, 0x0C, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn request_player_name_is_exactly_four_bytes() {
    let bytes = to_bytes(&Message::RequestPlayerName).unwrap();
    assert_eq!(&bytes[..], &[8, 0, 0, 0]);
}

#[test]
fn guesses_vector_orders_pairs_by_encoded_key_bytes() {
    let state = two_player_state();
    let bytes = to_bytes(&Message::Guesses { state: state.clone() }).unwrap();

    // "bo" encodes with a smaller length prefix than "ann", so its pair
    // comes first even though "ann" sorts first as a string.
    let mut expected = vec![1, 0, 0, 0];
    expected.extend_from_slice(&2u64.to_le_bytes());
    expected.extend_from_slice(&encoded_pair("bo", &state[&PlayerName::from("bo")]));
    expected.extend_from_slice(&encoded_pair("ann", &state[&PlayerName::from("ann")]));
    assert_eq!(&bytes[..], &expected[..]);

    assert_eq!(from_bytes::<Message>(&bytes), Ok(Message::Guesses { state }));
}

#[test]
fn swapped_map_pairs_fail_decode() {
    let state = two_player_state();
    let mut swapped = vec![1, 0, 0, 0];
    swapped.extend_from_slice(&2u64.to_le_bytes());
    swapped.extend_from_slice(&encoded_pair("ann", &state[&PlayerName::from("ann")]));
    swapped.extend_from_slice(&encoded_pair("bo", &state[&PlayerName::from("bo")]));

    assert_eq!(from_bytes::<Message>(&swapped), Err(ProtocolError::NonCanonicalEncoding));
}

#[test]
fn scoreboard_and_guesses_share_payload_shape() {
    let state = two_player_state();
    let guesses = to_bytes(&Message::Guesses { state: state.clone() }).unwrap();
    let scoreboard = to_bytes(&Message::Scoreboard { state }).unwrap();

    assert_eq!(guesses[0], 1);
    assert_eq!(scoreboard[0], 5);
    assert_eq!(&guesses[4..], &scoreboard[4..]);
}

#[test]
fn play_request_context_round_trips() {
    let player = Player::new("ann", true, vec![Card { suit: 0, value: 3 }]);
    let message = Message::PlayRequestContext {
        player: player.clone(),
        hand: vec![Card { suit: 0, value: 3 }, Card { suit: 2, value: 7 }],
        trick: Trick(vec![Card { suit: 1, value: 9 }]),
        valid_cards: Some(vec![0]),
    };
    let bytes = to_bytes(&message).unwrap();
    assert_eq!(from_bytes::<Message>(&bytes), Ok(message));

    let without_restriction = Message::PlayRequestContext {
        player,
        hand: Vec::new(),
        trick: Trick::new(),
        valid_cards: None,
    };
    let bytes = to_bytes(&without_restriction).unwrap();
    assert_eq!(from_bytes::<Message>(&bytes), Ok(without_restriction));
}

#[test]
fn winners_round_trips() {
    let message = Message::Winners {
        players: vec![
            Player::new("ann", true, Vec::new()),
            Player::new("bo", false, Vec::new()),
        ],
        winner_indices: vec![1],
    };
    let bytes = to_bytes(&message).unwrap();
    assert_eq!(from_bytes::<Message>(&bytes), Ok(message));
}

#[test]
fn empty_buffer_is_null_input() {
    assert_eq!(from_bytes::<Message>(&[]), Err(ProtocolError::NullInput));
}

#[test]
fn concatenated_messages_are_rejected() {
    let mut bytes = to_bytes(&Message::GameOver).unwrap().to_vec();
    bytes.extend_from_slice(&to_bytes(&Message::RequestGuess).unwrap());
    assert_eq!(from_bytes::<Message>(&bytes), Err(ProtocolError::TrailingBytes { count: 4 }));
}

/// A self-referential container used to drive nesting past the limit;
/// the protocol's own types are too shallow to reach it.
#[derive(Debug)]
struct Nested(Option<Box<Nested>>);

impl Nested {
    fn with_depth(levels: usize) -> Self {
        let mut nested = Self(None);
        for _ in 1..levels {
            nested = Self(Some(Box::new(nested)));
        }
        nested
    }
}

impl WireEncode for Nested {
    fn encode(&self, enc: &mut Encoder) -> plump_proto::Result<()> {
        enc.in_container(|enc| match &self.0 {
            Some(inner) => {
                enc.write_option_tag(true);
                inner.encode(enc)
            }
            None => {
                enc.write_option_tag(false);
                Ok(())
            }
        })
    }
}

impl WireDecode for Nested {
    fn decode(dec: &mut Decoder<'_>) -> plump_proto::Result<Self> {
        dec.in_container(|dec| {
            if dec.read_option_tag()? {
                Ok(Self(Some(Box::new(Self::decode(dec)?))))
            } else {
                Ok(Self(None))
            }
        })
    }
}

#[test]
fn nesting_past_the_limit_fails_cleanly_on_decode() {
    // 150 levels: 149 "present" tags and one terminator.
    let mut bytes = vec![1u8; 149];
    bytes.push(0);
    assert_eq!(
        from_bytes::<Nested>(&bytes).unwrap_err(),
        ProtocolError::DepthExceeded { max: plump_proto::MAX_CONTAINER_DEPTH }
    );
}

#[test]
fn nesting_within_the_limit_decodes() {
    let mut bytes = vec![1u8; 99];
    bytes.push(0);
    assert!(from_bytes::<Nested>(&bytes).is_ok());
}

#[test]
fn nesting_past_the_limit_fails_cleanly_on_encode() {
    let nested = Nested::with_depth(150);
    assert_eq!(
        to_bytes(&nested),
        Err(ProtocolError::DepthExceeded { max: plump_proto::MAX_CONTAINER_DEPTH })
    );
}
