//! Card index arithmetic and the double-dummy oracle's numbering.
//!
//! Cards are numbered `suit * 13 + rank` with suits in CDHS order and ranks
//! from the Ace (0) down to the Two (12). The oracle numbers suits the other
//! way round (S=0, H=1, D=2, C=3, notrump stays 4) and ranks by value
//! (Ace=14 .. Two=2), encoding a holding as one bit per rank value.

use crate::{Card, ParseError, Suit};

pub fn suit_of(card: u8) -> u8 {
    card / 13
}

pub fn rank_of(card: u8) -> u8 {
    card % 13
}

pub fn card_of(suit: u8, rank: u8) -> u8 {
    debug_assert!(suit < 4 && rank < 13);
    suit * 13 + rank
}

/// Our suit index to the oracle's, and back.
pub fn suit_swap(suit: u8) -> u8 {
    debug_assert!(suit < 4);
    suit ^ 3
}

/// Our strain index to the oracle's, and back. Notrump is 4 on both sides.
pub fn strain_swap(strain: u8) -> u8 {
    debug_assert!(strain < 5);
    if strain < 4 {
        strain ^ 3
    } else {
        strain
    }
}

/// The oracle's holding bit for a card: Ace is `1 << 14`, Two is `1 << 2`.
pub fn rank_to_bit(card: u8) -> u16 {
    1 << (14 - rank_of(card))
}

/// Oracle rank value (Ace=14 .. Two=2, i.e. the bit position) to our rank index.
pub fn bit_to_rank(oracle_rank: u8) -> u8 {
    debug_assert!((2..=14).contains(&oracle_rank));
    14 - oracle_rank
}

/// Card named by an oracle (suit, rank value) pair, if both are in range.
pub fn oracle_card(oracle_suit: i32, oracle_rank: i32) -> Option<Card> {
    if !(0..4).contains(&oracle_suit) || !(2..=14).contains(&oracle_rank) {
        return None;
    }
    let suit = suit_swap(oracle_suit as u8);
    Card::from_index(card_of(suit, bit_to_rank(oracle_rank as u8)))
}

/// Oracle suit index of one of our suits.
pub fn oracle_suit(suit: Suit) -> usize {
    suit_swap(suit as u8) as usize
}

/// Suit letter then rank letter, e.g. "SA" or "C2"
pub fn card_name(card: Card) -> String {
    card.to_string()
}

pub fn parse_card(name: &str) -> Result<Card, ParseError> {
    name.parse()
}
