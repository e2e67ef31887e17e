use crate::codec::rank_to_bit;
use crate::{Card, Suit, CARDS_PER_SUIT};

/// The cards held by one seat, as a set over the 52 card indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    bits: u64,
}

impl Hand {
    /// Create a new empty hand
    pub fn new() -> Self {
        Hand { bits: 0 }
    }

    /// Create a hand from a collection of cards
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Hand::new();
        for card in cards {
            hand.insert(card);
        }
        hand
    }

    /// Add a card, returning false if it was already present
    pub fn insert(&mut self, card: Card) -> bool {
        let inserted = !self.contains(card);
        self.bits |= 1u64 << card.index();
        inserted
    }

    pub fn contains(&self, card: Card) -> bool {
        self.bits & (1u64 << card.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cards in index order (clubs first, ace first within a suit)
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Card::all().filter(move |&c| self.contains(c))
    }

    /// Count cards of a specific suit
    pub fn suit_length(&self, suit: Suit) -> usize {
        (self.bits & suit_mask(suit)).count_ones() as usize
    }

    /// Cards of one suit, highest first
    pub fn cards_in_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards().filter(|c| c.suit() == suit).collect()
    }

    /// Calculate total High Card Points (HCP)
    /// A=4, K=3, Q=2, J=1
    pub fn hcp(&self) -> u8 {
        self.cards().map(|c| c.hcp()).sum()
    }

    /// HCP held in one suit
    pub fn suit_hcp(&self, suit: Suit) -> u8 {
        self.cards().filter(|c| c.suit() == suit).map(|c| c.hcp()).sum()
    }

    /// The oracle's holding word for one suit: bit 14 for the Ace down to bit 2 for the Two
    pub fn oracle_holding(&self, suit: Suit) -> u16 {
        self.cards()
            .filter(|c| c.suit() == suit)
            .fold(0, |acc, c| acc | rank_to_bit(c.index() as u8))
    }
}

fn suit_mask(suit: Suit) -> u64 {
    ((1u64 << CARDS_PER_SUIT) - 1) << (suit.index() * CARDS_PER_SUIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rank;

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::from_cards([
            Card::new(Suit::Spades, Rank::Ace),     // 4
            Card::new(Suit::Hearts, Rank::King),    // 3
            Card::new(Suit::Diamonds, Rank::Queen), // 2
            Card::new(Suit::Clubs, Rank::Jack),     // 1
            Card::new(Suit::Spades, Rank::Seven),   // 0
        ]);

        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.suit_hcp(Suit::Spades), 4);
        assert_eq!(hand.suit_hcp(Suit::Clubs), 1);
    }

    #[test]
    fn test_suit_length() {
        let hand = Hand::from_cards([
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Spades, Rank::King),
            Card::new(Suit::Spades, Rank::Queen),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Hearts, Rank::King),
        ]);

        assert_eq!(hand.suit_length(Suit::Spades), 3);
        assert_eq!(hand.suit_length(Suit::Hearts), 2);
        assert_eq!(hand.suit_length(Suit::Diamonds), 0);
        assert_eq!(hand.suit_length(Suit::Clubs), 0);
        assert_eq!(hand.len(), 5);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut hand = Hand::new();
        assert!(hand.insert(Card::new(Suit::Clubs, Rank::Two)));
        assert!(!hand.insert(Card::new(Suit::Clubs, Rank::Two)));
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_cards_in_suit_highest_first() {
        let hand = Hand::from_cards([
            Card::new(Suit::Diamonds, Rank::Four),
            Card::new(Suit::Diamonds, Rank::Ace),
            Card::new(Suit::Diamonds, Rank::Ten),
        ]);
        let ranks: Vec<Rank> = hand.cards_in_suit(Suit::Diamonds).iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ten, Rank::Four]);
    }

    #[test]
    fn test_oracle_holding() {
        let hand = Hand::from_cards([
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::King),
        ]);
        assert_eq!(hand.oracle_holding(Suit::Hearts), (1 << 14) | (1 << 2));
        assert_eq!(hand.oracle_holding(Suit::Clubs), 1 << 13);
        assert_eq!(hand.oracle_holding(Suit::Spades), 0);
    }
}
