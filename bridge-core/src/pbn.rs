//! PBN hand notation for whole deals.
//!
//! Format: `N:KQ4.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8`,
//! four hands clockwise from the prefixed seat, each written
//! Spades.Hearts.Diamonds.Clubs with an empty string for a void.

use crate::{Card, Deal, ParseError, Rank, Seat, Suit, CARDS_PER_HAND, NUM_CARDS};
use std::str::FromStr;

impl Deal {
    /// Parse a deal from PBN notation.
    ///
    /// Accepts a full `[Deal "N:..."]` tag, a prefixed `E:...` hand list, or a
    /// bare hand list which is taken to start with North.
    pub fn from_notation(text: &str) -> Result<Deal, ParseError> {
        let content = strip_deal_tag(text)?;
        let (first_seat, hands) = split_first_seat(content)?;

        let hands_str: Vec<&str> = hands.split_whitespace().collect();
        if hands_str.len() != 4 {
            return Err(ParseError::new(format!(
                "Expected 4 hands, got {}",
                hands_str.len()
            )));
        }

        let mut owners: [Option<Seat>; NUM_CARDS] = [None; NUM_CARDS];
        for (i, hand_str) in hands_str.iter().enumerate() {
            let seat = first_seat.rotate(i);
            let cards = parse_hand(hand_str)?;
            if cards.len() != CARDS_PER_HAND {
                return Err(ParseError::new(format!(
                    "{} holds {} cards, expected {}",
                    seat,
                    cards.len(),
                    CARDS_PER_HAND
                )));
            }
            for card in cards {
                if let Some(previous) = owners[card.index()].replace(seat) {
                    return Err(ParseError::new(format!(
                        "Card {} dealt to both {} and {}",
                        card, previous, seat
                    )));
                }
            }
        }

        // 4 hands of 13 distinct cards cover the whole deck.
        let owners = owners.map(|o| o.unwrap_or(Seat::North));
        Deal::from_owners(owners).map_err(|e| ParseError::new(e.to_string()))
    }

    /// PBN notation starting with North, e.g. `N:AKQ.JT9.876.5432 ...`
    pub fn to_notation(&self) -> String {
        self.to_notation_from(Seat::North)
    }

    /// PBN notation with the hands listed clockwise from `first_seat`
    pub fn to_notation_from(&self, first_seat: Seat) -> String {
        let mut result = String::new();
        result.push(first_seat.to_char());
        result.push(':');

        // Add hands in clockwise order from first_seat
        for i in 0..4 {
            if i > 0 {
                result.push(' ');
            }
            result.push_str(&self.format_hand(first_seat.rotate(i)));
        }
        result
    }

    /// One hand in Spades.Hearts.Diamonds.Clubs format
    fn format_hand(&self, seat: Seat) -> String {
        let hand = self.hand(seat);
        Suit::PBN_ORDER
            .iter()
            .map(|&suit| {
                hand.cards_in_suit(suit)
                    .iter()
                    .map(|c| c.rank().to_char())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromStr for Deal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deal::from_notation(s)
    }
}

/// Rewrite a seat-prefixed notation so the hand list starts with North
pub fn rotate_north_first(text: &str) -> Result<String, ParseError> {
    Ok(Deal::from_notation(text)?.to_notation())
}

/// Remove a surrounding `[Deal "..."]` tag if present
fn strip_deal_tag(input: &str) -> Result<&str, ParseError> {
    let trimmed = input.trim();
    if !trimmed.starts_with("[Deal") {
        return Ok(trimmed);
    }

    let Some(rest) = trimmed.strip_prefix("[Deal \"") else {
        return Err(ParseError::new("Expected [Deal \"...\" format"));
    };
    rest.strip_suffix("\"]")
        .ok_or_else(|| ParseError::new("Expected closing \"]"))
}

/// Split an optional `S:` seat prefix from the hand list
fn split_first_seat(content: &str) -> Result<(Seat, &str), ParseError> {
    let parts: Vec<&str> = content.split(':').collect();
    match parts.as_slice() {
        [hands] => Ok((Seat::North, *hands)),
        [seat, hands] => Ok((parse_seat(seat)?, *hands)),
        _ => Err(ParseError::new("Expected Seat:Hands format")),
    }
}

fn parse_seat(s: &str) -> Result<Seat, ParseError> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(Seat::from_char), chars.next()) {
        (Some(seat), None) => Ok(seat),
        _ => Err(ParseError::new(format!("Invalid position: {}", s))),
    }
}

/// Parse a hand in PBN format: Spades.Hearts.Diamonds.Clubs
/// Example: "KQ4.QJ982..AKQ43" (void diamond suit shown as empty)
fn parse_hand(s: &str) -> Result<Vec<Card>, ParseError> {
    let suits_str: Vec<&str> = s.split('.').collect();
    if suits_str.len() != 4 {
        return Err(ParseError::new(format!(
            "Expected 4 suits separated by dots, got {}",
            suits_str.len()
        )));
    }

    let mut cards = Vec::with_capacity(CARDS_PER_HAND);
    for (&suit, suit_str) in Suit::PBN_ORDER.iter().zip(suits_str) {
        for c in suit_str.chars() {
            let rank = Rank::from_char(c)
                .ok_or_else(|| ParseError::new(format!("Invalid rank character: {}", c)))?;
            cards.push(Card::new(suit, rank));
        }
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAL: &str = "N:KQ4.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8";

    #[test]
    fn test_parse_notation() {
        let deal = Deal::from_notation(DEAL).unwrap();

        // Check north hand
        let north = deal.hand(Seat::North);
        assert_eq!(north.len(), 13);
        assert_eq!(north.suit_length(Suit::Spades), 3);
        assert_eq!(north.suit_length(Suit::Hearts), 5);
        assert_eq!(north.suit_length(Suit::Diamonds), 0); // Void
        assert_eq!(north.suit_length(Suit::Clubs), 5);
        assert_eq!(deal.owner(Card::new(Suit::Spades, Rank::Ace)), Seat::West);
    }

    #[test]
    fn test_format_is_exact_inverse() {
        let deal = Deal::from_notation(DEAL).unwrap();
        assert_eq!(deal.to_notation(), DEAL);
    }

    #[test]
    fn test_accepts_tag_and_bare_forms() {
        let tagged = format!("[Deal \"{}\"]", DEAL);
        let bare = &DEAL[2..];
        let expected = Deal::from_notation(DEAL).unwrap();
        assert_eq!(Deal::from_notation(&tagged).unwrap(), expected);
        assert_eq!(Deal::from_notation(bare).unwrap(), expected);
    }

    #[test]
    fn test_seat_prefix_rotates_hands() {
        // Same deal written from East: the first hand listed is East's.
        let from_east = "E:J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8 KQ4.QJ982..AKQ43";
        let deal = Deal::from_notation(from_east).unwrap();
        assert_eq!(deal, Deal::from_notation(DEAL).unwrap());
        assert_eq!(deal.to_notation_from(Seat::East), from_east);
        assert_eq!(rotate_north_first(from_east).unwrap(), DEAL);
    }

    #[test]
    fn test_parse_errors() {
        // three suits in north's hand
        assert!(Deal::from_notation("N:KQ4.QJ982.AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8").is_err());
        // unknown rank letter
        assert!(Deal::from_notation("N:KQX.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8").is_err());
        // north short a card
        assert!(Deal::from_notation("N:KQ.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T84").is_err());
        // duplicate spade king
        assert!(Deal::from_notation("N:KQ4.QJ982..AKQ43 K653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8").is_err());
        // three hands only
        assert!(Deal::from_notation("N:KQ4.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652").is_err());
        // bad seat prefix
        assert!(Deal::from_notation("X:KQ4.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8").is_err());
        // unterminated tag
        assert!(Deal::from_notation("[Deal \"N:KQ4.QJ982..AKQ43 J653.A73.985.J97 9.K54.KQT732.652 AT872.T6.AJ64.T8").is_err());
    }
}
