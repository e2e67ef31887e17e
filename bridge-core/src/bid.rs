//! Calls and the 39-state call index.
//!
//! Bids occupy indices 0..35 as `(level - 1) * 5 + strain`; Pass, Double and
//! Redouble are 35, 36 and 37, and 38 is the "no call yet" sentinel.

use crate::{ParseError, Strain};
use std::fmt;
use std::str::FromStr;

/// Number of distinct call indices, including the sentinel
pub const NUM_BID_STATES: usize = 39;
pub const PASS_INDEX: u8 = 35;
pub const DOUBLE_INDEX: u8 = 36;
pub const REDOUBLE_INDEX: u8 = 37;
/// Placeholder for a seat that has not called yet
pub const NO_CALL_INDEX: u8 = 38;

/// A call that proposes a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bid {
    /// Tricks above the book of six, 1..=7
    pub level: u8,
    pub strain: Strain,
}

impl Bid {
    pub fn new(level: u8, strain: Strain) -> Option<Self> {
        if (1..=7).contains(&level) {
            Some(Bid { level, strain })
        } else {
            None
        }
    }
}

/// Any legal announcement in the bidding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid(Bid),
}

impl Call {
    /// Index in 0..38
    pub fn index(self) -> u8 {
        match self {
            Call::Bid(bid) => (bid.level - 1) * 5 + bid.strain as u8,
            Call::Pass => PASS_INDEX,
            Call::Double => DOUBLE_INDEX,
            Call::Redouble => REDOUBLE_INDEX,
        }
    }

    /// Inverse of [`Call::index`]; the sentinel and anything above map to None
    pub fn from_index(index: u8) -> Option<Call> {
        match index {
            0..=34 => {
                let strain = Strain::from_index(index % 5)?;
                Bid::new(index / 5 + 1, strain).map(Call::Bid)
            }
            PASS_INDEX => Some(Call::Pass),
            DOUBLE_INDEX => Some(Call::Double),
            REDOUBLE_INDEX => Some(Call::Redouble),
            _ => None,
        }
    }

    /// Strain named by a bid
    pub fn strain(self) -> Option<Strain> {
        match self {
            Call::Bid(bid) => Some(bid.strain),
            _ => None,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Call::Bid(bid) => write!(f, "{}{}", bid.level, bid.strain.to_char()),
            Call::Pass => f.write_str("P"),
            Call::Double => f.write_str("X"),
            Call::Redouble => f.write_str("XX"),
        }
    }
}

impl FromStr for Call {
    type Err = ParseError;

    /// Parses "1C".."7N", "P", "X" and "XX". A token wrapped in parentheses
    /// (an annotated alternative) is unwrapped first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let token = token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(token)
            .trim();

        match token.to_ascii_uppercase().as_str() {
            "P" | "PASS" => return Ok(Call::Pass),
            "X" => return Ok(Call::Double),
            "XX" => return Ok(Call::Redouble),
            _ => {}
        }

        let mut chars = token.chars();
        if let (Some(level), Some(strain), None) = (chars.next(), chars.next(), chars.next()) {
            let bid = level
                .to_digit(10)
                .zip(Strain::from_char(strain))
                .and_then(|(level, strain)| Bid::new(level as u8, strain));
            if let Some(bid) = bid {
                return Ok(Call::Bid(bid));
            }
        }
        Err(ParseError::new(format!("Invalid call: {:?}", s)))
    }
}

/// Call token to its index in 0..38
pub fn bid_index(token: &str) -> Result<u8, ParseError> {
    Ok(token.parse::<Call>()?.index())
}

/// Index to its call token; the sentinel renders as "-"
pub fn bid_token(index: u8) -> Option<String> {
    if index == NO_CALL_INDEX {
        return Some("-".to_string());
    }
    Call::from_index(index).map(|call| call.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        assert_eq!(bid_index("1C").unwrap(), 0);
        assert_eq!(bid_index("1N").unwrap(), 4);
        assert_eq!(bid_index("2C").unwrap(), 5);
        assert_eq!(bid_index("7N").unwrap(), 34);
        assert_eq!(bid_index("P").unwrap(), 35);
        assert_eq!(bid_index("X").unwrap(), 36);
        assert_eq!(bid_index("XX").unwrap(), 37);
    }

    #[test]
    fn test_every_index_round_trips() {
        for index in 0..NO_CALL_INDEX {
            let token = bid_token(index).unwrap();
            assert_eq!(bid_index(&token).unwrap(), index, "token {}", token);
        }
        assert_eq!(bid_token(NO_CALL_INDEX).as_deref(), Some("-"));
        assert_eq!(bid_token(39), None);
    }

    #[test]
    fn test_parenthesised_token() {
        assert_eq!("(3H)".parse::<Call>().unwrap(), "3H".parse::<Call>().unwrap());
        assert_eq!("(XX)".parse::<Call>().unwrap(), Call::Redouble);
    }

    #[test]
    fn test_invalid_tokens() {
        for token in ["", "8C", "0S", "1Z", "1", "XXX", "4SS"] {
            assert!(token.parse::<Call>().is_err(), "{:?} should not parse", token);
        }
        let err = "8C".parse::<Call>().unwrap_err();
        assert_eq!(err.to_string(), "parse error: Invalid call: \"8C\"");
    }
}
