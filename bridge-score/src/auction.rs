//! Bidding sequences and the contract they reach.

use crate::{score, Vulnerability};
use bridge_core::{Bid, Call, ParseError, Seat, Strain, NUM_STRAINS};
use std::fmt;

/// The final contract of an auction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    /// 0 undoubled, 1 doubled, 2 redoubled
    pub doubled: u8,
    pub declarer: Seat,
}

impl Contract {
    /// Declarer's score for taking `tricks`
    pub fn score(&self, tricks: u8, vulnerability: Vulnerability) -> i32 {
        score(
            tricks,
            self.level,
            self.strain,
            self.doubled,
            vulnerability.is_vulnerable(self.declarer),
        )
    }

    /// [`score`](Self::score) from North-South's point of view
    pub fn ns_score(&self, tricks: u8, vulnerability: Vulnerability) -> i32 {
        let score = self.score(tricks, vulnerability);
        if self.declarer.is_ns() {
            score
        } else {
            -score
        }
    }
}

impl fmt::Display for Contract {
    /// e.g. "4SX by N"
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let penalty = ["", "X", "XX"][usize::from(self.doubled.min(2))];
        write!(
            f,
            "{}{}{} by {}",
            self.level,
            self.strain.to_char(),
            penalty,
            self.declarer
        )
    }
}

/// The calls made on a board, starting with the dealer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    dealer: Seat,
    calls: Vec<Call>,
}

/// What a single pass over the calls establishes
struct Resolution {
    last_bid: Bid,
    last_bidder: Seat,
    doubled: u8,
    /// First seat of each partnership to name each strain
    first_caller: [[Option<Seat>; NUM_STRAINS]; 2],
}

impl Auction {
    pub fn new(dealer: Seat) -> Self {
        Auction {
            dealer,
            calls: Vec::new(),
        }
    }

    pub fn from_calls(dealer: Seat, calls: Vec<Call>) -> Self {
        Auction { dealer, calls }
    }

    /// Parse whitespace-separated call tokens such as `1C P (1S) X`
    pub fn parse(dealer: Seat, text: &str) -> Result<Self, ParseError> {
        let calls = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Call>, _>>()?;
        Ok(Auction { dealer, calls })
    }

    pub fn push(&mut self, call: Call) {
        self.calls.push(call);
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Seat making the `index`th call
    pub fn seat_of(&self, index: usize) -> Seat {
        self.dealer.rotate(index)
    }

    /// Three passes after a bid, or four passes to open
    pub fn is_complete(&self) -> bool {
        let opened = self.calls.iter().any(|c| matches!(c, Call::Bid(_)));
        let needed = if opened { 3 } else { 4 };
        self.calls.len() >= needed
            && self.calls[self.calls.len() - needed..]
                .iter()
                .all(|&c| c == Call::Pass)
    }

    /// The contract with its true declarer: the first player of the
    /// declaring partnership to name the final strain. None when passed out.
    pub fn contract(&self) -> Option<Contract> {
        let resolution = self.resolve()?;
        let side = resolution.last_bidder.partnership();
        let strain = resolution.last_bid.strain;
        let declarer = resolution.first_caller[side][strain.index()]?;
        Some(resolution.contract(declarer))
    }

    /// The contract credited to whoever made the final bid
    pub fn last_bidder_declarer(&self) -> Option<Contract> {
        let resolution = self.resolve()?;
        Some(resolution.contract(resolution.last_bidder))
    }

    /// One scan over the calls, stopping after three passes follow a bid
    fn resolve(&self) -> Option<Resolution> {
        let mut first_caller = [[None; NUM_STRAINS]; 2];
        let mut last: Option<(Bid, Seat)> = None;
        let mut doubled = 0;
        let mut passes = 0;

        for (i, &call) in self.calls.iter().enumerate() {
            let seat = self.seat_of(i);
            match call {
                Call::Pass => {
                    passes += 1;
                    if last.is_some() && passes == 3 {
                        break;
                    }
                    continue;
                }
                Call::Double => doubled = doubled.max(1),
                Call::Redouble => doubled = 2,
                Call::Bid(bid) => {
                    let first = &mut first_caller[seat.partnership()][bid.strain.index()];
                    if first.is_none() {
                        *first = Some(seat);
                    }
                    last = Some((bid, seat));
                    doubled = 0;
                }
            }
            passes = 0;
        }

        let (last_bid, last_bidder) = last?;
        Some(Resolution {
            last_bid,
            last_bidder,
            doubled,
            first_caller,
        })
    }
}

impl Resolution {
    fn contract(&self, declarer: Seat) -> Contract {
        Contract {
            level: self.last_bid.level,
            strain: self.last_bid.strain,
            doubled: self.doubled,
            declarer,
        }
    }
}

impl fmt::Display for Auction {
    /// Four columns, West to the right, the first row indented to the dealer:
    ///
    /// ```text
    ///   N    E    S    W
    ///   1C   P    1S   P
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for seat in Seat::ALL {
            write!(f, "  {}  ", seat.to_char())?;
        }
        writeln!(f)?;

        let mut column = self.dealer.index();
        write!(f, "{}", " ".repeat(5 * column))?;
        for call in &self.calls {
            write!(f, "  {:2} ", call.to_string())?;
            column += 1;
            if column == 4 {
                writeln!(f)?;
                column = 0;
            }
        }
        if column > 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(dealer: Seat, text: &str) -> Auction {
        Auction::parse(dealer, text).unwrap()
    }

    #[test]
    fn test_passed_out() {
        let a = auction(Seat::East, "P P P P");
        assert!(a.is_complete());
        assert_eq!(a.contract(), None);
        assert_eq!(a.last_bidder_declarer(), None);
    }

    #[test]
    fn test_completion() {
        assert!(!auction(Seat::North, "1C P P").is_complete());
        assert!(auction(Seat::North, "1C P P P").is_complete());
        assert!(!auction(Seat::North, "P P P").is_complete());
        assert!(!auction(Seat::North, "1C X P P XX").is_complete());
    }

    #[test]
    fn test_doubles_reset_on_new_bid() {
        let c = auction(Seat::North, "1H X 2H P P P").contract().unwrap();
        assert_eq!(c.doubled, 0);

        let c = auction(Seat::North, "1H X XX P P P").contract().unwrap();
        assert_eq!(c.doubled, 2);

        let c = auction(Seat::South, "4S P P X P P P").contract().unwrap();
        assert_eq!(c.doubled, 1);
        assert_eq!(c.declarer, Seat::South);
    }

    #[test]
    fn test_display_table() {
        let a = auction(Seat::East, "1C P 1S P P P");
        let text = a.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  N    E    S    W  ");
        assert_eq!(lines[1], "       1C   P    1S ");
        assert_eq!(lines[2], "  P    P    P  ");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_contract_display() {
        let c = auction(Seat::North, "4S X P P P").contract().unwrap();
        assert_eq!(c.to_string(), "4SX by N");
    }
}
