use crate::ScoreError;
use bridge_core::Seat;
use std::fmt;
use std::str::FromStr;

/// Which partnerships are vulnerable on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    /// Standard rotation, boards 1..=16 and repeating
    const ROTATION: [Vulnerability; 16] = [
        Vulnerability::None,
        Vulnerability::NS,
        Vulnerability::EW,
        Vulnerability::Both,
        Vulnerability::NS,
        Vulnerability::EW,
        Vulnerability::Both,
        Vulnerability::None,
        Vulnerability::EW,
        Vulnerability::Both,
        Vulnerability::None,
        Vulnerability::NS,
        Vulnerability::Both,
        Vulnerability::None,
        Vulnerability::NS,
        Vulnerability::EW,
    ];

    /// Vulnerability of a numbered board (numbering starts at 1)
    pub fn for_board(board: u32) -> Self {
        Self::ROTATION[(board.wrapping_sub(1) % 16) as usize]
    }

    pub fn is_vulnerable(self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => seat.is_ns(),
            Vulnerability::EW => !seat.is_ns(),
            Vulnerability::Both => true,
        }
    }

    pub fn parse(text: &str) -> Result<Self, ScoreError> {
        match text.trim().to_ascii_uppercase().as_str() {
            "NONE" | "LOVE" | "-" => Ok(Vulnerability::None),
            "NS" | "N-S" => Ok(Vulnerability::NS),
            "EW" | "E-W" => Ok(Vulnerability::EW),
            "BOTH" | "ALL" => Ok(Vulnerability::Both),
            _ => Err(ScoreError::Vulnerability(text.to_string())),
        }
    }
}

impl FromStr for Vulnerability {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vulnerability::parse(s)
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Vulnerability::None => "None",
            Vulnerability::NS => "NS",
            Vulnerability::EW => "EW",
            Vulnerability::Both => "Both",
        })
    }
}

/// Dealer of a numbered board: North deals board 1, East board 2, and so on
pub fn dealer_for_board(board: u32) -> Seat {
    Seat::North.rotate((board.wrapping_sub(1) % 4) as usize)
}
