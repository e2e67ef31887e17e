//! Request and response records exchanged with the solver.
//!
//! These mirror the solver's own structures field for field, in its
//! numbering: suits S=0 H=1 D=2 C=3, strains the same with notrump 4, seats
//! N=0 E=1 S=2 W=3, and ranks by value with the Ace at 14.

use bridge_core::codec::strain_swap;
use bridge_core::{Deal, Seat, Strain};

/// Most boards the solver takes in one call
pub const MAX_BOARDS: usize = 200;

/// Most deals the table entry point takes in one call with all five strains
pub const MAX_TABLES: usize = 40;

/// Success return code
pub const RETURN_NO_FAULT: i32 = 1;

/// One board to solve from the opening lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRequest {
    pub trump: i32,
    pub first: i32,
    pub current_trick_suit: [i32; 3],
    pub current_trick_rank: [i32; 3],
    /// The remaining cards as PBN, North first
    pub remain_cards: String,
    pub target: i32,
    pub solutions: i32,
    pub mode: i32,
}

/// The solver's answer for one board: one entry per group of equivalent
/// cards the player on lead may play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FutureTricks {
    pub nodes: i32,
    /// Number of valid entries in the arrays below
    pub cards: i32,
    pub suit: [i32; 13],
    pub rank: [i32; 13],
    /// Holding bits of lower cards equivalent to `rank`
    pub equals: [i32; 13],
    pub score: [i32; 13],
}

/// A deal for the table entry point, `cards[hand][suit]` as holding bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDeal {
    pub cards: [[u32; 4]; 4],
}

/// Tricks for every strain and declarer, `res_table[strain][hand]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableResult {
    pub res_table: [[i32; 4]; 5],
}

/// Solve-from-the-lead request for `deal` with `leader` on lead
pub fn encode_board(
    deal: &Deal,
    strain: Strain,
    leader: Seat,
    target: i32,
    solutions: i32,
    mode: i32,
) -> BoardRequest {
    BoardRequest {
        trump: strain_swap(strain as u8) as i32,
        first: leader.index() as i32,
        current_trick_suit: [0; 3],
        current_trick_rank: [0; 3],
        remain_cards: deal.to_notation(),
        target,
        solutions,
        mode,
    }
}

pub fn encode_table_deal(deal: &Deal) -> TableDeal {
    TableDeal {
        cards: deal.oracle_table(),
    }
}
