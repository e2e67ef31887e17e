//! Batching client for the double-dummy solver.

use crate::table::{DdTable, LeadTable};
use crate::wire::{encode_board, encode_table_deal, BoardRequest, FutureTricks, MAX_BOARDS, MAX_TABLES};
use crate::{DoubleDummyOracle, OracleError};
use bridge_core::codec::oracle_card;
use bridge_core::{Deal, Seat, Strain, NUM_TRICKS};
use tracing::{debug, warn};

/// Holding bits the solver can report: rank values 2..=14
const RANK_BITS: i32 = 0x7ffc;

/// Solver parameters sent with every board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleConfig {
    /// Boards per solver call, 1..=200
    pub max_boards: usize,
    /// -1 asks for the maximum number of tricks
    pub target: i32,
    /// 3 asks for a score for every legal card
    pub solutions: i32,
    pub mode: i32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            max_boards: MAX_BOARDS,
            target: -1,
            solutions: 3,
            mode: 0,
        }
    }
}

impl OracleConfig {
    /// Set the batch size, clamped to what the solver accepts
    pub fn with_max_boards(mut self, max_boards: usize) -> Self {
        self.max_boards = max_boards.clamp(1, MAX_BOARDS);
        self
    }

    pub fn with_target(mut self, target: i32) -> Self {
        self.target = target;
        self
    }

    pub fn with_solutions(mut self, solutions: i32) -> Self {
        self.solutions = solutions;
        self
    }

    pub fn with_mode(mut self, mode: i32) -> Self {
        self.mode = mode;
        self
    }

    /// Reject parameters the solver would refuse anyway
    pub fn validate(&self) -> Result<(), OracleError> {
        if !(-1..=NUM_TRICKS as i32).contains(&self.target) {
            return Err(OracleError::Request(format!("target {} not in -1..=13", self.target)));
        }
        if !(1..=3).contains(&self.solutions) {
            return Err(OracleError::Request(format!(
                "solutions {} not in 1..=3",
                self.solutions
            )));
        }
        if !(0..=2).contains(&self.mode) {
            return Err(OracleError::Request(format!("mode {} not in 0..=2", self.mode)));
        }
        Ok(())
    }
}

/// Sends deals to a [`DoubleDummyOracle`] in batches and decodes the answers
#[derive(Debug, Clone)]
pub struct OracleClient<O> {
    oracle: O,
    config: OracleConfig,
}

impl<O: DoubleDummyOracle> OracleClient<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, OracleConfig::default())
    }

    pub fn with_config(oracle: O, config: OracleConfig) -> Self {
        let config = config.with_max_boards(config.max_boards);
        OracleClient { oracle, config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Tricks for each card `leader` could lead to `deal` played in `strain`
    pub fn solve(&self, deal: &Deal, strain: Strain, leader: Seat) -> Result<LeadTable, OracleError> {
        let mut tables = self.solve_all([(deal, strain, leader)])?;
        tables
            .pop()
            .ok_or_else(|| OracleError::Malformed("no answer for the board".to_string()))
    }

    /// [`solve`](Self::solve) for many deals sharing a strain and leader
    pub fn solve_many(
        &self,
        deals: &[Deal],
        strain: Strain,
        leader: Seat,
    ) -> Result<Vec<LeadTable>, OracleError> {
        self.solve_all(deals.iter().map(|deal| (deal, strain, leader)))
    }

    /// Solve boards that each carry their own strain and leader.
    ///
    /// Boards go to the solver in order, at most `max_boards` per call. The
    /// first failing call aborts the whole request.
    pub fn solve_all<'a, I>(&self, boards: I) -> Result<Vec<LeadTable>, OracleError>
    where
        I: IntoIterator<Item = (&'a Deal, Strain, Seat)>,
    {
        self.config.validate()?;
        let requests: Vec<BoardRequest> = boards
            .into_iter()
            .map(|(deal, strain, leader)| {
                encode_board(
                    deal,
                    strain,
                    leader,
                    self.config.target,
                    self.config.solutions,
                    self.config.mode,
                )
            })
            .collect();

        let mut tables = Vec::with_capacity(requests.len());
        for (batch, chunk) in requests.chunks(self.config.max_boards).enumerate() {
            debug!(batch, boards = chunk.len(), "solving batch");
            let answers = self.oracle.solve_boards(chunk).map_err(|e| {
                warn!(batch, error = %e, "double-dummy solver failed");
                e
            })?;
            if answers.len() != chunk.len() {
                return Err(OracleError::Malformed(format!(
                    "{} answers for {} boards",
                    answers.len(),
                    chunk.len()
                )));
            }
            for answer in &answers {
                tables.push(decode_future_tricks(answer)?);
            }
        }
        Ok(tables)
    }

    /// Mean tricks over the leader's cards. For display only.
    pub fn mean_tricks(&self, deal: &Deal, strain: Strain, leader: Seat) -> Result<f64, OracleError> {
        self.solve(deal, strain, leader)?
            .mean()
            .ok_or_else(|| OracleError::Malformed("no playable cards reported".to_string()))
    }

    /// Full double-dummy tables, one per deal
    pub fn calc_tables(&self, deals: &[Deal]) -> Result<Vec<DdTable>, OracleError> {
        let requests: Vec<_> = deals.iter().map(encode_table_deal).collect();
        let batch_size = self.config.max_boards.min(MAX_TABLES);

        let mut tables = Vec::with_capacity(deals.len());
        for (batch, chunk) in requests.chunks(batch_size).enumerate() {
            debug!(batch, deals = chunk.len(), "calculating tables");
            let results = self.oracle.calc_tables(chunk).map_err(|e| {
                warn!(batch, error = %e, "double-dummy table calculation failed");
                e
            })?;
            if results.len() != chunk.len() {
                return Err(OracleError::Malformed(format!(
                    "{} tables for {} deals",
                    results.len(),
                    chunk.len()
                )));
            }
            for result in &results {
                tables.push(DdTable::from_result(result)?);
            }
        }
        Ok(tables)
    }
}

/// Expand one solver answer to a score per card.
///
/// Each entry names one card plus, in `equals`, the lower cards of the same
/// suit that are interchangeable with it; all of them share the entry's score.
pub fn decode_future_tricks(answer: &FutureTricks) -> Result<LeadTable, OracleError> {
    let count = usize::try_from(answer.cards)
        .ok()
        .filter(|&n| n <= answer.suit.len())
        .ok_or_else(|| OracleError::Malformed(format!("{} cards reported", answer.cards)))?;

    let mut table = LeadTable::new();
    for i in 0..count {
        let (suit, rank) = (answer.suit[i], answer.rank[i]);
        let score = u8::try_from(answer.score[i])
            .ok()
            .filter(|&s| s <= NUM_TRICKS)
            .ok_or_else(|| OracleError::Malformed(format!("score {}", answer.score[i])))?;
        let card = oracle_card(suit, rank)
            .ok_or_else(|| OracleError::Malformed(format!("card suit {} rank {}", suit, rank)))?;
        table.set(card, score);

        let equals = answer.equals[i];
        if equals & !RANK_BITS != 0 {
            return Err(OracleError::Malformed(format!("equals bits {:#x}", equals)));
        }
        for rank in (2..=14).filter(|&r| equals & (1 << r) != 0) {
            if let Some(card) = oracle_card(suit, rank) {
                table.set(card, score);
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{Card, Rank, Suit};

    #[test]
    fn test_config_defaults_and_clamp() {
        let config = OracleConfig::default();
        assert_eq!(config.max_boards, 200);
        assert_eq!((config.target, config.solutions, config.mode), (-1, 3, 0));
        assert_eq!(config.with_max_boards(0).max_boards, 1);
        assert_eq!(config.with_max_boards(1000).max_boards, 200);
        assert!(config.validate().is_ok());
        assert!(config.with_solutions(4).validate().is_err());
        assert!(config.with_target(-2).validate().is_err());
        assert!(config.with_mode(3).validate().is_err());
    }

    #[test]
    fn test_decode_expands_equals() {
        let mut answer = FutureTricks {
            cards: 2,
            ..Default::default()
        };
        // Spade king, equal to the queen and jack: 9 tricks
        answer.suit[0] = 0;
        answer.rank[0] = 13;
        answer.equals[0] = (1 << 12) | (1 << 11);
        answer.score[0] = 9;
        // Club two alone: 8 tricks
        answer.suit[1] = 3;
        answer.rank[1] = 2;
        answer.score[1] = 8;

        let table = decode_future_tricks(&answer).unwrap();
        for rank in [Rank::King, Rank::Queen, Rank::Jack] {
            assert_eq!(table.get(Card::new(Suit::Spades, rank)), Some(9));
        }
        assert_eq!(table.get(Card::new(Suit::Spades, Rank::Ace)), None);
        assert_eq!(table.get(Card::new(Suit::Clubs, Rank::Two)), Some(8));
        assert_eq!(table.held_cards().count(), 4);
        assert_eq!(table.mean(), Some(8.75));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let mut answer = FutureTricks {
            cards: 14,
            ..Default::default()
        };
        assert!(decode_future_tricks(&answer).is_err());

        answer.cards = 1;
        answer.suit[0] = 5;
        answer.rank[0] = 14;
        assert!(decode_future_tricks(&answer).is_err());

        answer.suit[0] = 1;
        answer.score[0] = 14;
        assert!(decode_future_tricks(&answer).is_err());

        answer.score[0] = 3;
        answer.equals[0] = 1;
        assert!(decode_future_tricks(&answer).is_err());
    }
}
