//! Duplicate bridge scoring.
//!
//! Resolves who actually declares a contract from the auction, scores the
//! contract for a number of tricks, converts score differences to IMPs, and
//! rescores recorded boards against double-dummy tables.

mod auction;
mod board;
mod error;
mod matches;
mod score;
mod vulnerability;

pub use auction::{Auction, Contract};
pub use board::{parse_dd_line, rescore_board, BoardRecord};
pub use error::ScoreError;
pub use matches::{score_match, MatchBoard, MatchSummary, ParallelConfig};
pub use score::{imp, normalized_imp, score, IMP_TABLE, MAX_IMPS};
pub use vulnerability::{dealer_for_board, Vulnerability};
