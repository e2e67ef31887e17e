//! Rescoring recorded boards with the true declarer.

use crate::{Auction, ScoreError, Vulnerability};
use bridge_core::ParseError;
use bridge_dds::DdTable;
use tracing::debug;

/// One table's result on a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    pub vulnerability: Vulnerability,
    pub auction: Auction,
    /// Tricks the recorded declarer (the last bidder) took, if known
    pub tricks: Option<u8>,
    /// Recorded score from North-South's point of view, if known
    pub score: Option<i32>,
}

impl BoardRecord {
    pub fn new(vulnerability: Vulnerability, auction: Auction) -> Self {
        BoardRecord {
            vulnerability,
            auction,
            tricks: None,
            score: None,
        }
    }

    pub fn with_result(mut self, tricks: u8, score: i32) -> Self {
        self.tricks = Some(tricks);
        self.score = Some(score);
        self
    }
}

/// Score a board from North-South's point of view, playing the contract
/// from the true declarer's seat with the double-dummy trick count.
///
/// Any recorded trick count and score are checked against the same table
/// with the last bidder as declarer first; a disagreement means the record
/// and the table describe different boards.
pub fn rescore_board(record: &BoardRecord, table: &DdTable) -> Result<i32, ScoreError> {
    let (Some(recorded), Some(contract)) = (
        record.auction.last_bidder_declarer(),
        record.auction.contract(),
    ) else {
        return match record.score {
            Some(score) if score != 0 => Err(ScoreError::RecordMismatch(format!(
                "passed out board recorded as {}",
                score
            ))),
            _ => Ok(0),
        };
    };
    let vul = record.vulnerability;

    let recorded_tricks = table.get_tricks(recorded.strain, recorded.declarer);
    if let Some(tricks) = record.tricks {
        if tricks != recorded_tricks {
            return Err(ScoreError::RecordMismatch(format!(
                "{} recorded {} tricks, table has {}",
                recorded, tricks, recorded_tricks
            )));
        }
    }
    if let Some(score) = record.score {
        let expected = recorded.ns_score(recorded_tricks, vul);
        if score != expected {
            return Err(ScoreError::RecordMismatch(format!(
                "{} recorded score {}, table gives {}",
                recorded, score, expected
            )));
        }
    }

    if contract.declarer != recorded.declarer {
        debug!(from = %recorded.declarer, to = %contract.declarer, contract = %contract, "declarer corrected");
    }
    let tricks = table.get_tricks(contract.strain, contract.declarer);
    Ok(contract.ns_score(tricks, vul))
}

/// Parse 20 whitespace-separated trick counts, strain-major (C D H S N) with
/// seats N E S W inside each strain.
pub fn parse_dd_line(line: &str) -> Result<DdTable, ScoreError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| ParseError::new(format!("Invalid trick count: {}", token)))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    let table = DdTable::from_flat(&values).ok_or_else(|| {
        ParseError::new(format!(
            "Expected 20 trick counts of at most 13, got {:?}",
            values
        ))
    })?;
    Ok(table)
}
