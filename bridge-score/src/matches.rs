//! Team-match comparison of boards played at two tables.
//!
//! Each board is rescored independently, so boards are spread across a
//! rayon pool and the results are collected back in input order.

use crate::{imp, rescore_board, BoardRecord, ScoreError};
use bridge_dds::DdTable;
use rayon::prelude::*;
use tracing::debug;

/// Configuration for parallel scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads (0 = auto-detect)
    pub num_threads: usize,
}

impl ParallelConfig {
    pub fn with_threads(num_threads: usize) -> Self {
        ParallelConfig { num_threads }
    }

    /// Get the actual number of threads to use.
    pub fn actual_threads(&self) -> usize {
        if self.num_threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.num_threads
        }
    }
}

/// One deal played in both rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBoard {
    pub table: DdTable,
    pub open: BoardRecord,
    pub closed: BoardRecord,
}

/// IMP results of a match, board by board, from the open room's side
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub imps: Vec<i32>,
    pub mean: f64,
    /// Standard error of `mean`: sample standard deviation over sqrt(boards)
    pub std_error: f64,
}

impl MatchSummary {
    pub fn from_imps(imps: Vec<i32>) -> Self {
        let n = imps.len();
        if n == 0 {
            return MatchSummary {
                imps,
                mean: 0.0,
                std_error: 0.0,
            };
        }
        let mean = imps.iter().map(|&i| f64::from(i)).sum::<f64>() / n as f64;
        let std_error = if n > 1 {
            let variance = imps
                .iter()
                .map(|&i| (f64::from(i) - mean).powi(2))
                .sum::<f64>()
                / (n - 1) as f64;
            variance.sqrt() / (n as f64).sqrt()
        } else {
            0.0
        };
        MatchSummary {
            imps,
            mean,
            std_error,
        }
    }

    pub fn boards(&self) -> usize {
        self.imps.len()
    }

    pub fn total(&self) -> i32 {
        self.imps.iter().sum()
    }
}

/// Rescore both rooms of every board and compare them in IMPs.
///
/// Runs on a dedicated pool sized by `config`; the first failing board
/// fails the match.
pub fn score_match(boards: &[MatchBoard], config: &ParallelConfig) -> Result<MatchSummary, ScoreError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.actual_threads())
        .build()?;
    debug!(boards = boards.len(), threads = pool.current_num_threads(), "scoring match");

    let imps = pool.install(|| {
        boards
            .par_iter()
            .map(|board| {
                let open = rescore_board(&board.open, &board.table)?;
                let closed = rescore_board(&board.closed, &board.table)?;
                Ok(imp(open, closed))
            })
            .collect::<Result<Vec<i32>, ScoreError>>()
    })?;

    Ok(MatchSummary::from_imps(imps))
}
