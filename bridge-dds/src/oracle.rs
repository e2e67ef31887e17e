use crate::wire::{BoardRequest, FutureTricks, TableDeal, TableResult};
use crate::OracleError;

/// A double-dummy solver.
///
/// Implementations receive at most [`MAX_BOARDS`](crate::wire::MAX_BOARDS)
/// entries per call and return one answer per entry, in order. Any
/// non-success return code is surfaced as [`OracleError::Oracle`], usually
/// through [`check_return`](crate::check_return).
pub trait DoubleDummyOracle {
    /// Best play from the opening lead for each board
    fn solve_boards(&self, boards: &[BoardRequest]) -> Result<Vec<FutureTricks>, OracleError>;

    /// Complete trick tables for each deal
    fn calc_tables(&self, deals: &[TableDeal]) -> Result<Vec<TableResult>, OracleError>;
}

impl<O: DoubleDummyOracle + ?Sized> DoubleDummyOracle for &O {
    fn solve_boards(&self, boards: &[BoardRequest]) -> Result<Vec<FutureTricks>, OracleError> {
        (**self).solve_boards(boards)
    }

    fn calc_tables(&self, deals: &[TableDeal]) -> Result<Vec<TableResult>, OracleError> {
        (**self).calc_tables(deals)
    }
}
