//! Double-dummy analysis through an external solver.
//!
//! The solver itself lives outside this crate, behind [`DoubleDummyOracle`].
//! [`OracleClient`] turns deals into the solver's request layout, splits them
//! into batches the solver accepts, and decodes the answers into per-card
//! [`LeadTable`]s and whole-deal [`DdTable`]s in our own seat and strain
//! conventions.

mod client;
mod error;
mod oracle;
mod stats;
mod table;
pub mod wire;

pub use client::{decode_future_tricks, OracleClient, OracleConfig};
pub use error::{check_return, error_message, OracleError};
pub use oracle::DoubleDummyOracle;
pub use stats::{CardStatistics, SampleStatistics};
pub use table::{DdTable, LeadTable};
