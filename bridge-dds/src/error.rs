use crate::wire::RETURN_NO_FAULT;
use thiserror::Error;

/// Failure reported by, or while talking to, the double-dummy solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The solver returned a non-success code
    #[error("double-dummy solver error {code}: {message}")]
    Oracle { code: i32, message: String },
    /// The request could never be sent as built
    #[error("invalid solver request: {0}")]
    Request(String),
    /// The solver's answer does not fit its own layout
    #[error("malformed solver response: {0}")]
    Malformed(String),
}

impl OracleError {
    pub fn from_code(code: i32) -> Self {
        OracleError::Oracle {
            code,
            message: error_message(code).to_string(),
        }
    }

    /// The solver's return code, if the solver produced one
    pub fn code(&self) -> Option<i32> {
        match self {
            OracleError::Oracle { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Map a solver return code to `Ok` or the matching [`OracleError`]
pub fn check_return(code: i32) -> Result<(), OracleError> {
    if code == RETURN_NO_FAULT {
        Ok(())
    } else {
        Err(OracleError::from_code(code))
    }
}

/// Fixed text for each documented solver return code
pub fn error_message(code: i32) -> &'static str {
    match code {
        RETURN_NO_FAULT => "Success",
        -1 => "General error",
        -2 => "Zero cards",
        -3 => "Target exceeds number of tricks",
        -4 => "Cards duplicated",
        -5 => "Target less than -1",
        -7 => "Target is higher than 13",
        -8 => "Solutions parameter is less than 1",
        -9 => "Solutions parameter is higher than 3",
        -10 => "Too many cards",
        -12 => "currentTrickSuit or currentTrickRank has wrong data",
        -13 => "Played card also remains in a hand",
        -14 => "Wrong number of remaining cards in a hand",
        -15 => "Thread index is not 0 .. maximum",
        -16 => "Mode parameter is less than 0",
        -17 => "Mode parameter is higher than 2",
        -18 => "Trump is not in 1 .. 4",
        -19 => "First is not in 0 .. 2",
        -98 => "AnalysePlay input error",
        -99 => "PBN string error",
        -101 => "Too many boards requested",
        -102 => "Could not create threads",
        -103 => "Something failed waiting for thread to end",
        -201 => "Denomination filter vector has no entries",
        -202 => "Too many DD tables requested",
        -203 => "Chunk size is less than 1",
        _ => "Not a solver error code",
    }
}
