use crate::Seat;
use thiserror::Error;

/// Malformed deal notation, card, or call token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

/// An owner assignment that does not give every seat exactly 13 cards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDealError {
    #[error("expected 52 card owners, got {0}")]
    WrongLength(usize),
    #[error("seat index {0} is not in 0..4")]
    InvalidSeat(u8),
    #[error("invalid deal: {seat} holds {count} cards")]
    WrongCount { seat: Seat, count: usize },
}

/// Constrained resampling ran out of legal swaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResampleError {
    /// No legal swap was left after `swaps` successful ones. The deal keeps
    /// those swaps and still holds 13 cards per seat.
    #[error("no legal swap found after {swaps} swaps")]
    Exhausted { swaps: usize },
}
