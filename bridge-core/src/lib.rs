//! Bridge deal engine core: cards, seats, deals, PBN notation, the call
//! index, and constrained resampling of deals.

mod bid;
mod card;
pub mod codec;
mod deal;
mod error;
mod hand;
mod pbn;
mod resample;

pub use bid::{
    bid_index, bid_token, Bid, Call, DOUBLE_INDEX, NO_CALL_INDEX, NUM_BID_STATES, PASS_INDEX,
    REDOUBLE_INDEX,
};
pub use card::{
    Card, Rank, Strain, Suit, CARDS_PER_HAND, CARDS_PER_SUIT, NUM_CARDS, NUM_STRAINS, NUM_SUITS,
    NUM_TRICKS,
};
pub use deal::{Deal, Seat, SuitTable};
pub use error::{InvalidDealError, ParseError, ResampleError};
pub use hand::Hand;
pub use pbn::rotate_north_first;
pub use resample::{ConstrainedResampler, Constraints, ResampleConfig};
