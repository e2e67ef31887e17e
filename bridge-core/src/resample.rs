//! Constrained resampling of deals.
//!
//! Produces alternative deals consistent with what is known: locked cards
//! keep their owner, suit locks stop a seat from gaining cards of a suit, and
//! everything else is redistributed by owner swaps. Every step exchanges two
//! cards between two seats, so each seat keeps exactly 13 cards throughout.

use crate::{Card, Deal, ResampleError, Seat, SuitTable, NUM_CARDS};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

/// Configuration for the swap-based resampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleConfig {
    /// Swaps attempted per call; each one reshuffles the movable cards
    pub iterations: usize,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        ResampleConfig { iterations: 10 }
    }
}

impl ResampleConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// What must stay put while resampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    locked: [bool; NUM_CARDS],
    suit_locks: Option<SuitTable>,
}

impl Constraints {
    /// Nothing locked
    pub fn free() -> Self {
        Constraints {
            locked: [false; NUM_CARDS],
            suit_locks: None,
        }
    }

    /// Every card locked
    pub fn all_locked() -> Self {
        Constraints {
            locked: [true; NUM_CARDS],
            suit_locks: None,
        }
    }

    /// Lock exactly the cards whose mask entry is true
    pub fn from_mask(mask: [bool; NUM_CARDS]) -> Self {
        Constraints {
            locked: mask,
            suit_locks: None,
        }
    }

    /// `locks[seat][suit]` true means that seat may not end up with more cards
    /// of that suit than it holds now.
    pub fn with_suit_locks(mut self, locks: SuitTable) -> Self {
        self.suit_locks = Some(locks);
        self
    }

    pub fn lock_card(&mut self, card: Card) {
        self.locked[card.index()] = true;
    }

    /// Lock every card `seat` currently holds in `deal`
    pub fn lock_seat(mut self, deal: &Deal, seat: Seat) -> Self {
        for card in Card::all().filter(|&c| deal.owner(c) == seat) {
            self.lock_card(card);
        }
        self
    }

    /// Additionally lock the cards selected by a seat-by-suit filter
    pub fn lock_filter(mut self, deal: &Deal, filter: &SuitTable) -> Self {
        let mask = deal.mask_by_suit_filter(filter);
        for (locked, extra) in self.locked.iter_mut().zip(mask) {
            *locked |= extra;
        }
        self
    }

    pub fn is_locked(&self, card: Card) -> bool {
        self.locked[card.index()]
    }

    pub fn suit_locked(&self, seat: Seat, card: Card) -> bool {
        self.suit_locks
            .map_or(false, |locks| locks[seat.index()][card.suit().index()])
    }

    fn movable(&self) -> Vec<Card> {
        Card::all().filter(|&c| !self.is_locked(c)).collect()
    }

    /// Whether swapping the owners of `a` and `b` respects the suit locks.
    ///
    /// A same-suit exchange leaves every suit count unchanged and is always allowed.
    fn allows_swap(&self, deal: &Deal, a: Card, b: Card) -> bool {
        let (owner_a, owner_b) = (deal.owner(a), deal.owner(b));
        if owner_a == owner_b {
            return false;
        }
        if a.suit() == b.suit() {
            return true;
        }
        !self.suit_locked(owner_a, b) && !self.suit_locked(owner_b, a)
    }
}

/// Generates information-consistent alternatives to a deal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedResampler {
    config: ResampleConfig,
}

impl ConstrainedResampler {
    pub fn new(config: ResampleConfig) -> Self {
        ConstrainedResampler { config }
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Apply up to `iterations` random legal swaps to `deal` in place.
    ///
    /// Each iteration shuffles the unlocked cards, takes the first pair (in
    /// shuffled order) held by different seats whose exchange respects the
    /// suit locks, and swaps it. Returns the number of swaps made, or
    /// [`ResampleError::Exhausted`] if an iteration finds no legal pair; the
    /// swaps made before that point are kept.
    pub fn resample_in_place<R: Rng + ?Sized>(
        &self,
        deal: &mut Deal,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<usize, ResampleError> {
        let mut movable = constraints.movable();

        for swaps in 0..self.config.iterations {
            movable.shuffle(rng);

            let Some((a, b)) = find_swap(deal, constraints, &movable) else {
                debug!(swaps, movable = movable.len(), "resampling exhausted");
                return Err(ResampleError::Exhausted { swaps });
            };

            trace!(%a, %b, from = %deal.owner(a), to = %deal.owner(b), "swap");
            deal.swap_owners(a, b);
        }

        Ok(self.config.iterations)
    }

    /// Like [`resample_in_place`](Self::resample_in_place) but leaves `deal`
    /// untouched and returns the resampled copy.
    pub fn resample<R: Rng + ?Sized>(
        &self,
        deal: &Deal,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Deal, ResampleError> {
        let mut resampled = deal.clone();
        self.resample_in_place(&mut resampled, constraints, rng)?;
        Ok(resampled)
    }

    /// A copy of `deal` with every unlocked card redealt in one step, each
    /// seat topped back up to 13 around its locked cards. Suit locks do not
    /// apply here; only the card mask does.
    pub fn reshuffle<R: Rng + ?Sized>(
        &self,
        deal: &Deal,
        constraints: &Constraints,
        rng: &mut R,
    ) -> Deal {
        let mut resampled = deal.clone();
        resampled.reshuffle(&constraints.locked, rng);
        resampled
    }

    /// A copy of `deal` with the three seats other than `fixed` redealt at random
    pub fn shuffle3<R: Rng + ?Sized>(&self, deal: &Deal, fixed: Seat, rng: &mut R) -> Deal {
        self.reshuffle(deal, &Constraints::free().lock_seat(deal, fixed), rng)
    }
}

/// First pair `(movable[i], movable[j])` with `j < i` that may be exchanged
fn find_swap(deal: &Deal, constraints: &Constraints, movable: &[Card]) -> Option<(Card, Card)> {
    movable.iter().enumerate().find_map(|(i, &a)| {
        movable[..i]
            .iter()
            .find(|&&b| constraints.allows_swap(deal, a, b))
            .map(|&b| (a, b))
    })
}
