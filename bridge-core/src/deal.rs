use crate::codec::oracle_suit;
use crate::{Card, Hand, InvalidDealError, Suit, CARDS_PER_HAND, NUM_CARDS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Represents the four positions at a bridge table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    /// All seats in table order
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Convert from index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        Seat::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Get seat as a character (N, E, S, W)
    pub fn to_char(&self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }

    /// Get partner seat
    pub fn partner(&self) -> Seat {
        self.rotate(2)
    }

    /// Next seat clockwise
    pub fn next(&self) -> Seat {
        self.rotate(1)
    }

    /// Seat `steps` places clockwise from this one
    pub fn rotate(&self, steps: usize) -> Seat {
        Seat::ALL[(self.index() + steps) % 4]
    }

    /// 0 for North-South, 1 for East-West
    pub fn partnership(&self) -> usize {
        self.index() % 2
    }

    pub fn is_ns(&self) -> bool {
        self.partnership() == 0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Seat-by-suit table of flags, indexed `[seat][suit]` with suits in CDHS order
pub type SuitTable = [[bool; 4]; 4];

/// A complete bridge deal: the owner of each of the 52 cards.
///
/// Every seat owns exactly 13 cards. Constructors validate this and the only
/// mutations are whole-card swaps, so the invariant holds for every value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deal {
    owners: [Seat; NUM_CARDS],
}

impl Deal {
    /// Deal a uniformly random permutation of the deck in 13-card blocks
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck: [u8; NUM_CARDS] = std::array::from_fn(|i| i as u8);
        deck.shuffle(rng);

        // First 13 to North, next 13 to East, next 13 to South, last 13 to West
        let mut owners = [Seat::North; NUM_CARDS];
        for (idx, &card) in deck.iter().enumerate() {
            owners[card as usize] = Seat::ALL[idx / CARDS_PER_HAND];
        }
        Deal { owners }
    }

    /// Build a deal from an explicit owner per card, checking 13 cards per seat
    pub fn from_owners(owners: [Seat; NUM_CARDS]) -> Result<Self, InvalidDealError> {
        let mut counts = [0usize; 4];
        for seat in owners {
            counts[seat.index()] += 1;
        }
        for seat in Seat::ALL {
            let count = counts[seat.index()];
            if count != CARDS_PER_HAND {
                return Err(InvalidDealError::WrongCount { seat, count });
            }
        }
        Ok(Deal { owners })
    }

    /// Build a deal from raw seat indices (N=0 .. W=3), one per card index
    pub fn from_owner_indices(owners: &[u8]) -> Result<Self, InvalidDealError> {
        if owners.len() != NUM_CARDS {
            return Err(InvalidDealError::WrongLength(owners.len()));
        }
        let mut seats = [Seat::North; NUM_CARDS];
        for (slot, &index) in seats.iter_mut().zip(owners) {
            *slot = Seat::from_index(index).ok_or(InvalidDealError::InvalidSeat(index))?;
        }
        Deal::from_owners(seats)
    }

    pub fn owner(&self, card: Card) -> Seat {
        self.owners[card.index()]
    }

    pub fn owners(&self) -> &[Seat; NUM_CARDS] {
        &self.owners
    }

    /// The cards held by one seat
    pub fn hand(&self, seat: Seat) -> Hand {
        Hand::from_cards(Card::all().filter(|&c| self.owner(c) == seat))
    }

    pub fn hands(&self) -> [Hand; 4] {
        let mut hands = [Hand::new(); 4];
        for card in Card::all() {
            hands[self.owner(card).index()].insert(card);
        }
        hands
    }

    /// A=4, K=3, Q=2, J=1 over the seat's cards
    pub fn high_card_points(&self, seat: Seat) -> u8 {
        Card::all()
            .filter(|&c| self.owner(c) == seat)
            .map(|c| c.hcp())
            .sum()
    }

    /// HCP per seat and suit, indexed `[seat][suit]`
    pub fn suit_hcp_table(&self) -> [[u8; 4]; 4] {
        let mut table = [[0u8; 4]; 4];
        for card in Card::all() {
            table[self.owner(card).index()][card.suit().index()] += card.hcp();
        }
        table
    }

    /// Mask selecting every card whose (owner, suit) entry in `filter` is true
    pub fn mask_by_suit_filter(&self, filter: &SuitTable) -> [bool; NUM_CARDS] {
        let mut mask = [false; NUM_CARDS];
        for card in Card::all() {
            mask[card.index()] = filter[self.owner(card).index()][card.suit().index()];
        }
        mask
    }

    /// Number of cards held by a different seat in `other`
    pub fn distance(&self, other: &Deal) -> usize {
        self.owners
            .iter()
            .zip(other.owners.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Exchange the owners of two cards. Both move or neither does.
    pub(crate) fn swap_owners(&mut self, a: Card, b: Card) {
        self.owners.swap(a.index(), b.index());
    }

    /// Redeal every card not marked in `locked` in one step.
    ///
    /// Locked cards stay put. The unlocked cards are shuffled and handed out
    /// in contiguous blocks, in seat order, each seat receiving 13 minus the
    /// number of locked cards it holds.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, locked: &[bool; NUM_CARDS], rng: &mut R) {
        let mut quotas = [CARDS_PER_HAND; 4];
        let mut free = Vec::with_capacity(NUM_CARDS);
        for card in Card::all() {
            if locked[card.index()] {
                quotas[self.owner(card).index()] -= 1;
            } else {
                free.push(card);
            }
        }
        free.shuffle(rng);

        let mut rest = free.as_slice();
        for seat in Seat::ALL {
            let (block, tail) = rest.split_at(quotas[seat.index()]);
            for &card in block {
                self.owners[card.index()] = seat;
            }
            rest = tail;
        }
    }

    /// Keep `fixed` seat's hand and redeal the other 39 cards uniformly among
    /// the remaining three seats, 13 each, in seat order.
    pub fn shuffle3<R: Rng + ?Sized>(&mut self, fixed: Seat, rng: &mut R) {
        let locked = std::array::from_fn(|i| self.owners[i] == fixed);
        self.reshuffle(&locked, rng);
    }

    /// One unconstrained random step: swap two cards held by different seats,
    /// never touching `fixed` when given.
    pub fn random_swap<R: Rng + ?Sized>(&mut self, fixed: Option<Seat>, rng: &mut R) {
        let mut cards: Vec<Card> = Card::all()
            .filter(|&c| Some(self.owner(c)) != fixed)
            .collect();
        cards.shuffle(rng);

        let first = cards[0];
        // At least two seats remain, so some later card has another owner.
        if let Some(&other) = cards[1..].iter().find(|&&c| self.owner(c) != self.owner(first)) {
            self.swap_owners(first, other);
        }
    }

    /// Suit lengths per seat, indexed `[seat][suit]`
    pub fn suit_lengths(&self) -> [[usize; 4]; 4] {
        let mut lengths = [[0usize; 4]; 4];
        for card in Card::all() {
            lengths[self.owner(card).index()][card.suit().index()] += 1;
        }
        lengths
    }

    /// Rank-bit holdings in the oracle's layout, indexed `[seat][oracle suit]`
    pub fn oracle_table(&self) -> [[u32; 4]; 4] {
        let mut table = [[0u32; 4]; 4];
        for (seat, hand) in self.hands().iter().enumerate() {
            for suit in Suit::ALL {
                table[seat][oracle_suit(suit)] = u32::from(hand.oracle_holding(suit));
            }
        }
        table
    }

    /// Number of cards of `suit` held by `seat`
    pub fn suit_length(&self, seat: Seat, suit: Suit) -> usize {
        self.hand(seat).suit_length(suit)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
