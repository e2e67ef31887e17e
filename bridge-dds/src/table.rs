use crate::wire::TableResult;
use crate::OracleError;
use bridge_core::codec::strain_swap;
use bridge_core::{Card, Seat, Strain, NUM_CARDS, NUM_STRAINS, NUM_TRICKS};
use std::fmt;

/// Tricks the side on lead can still take after leading each card.
///
/// Only the leader's cards have an entry; every other card is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTable {
    tricks: [Option<u8>; NUM_CARDS],
}

impl LeadTable {
    pub fn new() -> Self {
        LeadTable {
            tricks: [None; NUM_CARDS],
        }
    }

    pub(crate) fn set(&mut self, card: Card, tricks: u8) {
        self.tricks[card.index()] = Some(tricks);
    }

    pub fn get(&self, card: Card) -> Option<u8> {
        self.tricks[card.index()]
    }

    /// Cards with an entry, in card index order
    pub fn held_cards(&self) -> impl Iterator<Item = Card> + '_ {
        Card::all().filter(|&c| self.get(c).is_some())
    }

    /// Mean over the cards with an entry; None for an empty table
    pub fn mean(&self) -> Option<f64> {
        let values: Vec<u8> = self.tricks.iter().flatten().copied().collect();
        if values.is_empty() {
            return None;
        }
        let sum: u32 = values.iter().map(|&t| u32::from(t)).sum();
        Some(f64::from(sum) / values.len() as f64)
    }

    /// Lead with the most tricks. Ties go to the lowest card index.
    pub fn best(&self) -> Option<(Card, u8)> {
        self.held_cards()
            .filter_map(|card| self.get(card).map(|tricks| (card, tricks)))
            .fold(None, |best, (card, tricks)| match best {
                Some((_, top)) if top >= tricks => best,
                _ => Some((card, tricks)),
            })
    }

    /// Dense form with -1 for cards without an entry
    pub fn as_array(&self) -> [i8; NUM_CARDS] {
        self.tricks.map(|t| t.map_or(-1, |t| t as i8))
    }
}

impl Default for LeadTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-dummy tricks for every strain and declarer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DdTable {
    /// Index: [strain][declarer]
    tricks: [[u8; 4]; NUM_STRAINS],
}

impl DdTable {
    pub fn new() -> Self {
        DdTable {
            tricks: [[0; 4]; NUM_STRAINS],
        }
    }

    pub fn set_tricks(&mut self, strain: Strain, declarer: Seat, tricks: u8) {
        self.tricks[strain.index()][declarer.index()] = tricks;
    }

    pub fn get_tricks(&self, strain: Strain, declarer: Seat) -> u8 {
        self.tricks[strain.index()][declarer.index()]
    }

    /// Build from 20 values laid out strain-major (C D H S N), seats N E S W
    /// within each strain.
    pub fn from_flat(values: &[u8]) -> Option<Self> {
        if values.len() != NUM_STRAINS * 4 || values.iter().any(|&t| t > NUM_TRICKS) {
            return None;
        }
        let mut table = DdTable::new();
        for (i, chunk) in values.chunks(4).enumerate() {
            table.tricks[i].copy_from_slice(chunk);
        }
        Some(table)
    }

    /// Convert a solver table (its strain order, seats N E S W)
    pub fn from_result(result: &TableResult) -> Result<Self, OracleError> {
        let mut table = DdTable::new();
        for (oracle_strain, row) in result.res_table.iter().enumerate() {
            let strain = Strain::from_index(strain_swap(oracle_strain as u8))
                .ok_or_else(|| OracleError::Malformed(format!("strain {}", oracle_strain)))?;
            for (seat, &tricks) in Seat::ALL.iter().zip(row) {
                if !(0..=NUM_TRICKS as i32).contains(&tricks) {
                    return Err(OracleError::Malformed(format!(
                        "{} tricks for {} in {}",
                        tricks,
                        seat,
                        strain.to_char()
                    )));
                }
                table.set_tricks(strain, *seat, tricks as u8);
            }
        }
        Ok(table)
    }
}

impl Default for DdTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DdTable {
    /// Strains across, seats down:
    ///
    /// ```text
    ///        C   D   H   S   N
    /// N      8   6   9  10   7
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "    ")?;
        for strain in Strain::ALL {
            write!(f, " {:>3}", strain.to_char())?;
        }
        writeln!(f)?;
        for seat in Seat::ALL {
            write!(f, "{}   ", seat.to_char())?;
            for strain in Strain::ALL {
                write!(f, " {:3}", self.get_tricks(strain, seat))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
