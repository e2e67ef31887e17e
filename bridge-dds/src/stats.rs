//! How well lead tables from sampled worlds track the real deal's table.

use crate::LeadTable;
use bridge_core::{Card, NUM_CARDS};

/// One of the leader's cards compared across sampled worlds
#[derive(Debug, Clone, PartialEq)]
pub struct CardStatistics {
    pub card: Card,
    /// Tricks in the real deal
    pub truth: u8,
    pub mean: f64,
    pub min: i8,
    /// First sample reaching `min`
    pub argmin: usize,
    pub max: i8,
    pub argmax: usize,
    /// Smallest squared difference from `truth` over the samples
    pub min_dist: f64,
    pub argmin_dist: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleStatistics {
    /// Cards the leader holds in the real deal, in card index order
    pub cards: Vec<CardStatistics>,
    /// Euclidean distance between the real table and the sample mean over
    /// all 52 entries, -1 standing for "not held"
    pub l2_distance: f64,
}

impl SampleStatistics {
    /// Compare `truth` with the tables solved in each sampled world.
    /// Returns None when there are no samples.
    pub fn compare(truth: &LeadTable, samples: &[LeadTable]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let dense: Vec<[i8; NUM_CARDS]> = samples.iter().map(LeadTable::as_array).collect();
        let truth_dense = truth.as_array();

        let means: Vec<f64> = (0..NUM_CARDS)
            .map(|i| dense.iter().map(|s| f64::from(s[i])).sum::<f64>() / dense.len() as f64)
            .collect();
        let l2_distance = truth_dense
            .iter()
            .zip(&means)
            .map(|(&t, &m)| (f64::from(t) - m).powi(2))
            .sum::<f64>()
            .sqrt();

        let cards = truth
            .held_cards()
            .filter_map(|card| {
                let tricks = truth.get(card)?;
                let i = card.index();
                let values: Vec<i8> = dense.iter().map(|s| s[i]).collect();
                let (argmin, min) = first_extreme(&values, |a, b| a < b)?;
                let (argmax, max) = first_extreme(&values, |a, b| a > b)?;
                let dists: Vec<f64> = values
                    .iter()
                    .map(|&v| (f64::from(v) - f64::from(tricks)).powi(2))
                    .collect();
                let (argmin_dist, min_dist) = first_extreme(&dists, |a, b| a < b)?;
                Some(CardStatistics {
                    card,
                    truth: tricks,
                    mean: means[i],
                    min,
                    argmin,
                    max,
                    argmax,
                    min_dist,
                    argmin_dist,
                })
            })
            .collect();

        Some(SampleStatistics { cards, l2_distance })
    }
}

/// Index and value of the first element no later element beats
fn first_extreme<T: Copy>(values: &[T], better: impl Fn(T, T) -> bool) -> Option<(usize, T)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (i, v)| if better(v, best.1) { (i, v) } else { best }))
}
