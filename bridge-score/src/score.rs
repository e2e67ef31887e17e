//! Duplicate score of one contract and the IMP scale.

use bridge_core::{Strain, NUM_TRICKS};

/// Lower bounds of each IMP step: a difference of at least `IMP_TABLE[i]`
/// is worth more than `i` IMPs.
pub const IMP_TABLE: [i32; 24] = [
    15, 45, 85, 125, 165, 215, 265, 315, 365, 425, 495, 595, 745, 895, 1095, 1295, 1495, 1745,
    1995, 2245, 2495, 2995, 3495, 3995,
];

pub const MAX_IMPS: i32 = IMP_TABLE.len() as i32;

/// Score for declarer's side when a contract of `level` in `strain` takes
/// `tricks` tricks. `doubled` is 0, 1 (doubled) or 2 (redoubled).
///
/// Panics on a trick count above 13, a level outside 1..=7 or `doubled`
/// above 2: those can only come from a bug upstream.
pub fn score(tricks: u8, level: u8, strain: Strain, doubled: u8, vulnerable: bool) -> i32 {
    assert!(tricks <= NUM_TRICKS, "{} tricks", tricks);
    assert!((1..=7).contains(&level), "contract level {}", level);
    assert!(doubled <= 2, "doubled {}", doubled);

    let level = i32::from(level);
    let doubled = i32::from(doubled);
    let vul = usize::from(vulnerable);
    let over = i32::from(tricks) - (level + 6);

    if over >= 0 {
        let per_trick = if strain.is_minor() { 20 } else { 30 };
        let mut base = per_trick * level;
        if strain == Strain::NoTrump {
            base += 10;
        }
        let mut bonus = 0;
        match doubled {
            1 => {
                base *= 2;
                bonus += 50;
            }
            2 => {
                base *= 4;
                bonus += 100;
            }
            _ => {}
        }
        bonus += if base >= 100 { [300, 500][vul] } else { 50 };
        bonus += match level {
            6 => [500, 750][vul],
            7 => [1000, 1500][vul],
            _ => 0,
        };
        let per_overtrick = if doubled == 0 {
            per_trick
        } else {
            [100, 200][vul] * doubled
        };
        base + bonus + over * per_overtrick
    } else if doubled == 0 {
        over * [50, 100][vul]
    } else {
        let penalty = match over {
            -1 => [-100, -200][vul],
            -2 => [-300, -500][vul],
            _ => 300 * over + [400, 100][vul],
        };
        penalty * doubled
    }
}

/// IMPs won by the side scoring `score_a` against `score_b`
pub fn imp(score_a: i32, score_b: i32) -> i32 {
    let diff = score_a - score_b;
    let magnitude = IMP_TABLE.partition_point(|&bound| bound <= diff.abs()) as i32;
    magnitude * diff.signum()
}

/// [`imp`] scaled to -1.0..=1.0
pub fn normalized_imp(score_a: i32, score_b: i32) -> f64 {
    f64::from(imp(score_a, score_b)) / f64::from(MAX_IMPS)
}
