/// Score table, IMP scale and declarer resolution.
use bridge_core::{Seat, Strain};
use bridge_score::{imp, score, Auction, Vulnerability};

#[test]
fn test_made_contracts() {
    let cases = [
        // (tricks, level, strain, doubled, vulnerable, expected)
        (10, 4, Strain::Spades, 0, false, 420),
        (9, 3, Strain::NoTrump, 0, false, 400),
        (10, 3, Strain::NoTrump, 0, true, 630),
        (8, 2, Strain::Hearts, 0, false, 110),
        (8, 2, Strain::Hearts, 1, false, 470),
        (7, 1, Strain::NoTrump, 2, false, 560),
        (8, 1, Strain::Clubs, 1, true, 340),
        (12, 6, Strain::Spades, 0, true, 1430),
        (13, 6, Strain::Spades, 0, false, 1010),
        (13, 7, Strain::Clubs, 0, false, 1440),
        (13, 7, Strain::NoTrump, 0, true, 2220),
        (11, 5, Strain::Diamonds, 0, true, 600),
        (9, 2, Strain::Diamonds, 0, false, 110),
    ];
    for (tricks, level, strain, doubled, vulnerable, expected) in cases {
        assert_eq!(
            score(tricks, level, strain, doubled, vulnerable),
            expected,
            "{}{} x{} vul={} taking {}",
            level,
            strain.to_char(),
            doubled,
            vulnerable,
            tricks
        );
    }
}

#[test]
fn test_defeated_contracts() {
    let cases = [
        (9, 4, Strain::Spades, 0, false, -50),
        (8, 4, Strain::Spades, 0, true, -200),
        (9, 4, Strain::Spades, 1, false, -100),
        (9, 4, Strain::Spades, 1, true, -200),
        (8, 4, Strain::Spades, 1, false, -300),
        (8, 4, Strain::Spades, 1, true, -500),
        (7, 4, Strain::Spades, 1, false, -500),
        (7, 4, Strain::Spades, 1, true, -800),
        (6, 4, Strain::Spades, 1, false, -800),
        (9, 4, Strain::Spades, 2, true, -400),
        (7, 4, Strain::Spades, 2, false, -1000),
        (0, 7, Strain::NoTrump, 1, false, -3500),
        (0, 7, Strain::NoTrump, 1, true, -3800),
    ];
    for (tricks, level, strain, doubled, vulnerable, expected) in cases {
        assert_eq!(
            score(tricks, level, strain, doubled, vulnerable),
            expected,
            "{}{} x{} vul={} taking {}",
            level,
            strain.to_char(),
            doubled,
            vulnerable,
            tricks
        );
    }
}

#[test]
fn test_imp_monotone_and_zero_on_ties() {
    for b in [-2000, -420, 0, 50, 620, 1430] {
        let mut previous = i32::MIN;
        for a in (-8000..=8000).step_by(5) {
            let value = imp(a, b);
            assert!(value >= previous, "imp({}, {}) dropped", a, b);
            assert!((-24..=24).contains(&value));
            previous = value;
        }
    }
    for x in [-7600, -50, 0, 90, 2220] {
        assert_eq!(imp(x, x), 0);
    }
    assert_eq!(imp(420, 170), 6);
    assert_eq!(imp(170, 420), -6);
}

#[test]
fn test_declarer_is_first_to_name_strain() {
    let auction = Auction::parse(Seat::North, "1C P 1S P 2C P P P").unwrap();
    let contract = auction.contract().unwrap();
    assert_eq!(contract.level, 2);
    assert_eq!(contract.strain, Strain::Clubs);
    assert_eq!(contract.doubled, 0);
    assert_eq!(contract.declarer, Seat::North);
}

#[test]
fn test_partner_raise_keeps_opener_as_declarer() {
    let auction = Auction::parse(Seat::North, "1H P 2H P P P").unwrap();
    assert_eq!(auction.contract().unwrap().declarer, Seat::North);
    assert_eq!(auction.last_bidder_declarer().unwrap().declarer, Seat::South);
}

#[test]
fn test_opponents_naming_strain_do_not_count() {
    // East cue-bids spades first, but North-South win the auction in spades.
    let auction = Auction::parse(Seat::North, "1S 2S P P 3S P P P").unwrap();
    let contract = auction.contract().unwrap();
    assert_eq!(contract.declarer, Seat::North);

    let auction = Auction::parse(Seat::West, "P 1D 1S 2D 2S 3D P P X P P P").unwrap();
    let contract = auction.contract().unwrap();
    assert_eq!(contract.strain, Strain::Diamonds);
    assert_eq!(contract.level, 3);
    assert_eq!(contract.doubled, 1);
    assert_eq!(contract.declarer, Seat::North);
}

#[test]
fn test_redoubled_contract() {
    let auction = Auction::parse(Seat::East, "1N X XX P P P").unwrap();
    let contract = auction.contract().unwrap();
    assert_eq!(contract.doubled, 2);
    assert_eq!(contract.declarer, Seat::East);
    assert_eq!(contract.score(7, Vulnerability::None), 560);
    assert_eq!(contract.ns_score(7, Vulnerability::None), -560);
}

#[test]
fn test_annotated_tokens_and_bad_tokens() {
    let auction = Auction::parse(Seat::South, "(1S) P (4S) P P P").unwrap();
    assert_eq!(auction.contract().unwrap().declarer, Seat::South);
    assert!(Auction::parse(Seat::South, "1S P 8S").is_err());
}

#[test]
fn test_vulnerability_follows_declarer() {
    let auction = Auction::parse(Seat::East, "1S P 4S P P P").unwrap();
    let contract = auction.contract().unwrap();
    assert_eq!(contract.score(10, Vulnerability::NS), 420);
    assert_eq!(contract.score(10, Vulnerability::EW), 620);
    assert_eq!(contract.ns_score(10, Vulnerability::Both), -620);
}
