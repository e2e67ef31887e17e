/// OracleClient against an in-process fake solver.
use bridge_core::codec::{oracle_suit, suit_swap};
use bridge_core::{Card, Deal, Seat, Strain, Suit};
use bridge_dds::wire::{BoardRequest, FutureTricks, TableDeal, TableResult};
use bridge_dds::{check_return, DoubleDummyOracle, OracleClient, OracleConfig, OracleError};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;

/// Reports every card of the leader's hand on its own, scoring it by rank
/// value modulo 14, and records the size of each batch it receives.
#[derive(Default)]
struct FakeOracle {
    batches: RefCell<Vec<usize>>,
    table_batches: RefCell<Vec<usize>>,
    fail_with: Option<i32>,
}

fn fake_score(card: Card) -> i32 {
    card.rank().value() as i32 % 14
}

impl DoubleDummyOracle for FakeOracle {
    fn solve_boards(&self, boards: &[BoardRequest]) -> Result<Vec<FutureTricks>, OracleError> {
        self.batches.borrow_mut().push(boards.len());
        if let Some(code) = self.fail_with {
            check_return(code)?;
        }
        assert!(boards.len() <= 200);

        boards
            .iter()
            .map(|board| {
                let deal = Deal::from_notation(&board.remain_cards)
                    .map_err(|e| OracleError::Request(e.to_string()))?;
                let leader = Seat::from_index(board.first as u8)
                    .ok_or_else(|| OracleError::from_code(-19))?;
                let mut answer = FutureTricks::default();
                for (i, card) in deal.hand(leader).cards().enumerate() {
                    answer.suit[i] = oracle_suit(card.suit()) as i32;
                    answer.rank[i] = card.rank().value() as i32;
                    answer.score[i] = fake_score(card);
                    answer.cards += 1;
                }
                Ok(answer)
            })
            .collect()
    }

    fn calc_tables(&self, deals: &[TableDeal]) -> Result<Vec<TableResult>, OracleError> {
        self.table_batches.borrow_mut().push(deals.len());
        if let Some(code) = self.fail_with {
            check_return(code)?;
        }
        // Suit strains: cards held in that suit. Notrump: 13 minus hand index.
        Ok(deals
            .iter()
            .map(|deal| {
                let mut result = TableResult::default();
                for hand in 0..4 {
                    for suit in 0..4 {
                        result.res_table[suit][hand] = deal.cards[hand][suit].count_ones() as i32;
                    }
                    result.res_table[4][hand] = 13 - hand as i32;
                }
                result
            })
            .collect())
    }
}

fn random_deals(count: usize, seed: u64) -> Vec<Deal> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| Deal::random(&mut rng)).collect()
}

#[test]
fn test_batches_split_at_max_boards() {
    let deals = random_deals(450, 1);
    let client = OracleClient::new(FakeOracle::default());

    let tables = client.solve_many(&deals, Strain::Spades, Seat::West).unwrap();

    assert_eq!(tables.len(), 450);
    assert_eq!(*client.oracle().batches.borrow(), vec![200, 200, 50]);

    // Answers come back in input order
    for (deal, table) in deals.iter().zip(&tables) {
        let west = deal.hand(Seat::West);
        assert_eq!(table.held_cards().count(), 13);
        for card in Card::all() {
            let expected = west.contains(card).then(|| fake_score(card) as u8);
            assert_eq!(table.get(card), expected);
        }
    }
}

#[test]
fn test_smaller_configured_batches() {
    let deals = random_deals(7, 2);
    let config = OracleConfig::default().with_max_boards(3);
    let client = OracleClient::with_config(FakeOracle::default(), config);

    client.solve_many(&deals, Strain::NoTrump, Seat::North).unwrap();
    assert_eq!(*client.oracle().batches.borrow(), vec![3, 3, 1]);
}

#[test]
fn test_mixed_strains_and_leaders() {
    let deals = random_deals(3, 3);
    let client = OracleClient::new(FakeOracle::default());
    let boards = [
        (&deals[0], Strain::Clubs, Seat::North),
        (&deals[1], Strain::Hearts, Seat::East),
        (&deals[2], Strain::NoTrump, Seat::South),
    ];

    let tables = client.solve_all(boards).unwrap();
    for ((deal, _, leader), table) in boards.iter().zip(&tables) {
        assert!(table.held_cards().all(|c| deal.owner(c) == *leader));
    }
}

#[test]
fn test_mean_tricks() {
    let deal = random_deals(1, 4).remove(0);
    let client = OracleClient::new(FakeOracle::default());

    let north = deal.hand(Seat::North);
    let expected = north.cards().map(|c| fake_score(c) as f64).sum::<f64>() / 13.0;
    let mean = client.mean_tricks(&deal, Strain::Diamonds, Seat::North).unwrap();
    assert!((mean - expected).abs() < 1e-9);
}

#[test]
fn test_error_code_propagates() {
    let oracle = FakeOracle {
        fail_with: Some(-4),
        ..Default::default()
    };
    let client = OracleClient::new(oracle);
    let deals = random_deals(2, 5);

    let err = client.solve_many(&deals, Strain::Spades, Seat::North).unwrap_err();
    assert_eq!(
        err,
        OracleError::Oracle {
            code: -4,
            message: "Cards duplicated".to_string()
        }
    );

    let err = client.calc_tables(&deals).unwrap_err();
    assert_eq!(err.code(), Some(-4));
}

#[test]
fn test_invalid_config_is_never_sent() {
    let config = OracleConfig::default().with_solutions(0);
    let client = OracleClient::with_config(FakeOracle::default(), config);
    let deals = random_deals(1, 6);

    assert!(matches!(
        client.solve(&deals[0], Strain::Spades, Seat::North),
        Err(OracleError::Request(_))
    ));
    assert!(client.oracle().batches.borrow().is_empty());
}

#[test]
fn test_calc_tables_in_our_conventions() {
    let deals = random_deals(45, 7);
    let client = OracleClient::new(FakeOracle::default());

    let tables = client.calc_tables(&deals).unwrap();
    assert_eq!(tables.len(), 45);
    assert_eq!(*client.oracle().table_batches.borrow(), vec![40, 5]);

    for (deal, table) in deals.iter().zip(&tables) {
        for seat in Seat::ALL {
            for suit in Suit::ALL {
                assert_eq!(
                    table.get_tricks(Strain::from_suit(suit), seat) as usize,
                    deal.suit_length(seat, suit)
                );
            }
            assert_eq!(
                table.get_tricks(Strain::NoTrump, seat) as usize,
                13 - seat.index()
            );
        }
    }
    // Spades are solver suit 0
    assert_eq!(suit_swap(Suit::Spades as u8), 0);
}

#[test]
fn test_empty_input_makes_no_calls() {
    let client = OracleClient::new(FakeOracle::default());
    assert!(client.solve_many(&[], Strain::Clubs, Seat::North).unwrap().is_empty());
    assert!(client.calc_tables(&[]).unwrap().is_empty());
    assert!(client.oracle().batches.borrow().is_empty());
}
