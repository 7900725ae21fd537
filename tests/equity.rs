use equity_rank::{
    combine, parse_cards_str, Config, Engine, Error, Game, Outcomes, PercentileTable, StartingHands,
    Tables,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mask(s: &str) -> u64 {
    combine(&parse_cards_str(s).unwrap()).unwrap()
}

fn skewed() -> PercentileTable {
    let values: Vec<f64> = (0..=100).map(|k| (k as f64 / 100.0).powf(1.5)).collect();
    PercentileTable::new(&values).unwrap()
}

fn tables(game: Game, hands: &[(&str, f64)]) -> Tables {
    let starting = StartingHands::new(game, hands.iter().map(|&(h, e)| (mask(h), e))).unwrap();
    let flat = PercentileTable::uniform();
    Tables::new(starting, [flat.clone(), skewed(), skewed(), flat])
}

fn omaha_engine(threads: usize) -> Engine {
    let config = Config::default().with_game(Game::Omaha).with_threads(threads);
    Engine::with_tables(config, tables(Game::Omaha, &[("Tc As 6s 8h", 0.58)])).unwrap()
}

fn holdem_engine(threads: usize, seed: u64) -> Engine {
    let config = Config::default()
        .with_game(Game::Holdem)
        .with_threads(threads)
        .with_seed(seed);
    let hands = [("As Ad", 0.85), ("7c 2d", 0.35)];
    Engine::with_tables(config, tables(Game::Holdem, &hands)).unwrap()
}

const RIVER: [&str; 5] = ["Qd", "5s", "Ac", "9c", "5h"];
const HAND: [&str; 4] = ["Tc", "As", "6s", "8h"];

#[test]
fn omaha_river_exhaustive_is_deterministic() {
    init_logging();
    let engine = omaha_engine(4);
    let a = engine.get_equity(&RIVER, &HAND, 0).unwrap();
    let b = engine.get_equity(&RIVER, &HAND, 0).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert!((0.0..=1.0).contains(&a), "equity {a}");

    for threads in [1, 3, 7] {
        let other = omaha_engine(threads).get_equity(&RIVER, &HAND, 0).unwrap();
        assert_eq!(a.to_bits(), other.to_bits(), "{threads} threads");
    }
}

#[test]
fn omaha_river_counts_every_opponent_hand() {
    let engine = omaha_engine(2);
    let board = parse_cards_str("Qd 5s Ac 9c 5h").unwrap();
    let hand = parse_cards_str("Tc As 6s 8h").unwrap();
    let counts = engine.simulate(&board, &hand, 0).unwrap();
    // C(43, 4)
    assert_eq!(counts.total(), 123_410);
    assert_eq!(
        counts,
        Outcomes {
            wins: 81_488,
            splits: 1_520,
            losses: 40_402,
        }
    );

    let equity = engine.get_equity(&RIVER, &HAND, 0).unwrap();
    assert_eq!(equity, (81_488.0 + 760.0) / 123_410.0);
}

#[test]
fn stronger_hand_has_higher_equity() {
    init_logging();
    let engine = holdem_engine(4, 1);
    let board = ["Kh", "8s", "3d", "Jc"];
    let aces = engine.get_equity(&board, &["As", "Ad"], 0).unwrap();
    let trash = engine.get_equity(&board, &["7c", "2d"], 0).unwrap();
    assert!(aces > trash, "aces {aces} vs 72o {trash}");
    assert!(aces > 0.8);
}

#[test]
fn seeded_sampling_repeats() {
    let engine = holdem_engine(3, 42);
    let board = ["Kh", "8s", "3d"];
    let a = engine.get_equity(&board, &["As", "Ad"], 500).unwrap();
    let b = engine.get_equity(&board, &["As", "Ad"], 500).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn sampling_runs_trials_per_worker() {
    let engine = holdem_engine(3, 9);
    let board = parse_cards_str("Kh 8s 3d").unwrap();
    let hand = parse_cards_str("As Ad").unwrap();
    assert_eq!(engine.simulate(&board, &hand, 333).unwrap().total(), 999);
}

#[test]
fn empty_board_ignores_trials() {
    let engine = holdem_engine(2, 5);
    for trials in [0, 1, 10_000] {
        assert_eq!(engine.get_equity(&[], &["Ah", "Ac"], trials).unwrap(), 0.85);
    }
    assert!(matches!(
        engine.get_equity(&[], &["Kh", "Qc"], 0),
        Err(Error::MissingStartingHand(_))
    ));
}

#[test]
fn percentile_endpoints_and_order() {
    let engine = holdem_engine(1, 0);
    for street in [0u8, 3, 4, 5] {
        assert_eq!(engine.convert_equity_to_percentile(0.0, street).unwrap(), 0.0);
        assert_eq!(engine.convert_equity_to_percentile(1.0, street).unwrap(), 1.0);

        let mut last = 0.0;
        for i in 1..1000 {
            let p = engine.convert_equity_to_percentile(i as f64 / 1000.0, street).unwrap();
            assert!(p >= last, "street {street} dropped at {i}");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }
    for street in [1u8, 2, 6, 255] {
        assert_eq!(engine.convert_equity_to_percentile(0.9, street).unwrap(), 0.5);
    }
}

#[test]
fn queries_need_tables() {
    let engine = Engine::new(Config::default().with_game(Game::Holdem));
    assert!(matches!(
        engine.get_equity(&["Kh", "8s", "3d"], &["As", "Ad"], 0),
        Err(Error::UninitializedTables)
    ));
    assert!(matches!(
        engine.convert_equity_to_percentile(0.5, 4),
        Err(Error::UninitializedTables)
    ));
}
