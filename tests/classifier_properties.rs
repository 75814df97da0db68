use proptest::prelude::*;
use shed_rs::cards::{Card, Rank, Suit};
use shed_rs::classifier::{classify, Shape};
use shed_rs::rules::{is_legal, TableState};

prop_compose! {
    fn any_rank()(v in 3u8..=15u8) -> Rank {
        match v {
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => Rank::Two,
        }
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_selection() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(any_card(), 1..=12)
}

proptest! {
    #[test]
    fn classification_ignores_input_order(cards in any_selection(), seed in any::<u64>()) {
        let mut shuffled = cards.clone();
        // cheap deterministic shuffle
        let n = shuffled.len();
        for i in (1..n).rev() {
            let j = (seed as usize).wrapping_mul(i + 1) % (i + 1);
            shuffled.swap(i, j);
        }
        let a = classify(&cards).map(|c| (c.shape(), c.key()));
        let b = classify(&shuffled).map(|c| (c.shape(), c.key()));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn classification_ignores_suits(cards in any_selection()) {
        let reclothed: Vec<Card> =
            cards.iter().map(|c| Card::new(c.rank(), Suit::Hearts)).collect();
        let a = classify(&cards).map(|c| (c.shape(), c.key()));
        let b = classify(&reclothed).map(|c| (c.shape(), c.key()));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn arity_matches_card_count(cards in any_selection()) {
        if let Some(combo) = classify(&cards) {
            prop_assert_eq!(combo.arity(), cards.len());
            prop_assert_eq!(combo.shape().arity(), cards.len());
        }
    }

    #[test]
    fn no_combination_beats_itself(cards in any_selection()) {
        if let Some(combo) = classify(&cards) {
            let table = TableState::with_current(combo.clone());
            prop_assert!(!is_legal(&combo, &table));
        }
    }

    #[test]
    fn open_table_accepts_every_combination(cards in any_selection()) {
        if let Some(combo) = classify(&cards) {
            prop_assert!(is_legal(&combo, &TableState::open()));
        }
    }

    #[test]
    fn bombs_beat_every_non_bomb(rank in any_rank(), cards in any_selection()) {
        let bomb = classify(&[
            Card::new(rank, Suit::Clubs),
            Card::new(rank, Suit::Diamonds),
            Card::new(rank, Suit::Hearts),
            Card::new(rank, Suit::Spades),
        ]).unwrap();
        if let Some(current) = classify(&cards) {
            if current.shape() != Shape::Bomb {
                prop_assert!(is_legal(&bomb, &TableState::with_current(current)));
            }
        }
    }

    #[test]
    fn same_shape_legality_agrees_with_key_order(a in any_selection(), b in any_selection()) {
        let (Some(ca), Some(cb)) = (classify(&a), classify(&b)) else { return Ok(()); };
        if ca.shape() == cb.shape() && ca.shape() != Shape::Bomb {
            let beats = is_legal(&ca, &TableState::with_current(cb.clone()));
            prop_assert_eq!(beats, ca.key() > cb.key());
        }
    }
}
