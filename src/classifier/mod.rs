pub(crate) mod rank_groups;
pub(crate) mod runs;

pub use rank_groups::RankGroups;
pub use runs::{find_sequences, SequenceWindows};

use crate::cards::{Card, Rank};
use std::fmt;

/// Shortest recognized run of consecutive ranks.
pub const MIN_SEQUENCE_LEN: usize = 5;
/// Longest recognized run of consecutive ranks.
pub const MAX_SEQUENCE_LEN: usize = 12;

/// The recognized playable shapes.
///
/// Two combinations are comparable only when their shapes are equal (which
/// for `Sequence` includes the run length), with the single exception of the
/// bomb-override rule in [`crate::rules::is_legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Single,
    Pair,
    Triplet,
    Bomb,
    /// Two pairs of directly adjacent ranks (6-6-7-7).
    ConsecutivePairs,
    /// A triplet plus a pair of another rank.
    TripletWithPair,
    /// `Sequence(n)`: n consecutive ranks, 5 <= n <= 12.
    Sequence(u8),
}

impl Shape {
    /// Number of cards this shape is made of.
    pub const fn arity(self) -> usize {
        match self {
            Shape::Single => 1,
            Shape::Pair => 2,
            Shape::Triplet => 3,
            Shape::Bomb | Shape::ConsecutivePairs => 4,
            Shape::TripletWithPair => 5,
            Shape::Sequence(n) => n as usize,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Single => write!(f, "Single"),
            Shape::Pair => write!(f, "Pair"),
            Shape::Triplet => write!(f, "Triplet"),
            Shape::Bomb => write!(f, "Bomb"),
            Shape::ConsecutivePairs => write!(f, "ConsecutivePairs"),
            Shape::TripletWithPair => write!(f, "TripletWithPair"),
            Shape::Sequence(n) => write!(f, "Sequence({n})"),
        }
    }
}

/// A classified play: the cards (rank-sorted ascending), their shape, and
/// the key rank used to compare against another combination of the same
/// shape.
///
/// Combinations are ephemeral values produced by [`classify`] and consumed
/// by the comparator, enumerator, and selector; they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    cards: Vec<Card>,
    shape: Shape,
    key: Rank,
}

impl Combination {
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The rank compared across combinations of the same shape.
    pub fn key(&self) -> Rank {
        self.key
    }

    /// The cards, sorted by rank then suit.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn arity(&self) -> usize {
        self.cards.len()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.shape)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Decide whether `cards` form a recognized combination.
///
/// Suit and input order never matter; the cards are sorted internally.
/// Returns `None` for the empty selection and for any multiset that matches
/// no shape (two unrelated pairs, six unmatched cards, ...).
///
/// ```
/// use shed_rs::cards::parse_cards;
/// use shed_rs::classifier::{classify, Shape};
/// use shed_rs::cards::Rank;
///
/// let pair = classify(&parse_cards("9c 9h").unwrap()).unwrap();
/// assert_eq!(pair.shape(), Shape::Pair);
/// assert_eq!(pair.key(), Rank::Nine);
///
/// assert!(classify(&parse_cards("9c 8h").unwrap()).is_none());
/// ```
pub fn classify(cards: &[Card]) -> Option<Combination> {
    if cards.is_empty() || cards.len() > MAX_SEQUENCE_LEN {
        return None;
    }
    let mut sorted = cards.to_vec();
    sorted.sort();

    let (shape, key) = match sorted.len() {
        1 => (Shape::Single, sorted[0].rank()),
        2 if uniform_rank(&sorted) => (Shape::Pair, sorted[0].rank()),
        3 if uniform_rank(&sorted) => (Shape::Triplet, sorted[0].rank()),
        4 if uniform_rank(&sorted) => (Shape::Bomb, sorted[0].rank()),
        4 => {
            let groups = RankGroups::from_cards(&sorted);
            let pairs = groups.pairs();
            if pairs.len() == 2 && pairs[0].successor() == Some(pairs[1]) {
                (Shape::ConsecutivePairs, pairs[0])
            } else {
                return None;
            }
        }
        n @ 5..=MAX_SEQUENCE_LEN => {
            if n == 5 {
                let groups = RankGroups::from_cards(&sorted);
                let triplets = groups.triplets();
                if triplets.len() == 1 && groups.pairs().len() == 1 {
                    let trip = triplets[0];
                    return Some(Combination { cards: sorted, shape: Shape::TripletWithPair, key: trip });
                }
            }
            if consecutive_ranks(&sorted) {
                (Shape::Sequence(n as u8), sorted[0].rank())
            } else {
                return None;
            }
        }
        _ => return None,
    };

    Some(Combination { cards: sorted, shape, key })
}

fn uniform_rank(sorted: &[Card]) -> bool {
    sorted.iter().all(|c| c.rank() == sorted[0].rank())
}

/// Strictly consecutive ranks with no repeats; input must be sorted.
fn consecutive_ranks(sorted: &[Card]) -> bool {
    sorted.windows(2).all(|w| w[0].rank().successor() == Some(w[1].rank()))
}
