use crate::cards::{Card, Rank};
use crate::classifier::{classify, Combination, RankGroups, SequenceWindows};
use crate::rules::{is_legal, TableState};

/// Every combination in `hand` that may legally be played onto `table`.
///
/// Candidates are generated per shape family and filtered through
/// [`is_legal`], so against an open table this is every combination the
/// hand can form. The result order is fixed: Bomb, Triplet, Pair, Sequence
/// (in [`SequenceWindows`] order), TripletWithPair, ConsecutivePairs,
/// Single — each family ascending by rank. The AI takes the first element,
/// which makes this order part of the observable behavior.
///
/// An empty result is the "must pass" signal, not an error.
///
/// ```
/// use shed_rs::cards::parse_cards;
/// use shed_rs::classifier::classify;
/// use shed_rs::responses::enumerate_responses;
/// use shed_rs::rules::TableState;
///
/// let table = TableState::with_current(
///     classify(&parse_cards("7c 7d").unwrap()).unwrap(),
/// );
/// let hand = parse_cards("5c 5d 9h 9s Kc").unwrap();
/// let plays = enumerate_responses(&hand, &table);
/// assert_eq!(plays.len(), 1);
/// assert_eq!(plays[0].cards()[0].to_string(), "9h");
/// ```
pub fn enumerate_responses(hand: &[Card], table: &TableState) -> Vec<Combination> {
    let mut sorted = hand.to_vec();
    sorted.sort();
    let groups = RankGroups::from_cards(&sorted);

    let mut candidates: Vec<Combination> = Vec::new();
    let mut push = |cards: Vec<Card>, candidates: &mut Vec<Combination>| {
        if let Some(combo) = classify(&cards) {
            candidates.push(combo);
        }
    };

    for rank in groups.bombs() {
        push(take_of_rank(&sorted, rank, 4), &mut candidates);
    }
    for rank in groups.triplets() {
        push(take_of_rank(&sorted, rank, 3), &mut candidates);
    }
    for rank in groups.pairs() {
        push(take_of_rank(&sorted, rank, 2), &mut candidates);
    }
    candidates.extend(SequenceWindows::new(&sorted));
    for trip in groups.triplets() {
        for pair in groups.pairs() {
            let mut cards = take_of_rank(&sorted, trip, 3);
            cards.extend(take_of_rank(&sorted, pair, 2));
            push(cards, &mut candidates);
        }
    }
    for lower in groups.consecutive_pair_starts() {
        let mut cards = take_of_rank(&sorted, lower, 2);
        if let Some(upper) = lower.successor() {
            cards.extend(take_of_rank(&sorted, upper, 2));
        }
        push(cards, &mut candidates);
    }
    for &card in &sorted {
        push(vec![card], &mut candidates);
    }

    candidates.retain(|combo| is_legal(combo, table));
    candidates
}

/// First `n` cards of `rank` from a sorted hand.
pub(crate) fn take_of_rank(sorted: &[Card], rank: Rank, n: usize) -> Vec<Card> {
    sorted.iter().filter(|c| c.rank() == rank).take(n).copied().collect()
}
