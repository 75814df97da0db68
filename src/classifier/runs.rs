use super::{classify, Combination, Shape, MAX_SEQUENCE_LEN, MIN_SEQUENCE_LEN};
use crate::cards::Card;

/// Iterator over every run of consecutive ranks in a hand, as sliding
/// windows of the rank-sorted hand.
///
/// Windows are visited by increasing length (5 up to 12), then by increasing
/// start index, and only windows that classify as a Sequence are yielded. A
/// hand holding a 7-long run therefore yields its length-5 windows first,
/// then length-6, then the full run. The AI's "first match" lead behavior
/// depends on this order.
///
/// ```
/// use shed_rs::cards::parse_cards;
/// use shed_rs::classifier::SequenceWindows;
///
/// let hand = parse_cards("5c 6d 7h 8s 9c 10d").unwrap();
/// let first = SequenceWindows::new(&hand).next().unwrap();
/// assert_eq!(first.cards().len(), 5);
/// assert_eq!(first.cards()[0].to_string(), "5c");
/// ```
pub struct SequenceWindows {
    sorted: Vec<Card>,
    len: usize,
    start: usize,
}

impl SequenceWindows {
    pub fn new(hand: &[Card]) -> Self {
        let mut sorted = hand.to_vec();
        sorted.sort();
        Self { sorted, len: MIN_SEQUENCE_LEN, start: 0 }
    }
}

impl Iterator for SequenceWindows {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        while self.len <= MAX_SEQUENCE_LEN && self.len <= self.sorted.len() {
            while self.start + self.len <= self.sorted.len() {
                let window = &self.sorted[self.start..self.start + self.len];
                self.start += 1;
                if let Some(combo) = classify(window) {
                    if matches!(combo.shape(), Shape::Sequence(_)) {
                        return Some(combo);
                    }
                }
            }
            self.start = 0;
            self.len += 1;
        }
        None
    }
}

/// Collect every valid sequence window in the hand, shortest first.
pub fn find_sequences(hand: &[Card]) -> Vec<Combination> {
    SequenceWindows::new(hand).collect()
}
