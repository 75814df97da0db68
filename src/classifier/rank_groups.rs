use crate::cards::{Card, Rank};

/// Groups the ranks present in a set of cards by their exact count, in
/// ascending rank order.
///
/// Shedding logic always wants the cheapest group first, so the groups are
/// never reordered by count; callers query for an exact group size instead.
/// A rank held four times is a bomb group only: it is not also reported as a
/// pair or triplet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Group the given cards by rank. Input order does not matter.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; Rank::MAX_VALUE + 1];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Create RankGroups from a rank count array indexed by `Rank::value()`.
    pub fn from_counts(counts: &[u8; Rank::MAX_VALUE + 1]) -> Self {
        let mut groups = Vec::new();
        for rank in Rank::ALL.iter().copied() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }
        Self { groups }
    }

    /// Ranks held exactly `n` times, in ascending rank order.
    pub fn of_size(&self, n: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == n).map(|(rank, _)| *rank).collect()
    }

    /// Ranks held as exactly a pair.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_size(2)
    }

    /// Ranks held as exactly a triplet.
    pub fn triplets(&self) -> Vec<Rank> {
        self.of_size(3)
    }

    /// Ranks held all four times.
    pub fn bombs(&self) -> Vec<Rank> {
        self.of_size(4)
    }

    /// Lower ranks of each adjacent pair-of-pairs (e.g. 6-6-7-7 yields Six),
    /// ascending.
    pub fn consecutive_pair_starts(&self) -> Vec<Rank> {
        let pairs = self.pairs();
        pairs
            .iter()
            .filter(|r| r.successor().is_some_and(|next| pairs.contains(&next)))
            .copied()
            .collect()
    }

    /// Number of distinct ranks present.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// (rank, count) groups in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.groups.iter().copied()
    }
}
