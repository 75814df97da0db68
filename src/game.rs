use crate::cards::{Card, Rank, Suit};
use crate::classifier::{classify, Combination};
use crate::deck::{Deck, CARDS_PER_PLAYER};
use crate::rules::{is_legal, TableState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Why a submitted play was rejected. The game state is untouched when any
/// of these is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("the round is over")]
    RoundOver,
    #[error("no cards selected")]
    EmptySelection,
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
    #[error("selected cards do not form a playable combination")]
    UnrecognizedShape,
    #[error("combination does not beat the one on the table")]
    DoesNotBeatTable,
}

/// One entry in the round's event log, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    Played { seat: usize, combination: Combination },
    Passed { seat: usize },
    HandEmptied { seat: usize },
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Card>,
}

impl Player {
    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand, sorted by rank then suit
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub(crate) fn receive(&mut self, cards: Vec<Card>) {
        for card in cards {
            debug_assert!(!self.hand.contains(&card));
            self.hand.push(card);
        }
        self.hand.sort();
    }

    /// Check the hand contains every card in `cards`, counting duplicates.
    /// Returns the first missing card on failure.
    pub(crate) fn holds_all(&self, cards: &[Card]) -> Result<(), Card> {
        let mut pool = self.hand.clone();
        for card in cards {
            match pool.iter().position(|c| c == card) {
                Some(i) => {
                    pool.swap_remove(i);
                }
                None => return Err(*card),
            }
        }
        Ok(())
    }

    /// Remove exactly the given cards. Callers validate with `holds_all`
    /// first.
    pub(crate) fn remove_exact(&mut self, cards: &[Card]) {
        for card in cards {
            if let Some(i) = self.hand.iter().position(|c| c == card) {
                self.hand.remove(i);
            }
        }
    }
}

/// A two-player round: hands, the table, whose turn it is, and the event
/// log. Rule questions are delegated to the classifier and comparator; this
/// type only owns state transitions.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) talon: Vec<Card>,
    pub(crate) table: TableState,
    pub(crate) current: usize,
    pub(crate) winner: Option<usize>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new() -> Self {
        let players = ["Player", "Computer"]
            .into_iter()
            .map(|name| Player { name: name.to_string(), hand: Vec::new() })
            .collect();
        Self {
            deck: Deck::standard(),
            players,
            talon: Vec::new(),
            table: TableState::open(),
            current: 0,
            winner: None,
            events: Vec::new(),
        }
    }

    /// Returns the players at the table
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns a seat's hand
    pub fn hand(&self, seat: usize) -> &[Card] {
        &self.players[seat].hand
    }

    /// Returns the combination currently to beat, if any
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Returns the seat whose turn it is
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the winning seat once a hand has been emptied
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Cards dealt to neither player this round
    pub fn talon(&self) -> &[Card] {
        &self.talon
    }

    /// The full event log for the current round, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn events_recent(&self, n: usize) -> Vec<GameEvent> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.events.len();
        let start = len.saturating_sub(n);
        self.events[start..].to_vec()
    }

    /// Start a fresh round with a randomly shuffled deck.
    pub fn new_round(&mut self) {
        let mut rng = rand::rng();
        self.start_round(&mut rng);
    }

    /// Start a fresh round with a deterministic shuffle.
    pub fn new_round_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.start_round(&mut rng);
    }

    fn start_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck = Deck::standard();
        self.deck.shuffle_with(rng);
        self.table = TableState::open();
        self.events.clear();
        self.winner = None;

        for player in &mut self.players {
            player.hand.clear();
        }
        for seat in 0..self.players.len() {
            let dealt = self.deck.draw_n(CARDS_PER_PLAYER);
            self.players[seat].receive(dealt);
        }
        self.talon = self.deck.draw_n(self.deck.len());

        // the Three of Spades leads; a random seat does if nobody holds it
        let opener = Card::new(Rank::Three, Suit::Spades);
        self.current = self
            .players
            .iter()
            .position(|p| p.hand.contains(&opener))
            .unwrap_or_else(|| rng.random_range(0..self.players.len()));
    }

    /// Play `cards` for the current seat.
    ///
    /// Validation happens before any state changes, so a rejected play
    /// leaves the round exactly as it was.
    pub fn action_play(&mut self, cards: &[Card]) -> Result<(), PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::RoundOver);
        }
        if cards.is_empty() {
            return Err(PlayError::EmptySelection);
        }
        let seat = self.current;
        self.players[seat].holds_all(cards).map_err(PlayError::CardNotInHand)?;
        let combo = classify(cards).ok_or(PlayError::UnrecognizedShape)?;
        if !is_legal(&combo, &self.table) {
            return Err(PlayError::DoesNotBeatTable);
        }

        self.players[seat].remove_exact(combo.cards());
        self.table.set(combo.clone());
        self.events.push(GameEvent::Played { seat, combination: combo });
        if self.players[seat].hand.is_empty() {
            self.winner = Some(seat);
            self.events.push(GameEvent::HandEmptied { seat });
        } else {
            self.advance();
        }
        Ok(())
    }

    /// Pass the turn. Passing clears the table, so the opponent leads onto
    /// an open table. Always permitted while the round is live.
    pub fn action_pass(&mut self) -> Result<(), PlayError> {
        if self.winner.is_some() {
            return Err(PlayError::RoundOver);
        }
        let seat = self.current;
        self.table.clear();
        self.events.push(GameEvent::Passed { seat });
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::classifier::Shape;

    fn seeded() -> Game {
        let mut game = Game::new();
        game.new_round_seeded(7);
        game
    }

    #[test]
    fn deal_shape() {
        let game = seeded();
        assert_eq!(game.players().len(), 2);
        assert_eq!(game.hand(0).len(), CARDS_PER_PLAYER);
        assert_eq!(game.hand(1).len(), CARDS_PER_PLAYER);
        assert_eq!(game.talon().len(), 52 - 2 * CARDS_PER_PLAYER);
        assert!(game.table().is_open());
        assert!(game.winner().is_none());
    }

    #[test]
    fn hands_are_sorted_and_disjoint() {
        let game = seeded();
        for seat in 0..2 {
            let hand = game.hand(seat);
            assert!(hand.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(game.hand(0).iter().all(|c| !game.hand(1).contains(c)));
    }

    #[test]
    fn three_of_spades_holder_opens() {
        let game = seeded();
        let opener = Card::new(Rank::Three, Suit::Spades);
        let holder = (0..2).find(|&s| game.hand(s).contains(&opener));
        if let Some(seat) = holder {
            assert_eq!(game.current(), seat);
        }
    }

    #[test]
    fn seeded_rounds_reproduce() {
        let a = seeded();
        let b = seeded();
        assert_eq!(a.hand(0), b.hand(0));
        assert_eq!(a.hand(1), b.hand(1));
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn playing_moves_cards_to_table() {
        let mut game = seeded();
        let seat = game.current();
        let card = game.hand(seat)[0];
        game.action_play(&[card]).unwrap();

        assert!(!game.hand(seat).contains(&card));
        assert_eq!(game.hand(seat).len(), CARDS_PER_PLAYER - 1);
        let current = game.table().current().unwrap();
        assert_eq!(current.shape(), Shape::Single);
        assert_eq!(current.cards(), &[card]);
        assert_ne!(game.current(), seat);
        assert_eq!(game.events().len(), 1);
    }

    #[test]
    fn rejected_play_changes_nothing() {
        let mut game = seeded();
        let seat = game.current();
        let before = game.hand(seat).to_vec();

        // the opponent's cards are never in this hand
        let missing = game.hand(1 - seat)[0];
        assert_eq!(game.action_play(&[missing]), Err(PlayError::CardNotInHand(missing)));
        assert_eq!(game.action_play(&[]), Err(PlayError::EmptySelection));

        assert_eq!(game.hand(seat), before.as_slice());
        assert_eq!(game.current(), seat);
        assert!(game.events().is_empty());
    }

    #[test]
    fn mismatched_cards_are_unrecognized() {
        let mut game = seeded();
        let seat = game.current();
        let hand = game.hand(seat).to_vec();
        // two cards of different ranks never classify
        let pick = hand
            .iter()
            .find(|c| c.rank() != hand[0].rank())
            .map(|&c| vec![hand[0], c]);
        if let Some(cards) = pick {
            assert_eq!(game.action_play(&cards), Err(PlayError::UnrecognizedShape));
        }
    }

    #[test]
    fn pass_clears_table_and_yields_turn() {
        let mut game = seeded();
        let seat = game.current();
        let card = game.hand(seat)[0];
        game.action_play(&[card]).unwrap();

        let passer = game.current();
        game.action_pass().unwrap();
        assert!(game.table().is_open());
        assert_eq!(game.current(), seat);
        assert_eq!(game.events_recent(1), vec![GameEvent::Passed { seat: passer }]);
    }

    #[test]
    fn emptied_hand_wins_and_freezes_the_round() {
        let mut game = Game::new();
        game.new_round_seeded(7);
        let seat = game.current();
        game.players[seat].hand = parse_cards("9c").unwrap();
        game.action_play(&[Card::new(Rank::Nine, Suit::Clubs)]).unwrap();

        assert_eq!(game.winner(), Some(seat));
        assert!(game.is_over());
        assert_eq!(
            game.events_recent(1),
            vec![GameEvent::HandEmptied { seat }]
        );
        assert_eq!(game.action_pass(), Err(PlayError::RoundOver));
        assert_eq!(
            game.action_play(&parse_cards("3c").unwrap()),
            Err(PlayError::RoundOver)
        );
    }

    #[test]
    fn lower_play_is_rejected_against_the_table() {
        let mut game = Game::new();
        game.new_round_seeded(7);
        let seat = game.current();
        game.players[seat].hand = parse_cards("Kc Kd 4h").unwrap();
        game.action_play(&parse_cards("Kc Kd").unwrap()).unwrap();

        let other = game.current();
        game.players[other].hand = parse_cards("5c 5d 9h").unwrap();
        assert_eq!(
            game.action_play(&parse_cards("5c 5d").unwrap()),
            Err(PlayError::DoesNotBeatTable)
        );
        assert_eq!(game.current(), other);
    }
}
