// Minimal game engine API boundary. This trait exposes the core actions and
// queries so frontends and bots can drive a round without depending on the
// concrete game type. It is implemented for the core `Game` type.

use crate::cards::Card;
use crate::rules::TableState;

pub trait GameEngine {
    // Round lifecycle
    fn new_round(&mut self);

    // Player actions
    fn action_play(&mut self, cards: &[Card]) -> Result<(), crate::game::PlayError>;
    fn action_pass(&mut self) -> Result<(), crate::game::PlayError>;

    // Queries
    fn table(&self) -> &TableState;
    fn hand(&self, seat: usize) -> &[Card];
    fn current(&self) -> usize;
    fn num_players(&self) -> usize;
    fn winner(&self) -> Option<usize>;
    fn is_over(&self) -> bool;
}

impl GameEngine for crate::game::Game {
    fn new_round(&mut self) {
        self.new_round();
    }

    fn action_play(&mut self, cards: &[Card]) -> Result<(), crate::game::PlayError> {
        self.action_play(cards)
    }
    fn action_pass(&mut self) -> Result<(), crate::game::PlayError> {
        self.action_pass()
    }

    fn table(&self) -> &TableState {
        self.table()
    }
    fn hand(&self, seat: usize) -> &[Card] {
        &self.players[seat].hand
    }
    fn current(&self) -> usize {
        self.current
    }
    fn num_players(&self) -> usize {
        self.players.len()
    }
    fn winner(&self) -> Option<usize> {
        self.winner
    }
    fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
