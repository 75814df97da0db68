//! Agents: pluggable seat controllers (the greedy bot, humans via a frontend).
//!
//! This module introduces a small trait `PlayerAgent` and a minimal manager
//! `AgentTable` that coordinates which agent controls which seat. It lives in
//! the library so frontends remain thin and do not need to implement bot
//! coordination themselves.

use crate::cards::Card;
use crate::engine::GameEngine;
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level action intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    /// Play the selected cards as a combination.
    Play(Vec<Card>),
    /// Pass the turn, clearing the table for the opponent.
    Pass,
}

/// A seat controller that can act for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `seat` is the current actor. Implementations may throttle internally.
    fn on_turn(
        &mut self,
        engine: &mut dyn GameEngine,
        seat: usize,
    ) -> Result<bool, crate::game::PlayError>;
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod bots;

pub use bots::{select_play, BotAgent, BotProfile};

/// A simple agent that executes user-intended actions when it's their turn.
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(
        &mut self,
        engine: &mut dyn GameEngine,
        seat: usize,
    ) -> Result<bool, crate::game::PlayError> {
        if engine.is_over() {
            self.pending = None;
            return Ok(false);
        }
        if engine.current() != seat {
            return Ok(false);
        }
        if let Some(act) = self.pending.take() {
            return match act {
                Action::Play(cards) => engine.action_play(&cards),
                Action::Pass => engine.action_pass(),
            }
            .map(|_| true);
        }
        Ok(false)
    }
}

/// Manages a set of optional agents, one per seat, and drives the agent at the
/// current seat when appropriate.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<char> =
            self.seats.iter().map(|a| if a.is_some() { 'B' } else { '-' }).collect();
        write!(f, "AgentTable({})", flags.into_iter().collect::<String>())
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        for _ in 0..n {
            seats.push(None);
        }
        Self { seats, min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    /// Get immutable access to an agent for inspection.
    pub fn agent(&self, seat: usize) -> Option<&dyn PlayerAgent> {
        self.seats.get(seat).and_then(|a| a.as_deref())
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an action intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, action: Action) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(action);
        }
        false
    }

    /// Whether a seat currently has an agent assigned.
    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).map(|a| a.is_some()).unwrap_or(false)
    }

    /// Whether any non-human (bot) agents are assigned.
    pub fn any_bots(&self) -> bool {
        self.seats.iter().filter_map(|a| a.as_deref()).any(|ag| matches!(ag.kind(), AgentKind::Bot))
    }

    /// Set a global minimum delay between any actions at the table.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the agent assigned to the current seat, if any.
    pub fn on_turn(
        &mut self,
        engine: &mut dyn GameEngine,
    ) -> Result<bool, crate::game::PlayError> {
        let seat = engine.current();
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            let is_bot = matches!(agent.kind(), AgentKind::Bot);
            let now = Instant::now();
            if is_bot {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine, seat)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }

    /// Remove all agents.
    pub fn clear(&mut self) {
        for a in &mut self.seats {
            *a = None;
        }
        self.next_action_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn human_agent_queues_one_intent() {
        let mut agent = HumanAgent::new();
        assert!(agent.receive(Action::Pass));
        assert!(!agent.receive(Action::Pass), "second intent rejected while one is pending");
    }

    #[test]
    fn human_agent_submits_pending_play() {
        let mut game = Game::new();
        game.new_round_seeded(11);
        let seat = game.current();
        let card = game.hand(seat)[0];

        let mut agent = HumanAgent::new();
        assert!(agent.receive(Action::Play(vec![card])));
        let acted = agent.on_turn(&mut game, seat).unwrap();
        assert!(acted);
        assert_ne!(game.current(), seat);
    }

    #[test]
    fn human_agent_errors_propagate_and_clear_intent() {
        let mut game = Game::new();
        game.new_round_seeded(11);
        let seat = game.current();
        // any opponent card is guaranteed absent from this seat's hand
        let missing = game.hand(1 - seat)[0];

        let mut agent = HumanAgent::new();
        assert!(agent.receive(Action::Play(vec![missing])));
        assert!(agent.on_turn(&mut game, seat).is_err());
        // intent was consumed; the UI may queue a new one
        assert!(agent.receive(Action::Pass));
    }

    #[test]
    fn table_ignores_empty_seats() {
        let mut game = Game::new();
        game.new_round_seeded(11);
        let mut table = AgentTable::for_seats(2);
        assert!(!table.on_turn(&mut game).unwrap());
        assert!(!table.any_bots());
    }

    #[test]
    fn table_drives_bot_at_current_seat() {
        let mut game = Game::new();
        game.new_round_seeded(11);
        let mut table = AgentTable::for_seats(2);
        table.set_agent(0, Some(Box::new(BotAgent::new(BotProfile::default().with_seed(1)))));
        table.set_agent(1, Some(Box::new(BotAgent::new(BotProfile::default().with_seed(2)))));
        assert!(table.any_bots());

        let before = game.current();
        assert!(table.on_turn(&mut game).unwrap());
        assert_ne!(game.current(), before);
    }
}
