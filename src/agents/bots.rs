use crate::cards::Card;
use crate::classifier::{classify, Combination, RankGroups, SequenceWindows};
use crate::engine::GameEngine;
use crate::responses::{enumerate_responses, take_of_rank};
use crate::rules::TableState;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};

use super::{AgentKind, PlayerAgent};

/// Configuration for a bot's pacing and randomness.
///
/// The play policy itself is fixed (see [`select_play`]); the profile only
/// controls the simulated thinking delay and the RNG seed behind it.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Set a deterministic RNG seed for reproducible pacing.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self { min_delay_ms: 0, max_delay_ms: 0, rng_seed: None }
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// The greedy play policy: pick the first combination the fixed priority
/// order produces, or `None` to pass.
///
/// Responding to an active combination, the bot takes the first legal answer
/// from [`enumerate_responses`] — so it spends a bomb before raising a pair
/// it could beat more cheaply. Leading onto an open table it plays, in
/// order: the lowest bomb, triplet, or pair it holds, then the shortest
/// lowest sequence, then a triplet-with-pair, then consecutive pairs, and
/// finally its single lowest card. There is no lookahead and no attempt to
/// preserve strong cards.
///
/// `None` with a non-empty hand means pass; leading never passes, since the
/// lowest single is always available.
///
/// ```
/// use shed_rs::agents::select_play;
/// use shed_rs::cards::parse_cards;
/// use shed_rs::classifier::Shape;
/// use shed_rs::rules::TableState;
///
/// let hand = parse_cards("3c 3d Kc").unwrap();
/// let lead = select_play(&hand, &TableState::open()).unwrap();
/// assert_eq!(lead.shape(), Shape::Pair);
/// ```
pub fn select_play(hand: &[Card], table: &TableState) -> Option<Combination> {
    if hand.is_empty() {
        return None;
    }
    if !table.is_open() {
        return enumerate_responses(hand, table).into_iter().next();
    }

    let mut sorted = hand.to_vec();
    sorted.sort();
    let groups = RankGroups::from_cards(&sorted);

    if let Some(&rank) = groups.bombs().first() {
        return classify(&take_of_rank(&sorted, rank, 4));
    }
    if let Some(&rank) = groups.triplets().first() {
        return classify(&take_of_rank(&sorted, rank, 3));
    }
    if let Some(&rank) = groups.pairs().first() {
        return classify(&take_of_rank(&sorted, rank, 2));
    }
    if let Some(run) = SequenceWindows::new(&sorted).next() {
        return Some(run);
    }
    if let (Some(&trip), Some(&pair)) = (groups.triplets().first(), groups.pairs().first()) {
        let mut cards = take_of_rank(&sorted, trip, 3);
        cards.extend(take_of_rank(&sorted, pair, 2));
        if let Some(combo) = classify(&cards) {
            return Some(combo);
        }
    }
    if let Some(&lower) = groups.consecutive_pair_starts().first() {
        let mut cards = take_of_rank(&sorted, lower, 2);
        if let Some(upper) = lower.successor() {
            cards.extend(take_of_rank(&sorted, upper, 2));
        }
        if let Some(combo) = classify(&cards) {
            return Some(combo);
        }
    }
    classify(&sorted[..1])
}

/// The built-in opponent: applies [`select_play`] with optional pacing.
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
    next_action_at: Option<Instant>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state, next_action_at: None }
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(
        &mut self,
        engine: &mut dyn GameEngine,
        seat: usize,
    ) -> Result<bool, crate::game::PlayError> {
        if engine.is_over() {
            return Ok(false);
        }
        if engine.current() != seat {
            return Ok(false);
        }
        let now = Instant::now();
        let delay = choose_delay_ms(&self.profile, &mut self.state);
        if delay > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(delay));
                    return Ok(false);
                }
                Some(next) if now < next => {
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        let hand = engine.hand(seat).to_vec();
        let play = select_play(&hand, engine.table());
        match play {
            Some(combo) => engine.action_play(combo.cards()),
            None => engine.action_pass(),
        }
        .map(|_| true)
    }
}

fn choose_delay_ms(profile: &BotProfile, state: &mut BotState) -> u64 {
    let min = profile.min_delay_ms;
    let max = profile.max_delay_ms.max(min);
    if max == min {
        min
    } else {
        state.rng.random_range(min..=max)
    }
}
