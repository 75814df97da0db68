//! shed-rs: rule engine and greedy AI for a two-player shedding card game
//!
//! Goals:
//! - Deterministic classification and legality checks over a 52-card deck
//!   ranked Three (low) through Two (high)
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify, compare, select
//! ```
//! use shed_rs::agents::select_play;
//! use shed_rs::cards::parse_cards;
//! use shed_rs::classifier::{classify, Shape};
//! use shed_rs::rules::{is_legal, TableState};
//!
//! let sevens = classify(&parse_cards("7c 7d").unwrap()).unwrap();
//! assert_eq!(sevens.shape(), Shape::Pair);
//!
//! let table = TableState::with_current(sevens);
//! let nines = classify(&parse_cards("9c 9d").unwrap()).unwrap();
//! assert!(is_legal(&nines, &table));
//!
//! // the greedy opponent answers with its first legal response
//! let hand = parse_cards("5c 5d 9h 9s Kc").unwrap();
//! let play = select_play(&hand, &table).unwrap();
//! assert_eq!(play.key(), shed_rs::cards::Rank::Nine);
//! ```
//!
//! ## Simulation
//! Watch two bots play a seeded round with:
//! ```sh
//! cargo run --bin shed-rs
//! ```

pub mod agents;
pub mod cards;
pub mod classifier;
pub mod deck;
pub mod engine;
pub mod game;
pub mod responses;
pub mod rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
