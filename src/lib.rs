//! draw-poker: heads-up five-card draw against a scripted opponent
//!
//! Goals:
//! - Deterministic round engine: ante, deal, bet, draw, bet, showdown
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play one street headlessly
//! ```
//! use draw_poker::game::{Game, Phase, Seat, ANTE, STARTING_CREDITS};
//! use draw_poker::view::NullView;
//!
//! let mut game = Game::with_seed(NullView, 42);
//! game.deal().unwrap();
//!
//! assert_eq!(game.phase(), Phase::Betting1);
//! assert_eq!(game.pot(), ANTE * 2);
//! assert_eq!(game.credits(Seat::Player), STARTING_CREDITS - ANTE);
//! assert_eq!(game.hand(Seat::Player).unwrap().cards().len(), 5);
//! ```
//!
//! ## CLI
//! Run the interactive console table with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod bot;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
