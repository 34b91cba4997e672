//! Presentation seam. The engine never touches a screen; it narrates the
//! round through this trait and front-ends decide what to do with it. A
//! front-end that also takes input reads [`crate::game::Game::legal_actions`]
//! and calls the action methods, so the engine stays synchronous and
//! single-threaded while all pacing lives on the presentation side.

use crate::cards::Card;
use crate::game::Seat;

/// Callbacks a table front-end receives from the engine.
pub trait TableView {
    /// Show one side's hand. `face_down` hides the bot's cards until showdown.
    fn render_hand(&mut self, seat: Seat, cards: &[Card], face_down: bool);

    /// One human-readable event line; `append` continues the current notice.
    fn post_message(&mut self, text: &str, append: bool);

    /// Displayed totals changed.
    fn update_totals(&mut self, pot: u64, player_credits: u64, bot_credits: u64);
}

/// Headless view for tests and simulations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl TableView for NullView {
    fn render_hand(&mut self, _seat: Seat, _cards: &[Card], _face_down: bool) {}
    fn post_message(&mut self, _text: &str, _append: bool) {}
    fn update_totals(&mut self, _pot: u64, _player_credits: u64, _bot_credits: u64) {}
}
