use crate::bot;
use crate::deck::Deck;
use crate::evaluator::evaluate_five;
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::view::TableView;
use core::cmp::Ordering;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mandatory contribution from both sides before the deal.
pub const ANTE: u64 = 5;
/// Fixed bet unit; there is no raise ladder.
pub const BET_AMOUNT: u64 = 10;
pub const STARTING_CREDITS: u64 = 100;

/// Which side of the table. The player acts first in every betting round;
/// the bot replies synchronously through its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Bot,
}

impl Seat {
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Bot => 1,
        }
    }

    pub const fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Bot,
            Seat::Bot => Seat::Player,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Seat::Player => "You",
            Seat::Bot => "Bot",
        }
    }
}

/// Round phases. `Dealing` and `Showdown` are passed through synchronously;
/// the machine only rests in `Start`, the betting rounds, `Drawing`, and the
/// terminal `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Dealing,
    Betting1,
    Drawing,
    Betting2,
    Showdown,
    GameOver,
}

/// Everything the external actor can ask for. The betting subset
/// (check/bet/call/fold) is also what the bot policy chooses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deal,
    Check,
    Bet,
    Call,
    Fold,
    Draw,
}

/// Recoverable rejections. Every variant leaves the round state exactly as
/// it was; only the `Hand(Deck(..))` case aborts the hand, and it cannot
/// occur under correct sequencing of a 52-card deck.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("action not available in {0:?}")]
    WrongPhase(Phase),
    #[error("cannot check while a bet of {0} is outstanding")]
    CheckFacingBet(u64),
    #[error("cannot bet while a bet of {0} is outstanding")]
    BetFacingBet(u64),
    #[error("there is no bet to call")]
    NothingToCall,
    #[error("not enough credits: need {need}, have {have}")]
    InsufficientCredits { need: u64, have: u64 },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Heads-up five-card draw table: phase, pot, credits, both hands and the
/// deck, plus the presentation view. All mutation goes through the action
/// methods; recoverable errors never change state, and each transition is
/// atomic with the credit/pot movement it causes.
///
/// ```
/// use draw_poker::game::{Game, Phase, STARTING_CREDITS, ANTE};
/// use draw_poker::view::NullView;
///
/// let mut game = Game::with_seed(NullView, 7);
/// game.deal().unwrap();
/// assert_eq!(game.phase(), Phase::Betting1);
/// assert_eq!(game.pot(), ANTE * 2);
/// assert_eq!(game.credits(draw_poker::game::Seat::Player), STARTING_CREDITS - ANTE);
/// ```
#[derive(Debug)]
pub struct Game<V: TableView> {
    phase: Phase,
    pot: u64,
    current_bet: u64,
    credits: [u64; 2],
    deck: Deck,
    hands: [Option<Hand>; 2],
    rng: ChaCha8Rng,
    view: V,
}

impl<V: TableView> Game<V> {
    pub fn new(view: V) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(view, seed)
    }

    /// Seeded constructor: the whole session (every shuffle) replays
    /// deterministically from `seed`.
    pub fn with_seed(view: V, seed: u64) -> Self {
        Self {
            phase: Phase::Start,
            pot: 0,
            current_bet: 0,
            credits: [STARTING_CREDITS; 2],
            deck: Deck::standard(),
            hands: [None, None],
            rng: ChaCha8Rng::seed_from_u64(seed),
            view,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u64 {
        self.pot
    }
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }
    pub fn credits(&self, seat: Seat) -> u64 {
        self.credits[seat.index()]
    }
    pub fn hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands[seat.index()].as_ref()
    }
    pub fn view(&self) -> &V {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// What the player may do right now; the front-end's prompt (and the
    /// engine-side replacement for button enable/disable logic). Fold is
    /// always available while a betting round is open.
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::Start => vec![Action::Deal],
            Phase::Betting1 | Phase::Betting2 => {
                let mut actions = Vec::new();
                if self.current_bet == 0 {
                    actions.push(Action::Check);
                    if self.credits(Seat::Player) >= BET_AMOUNT {
                        actions.push(Action::Bet);
                    }
                } else if self.credits(Seat::Player) >= self.current_bet {
                    actions.push(Action::Call);
                }
                actions.push(Action::Fold);
                actions
            }
            Phase::Drawing => vec![Action::Draw],
            Phase::Dealing | Phase::Showdown | Phase::GameOver => Vec::new(),
        }
    }

    /// Start a hand: collect antes, shuffle a fresh deck, deal five cards to
    /// each side and open the first betting round. If either side cannot
    /// cover the ante the game ends instead (reported, not an error).
    pub fn deal(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Start => {}
            Phase::GameOver => return Err(ActionError::GameOver),
            other => return Err(ActionError::WrongPhase(other)),
        }
        if self.credits(Seat::Player) < ANTE || self.credits(Seat::Bot) < ANTE {
            self.phase = Phase::GameOver;
            self.view.post_message("Not enough credits for ante! Game over.", false);
            return Ok(());
        }

        self.phase = Phase::Dealing;
        self.credits[Seat::Player.index()] -= ANTE;
        self.credits[Seat::Bot.index()] -= ANTE;
        self.pot = ANTE * 2;
        self.current_bet = 0;
        self.push_totals();
        self.view.post_message(&format!("Ante {ANTE} paid. Shuffling and dealing..."), false);

        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        self.deck = deck;
        self.hands[Seat::Player.index()] = Some(self.next_hand()?);
        self.hands[Seat::Bot.index()] = Some(self.next_hand()?);
        self.render(Seat::Player, false);
        self.render(Seat::Bot, true);

        self.phase = Phase::Betting1;
        self.view.post_message("Your turn to bet.", false);
        Ok(())
    }

    /// Pass without betting. Legal only while no bet is outstanding; hands
    /// the turn to the bot, and a mutual check closes the round.
    pub fn action_check(&mut self) -> Result<(), ActionError> {
        self.ensure_betting()?;
        if self.current_bet > 0 {
            return Err(ActionError::CheckFacingBet(self.current_bet));
        }
        self.view.post_message("You CHECK.", false);
        self.bot_betting_turn()
    }

    /// Open the betting at the fixed unit. The bot then calls, folds, or the
    /// round ends.
    pub fn action_bet(&mut self) -> Result<(), ActionError> {
        self.ensure_betting()?;
        if self.current_bet > 0 {
            return Err(ActionError::BetFacingBet(self.current_bet));
        }
        self.debit(Seat::Player, BET_AMOUNT)?;
        self.current_bet = BET_AMOUNT;
        self.push_totals();
        self.view.post_message(&format!("You BET {BET_AMOUNT}."), false);
        self.bot_betting_turn()
    }

    /// Match the outstanding bet, which ends the betting round: on to the
    /// draw after round one, to showdown after round two.
    pub fn action_call(&mut self) -> Result<(), ActionError> {
        self.ensure_betting()?;
        if self.current_bet == 0 {
            return Err(ActionError::NothingToCall);
        }
        let amount = self.current_bet;
        self.debit(Seat::Player, amount)?;
        self.push_totals();
        self.view.post_message(&format!("You CALL {amount}."), false);
        self.end_betting_round()
    }

    /// Concede the hand. The whole pot goes to the bot and the table is
    /// ready for the next deal (or the game ends on a short ante).
    pub fn action_fold(&mut self) -> Result<(), ActionError> {
        self.ensure_betting()?;
        self.view.post_message("You FOLD.", false);
        self.award_pot(Seat::Bot);
        self.finish_hand();
        Ok(())
    }

    /// Exchange the selected cards (0-5 of them), then let the bot draw, and
    /// open the second betting round. A rejected selection changes nothing.
    pub fn action_draw(&mut self, discards: &[usize]) -> Result<(), ActionError> {
        match self.phase {
            Phase::Drawing => {}
            Phase::GameOver => return Err(ActionError::GameOver),
            other => return Err(ActionError::WrongPhase(other)),
        }
        let hand = self.hands[Seat::Player.index()]
            .as_mut()
            .ok_or(ActionError::WrongPhase(Phase::Drawing))?;
        let n = hand.exchange(discards, &mut self.deck)?;
        self.view.post_message(&format!("You discard {n} card{}.", plural(n)), false);
        self.render(Seat::Player, false);
        self.bot_draw()?;

        self.phase = Phase::Betting2;
        self.current_bet = 0;
        self.view.post_message("Second betting round. Your turn.", false);
        Ok(())
    }

    fn bot_betting_turn(&mut self) -> Result<(), ActionError> {
        let eval = evaluate_five(&self.seat_hand(Seat::Bot)?.as_array());
        match bot::betting_action(&eval, self.current_bet, self.credits(Seat::Bot)) {
            Action::Check => {
                self.view.post_message("Bot CHECKS.", false);
                self.end_betting_round()
            }
            Action::Bet => {
                self.debit(Seat::Bot, BET_AMOUNT)?;
                self.current_bet = BET_AMOUNT;
                self.push_totals();
                self.view.post_message(&format!("Bot BETS {BET_AMOUNT}."), false);
                // The player now has to call or fold.
                Ok(())
            }
            Action::Call => {
                let amount = self.current_bet;
                self.debit(Seat::Bot, amount)?;
                self.push_totals();
                self.view.post_message(&format!("Bot CALLS {amount}."), false);
                self.end_betting_round()
            }
            Action::Fold => {
                self.view.post_message("Bot FOLDS.", false);
                self.award_pot(Seat::Player);
                self.finish_hand();
                Ok(())
            }
            // The betting policy never yields these.
            Action::Deal | Action::Draw => Err(ActionError::WrongPhase(self.phase)),
        }
    }

    fn bot_draw(&mut self) -> Result<(), ActionError> {
        let hand = self.seat_hand(Seat::Bot)?;
        let eval = evaluate_five(&hand.as_array());
        let discards = bot::discard_indices(hand.cards(), &eval);
        let hand = self.hands[Seat::Bot.index()]
            .as_mut()
            .ok_or(ActionError::WrongPhase(Phase::Drawing))?;
        let n = hand.exchange(&discards, &mut self.deck)?;
        self.view.post_message(&format!("Bot discards {n} card{}.", plural(n)), true);
        Ok(())
    }

    fn end_betting_round(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Betting1 => {
                self.phase = Phase::Drawing;
                self.current_bet = 0;
                self.view.post_message("Select cards to discard (0-5), then draw.", false);
                self.render(Seat::Player, false);
                Ok(())
            }
            Phase::Betting2 => self.showdown(),
            other => Err(ActionError::WrongPhase(other)),
        }
    }

    fn showdown(&mut self) -> Result<(), ActionError> {
        self.phase = Phase::Showdown;
        self.view.post_message("Showdown!", false);
        self.render(Seat::Bot, false);

        let player_eval = evaluate_five(&self.seat_hand(Seat::Player)?.as_array());
        let bot_eval = evaluate_five(&self.seat_hand(Seat::Bot)?.as_array());
        self.view.post_message(&format!("Your hand: {}", player_eval.category), true);
        self.view.post_message(&format!("Bot hand: {}", bot_eval.category), true);

        let pot = self.pot;
        match player_eval.cmp(&bot_eval) {
            Ordering::Greater => {
                self.credits[Seat::Player.index()] += pot;
                self.view.post_message(&format!("YOU WIN the pot of {pot}!"), true);
            }
            Ordering::Less => {
                self.credits[Seat::Bot.index()] += pot;
                self.view.post_message(&format!("Bot wins the pot of {pot}."), true);
            }
            Ordering::Equal => {
                // The player initiated the round, so the responder (bot)
                // takes the odd credit. Observable rule, not a convenience.
                self.credits[Seat::Player.index()] += pot / 2;
                self.credits[Seat::Bot.index()] += pot - pot / 2;
                self.view.post_message(&format!("It's a TIE! Pot of {pot} is split."), true);
            }
        }
        self.pot = 0;
        self.push_totals();
        self.finish_hand();
        Ok(())
    }

    /// Transfer the whole pot to one side, e.g. after a fold.
    fn award_pot(&mut self, seat: Seat) {
        self.credits[seat.index()] += self.pot;
        self.pot = 0;
        self.push_totals();
    }

    fn finish_hand(&mut self) {
        self.current_bet = 0;
        if self.credits(Seat::Player) < ANTE || self.credits(Seat::Bot) < ANTE {
            self.phase = Phase::GameOver;
            let broke =
                if self.credits(Seat::Player) < ANTE { "You're" } else { "Bot is" };
            self.view.post_message(&format!("GAME OVER - {broke} out of credits!"), true);
        } else {
            self.phase = Phase::Start;
            self.view.post_message("Deal again?", true);
        }
    }

    fn ensure_betting(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Betting1 | Phase::Betting2 => Ok(()),
            Phase::GameOver => Err(ActionError::GameOver),
            other => Err(ActionError::WrongPhase(other)),
        }
    }

    fn debit(&mut self, seat: Seat, amount: u64) -> Result<(), ActionError> {
        let have = self.credits[seat.index()];
        if have < amount {
            return Err(ActionError::InsufficientCredits { need: amount, have });
        }
        self.credits[seat.index()] -= amount;
        self.pot += amount;
        Ok(())
    }

    fn next_hand(&mut self) -> Result<Hand, ActionError> {
        let cards = self.deck.deal(HAND_SIZE).map_err(HandError::from)?;
        Ok(Hand::new(cards)?)
    }

    fn seat_hand(&self, seat: Seat) -> Result<&Hand, ActionError> {
        self.hands[seat.index()].as_ref().ok_or(ActionError::WrongPhase(self.phase))
    }

    fn render(&mut self, seat: Seat, face_down: bool) {
        if let Some(hand) = self.hands[seat.index()].as_ref() {
            self.view.render_hand(seat, hand.cards(), face_down);
        }
    }

    fn push_totals(&mut self) {
        self.view.update_totals(self.pot, self.credits(Seat::Player), self.credits(Seat::Bot));
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
