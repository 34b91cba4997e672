//! The automated opponent: two pure decision functions consuming a hand
//! evaluation and table state. The state machine calls them synchronously
//! when the turn passes to the bot; they never mutate anything.

use crate::cards::Card;
use crate::evaluator::{Category, Evaluation};
use crate::game::{Action, BET_AMOUNT};

/// Pick the bot's betting action. With no outstanding bet it bets any pair
/// or better (credits permitting) and checks the rest; facing a bet it calls
/// with a pair or better and otherwise folds.
pub fn betting_action(eval: &Evaluation, current_bet: u64, credits: u64) -> Action {
    if current_bet > 0 {
        if eval.category >= Category::Pair && credits >= current_bet {
            Action::Call
        } else if eval.category < Category::Pair && credits >= current_bet * 2 {
            // Reserved for a bluff raise that was never wired up; it folds
            // exactly like the arm below, so the bot never bluffs. Kept as-is
            // rather than quietly changing the odds.
            Action::Fold
        } else {
            Action::Fold
        }
    } else if eval.category >= Category::Pair && credits >= BET_AMOUNT {
        Action::Bet
    } else {
        Action::Check
    }
}

/// Pick which cards the bot exchanges in the draw phase: keep the made
/// hand's core and ditch the rest.
///
/// - four of a kind: discard the kicker
/// - full house, flush, straight, straight flush, royal flush: stand pat
/// - three of a kind: discard both kickers
/// - two pair: discard the kicker
/// - pair: discard the three kickers
/// - high card: discard the three lowest cards
pub fn discard_indices(cards: &[Card], eval: &Evaluation) -> Vec<usize> {
    match eval.category {
        Category::FullHouse
        | Category::Flush
        | Category::Straight
        | Category::StraightFlush
        | Category::RoyalFlush => Vec::new(),
        Category::FourOfAKind | Category::ThreeOfAKind | Category::Pair => {
            // tiebreak[0] is the rank of the quad/trips/pair.
            cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.rank().value() != eval.tiebreak[0])
                .map(|(i, _)| i)
                .collect()
        }
        Category::TwoPair => {
            // tiebreak[2] is the lone kicker.
            cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.rank().value() == eval.tiebreak[2])
                .map(|(i, _)| i)
                .collect()
        }
        Category::HighCard => {
            let mut by_rank: Vec<usize> = (0..cards.len()).collect();
            by_rank.sort_by_key(|&i| cards[i].rank());
            by_rank.truncate(3);
            by_rank
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate_five;
    use crate::game::ANTE;

    fn eval_of(s: &str) -> (Vec<Card>, Evaluation) {
        let cards = parse_cards(s).unwrap();
        let arr: [Card; 5] = cards.clone().try_into().unwrap();
        (cards, evaluate_five(&arr))
    }

    #[test]
    fn bets_a_pair_and_checks_air() {
        let (_, pair) = eval_of("Ah Ad 10s 9c 2d");
        let (_, air) = eval_of("Ah Kd 7s 5c 2d");
        assert_eq!(betting_action(&pair, 0, 100), Action::Bet);
        assert_eq!(betting_action(&air, 0, 100), Action::Check);
        // A made hand still checks when it cannot cover the bet unit.
        assert_eq!(betting_action(&pair, 0, BET_AMOUNT - 1), Action::Check);
    }

    #[test]
    fn calls_a_pair_and_folds_air_facing_a_bet() {
        let (_, pair) = eval_of("Ah Ad 10s 9c 2d");
        let (_, air) = eval_of("Ah Kd 7s 5c 2d");
        assert_eq!(betting_action(&pair, BET_AMOUNT, 100), Action::Call);
        assert_eq!(betting_action(&air, BET_AMOUNT, 100), Action::Fold);
        // Deep stacks do not turn a weak hand into a call.
        assert_eq!(betting_action(&air, BET_AMOUNT, 1_000), Action::Fold);
        // Short stacks fold even made hands.
        assert_eq!(betting_action(&pair, BET_AMOUNT, ANTE), Action::Fold);
    }

    #[test]
    fn quads_discard_only_the_kicker() {
        let (cards, e) = eval_of("Kc Kd Kh Ks 2s");
        assert_eq!(discard_indices(&cards, &e), vec![4]);
    }

    #[test]
    fn made_hands_stand_pat() {
        for s in ["10c 10d 10h 2s 2h", "Ah 9h 7h 3h 2h", "9c 10d Jh Qs Kc", "Ks Qs Js 10s 9s"] {
            let (cards, e) = eval_of(s);
            assert!(discard_indices(&cards, &e).is_empty(), "{s} should keep all five");
        }
    }

    #[test]
    fn trips_and_pair_discard_their_kickers() {
        let (cards, trips) = eval_of("Qc Qd 9s Qh 2c");
        assert_eq!(discard_indices(&cards, &trips), vec![2, 4]);

        let (cards, pair) = eval_of("Ah 10s Ad 9c 2d");
        assert_eq!(discard_indices(&cards, &pair), vec![1, 3, 4]);
    }

    #[test]
    fn two_pair_discards_exactly_the_kicker() {
        let (cards, e) = eval_of("Jc 2s Jd 9c 9h");
        assert_eq!(discard_indices(&cards, &e), vec![1]);
    }

    #[test]
    fn high_card_discards_the_three_lowest() {
        let (cards, e) = eval_of("2d Ah 7s Kd 5c");
        let mut picked = discard_indices(&cards, &e);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 2, 4]);
    }
}
