use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use std::collections::HashSet;

pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    WrongSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("discard index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("duplicate discard index: {0}")]
    DuplicateIndex(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Five cards held by one side of the table. The size invariant holds at all
/// times outside of [`Hand::exchange`], which shrinks and refills in one call.
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::hand::Hand;
///
/// let hand = Hand::new(parse_cards("As Kd 7c 7h 2s").unwrap()).unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::WrongSize(cards.len()));
        }
        let mut seen = HashSet::new();
        for &c in &cards {
            if !seen.insert(c) {
                return Err(HandError::DuplicateCard(c));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The five cards as a fixed array, for the evaluator.
    pub fn as_array(&self) -> [Card; HAND_SIZE] {
        [self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4]]
    }

    /// Discard the cards at `discards` and replace them from `deck`.
    /// Returns how many cards were exchanged. Indices are validated before
    /// anything is mutated, so a rejected exchange leaves hand and deck alone.
    pub fn exchange(&mut self, discards: &[usize], deck: &mut Deck) -> Result<usize, HandError> {
        let mut seen = [false; HAND_SIZE];
        for &i in discards {
            if i >= self.cards.len() {
                return Err(HandError::IndexOutOfRange(i));
            }
            if seen[i] {
                return Err(HandError::DuplicateIndex(i));
            }
            seen[i] = true;
        }
        let replacements = deck.deal(discards.len())?;
        // Remove from the highest index down so the lower ones stay valid.
        let mut order: Vec<usize> = discards.to_vec();
        order.sort_unstable_by(|a, b| b.cmp(a));
        for i in order {
            self.cards.remove(i);
        }
        let n = replacements.len();
        self.cards.extend(replacements);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn hand(s: &str) -> Hand {
        Hand::new(parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn new_rejects_wrong_size_and_duplicates() {
        let four = parse_cards("As Kd Qh Jc").unwrap();
        assert!(matches!(Hand::new(four), Err(HandError::WrongSize(4))));
        let dup = parse_cards("As As Kd Qh Jc").unwrap();
        assert!(matches!(Hand::new(dup), Err(HandError::DuplicateCard(_))));
    }

    #[test]
    fn exchange_replaces_selected_cards() {
        let mut h = hand("As Kd 7c 7h 2s");
        let mut deck = Deck::from_cards(parse_cards("9c 9d 9h").unwrap());
        let n = h.exchange(&[0, 1, 4], &mut deck).unwrap();
        assert_eq!(n, 3);
        assert_eq!(h.cards().len(), 5);
        assert!(deck.is_empty());
        let kept = parse_cards("7c 7h").unwrap();
        assert!(kept.iter().all(|c| h.cards().contains(c)));
    }

    #[test]
    fn exchange_of_nothing_is_a_noop() {
        let mut h = hand("As Kd 7c 7h 2s");
        let before = h.clone();
        let mut deck = Deck::standard();
        assert_eq!(h.exchange(&[], &mut deck).unwrap(), 0);
        assert_eq!(h, before);
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn bad_indices_leave_state_unchanged() {
        let mut h = hand("As Kd 7c 7h 2s");
        let before = h.clone();
        let mut deck = Deck::from_cards(parse_cards("9c 9d").unwrap());

        assert!(matches!(h.exchange(&[5], &mut deck), Err(HandError::IndexOutOfRange(5))));
        assert!(matches!(h.exchange(&[1, 1], &mut deck), Err(HandError::DuplicateIndex(1))));
        // Three discards against a two-card deck must fail before mutation.
        assert!(matches!(h.exchange(&[0, 1, 2], &mut deck), Err(HandError::Deck(_))));

        assert_eq!(h, before);
        assert_eq!(deck.len(), 2);
    }
}
