use crate::cards::Card;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Table name, e.g. for showdown messages.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying a five-card hand. Recomputed on every evaluation,
/// never mutated. `tiebreak` holds numeric ranks by significance; inside a
/// five-high straight the ace is re-ranked to 1, so the sequence is
/// `[5, 4, 3, 2, 1]` and loses to every six-high straight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub category: Category,
    pub tiebreak: Vec<u8>,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        // Category decides outright. Within a category the tie-break
        // sequences compare element-wise; when one is a proper prefix of the
        // other (cannot happen for well-formed five-card hands, handled
        // anyway) the longer sequence wins, which is slice ordering.
        self.category.cmp(&other.category).then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classify exactly five cards. Deterministic and total; duplicate cards in
/// the input are the caller's responsibility (a single shared deck prevents
/// them).
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards("As Ks Qs Js 10s").unwrap();
/// let eval = evaluate_five(&cards.try_into().unwrap());
/// assert_eq!(eval.category, Category::RoyalFlush);
/// assert_eq!(eval.tiebreak, vec![14, 13, 12, 11, 10]);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    let is_wheel = distinct && ranks == [14, 5, 4, 3, 2];
    let is_straight = distinct && (ranks[0] - ranks[4] == 4 || is_wheel);
    if is_wheel {
        // Ace plays low for comparison only; classification is unaffected.
        ranks = vec![5, 4, 3, 2, 1];
    }

    // A hand can satisfy several structural predicates at once (every
    // straight flush is also a flush and a straight), so the order of the
    // checks below is the precedence order.
    if is_straight && is_flush {
        let category = if ranks[0] == 14 && ranks[4] == 10 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return Evaluation { category, tiebreak: ranks };
    }

    // (rank, multiplicity), sorted by multiplicity then rank, both descending.
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (v, counts[v as usize]))
        .collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    if groups[0].1 == 4 {
        return Evaluation {
            category: Category::FourOfAKind,
            tiebreak: vec![groups[0].0, groups[1].0],
        };
    }
    if groups[0].1 == 3 && groups[1].1 == 2 {
        return Evaluation {
            category: Category::FullHouse,
            tiebreak: vec![groups[0].0, groups[1].0],
        };
    }
    if is_flush {
        return Evaluation { category: Category::Flush, tiebreak: ranks };
    }
    if is_straight {
        return Evaluation { category: Category::Straight, tiebreak: vec![ranks[0]] };
    }
    if groups[0].1 == 3 {
        return Evaluation {
            category: Category::ThreeOfAKind,
            tiebreak: vec![groups[0].0, groups[1].0, groups[2].0],
        };
    }
    if groups[0].1 == 2 && groups[1].1 == 2 {
        return Evaluation {
            category: Category::TwoPair,
            tiebreak: vec![groups[0].0, groups[1].0, groups[2].0],
        };
    }
    if groups[0].1 == 2 {
        return Evaluation {
            category: Category::Pair,
            tiebreak: vec![groups[0].0, groups[1].0, groups[2].0, groups[3].0],
        };
    }
    Evaluation { category: Category::HighCard, tiebreak: ranks }
}
