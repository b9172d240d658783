//! Hand ranking: categories, results and the 5/6/7-card entry points.
//!
//! Every entry point is total. Malformed notation, ids outside `0..52` and repeated
//! cards produce [`HandRank::Invalid`] instead of an error.

pub(crate) mod combinations;
pub mod tables;

pub use tables::{rank_tables, warm_up, RankTables, TableError, MAX_SCORE};

use crate::cards::{Card, Rank, Suit};
use combinations::{select, Combinations};
use core::cmp::Ordering;
use core::fmt;
use core::ops::RangeInclusive;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: i32) -> Option<Self> {
        HandCategory::ALL.into_iter().find(|c| i32::from(c.number()) == number)
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    /// Scores held by this category. Bands are contiguous and never overlap.
    pub const fn score_range(self) -> RangeInclusive<u16> {
        match self {
            HandCategory::StraightFlush => 1..=10,
            HandCategory::FourOfAKind => 11..=166,
            HandCategory::FullHouse => 167..=322,
            HandCategory::Flush => 323..=1599,
            HandCategory::Straight => 1600..=1609,
            HandCategory::ThreeOfAKind => 1610..=2467,
            HandCategory::TwoPair => 2468..=3325,
            HandCategory::OnePair => 3326..=6185,
            HandCategory::HighCard => 6186..=MAX_SCORE,
        }
    }

    /// Category owning `score`, or `None` outside `1..=MAX_SCORE`.
    pub fn from_score(score: u16) -> Option<Self> {
        let category = match score {
            0 => return None,
            1..=10 => HandCategory::StraightFlush,
            11..=166 => HandCategory::FourOfAKind,
            167..=322 => HandCategory::FullHouse,
            323..=1599 => HandCategory::Flush,
            1600..=1609 => HandCategory::Straight,
            1610..=2467 => HandCategory::ThreeOfAKind,
            2468..=3325 => HandCategory::TwoPair,
            3326..=6185 => HandCategory::OnePair,
            6186..=MAX_SCORE => HandCategory::HighCard,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an evaluation.
///
/// Ordering ranks stronger hands greater, so `max()` picks a winner; `Invalid` sorts
/// below every valid hand. Equality is structural.
///
/// ```
/// use poker_rank::evaluator::{evaluate5, HandCategory};
///
/// let royal = evaluate5(["Ah", "Kh", "Qh", "Jh", "Th"]);
/// assert_eq!(royal.category(), Some(HandCategory::StraightFlush));
/// assert_eq!(royal.score(), 1);
/// assert_eq!(royal.to_string(), "Straight Flush (Score: 1)");
///
/// let quads = evaluate5(["Ah", "Ad", "As", "Ac", "Kh"]);
/// assert!(royal > quads);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRank {
    Valid { score: u16, category: HandCategory },
    Invalid,
}

impl HandRank {
    /// Valid rank for a table score, `Invalid` for a score outside every band.
    pub fn from_score(score: u16) -> Self {
        match HandCategory::from_score(score) {
            Some(category) => HandRank::Valid { score, category },
            None => HandRank::Invalid,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, HandRank::Valid { .. })
    }

    /// Numeric score, lower is stronger; -1 when invalid.
    pub fn score(&self) -> i32 {
        match self {
            HandRank::Valid { score, .. } => i32::from(*score),
            HandRank::Invalid => -1,
        }
    }

    pub const fn category(&self) -> Option<HandCategory> {
        match self {
            HandRank::Valid { category, .. } => Some(*category),
            HandRank::Invalid => None,
        }
    }

    /// Category number 1..=9; -1 when invalid.
    pub fn category_number(&self) -> i32 {
        self.category().map_or(-1, |c| i32::from(c.number()))
    }

    pub fn category_name(&self) -> &'static str {
        self.category().map_or("Invalid Hand", HandCategory::name)
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (HandRank::Invalid, HandRank::Invalid) => Ordering::Equal,
            (HandRank::Invalid, _) => Ordering::Less,
            (_, HandRank::Invalid) => Ordering::Greater,
            (HandRank::Valid { score: a, .. }, HandRank::Valid { score: b, .. }) => b.cmp(a),
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRank::Valid { score, category } => write!(f, "{category} (Score: {score})"),
            HandRank::Invalid => f.write_str("Invalid Hand"),
        }
    }
}

/// Anything that may name a card: a [`Card`], an id, or two-character notation.
///
/// `None` marks the invalid card.
pub trait IntoCard {
    fn into_card(self) -> Option<Card>;
}

impl IntoCard for Card {
    fn into_card(self) -> Option<Card> {
        Some(self)
    }
}

impl IntoCard for Option<Card> {
    fn into_card(self) -> Option<Card> {
        self
    }
}

impl IntoCard for i32 {
    fn into_card(self) -> Option<Card> {
        Card::from_id(self)
    }
}

impl IntoCard for u8 {
    fn into_card(self) -> Option<Card> {
        Card::from_id(i32::from(self))
    }
}

impl IntoCard for &str {
    fn into_card(self) -> Option<Card> {
        Card::parse(self)
    }
}

impl IntoCard for &String {
    fn into_card(self) -> Option<Card> {
        Card::parse(self)
    }
}

/// Convert every input and reject invalid or repeated cards.
pub(crate) fn resolve<C: IntoCard, const N: usize>(cards: [C; N]) -> Option<[Card; N]> {
    let mut out = [Card::new(Rank::Two, Suit::Clubs); N];
    let mut seen = 0u64;
    for (slot, input) in out.iter_mut().zip(cards) {
        let card = input.into_card()?;
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return None;
        }
        seen |= bit;
        *slot = card;
    }
    Some(out)
}

/// Score five distinct, valid cards.
#[inline]
pub(crate) fn rank_five(cards: &[Card; 5]) -> HandRank {
    HandRank::from_score(rank_tables().score(cards))
}

/// Best rank over every 5-card subset of `N` distinct, valid cards.
fn best_of<const N: usize>(cards: &[Card; N]) -> HandRank {
    let tables = rank_tables();
    Combinations::<N, 5>::new()
        .map(|indices| tables.score(&select(cards, indices)))
        .min()
        .map_or(HandRank::Invalid, HandRank::from_score)
}

/// Evaluate exactly five cards.
///
/// ```
/// use poker_rank::evaluator::{evaluate5, HandRank};
///
/// assert_eq!(evaluate5([50, 46, 42, 38, 34]).category_number(), 9);
/// assert_eq!(evaluate5(["Ah", "Ah", "Qh", "Jh", "Th"]), HandRank::Invalid);
/// assert_eq!(evaluate5(["Ah", "Kh", "Qh", "Jh", "Xh"]).score(), -1);
/// ```
pub fn evaluate5<C: IntoCard>(cards: [C; 5]) -> HandRank {
    match resolve(cards) {
        Some(cards) => rank_five(&cards),
        None => HandRank::Invalid,
    }
}

/// Evaluate the best five of six cards.
pub fn evaluate6<C: IntoCard>(cards: [C; 6]) -> HandRank {
    match resolve(cards) {
        Some(cards) => best_of(&cards),
        None => HandRank::Invalid,
    }
}

/// Evaluate the best five of seven cards (Hold'em: two hole cards and the board).
///
/// ```
/// use poker_rank::evaluator::{evaluate7, HandCategory};
///
/// let rank = evaluate7(["Ah", "Kh", "Qh", "Jh", "Th", "9h", "2c"]);
/// assert_eq!(rank.category(), Some(HandCategory::StraightFlush));
/// assert_eq!(rank.score(), 1);
/// ```
pub fn evaluate7<C: IntoCard>(cards: [C; 7]) -> HandRank {
    match resolve(cards) {
        Some(cards) => best_of(&cards),
        None => HandRank::Invalid,
    }
}

/// Evaluate a hand of five to seven cards given as a slice.
///
/// Any other length yields [`HandRank::Invalid`].
///
/// ```
/// use poker_rank::cards::parse_cards;
/// use poker_rank::evaluator::{evaluate_hand, HandCategory};
///
/// let cards = parse_cards("As Ad Kc Kd 2h 7s").unwrap();
/// assert_eq!(evaluate_hand(&cards).category(), Some(HandCategory::TwoPair));
/// assert!(!evaluate_hand(&cards[..4]).is_valid());
/// ```
pub fn evaluate_hand<C: IntoCard + Copy>(cards: &[C]) -> HandRank {
    match cards.len() {
        5 => evaluate5([cards[0], cards[1], cards[2], cards[3], cards[4]]),
        6 => evaluate6([cards[0], cards[1], cards[2], cards[3], cards[4], cards[5]]),
        7 => evaluate7([cards[0], cards[1], cards[2], cards[3], cards[4], cards[5], cards[6]]),
        _ => HandRank::Invalid,
    }
}
