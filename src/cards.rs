use std::fmt;
use std::str::FromStr;

/// Id returned for card text or card ids that do not name a card.
pub const INVALID_CARD_ID: i32 = -1;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position used by the card id and the rank bitmasks (Two = 0, Ace = 12).
    pub const fn index(self) -> u8 {
        self as u8 - 2
    }

    pub fn from_index(index: u8) -> Option<Rank> {
        Rank::ALL.get(index as usize).copied()
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Rank {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardParseError::Rank(c)),
        }
    }
}

/// Four suits; order has no hand-strength meaning but fixes the card id: c < d < h < s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(CardParseError::Suit(c)),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("card notation must be exactly two characters, got '{0}'")]
    Length(String),
    #[error("invalid rank: '{0}'")]
    Rank(char),
    #[error("invalid suit: '{0}'")]
    Suit(char),
}

/// A playing card: rank + suit, identified by an id in `0..52`.
///
/// The id is `rank_index * 4 + suit_index`, so `2c` is 0 and `As` is 51.
///
/// ```
/// use poker_rank::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.id(), 51);
/// assert_eq!(Card::from_id(51), Some(card));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn id(self) -> u8 {
        self.rank.index() * 4 + self.suit.index()
    }

    /// Card for an id in `0..52`; `None` for anything else.
    pub fn from_id(id: i32) -> Option<Card> {
        let id = u8::try_from(id).ok()?;
        let rank = Rank::from_index(id / 4)?;
        let suit = Suit::from_index(id % 4)?;
        Some(Card::new(rank, suit))
    }

    /// Lenient counterpart of [`FromStr`]: malformed notation yields `None`.
    ///
    /// ```
    /// use poker_rank::cards::Card;
    ///
    /// assert!(Card::parse("kd").is_some());
    /// assert!(Card::parse("Xh").is_none());
    /// assert!(Card::parse("10h").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Card> {
        text.parse().ok()
    }

    pub fn describe(self) -> CardDescription {
        CardDescription {
            rank: self.rank.to_char(),
            suit: self.suit.to_char(),
            full: self.to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(CardParseError::Length(s.to_string()));
        };
        let rank = Rank::try_from(rank_ch)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Human readable pieces of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescription {
    pub rank: char,
    pub suit: char,
    pub full: String,
}

/// Id of a card written in two-character notation, or [`INVALID_CARD_ID`].
///
/// ```
/// use poker_rank::cards::{card_string_to_id, INVALID_CARD_ID};
///
/// assert_eq!(card_string_to_id("2c"), 0);
/// assert_eq!(card_string_to_id("Ah"), 50);
/// assert_eq!(card_string_to_id("A"), INVALID_CARD_ID);
/// ```
pub fn card_string_to_id(text: &str) -> i32 {
    card_to_id(Card::parse(text))
}

/// Id of a card, or [`INVALID_CARD_ID`] for the invalid card.
pub fn card_to_id(card: Option<Card>) -> i32 {
    card.map_or(INVALID_CARD_ID, |c| i32::from(c.id()))
}

pub fn is_valid_card_string(text: &str) -> bool {
    Card::parse(text).is_some()
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_rank::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd Tc").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
