//! Core card-related types: Card, CardId, Rank, Suit

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// Deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

/// Ranks in strength order. `4` is the weakest, the big joker the strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    Three,
    SmallJoker,
    BigJoker,
}

impl Rank {
    /// Suited ranks, weakest first (13 per suit).
    pub const SUITED: [Rank; 13] = [
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
        Rank::Two,
        Rank::Three,
    ];

    /// Integer strength used for every comparison (4 → 0 … big joker → 14).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Wildcards substitute for any rank inside a combo.
    pub const fn is_wild(self) -> bool {
        matches!(
            self,
            Rank::Two | Rank::Three | Rank::SmallJoker | Rank::BigJoker
        )
    }

    /// Ranks worth conserving.
    pub const fn is_trump(self) -> bool {
        matches!(
            self,
            Rank::Ace | Rank::Two | Rank::Three | Rank::SmallJoker | Rank::BigJoker
        )
    }

    /// Top-tier honors; getting rid of one is a high-impact play.
    pub const fn is_honor(self) -> bool {
        matches!(
            self,
            Rank::Two | Rank::Three | Rank::SmallJoker | Rank::BigJoker
        )
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::SmallJoker | Rank::BigJoker)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::SmallJoker => "SJ",
            Rank::BigJoker => "BJ",
        }
    }
}

/// Opaque card identity, unique within a deck.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A physical card. Jokers carry no suit.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub id: CardId,
    pub suit: Option<Suit>,
    pub rank: Rank,
}

impl Card {
    pub fn new(id: impl Into<String>, suit: Option<Suit>, rank: Rank) -> Self {
        Self {
            id: CardId::new(id),
            suit,
            rank,
        }
    }

    /// Card with its canonical deck id: `c0`..`c51` for suited cards (suit
    /// major, rank minor), `c52` small joker, `c53` big joker.
    pub fn canonical(suit: Option<Suit>, rank: Rank) -> Self {
        let index = match (suit, rank) {
            (_, Rank::SmallJoker) => 52,
            (_, Rank::BigJoker) => 53,
            (Some(suit), rank) => suit as usize * 13 + rank.value() as usize,
            // Suitless non-joker has no deck slot; park it after the jokers.
            (None, rank) => 54 + rank.value() as usize,
        };
        let suit = if rank.is_joker() { None } else { suit };
        Self::new(format!("c{index}"), suit, rank)
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    #[inline]
    pub fn is_trump(&self) -> bool {
        self.rank.is_trump()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", suit.symbol(), self.rank.symbol()),
            None => f.write_str(self.rank.symbol()),
        }
    }
}

/// Sort descending by strength for display. Ties keep deal order.
pub fn sort_for_display(hand: &mut [Card]) {
    hand.sort_by(|a, b| b.value().cmp(&a.value()));
}
