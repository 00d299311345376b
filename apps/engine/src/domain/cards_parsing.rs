//! Card parsing from text tokens (e.g., "4H", "10S", "QC", "SJ", "BJ")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "♥" => Ok(Suit::Hearts),
            "D" | "♦" => Ok(Suit::Diamonds),
            "C" | "♣" => Ok(Suit::Clubs),
            "S" | "♠" => Ok(Suit::Spades),
            _ => Err(DomainError::parse_card(format!("Parse suit: {s}"))),
        }
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "SJ" => Rank::SmallJoker,
            "BJ" => Rank::BigJoker,
            _ => return Err(DomainError::parse_card(format!("Parse rank: {s}"))),
        };
        Ok(rank)
    }
}

/// Split a token into its face: jokers are suitless, everything else is
/// rank followed by a one-character suit.
pub fn parse_face(token: &str) -> Result<(Option<Suit>, Rank), DomainError> {
    let token = token.trim();
    if token == "SJ" || token == "BJ" {
        return Ok((None, token.parse()?));
    }
    let (split, _) = token
        .char_indices()
        .last()
        .ok_or_else(|| DomainError::parse_card("Parse card: empty token"))?;
    let (rank_part, suit_part) = token.split_at(split);
    if rank_part.is_empty() {
        return Err(DomainError::parse_card(format!("Parse card: {token}")));
    }
    Ok((Some(suit_part.parse()?), rank_part.parse()?))
}

impl FromStr for Card {
    type Err = DomainError;

    /// Parsed cards carry their canonical deck id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = parse_face(s)?;
        Ok(Card::canonical(suit, rank))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
