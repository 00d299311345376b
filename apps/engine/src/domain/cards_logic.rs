//! Combo analysis: classifying a card set and comparing it to the active trick

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::rules::Seat;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    Quad,
}

impl ComboKind {
    pub const fn for_size(size: usize) -> Option<ComboKind> {
        match size {
            1 => Some(ComboKind::Single),
            2 => Some(ComboKind::Pair),
            3 => Some(ComboKind::Triple),
            4 => Some(ComboKind::Quad),
            _ => None,
        }
    }

    pub const fn size(self) -> usize {
        match self {
            ComboKind::Single => 1,
            ComboKind::Pair => 2,
            ComboKind::Triple => 3,
            ComboKind::Quad => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ComboKind::Single => "single",
            ComboKind::Pair => "pair",
            ComboKind::Triple => "triple",
            ComboKind::Quad => "quad",
        }
    }
}

impl fmt::Display for ComboKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A valid combo: its shape and comparable main rank value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Combo {
    pub kind: ComboKind,
    pub rank: u8,
}

/// The combo currently on the table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayedHand {
    pub seat: Seat,
    pub cards: Vec<Card>,
    pub kind: ComboKind,
    pub rank: u8,
}

impl PlayedHand {
    pub fn new(seat: Seat, cards: Vec<Card>, combo: Combo) -> Self {
        Self {
            seat,
            cards,
            kind: combo.kind,
            rank: combo.rank,
        }
    }

    pub fn combo(&self) -> Combo {
        Combo {
            kind: self.kind,
            rank: self.rank,
        }
    }

    /// Every card is a trump rank.
    pub fn is_trump(&self) -> bool {
        is_trump_move(&self.cards)
    }
}

/// Classify `cards`. `None` means the set is not a combo.
///
/// Wildcards take the rank shared by the natural cards. A set made only of
/// wildcards ranks as its weakest member.
pub fn analyze(cards: &[Card]) -> Option<Combo> {
    match cards {
        [] => None,
        [single] => Some(Combo {
            kind: ComboKind::Single,
            rank: single.value(),
        }),
        _ => {
            let mut naturals = cards.iter().filter(|c| !c.is_wild()).map(Card::value);
            let rank = match naturals.next() {
                Some(first) => {
                    if naturals.any(|v| v != first) {
                        return None;
                    }
                    first
                }
                None => cards.iter().map(Card::value).min()?,
            };
            let kind = ComboKind::for_size(cards.len())?;
            Some(Combo { kind, rank })
        }
    }
}

/// Whether `cards` is a legal play against `last` (`None` when leading).
pub fn can_beat(cards: &[Card], last: Option<&PlayedHand>) -> bool {
    match (analyze(cards), last) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(combo), Some(last)) => combo.kind == last.kind && combo.rank > last.rank,
    }
}

pub fn is_trump_move(cards: &[Card]) -> bool {
    cards.iter().all(Card::is_trump)
}

pub fn contains_trump(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_trump)
}

/// Disposing of a quad or any top honor.
pub fn is_high_impact(cards: &[Card]) -> bool {
    matches!(
        analyze(cards),
        Some(Combo {
            kind: ComboKind::Quad,
            ..
        })
    ) || cards.iter().any(|c| c.rank.is_honor())
}

/// Cards grouped by rank value, ascending by value, each group in input order.
pub fn group_by_value<'a, I>(cards: I) -> Vec<(u8, Vec<&'a Card>)>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut groups: Vec<(u8, Vec<&'a Card>)> = Vec::new();
    for card in cards {
        match groups.iter_mut().find(|(v, _)| *v == card.value()) {
            Some((_, group)) => group.push(card),
            None => groups.push((card.value(), vec![card])),
        }
    }
    groups.sort_by_key(|(v, _)| *v);
    groups
}
