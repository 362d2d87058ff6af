// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card types and the 16-bit card codes.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CardError, Result};

/// Card suit.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spade = 0,
    /// Hearts suit.
    Heart = 1,
    /// Clubs suit.
    Club = 2,
    /// Diamonds suit.
    Diamond = 3,
    /// The jokers, they have no rank.
    Joker = 4,
}

impl Suit {
    /// Returns the four real suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond].into_iter()
    }

    /// Converts a suit tag, returns `None` if the tag is not in 0..=4.
    pub fn from_u8(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Spade),
            1 => Some(Suit::Heart),
            2 => Some(Suit::Club),
            3 => Some(Suit::Diamond),
            4 => Some(Suit::Joker),
            _ => None,
        }
    }

    /// Checks if this is the joker suit.
    pub fn is_joker(self) -> bool {
        self == Suit::Joker
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Joker => 'J',
        };

        write!(f, "{suit}")
    }
}

/// A playing card.
///
/// Real cards have a number in 1..=13 with 1 for the Ace and 13 for the King,
/// jokers have number 1 (small joker) or 2 (big joker).
///
/// Cards are created from 16-bit codes using [PokerCard::decode] that accepts
/// the following codes:
///
/// ```text
///   1..=52         suit = (code - 1) / 13, number = (code - 1) % 13 + 1
///   53, 54         small joker, big joker
///   101..=113      spade  1..=13 (hundreds = suit + 1)
///   201..=213      heart  1..=13
///   301..=313      club   1..=13
///   401..=413      diamond 1..=13
///   501, 502       small joker, big joker
/// ```
///
/// any other value is rejected.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PokerCard {
    /// The card suit.
    pub suit: Suit,
    /// The card number.
    pub number: u8,
}

impl PokerCard {
    /// The small joker.
    pub const SMALL_JOKER: PokerCard = PokerCard {
        suit: Suit::Joker,
        number: 1,
    };

    /// The big joker.
    pub const BIG_JOKER: PokerCard = PokerCard {
        suit: Suit::Joker,
        number: 2,
    };

    /// Number of distinct cards including the two jokers.
    pub const DISTINCT: usize = 54;

    /// Creates a card checking the number is valid for the suit.
    pub fn new(suit: Suit, number: u8) -> Option<PokerCard> {
        let valid = match suit {
            Suit::Joker => (1..=2).contains(&number),
            _ => (1..=13).contains(&number),
        };

        valid.then_some(PokerCard { suit, number })
    }

    /// Decodes a card code.
    pub fn decode(code: u16) -> Result<PokerCard> {
        let invalid = CardError::InvalidCode { code, index: 0 };
        match code {
            1..=52 => {
                let c = (code - 1) as u8;
                let suit = Suit::from_u8(c / 13).ok_or(invalid)?;
                Ok(PokerCard {
                    suit,
                    number: c % 13 + 1,
                })
            }
            53 => Ok(Self::SMALL_JOKER),
            54 => Ok(Self::BIG_JOKER),
            101..=113 | 201..=213 | 301..=313 | 401..=413 | 501..=502 => {
                let suit = Suit::from_u8((code / 100 - 1) as u8).ok_or(invalid.clone())?;
                PokerCard::new(suit, (code % 100) as u8).ok_or(invalid)
            }
            _ => Err(invalid),
        }
    }

    /// Decodes a card from the spades server encoding.
    ///
    /// This encoding uses 102..=114 for the spades with 14 for the Ace, and
    /// so on for the other suits up to 414, 115 and 116 for the small and big
    /// joker, the codes 1..=54 are accepted as in [PokerCard::decode].
    pub fn from_spades_code(code: u16) -> Result<PokerCard> {
        let invalid = CardError::InvalidCode { code, index: 0 };
        match code {
            1..=54 => Self::decode(code),
            102..=114 | 202..=214 | 302..=314 | 402..=414 => {
                let suit = Suit::from_u8((code / 100 - 1) as u8).ok_or(invalid.clone())?;
                let number = match code % 100 {
                    14 => 1,
                    n => n as u8,
                };
                PokerCard::new(suit, number).ok_or(invalid)
            }
            115 => Ok(Self::SMALL_JOKER),
            116 => Ok(Self::BIG_JOKER),
            _ => Err(invalid),
        }
    }

    /// The canonical code in 1..=54 for this card.
    pub fn code(&self) -> u8 {
        self.suit as u8 * 13 + self.number
    }

    /// The code for this card in the spades server encoding.
    pub fn spades_code(&self) -> u16 {
        match self.suit {
            Suit::Joker => 114 + self.number as u16,
            suit => {
                let n = if self.number == 1 { 14 } else { self.number };
                (suit as u16 + 1) * 100 + n as u16
            }
        }
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }

    /// The rank value with the Ace high (2..=14), 0 for jokers.
    pub fn rank_value(&self) -> u8 {
        match (self.suit, self.number) {
            (Suit::Joker, _) => 0,
            (_, 1) => 14,
            (_, n) => n,
        }
    }

    /// The gin rummy point value: Ace 1, 2 to 9 face value, 10 for tens and
    /// picture cards, 0 for jokers.
    pub fn deadwood_value(&self) -> u8 {
        if self.is_joker() {
            0
        } else {
            self.number.min(10)
        }
    }
}

impl fmt::Display for PokerCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NUMBERS: [char; 14] = [
            '?', 'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
        ];

        match self.suit {
            Suit::Joker if self.number == 1 => write!(f, "LJ"),
            Suit::Joker => write!(f, "BJ"),
            suit => {
                let n = NUMBERS.get(self.number as usize).copied().unwrap_or('?');
                write!(f, "{n}{suit}")
            }
        }
    }
}

impl fmt::Debug for PokerCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PokerCard({self})")
    }
}

/// Decodes a sequence of codes failing on the first invalid code.
pub fn decode_all(codes: &[u16]) -> Result<Vec<PokerCard>> {
    codes
        .iter()
        .enumerate()
        .map(|(index, code)| PokerCard::decode(*code).map_err(|e| e.at(index)))
        .collect()
}

/// Checks that no card appears twice, reports the position of the first repetition.
///
/// A deck has one joker of each color so repeated jokers are duplicates too,
/// `53` and `501` are the same small joker.
pub fn check_distinct(cards: &[PokerCard]) -> Result<()> {
    let mut seen = [false; PokerCard::DISTINCT + 1];
    for (index, card) in cards.iter().enumerate() {
        let slot = &mut seen[card.code() as usize];
        if *slot {
            return Err(CardError::DuplicateCard { card: *card, index });
        }

        *slot = true;
    }

    Ok(())
}
