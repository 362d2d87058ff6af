// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A hand classified by suit and number.
use log::trace;
use std::{fmt, ops::Index};

use crate::{
    Counter, PokerCard, Suit, decode_all,
    error::{CardError, Result, ensure},
};

/// A hand of cards with a [Counter] for each suit.
///
/// ```
/// # use cardeval_cards::*;
/// let mut hand = PokerCards::new();
/// hand.assign(&[1, 2, 3, 4, 53, 54]).unwrap();
/// assert_eq!(hand.counter(Suit::Spade).n, 4);
/// assert_eq!(hand.joker_count(), 2);
/// ```
#[derive(Clone)]
pub struct PokerCards {
    cards: Vec<PokerCard>,
    counters: [Counter; 4],
    jokers: Counter,
}

impl Default for PokerCards {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Suit> for PokerCards {
    type Output = Counter;

    fn index(&self, suit: Suit) -> &Self::Output {
        self.counter(suit)
    }
}

impl PokerCards {
    /// The maximum number of cards in a hand.
    pub const CAPACITY: usize = 108;

    /// Creates an empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            counters: [
                Counter::new(Suit::Spade),
                Counter::new(Suit::Heart),
                Counter::new(Suit::Club),
                Counter::new(Suit::Diamond),
            ],
            jokers: Counter::new(Suit::Joker),
        }
    }

    /// Replaces this hand with the cards decoded from `codes`.
    ///
    /// Returns the number of cards, on error the hand is left empty.
    pub fn assign(&mut self, codes: &[u16]) -> Result<usize> {
        self.reset();
        self.check_capacity(codes.len())?;
        let cards = decode_all(codes)?;
        self.assign_cards(&cards)
    }

    /// Replaces this hand with the given cards.
    pub fn assign_cards(&mut self, cards: &[PokerCard]) -> Result<usize> {
        self.reset();
        self.check_capacity(cards.len())?;

        self.cards.extend_from_slice(cards);
        for card in cards {
            self.counter_mut(card.suit).add(card.number);
        }

        trace!("Assigned hand {self}");

        if let Err(e) = self.check() {
            self.reset();
            return Err(e);
        }

        Ok(self.cards.len())
    }

    /// The cards in input order.
    pub fn cards(&self) -> &[PokerCard] {
        &self.cards
    }

    /// The counter for a suit, [Suit::Joker] returns the jokers counter.
    pub fn counter(&self, suit: Suit) -> &Counter {
        match suit {
            Suit::Joker => &self.jokers,
            suit => &self.counters[suit as usize],
        }
    }

    /// Number of jokers in this hand.
    pub fn joker_count(&self) -> usize {
        self.jokers.n as usize
    }

    /// The cards of a suit in input order.
    pub fn suit_cards(&self, suit: Suit) -> Vec<PokerCard> {
        self.cards.iter().filter(|c| c.suit == suit).copied().collect()
    }

    /// Adds a card to this hand.
    pub fn add(&mut self, card: PokerCard) -> Result<()> {
        self.check_capacity(self.cards.len() + 1)?;
        self.cards.push(card);
        self.counter_mut(card.suit).add(card.number);
        Ok(())
    }

    /// Removes the first occurrence of a card, returns false if not found.
    pub fn remove(&mut self, card: PokerCard) -> bool {
        match self.cards.iter().position(|c| *c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                self.counter_mut(card.suit).remove(card.number);
                true
            }
            None => false,
        }
    }

    /// Checks if this hand contains the card.
    pub fn contains(&self, card: PokerCard) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.counters.iter_mut().for_each(Counter::reset);
        self.jokers.reset();
    }

    fn counter_mut(&mut self, suit: Suit) -> &mut Counter {
        match suit {
            Suit::Joker => &mut self.jokers,
            suit => &mut self.counters[suit as usize],
        }
    }

    fn check_capacity(&self, len: usize) -> Result<()> {
        if len > Self::CAPACITY {
            Err(CardError::CapacityExceeded {
                required: len,
                available: Self::CAPACITY,
            })
        } else {
            Ok(())
        }
    }

    fn check(&self) -> Result<()> {
        let counted = self
            .counters
            .iter()
            .chain(Some(&self.jokers))
            .map(|c| c.n as usize)
            .sum::<usize>();

        ensure(counted == self.cards.len(), "counters conservation")?;
        ensure(
            self.counters.iter().all(Counter::is_consistent),
            "counters consistency",
        )
    }
}

impl fmt::Display for PokerCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        write!(f, "]")?;
        for counter in self.counters.iter().chain(Some(&self.jokers)) {
            write!(f, " {counter}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for PokerCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    use crate::Deck;

    #[test]
    fn assign_counts_suits() {
        let mut hand = PokerCards::new();
        assert_eq!(hand.assign(&[1, 2, 3, 4, 53, 54]).unwrap(), 6);

        let spades = hand.counter(Suit::Spade);
        assert_eq!(spades.n, 4);
        assert_eq!(&spades.bucket[1..=4], &[1, 1, 1, 1]);
        assert_eq!(spades.bucket[0], spades.bucket[13]);

        assert_eq!(hand.cards().len(), 6);
        assert!(hand.cards()[4].is_joker());
        assert!(hand.cards()[5].is_joker());
        assert_eq!(hand.joker_count(), 2);
        assert!(hand[Suit::Heart].is_empty());
    }

    #[test]
    fn codes_14_and_15_are_hearts() {
        let mut hand = PokerCards::new();
        hand.assign(&[1, 2, 3, 4, 14, 15]).unwrap();

        assert_eq!(hand[Suit::Spade].n, 4);
        assert_eq!(hand[Suit::Heart].n, 2);
        assert_eq!(hand[Suit::Heart].count(1), 1);
        assert_eq!(hand[Suit::Heart].count(2), 1);
        assert_eq!(hand.joker_count(), 0);
    }

    #[test]
    fn counters_conservation() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut hand = PokerCards::new();

        for _ in 0..200 {
            let len = rng.random_range(0..=54);
            let deck = Deck::with_jokers_shuffled(&mut rng);
            let codes = deck
                .into_iter()
                .take(len)
                .map(|c| c.code() as u16)
                .collect::<Vec<_>>();

            hand.assign(&codes).unwrap();

            let total = Suit::suits().map(|s| hand[s].n as usize).sum::<usize>();
            assert_eq!(total + hand.joker_count(), codes.len());
            for s in Suit::suits() {
                assert_eq!(hand[s].bucket[0], hand[s].bucket[13]);
            }
        }
    }

    #[test]
    fn reassign_resets() {
        let mut hand = PokerCards::new();
        hand.assign(&[1, 2, 3]).unwrap();
        hand.assign(&[40]).unwrap();
        assert_eq!(hand.len(), 1);
        assert_eq!(hand[Suit::Spade].n, 0);
        assert_eq!(hand[Suit::Diamond].n, 1);

        let err = hand.assign(&[1, 2, 999]).unwrap_err();
        assert_eq!(err, CardError::InvalidCode { code: 999, index: 2 });
        assert!(hand.is_empty());
        assert!(hand[Suit::Spade].is_empty());
    }

    #[test]
    fn duplicates_allowed() {
        let mut hand = PokerCards::new();
        hand.assign(&[1, 1, 101]).unwrap();
        assert_eq!(hand[Suit::Spade].count(1), 3);
    }

    #[test]
    fn capacity() {
        let mut hand = PokerCards::new();
        let codes = vec![1u16; PokerCards::CAPACITY + 1];
        assert!(matches!(
            hand.assign(&codes),
            Err(CardError::CapacityExceeded { .. })
        ));

        assert_eq!(hand.assign(&codes[1..]).unwrap(), PokerCards::CAPACITY);
    }

    #[test]
    fn add_remove() {
        let mut hand = PokerCards::new();
        hand.assign(&[1, 13, 26]).unwrap();

        let ks = PokerCard::decode(13).unwrap();
        assert!(hand.contains(ks));
        assert!(hand.remove(ks));
        assert!(!hand.remove(ks));
        assert_eq!(hand[Suit::Spade].bucket[0], 0);

        hand.add(PokerCard::BIG_JOKER).unwrap();
        assert_eq!(hand.joker_count(), 1);
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.suit_cards(Suit::Heart), vec![PokerCard::decode(26).unwrap()]);
    }

    #[test]
    fn hand_to_string() {
        let mut hand = PokerCards::new();
        hand.assign(&[1, 53]).unwrap();
        assert!(hand.to_string().starts_with("[AS LJ] {S1 "));
    }
}
