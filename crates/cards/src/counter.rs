// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per suit number histogram.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{PokerCard, Suit};

/// Counts the cards of one suit by number.
///
/// `bucket[r]` is the number of cards with number `r` (1 = Ace, 13 = King),
/// slot 0 wraps around and always holds the same count as slot 13 so that
/// the histogram can be walked as a circle, `n` is the total number of cards.
///
/// For the joker counter slot 1 counts the small joker and slot 2 the big joker.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// The counted suit.
    pub t: Suit,
    /// Number of counted cards.
    pub n: u8,
    /// Count per number.
    pub bucket: [u8; 14],
}

impl Counter {
    /// The wrap slot index.
    pub const WRAP: usize = 0;

    /// The King slot mirrored by the wrap slot.
    pub const KING: usize = 13;

    /// Creates an empty counter for the given suit.
    pub fn new(t: Suit) -> Self {
        Self {
            t,
            n: 0,
            bucket: [0; 14],
        }
    }

    /// Creates a counter for the cards of suit `t`, other cards are skipped.
    pub fn tally<'a>(t: Suit, cards: impl IntoIterator<Item = &'a PokerCard>) -> Self {
        let mut counter = Self::new(t);
        for card in cards.into_iter().filter(|c| c.suit == t) {
            counter.add(card.number);
        }

        counter
    }

    /// Clears all counts.
    pub fn reset(&mut self) {
        self.n = 0;
        self.bucket.fill(0);
    }

    /// Adds a card with the given number.
    pub(crate) fn add(&mut self, number: u8) {
        let slot = number as usize;
        debug_assert!((1..=Self::KING).contains(&slot));

        self.bucket[slot] = self.bucket[slot].saturating_add(1);
        self.bucket[Self::WRAP] = self.bucket[Self::KING];
        self.n = self.n.saturating_add(1);
    }

    /// Removes a card with the given number if counted.
    pub(crate) fn remove(&mut self, number: u8) {
        let slot = number as usize;
        if (1..=Self::KING).contains(&slot) && self.bucket[slot] > 0 {
            self.bucket[slot] -= 1;
            self.bucket[Self::WRAP] = self.bucket[Self::KING];
            self.n -= 1;
        }
    }

    /// The count of cards with the given number.
    pub fn count(&self, number: u8) -> u8 {
        match number as usize {
            slot @ 1..=Self::KING => self.bucket[slot],
            _ => 0,
        }
    }

    /// Checks if the counter is empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Checks the counter internal invariants.
    pub fn is_consistent(&self) -> bool {
        let total = self.bucket[1..=Self::KING]
            .iter()
            .map(|c| *c as usize)
            .sum::<usize>();

        self.bucket[Self::WRAP] == self.bucket[Self::KING] && total == self.n as usize
    }

    /// Returns the highest number ending a run of `len` consecutive numbers.
    ///
    /// The Ace can start (A-2-3) or end (Q-K-A) a run, an Ace ending a run
    /// is returned as 14.
    pub fn run_top(&self, len: usize) -> Option<u8> {
        if len == 0 || len > 13 {
            return None;
        }

        // Walk down from the Ace high to the Ace low.
        let mut run = 0;
        let mut best = None;
        for top in (1..=14u8).rev() {
            let slot = if top == 14 { 1 } else { top as usize };
            if self.bucket[slot] > 0 {
                run += 1;
                if run >= len {
                    let candidate = top + (len - 1) as u8;
                    best = best.max(Some(candidate));
                }
            } else {
                run = 0;
            }
        }

        best
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}{} ", self.t, self.n)?;
        for count in &self.bucket[1..] {
            write!(f, "{count}")?;
        }

        write!(f, "}}")
    }
}
