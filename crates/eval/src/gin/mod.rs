// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gin Rummy hand evaluator.
//!
//! A [GinRummyCards] hand of 10 or 11 cards is split into melds and deadwood
//! cards so that the deadwood value is minimal. In free mode the cards can be
//! melded in any order, in frozen mode melds are contiguous windows of the
//! input as the player arranged them.
//!
//! Ties on the deadwood value are broken by the fewer deadwood cards and then
//! by the larger melds.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, fmt};

use cardeval_cards::{CardError, PokerCard, PokerCards, Result, check_distinct, decode_all};

mod meld;
pub use meld::{Meld, MeldKind, WildPolicy, meld_kind};

/// The cost of a partial hand split, lower is better.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    deadwood: u16,
    loose: u8,
    spread: Reverse<u16>,
}

impl Cost {
    fn loose(card: &PokerCard) -> Self {
        Self {
            deadwood: card.deadwood_value() as u16,
            loose: 1,
            spread: Reverse(0),
        }
    }

    fn meld(len: usize) -> Self {
        Self {
            deadwood: 0,
            loose: 0,
            spread: Reverse((len * len) as u16),
        }
    }

    fn add(self, other: Cost) -> Self {
        Self {
            deadwood: self.deadwood + other.deadwood,
            loose: self.loose + other.loose,
            spread: Reverse(self.spread.0 + other.spread.0),
        }
    }
}

/// A hand split as cards positions.
#[derive(Debug, Default)]
struct Split {
    deadwood: Vec<usize>,
    melds: Vec<(MeldKind, Vec<usize>)>,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Loose,
    Meld(usize),
}

/// Splits the cards melding them in any order.
///
/// Each subset of the cards is solved by taking its lowest card either as
/// deadwood or as the lowest card of a meld within the subset.
fn split_free(cards: &[PokerCard], policy: WildPolicy) -> Split {
    let n = cards.len();
    let full = (1usize << n) - 1;

    // Melds masks grouped by their lowest card.
    let mut melds: Vec<Vec<(usize, MeldKind)>> = vec![Vec::new(); n];
    let mut buf = Vec::with_capacity(n);
    for mask in 1..=full {
        if mask.count_ones() < 3 {
            continue;
        }

        buf.clear();
        buf.extend(positions(mask).map(|i| cards[i]));
        if let Some(kind) = meld_kind(&buf, policy) {
            melds[mask.trailing_zeros() as usize].push((mask, kind));
        }
    }

    let mut best = vec![(Cost::default(), Step::Loose); full + 1];
    for mask in 1..=full {
        let low = mask.trailing_zeros() as usize;
        let rest = mask & !(1 << low);

        let mut plan = (best[rest].0.add(Cost::loose(&cards[low])), Step::Loose);
        for (idx, (meld, _)) in melds[low].iter().enumerate() {
            if mask & meld == *meld {
                let len = meld.count_ones() as usize;
                let cost = best[mask ^ meld].0.add(Cost::meld(len));
                if cost < plan.0 {
                    plan = (cost, Step::Meld(idx));
                }
            }
        }

        best[mask] = plan;
    }

    let mut split = Split::default();
    let mut mask = full;
    while mask != 0 {
        let low = mask.trailing_zeros() as usize;
        match best[mask].1 {
            Step::Loose => {
                split.deadwood.push(low);
                mask &= !(1 << low);
            }
            Step::Meld(idx) => {
                let (meld, kind) = melds[low][idx];
                split.melds.push((kind, positions(meld).collect()));
                mask &= !meld;
            }
        }
    }

    split
}

/// Splits the cards melding only contiguous cards.
fn split_frozen(cards: &[PokerCard], policy: WildPolicy) -> Split {
    let n = cards.len();

    // The best split for the cards from position i, as (cost, window).
    let mut best: Vec<(Cost, Option<(usize, MeldKind)>)> = vec![(Cost::default(), None); n + 1];
    for i in (0..n).rev() {
        let mut plan = (best[i + 1].0.add(Cost::loose(&cards[i])), None);
        for len in 3..=n - i {
            if let Some(kind) = meld_kind(&cards[i..i + len], policy) {
                let cost = best[i + len].0.add(Cost::meld(len));
                if cost < plan.0 {
                    plan = (cost, Some((len, kind)));
                }
            }
        }

        best[i] = plan;
    }

    let mut split = Split::default();
    let mut i = 0;
    while i < n {
        match best[i].1 {
            Some((len, kind)) => {
                split.melds.push((kind, (i..i + len).collect()));
                i += len;
            }
            None => {
                split.deadwood.push(i);
                i += 1;
            }
        }
    }

    split
}

fn positions(mask: usize) -> impl Iterator<Item = usize> {
    (0..usize::BITS as usize).filter(move |i| mask & (1 << i) != 0)
}

/// The evaluation of a [GinRummyCards] hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GinResult {
    /// The deadwood value.
    pub deadwood_value: u8,
    /// The deadwood cards in input order.
    pub deadwood: Vec<PokerCard>,
    /// The melds.
    pub melds: Vec<Meld>,
    /// Checks if all cards are melded.
    pub gin: bool,
    /// Checks if the deadwood value allows knocking.
    pub knock: bool,
}

/// A Gin Rummy hand.
///
/// ```
/// # use cardeval_eval::gin::*;
/// let mut hand = GinRummyCards::new();
///
/// // Spades A-5, A diamonds, clubs 5-7, 2 diamonds.
/// hand.assign(&[1, 40, 2, 3, 4, 5, 31, 32, 33, 41], false).unwrap();
/// assert_eq!(hand.deadwood_value(), 3);
/// assert_eq!(hand.melds().len(), 2);
/// assert!(hand.can_knock());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GinRummyCards {
    hand: PokerCards,
    policy: WildPolicy,
    frozen: bool,
    deadwood_value: u8,
    deadwood: Vec<PokerCard>,
    melds: Vec<Meld>,
}

impl GinRummyCards {
    /// The minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 10;

    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 11;

    /// The maximum deadwood value to knock.
    pub const KNOCK_LIMIT: u8 = 10;

    /// Creates an empty hand with the default jokers policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hand with the given jokers policy.
    pub fn with_policy(policy: WildPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The jokers policy.
    pub fn policy(&self) -> WildPolicy {
        self.policy
    }

    /// Assigns the cards decoded from `codes` and splits the hand.
    ///
    /// If `freeze` is true melds are contiguous in the input order.
    /// Returns the deadwood value, on error the hand is left empty.
    pub fn assign(&mut self, codes: &[u16], freeze: bool) -> Result<u8> {
        self.reset();
        Self::check_size(codes.len())?;
        let cards = decode_all(codes)?;
        self.assign_cards(&cards, freeze)
    }

    /// Assigns the cards and splits the hand.
    pub fn assign_cards(&mut self, cards: &[PokerCard], freeze: bool) -> Result<u8> {
        self.reset();
        Self::check_size(cards.len())?;
        check_distinct(cards)?;

        if let Err(e) = self.split(cards, freeze) {
            self.reset();
            return Err(e);
        }

        debug!("Gin {self}");
        Ok(self.deadwood_value)
    }

    /// Assigns the cards and writes the result layout to `out`.
    ///
    /// Returns the number of bytes written, on error the hand is left empty.
    pub fn assign_into(&mut self, codes: &[u16], freeze: bool, out: &mut [u8]) -> Result<usize> {
        self.assign(codes, freeze)?;
        self.write_result(out).inspect_err(|_| self.reset())
    }

    /// The cards in input order.
    pub fn cards(&self) -> &[PokerCard] {
        self.hand.cards()
    }

    /// The cards counters.
    pub fn counters(&self) -> &PokerCards {
        &self.hand
    }

    /// Checks if the hand was split in frozen mode.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// The total value of the deadwood cards.
    pub fn deadwood_value(&self) -> u8 {
        self.deadwood_value
    }

    /// The deadwood cards in input order.
    pub fn deadwood(&self) -> &[PokerCard] {
        &self.deadwood
    }

    /// The melds ordered by their first card position.
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Checks if all cards are melded.
    pub fn is_gin(&self) -> bool {
        !self.hand.is_empty() && self.deadwood.is_empty()
    }

    /// Checks if the deadwood is low enough to knock.
    pub fn can_knock(&self) -> bool {
        !self.hand.is_empty() && self.deadwood_value <= Self::KNOCK_LIMIT
    }

    /// Returns a copy of the evaluation.
    pub fn result(&self) -> GinResult {
        GinResult {
            deadwood_value: self.deadwood_value,
            deadwood: self.deadwood.clone(),
            melds: self.melds.clone(),
            gin: self.is_gin(),
            knock: self.can_knock(),
        }
    }

    /// The number of bytes of the result layout.
    pub fn result_len(&self) -> usize {
        2 + self.deadwood.len() + self.melds.iter().map(|m| m.len() + 1).sum::<usize>()
    }

    /// Writes the result layout to `out`.
    ///
    /// The layout is the deadwood value, the deadwood cards count followed by
    /// the cards codes and then for each meld its length followed by the cards
    /// codes.
    pub fn write_result(&self, out: &mut [u8]) -> Result<usize> {
        let required = self.result_len();
        if out.len() < required {
            return Err(CardError::CapacityExceeded {
                required,
                available: out.len(),
            });
        }

        let mut pos = 0;
        let mut put = |b: u8| {
            out[pos] = b;
            pos += 1;
        };

        put(self.deadwood_value);
        put(self.deadwood.len() as u8);
        self.deadwood.iter().for_each(|c| put(c.code()));
        for meld in &self.melds {
            put(meld.len() as u8);
            meld.cards.iter().for_each(|c| put(c.code()));
        }

        Ok(required)
    }

    /// The cards sorted by suit and number, jokers last.
    pub fn sort(&self) -> Vec<PokerCard> {
        let mut cards = self.hand.cards().to_vec();
        cards.sort();
        cards
    }

    /// The cards sorted by number and suit, jokers last.
    pub fn sort_by_number(&self) -> Vec<PokerCard> {
        let mut cards = self.hand.cards().to_vec();
        cards.sort_by_key(|c| (c.is_joker(), c.number, c.suit));
        cards
    }

    /// Writes both sorted orders to `out`, each as a count followed by codes.
    ///
    /// Returns the number of bytes written.
    pub fn write_sorted(&self, out: &mut [u8]) -> Result<usize> {
        let n = self.hand.len();
        let required = 2 * n + 2;
        if out.len() < required {
            return Err(CardError::CapacityExceeded {
                required,
                available: out.len(),
            });
        }

        out[0] = n as u8;
        for (b, card) in out[1..].iter_mut().zip(self.sort()) {
            *b = card.code();
        }

        out[n + 1] = n as u8;
        for (b, card) in out[n + 2..].iter_mut().zip(self.sort_by_number()) {
            *b = card.code();
        }

        Ok(required)
    }

    /// Clears the hand keeping the jokers policy.
    pub fn reset(&mut self) {
        self.hand.reset();
        self.frozen = false;
        self.deadwood_value = 0;
        self.deadwood.clear();
        self.melds.clear();
    }

    fn check_size(len: usize) -> Result<()> {
        if (Self::MIN_CARDS..=Self::MAX_CARDS).contains(&len) {
            Ok(())
        } else {
            Err(CardError::InvalidHandSize {
                len,
                min: Self::MIN_CARDS,
                max: Self::MAX_CARDS,
            })
        }
    }

    fn split(&mut self, cards: &[PokerCard], freeze: bool) -> Result<()> {
        self.hand.assign_cards(cards)?;
        self.frozen = freeze;

        let split = if freeze {
            split_frozen(cards, self.policy)
        } else {
            split_free(cards, self.policy)
        };

        self.check_split(&split)?;

        self.deadwood = split.deadwood.iter().map(|i| cards[*i]).collect();
        self.deadwood_value = self
            .deadwood
            .iter()
            .map(|c| c.deadwood_value() as u32)
            .sum::<u32>()
            .try_into()
            .map_err(|_| CardError::InternalInvariant("deadwood value range"))?;

        for (kind, pos) in split.melds {
            let meld_cards = pos.iter().map(|i| cards[*i]).collect::<Vec<_>>();
            let cards = match (kind, freeze) {
                (MeldKind::Run, false) => meld::arrange_run(&meld_cards),
                _ => meld_cards,
            };

            self.melds.push(Meld { kind, cards });
        }

        Ok(())
    }

    fn check_split(&self, split: &Split) -> Result<()> {
        let mut used = vec![false; self.hand.len()];
        let all = split
            .deadwood
            .iter()
            .chain(split.melds.iter().flat_map(|(_, pos)| pos.iter()));

        for &i in all {
            if i >= used.len() || used[i] {
                return Err(CardError::InternalInvariant("gin split partition"));
            }
            used[i] = true;
        }

        if used.iter().any(|u| !u) {
            return Err(CardError::InternalInvariant("gin split partition"));
        }

        let cards = self.hand.cards();
        for (kind, pos) in &split.melds {
            let meld = pos.iter().map(|i| cards[*i]).collect::<Vec<_>>();
            if meld_kind(&meld, self.policy) != Some(*kind) {
                return Err(CardError::InternalInvariant("gin meld"));
            }
        }

        Ok(())
    }
}

impl fmt::Display for GinRummyCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deadwood {} [", self.deadwood_value)?;
        for (i, card) in self.deadwood.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        write!(f, "]")?;
        for meld in &self.melds {
            write!(f, " {meld}")?;
        }

        Ok(())
    }
}
