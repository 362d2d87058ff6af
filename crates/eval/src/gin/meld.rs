// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Gin Rummy melds.
use serde::{Deserialize, Serialize};
use std::fmt;

use cardeval_cards::PokerCard;

/// The kind of a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three or four cards with the same number.
    Set,
    /// Three or more consecutive cards of the same suit.
    Run,
}

/// How jokers can be used in melds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildPolicy {
    /// The maximum number of jokers in a meld.
    pub max_wilds_per_meld: usize,
}

impl WildPolicy {
    /// Jokers never meld.
    pub const NO_WILDS: WildPolicy = WildPolicy {
        max_wilds_per_meld: 0,
    };
}

impl Default for WildPolicy {
    fn default() -> Self {
        Self {
            max_wilds_per_meld: 1,
        }
    }
}

/// A set or a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    /// The meld kind.
    pub kind: MeldKind,
    /// The meld cards, runs are in ascending order with jokers in place.
    pub cards: Vec<PokerCard>,
}

impl Meld {
    /// Number of cards in this meld.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the meld has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(", self.kind)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        write!(f, ")")
    }
}

/// Returns the kind of meld formed by the cards, if any.
///
/// A meld needs at least one natural card and at most
/// [WildPolicy::max_wilds_per_meld] jokers. Aces are low in runs.
pub fn meld_kind(cards: &[PokerCard], policy: WildPolicy) -> Option<MeldKind> {
    if cards.len() < 3 {
        return None;
    }

    let wilds = cards.iter().filter(|c| c.is_joker()).count();
    if wilds > policy.max_wilds_per_meld || wilds == cards.len() {
        return None;
    }

    if is_set(cards) {
        Some(MeldKind::Set)
    } else if is_run(cards, wilds) {
        Some(MeldKind::Run)
    } else {
        None
    }
}

fn is_set(cards: &[PokerCard]) -> bool {
    if cards.len() > 4 {
        return false;
    }

    let mut naturals = cards.iter().filter(|c| !c.is_joker());
    let Some(first) = naturals.next() else {
        return false;
    };

    let mut suits = 1u8 << first.suit as u8;
    for card in naturals {
        let bit = 1u8 << card.suit as u8;
        if card.number != first.number || suits & bit != 0 {
            return false;
        }
        suits |= bit;
    }

    true
}

fn is_run(cards: &[PokerCard], wilds: usize) -> bool {
    if cards.len() > 13 {
        return false;
    }

    let mut naturals = cards.iter().filter(|c| !c.is_joker());
    let Some(first) = naturals.next() else {
        return false;
    };

    let mut numbers = 1u16 << first.number;
    let (mut lo, mut hi) = (first.number, first.number);
    for card in naturals {
        let bit = 1u16 << card.number;
        if card.suit != first.suit || numbers & bit != 0 {
            return false;
        }

        numbers |= bit;
        lo = lo.min(card.number);
        hi = hi.max(card.number);
    }

    let gaps = (hi - lo + 1) as usize - (cards.len() - wilds);
    gaps <= wilds
}

/// Orders the cards of a run by number, jokers take the place of the numbers
/// they stand for, filling the gaps first and then extending the run up.
///
/// The cards must form a run.
pub(crate) fn arrange_run(cards: &[PokerCard]) -> Vec<PokerCard> {
    let mut naturals = cards
        .iter()
        .filter(|c| !c.is_joker())
        .copied()
        .collect::<Vec<_>>();
    naturals.sort();

    let mut wilds = cards.iter().filter(|c| c.is_joker()).copied();

    let mut run: Vec<PokerCard> = Vec::with_capacity(cards.len());
    for card in naturals {
        while let Some(next) = expected_number(&run) {
            if next >= card.number {
                break;
            }

            match wilds.next() {
                Some(w) => run.push(w),
                None => break,
            }
        }

        run.push(card);
    }

    // Extra wilds extend the run up to the King, then down.
    let top = expected_number(&run).unwrap_or(1);
    let extra = wilds.collect::<Vec<_>>();
    let up = extra.len().min(14usize.saturating_sub(top as usize));
    run.extend_from_slice(&extra[..up]);
    for w in &extra[up..] {
        run.insert(0, *w);
    }

    run
}

/// The number the next card of a partial run must have.
fn expected_number(run: &[PokerCard]) -> Option<u8> {
    let first = run.iter().position(|c| !c.is_joker())?;
    Some(run[first].number + (run.len() - first) as u8)
}
