// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card deck and k-subsets enumeration.
use rand::prelude::*;

use crate::{PokerCard, Suit};

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<PokerCard>,
}

impl Deck {
    /// The number of cards in a deck without jokers.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck without jokers.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with the two jokers.
    pub fn with_jokers() -> Self {
        let mut deck = Self::default();
        deck.cards.push(PokerCard::SMALL_JOKER);
        deck.cards.push(PokerCard::BIG_JOKER);
        deck
    }

    /// Creates a new shuffled deck with the two jokers.
    pub fn with_jokers_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::with_jokers();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<PokerCard> {
        self.cards.pop()
    }

    /// Deals `n` cards codes, fewer if the deck runs out.
    pub fn deal_codes(&mut self, n: usize) -> Vec<u16> {
        (0..n)
            .map_while(|_| self.deal())
            .map(|c| c.code() as u16)
            .collect()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: PokerCard) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[PokerCard]),
    {
        let mut hand = Vec::with_capacity(k);
        for_each_ksubset(self.cards.len(), k, |idx| {
            hand.clear();
            hand.extend(idx.iter().map(|i| self.cards[*i]));
            f(&hand);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| (1..=13).filter_map(move |n| PokerCard::new(s, n)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = PokerCard;
    type IntoIter = std::vec::IntoIter<PokerCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Calls the given closure for each k-subset of the indices `0..n`.
///
/// Subsets are visited in colex order with the indices of each subset in
/// increasing order, this is Algorithm L from TAOCP 4a.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > n {
        return;
    }

    // c[k] = n and c[k + 1] = 0 are sentinels.
    let mut c = (0..k).collect::<Vec<_>>();
    c.push(n);
    c.push(0);

    loop {
        f(&c[..k]);

        let mut j = 0;
        while c[j] + 1 == c[j + 1] {
            c[j] = j;
            j += 1;
        }

        if j >= k {
            break;
        }

        c[j] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        assert_eq!(deck.count(), Deck::SIZE);

        let mut codes = HashSet::default();
        while let Some(card) = deck.deal() {
            assert!(!card.is_joker());
            codes.insert(card.code());
        }

        assert!(deck.is_empty());
        assert_eq!(codes.len(), Deck::SIZE);

        let deck = Deck::with_jokers();
        assert_eq!(deck.count(), 54);
    }

    #[test]
    fn deal_codes() {
        let mut deck = Deck::with_jokers_shuffled(&mut StdRng::seed_from_u64(2));
        let codes = deck.deal_codes(10);
        assert_eq!(codes.len(), 10);
        assert!(codes.iter().all(|c| (1..=54).contains(c)));

        let rest = deck.deal_codes(100);
        assert_eq!(rest.len(), 44);
    }

    #[test]
    fn binomial() {
        assert_eq!(nck(7, 5), 21);
        assert_eq!(nck(52, 5), 2_598_960);
        assert_eq!(nck(52, 7), 133_784_560);
        assert_eq!(nck(5, 0), 1);
        assert_eq!(nck(3, 4), 0);
    }

    #[test]
    fn ksubsets() {
        for n in 0..=11 {
            for k in 1..=n {
                let mut seen = HashSet::default();
                for_each_ksubset(n, k, |idx| {
                    assert_eq!(idx.len(), k);
                    assert!(idx.windows(2).all(|w| w[0] < w[1]));
                    assert!(idx.iter().all(|i| *i < n));
                    seen.insert(idx.to_vec());
                });
                assert_eq!(seen.len(), nck(n, k), "n={n} k={k}");
            }
        }

        let mut first = None;
        for_each_ksubset(7, 5, |idx| {
            first.get_or_insert(idx.to_vec());
        });
        assert_eq!(first, Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn deck_for_each() {
        let mut deck = Deck::default();
        deck.remove(PokerCard::decode(1).unwrap());

        let mut hands = HashSet::default();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), nck(51, 3));
    }
}
