// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Checks the evaluators against exhaustive searches on random hands.
use rand::prelude::*;

use cardeval_cards::{PokerCard, for_each_ksubset};
use cardeval_eval::{gin::meld_kind, *};

/// A split cost as (deadwood value, deadwood cards, -sum of squared meld lengths).
type Key = (u32, usize, i64);

fn key_of(hand: &GinRummyCards) -> Key {
    let spread = hand
        .melds()
        .iter()
        .map(|m| (m.len() * m.len()) as i64)
        .sum::<i64>();
    (hand.deadwood_value() as u32, hand.deadwood().len(), -spread)
}

fn loose_key(cards: &[PokerCard], mask: usize) -> Key {
    let loose = (0..cards.len()).filter(|i| mask & (1 << i) != 0);
    let value = loose
        .clone()
        .map(|i| cards[i].deadwood_value() as u32)
        .sum::<u32>();
    (value, loose.count(), 0)
}

/// Tries every set of disjoint melds.
fn search_free(cards: &[PokerCard], melds: &[usize], free: usize, spread: i64, best: &mut Key) {
    let (value, loose, _) = loose_key(cards, free);
    *best = (*best).min((value, loose, -spread));

    for (i, meld) in melds.iter().enumerate() {
        if free & meld == *meld {
            let len = meld.count_ones() as i64;
            search_free(cards, &melds[i + 1..], free & !meld, spread + len * len, best);
        }
    }
}

fn brute_free(cards: &[PokerCard], policy: WildPolicy) -> Key {
    let n = cards.len();
    let melds = (1..1usize << n)
        .filter(|m| m.count_ones() >= 3)
        .filter(|m| {
            let meld = (0..n)
                .filter(|i| m & (1 << i) != 0)
                .map(|i| cards[i])
                .collect::<Vec<_>>();
            meld_kind(&meld, policy).is_some()
        })
        .collect::<Vec<_>>();

    let mut best = (u32::MAX, usize::MAX, 0);
    search_free(cards, &melds, (1 << n) - 1, 0, &mut best);
    best
}

/// Tries every split of the cards into contiguous windows.
fn brute_frozen(cards: &[PokerCard], policy: WildPolicy) -> Key {
    if cards.is_empty() {
        return (0, 0, 0);
    }

    let first = &cards[..1];
    let (v, l, s) = brute_frozen(&cards[1..], policy);
    let mut best = (v + first[0].deadwood_value() as u32, l + 1, s);

    for len in 3..=cards.len() {
        if meld_kind(&cards[..len], policy).is_some() {
            let (v, l, s) = brute_frozen(&cards[len..], policy);
            best = best.min((v, l, s - (len * len) as i64));
        }
    }

    best
}

fn check_split(hand: &GinRummyCards, cards: &[PokerCard]) {
    let mut all = hand.deadwood().to_vec();
    for meld in hand.melds() {
        assert!(meld_kind(&meld.cards, hand.policy()).is_some(), "{meld}");
        all.extend_from_slice(&meld.cards);
    }

    let mut expected = cards.to_vec();
    all.sort();
    expected.sort();
    assert_eq!(all, expected);

    let value = hand
        .deadwood()
        .iter()
        .map(|c| c.deadwood_value() as u32)
        .sum::<u32>();
    assert_eq!(value, hand.deadwood_value() as u32);
}

#[test]
fn gin_free_is_optimal() {
    let mut rng = StdRng::seed_from_u64(101);
    let policies = [
        WildPolicy::NO_WILDS,
        WildPolicy::default(),
        WildPolicy {
            max_wilds_per_meld: 2,
        },
    ];

    for round in 0..300 {
        let policy = policies[round % policies.len()];
        let len = rng.random_range(10..=11);
        let mut deck = Deck::with_jokers_shuffled(&mut rng);
        let codes = deck.deal_codes(len);

        let mut hand = GinRummyCards::with_policy(policy);
        hand.assign(&codes, false).unwrap();

        let cards = hand.cards().to_vec();
        check_split(&hand, &cards);
        assert_eq!(key_of(&hand), brute_free(&cards, policy), "{codes:?}");
    }
}

#[test]
fn gin_frozen_is_optimal() {
    let mut rng = StdRng::seed_from_u64(202);

    for _ in 0..300 {
        // Sorted hands have more contiguous melds.
        let mut deck = Deck::with_jokers_shuffled(&mut rng);
        let mut codes = deck.deal_codes(10);
        if rng.random_bool(0.5) {
            codes.sort();
        }

        let mut hand = GinRummyCards::new();
        hand.assign(&codes, true).unwrap();
        let frozen = key_of(&hand);

        let cards = hand.cards().to_vec();
        check_split(&hand, &cards);
        assert_eq!(frozen, brute_frozen(&cards, hand.policy()), "{codes:?}");

        hand.assign(&codes, false).unwrap();
        assert!(hand.deadwood_value() as u32 <= frozen.0);
    }
}

#[test]
fn texas_best_is_argmax() {
    let mut rng = StdRng::seed_from_u64(303);

    for _ in 0..200 {
        let len = rng.random_range(5..=7);
        let mut deck = Deck::with_jokers_shuffled(&mut rng);
        let codes = deck.deal_codes(len);

        let mut hand = TexasCards::new();
        hand.assign(&codes).unwrap();

        let cards = hand.cards().to_vec();
        let mut max = TexasValue::default();
        for_each_ksubset(cards.len(), 5, |idx| {
            let sub = idx.iter().map(|i| cards[*i]).collect::<Vec<_>>();
            max = max.max(TexasValue::eval(&sub).unwrap());
        });

        assert_eq!(hand.value(), max, "{codes:?}");
        assert_eq!(TexasValue::eval(hand.best()).unwrap(), max);
        assert!(hand.best().iter().all(|c| cards.contains(c)));
        assert_eq!(
            hand.substitutes().len(),
            hand.best().iter().filter(|c| c.is_joker()).count()
        );

        for (joker, card) in hand.substitutes() {
            assert!(joker.is_joker());
            assert!(!card.is_joker());
            assert!(!hand.best().contains(card));
        }
    }
}

#[test]
fn texas_scores_are_consistent() {
    let mut rng = StdRng::seed_from_u64(404);

    for _ in 0..2_000 {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let a = deck.deal_codes(5);
        let b = deck.deal_codes(5);

        let mut ha = TexasCards::new();
        let mut hb = TexasCards::new();
        ha.assign(&a).unwrap();
        hb.assign(&b).unwrap();

        // The category dominates the score.
        if ha.texas() > hb.texas() {
            assert!(ha.score() > hb.score());
        } else if ha.texas() < hb.texas() {
            assert!(ha.score() < hb.score());
        }

        assert_eq!(ha.score() >> 20, ha.texas() as u64);
        assert_eq!(ha.value().ranks()[0] as u64, ha.score() >> 16 & 0xF);
    }
}
