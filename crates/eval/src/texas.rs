// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em best hand evaluator.
//!
//! A [TexasCards] hand takes 5 to 7 cards and finds the best 5 cards
//! combination by rating all the 5-cards subsets. Each combination is rated
//! with a [TexasValue], a 64-bit score with one nibble per field:
//!
//! ```text
//!   bits 20..24  category (1 = high card .. 10 = royal flush)
//!   bits 16..20  primary rank
//!   bits 12..16  secondary rank
//!   bits  0..12  kickers
//! ```
//!
//! ranks are Ace high values (2..=14) and a straight is ranked by its top card
//! with the wheel (A-2-3-4-5) topped by the five, so a four of a kind of kings
//! with an ace kicker scores `0x8DE000`. Higher scores win, equal scores tie.
//!
//! Jokers are wild, a joker stands for any card not already in the 5 cards
//! combination and a straight flush completed with a joker is never a royal
//! flush.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, fmt};

use cardeval_cards::{
    CardError, Deck, PokerCard, Result, check_distinct, decode_all, for_each_ksubset,
};

/// The hand categories from the worst to the best.
#[repr(u8)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TexasType {
    /// The hand has not been evaluated.
    #[default]
    NoCalc = 0,
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Three,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    Four,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush without wilds.
    RoyalFlush,
}

impl TexasType {
    /// Converts a category ordinal.
    pub fn from_u8(v: u8) -> Option<TexasType> {
        use TexasType::*;
        let t = match v {
            0 => NoCalc,
            1 => HighCard,
            2 => OnePair,
            3 => TwoPair,
            4 => Three,
            5 => Straight,
            6 => Flush,
            7 => FullHouse,
            8 => Four,
            9 => StraightFlush,
            10 => RoyalFlush,
            _ => return None,
        };

        Some(t)
    }

    /// Checks if cards in this category are ranked by their straight position.
    fn is_straight(self) -> bool {
        matches!(
            self,
            TexasType::Straight | TexasType::StraightFlush | TexasType::RoyalFlush
        )
    }
}

impl fmt::Display for TexasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TexasType::NoCalc => "No Calc",
            TexasType::HighCard => "High Card",
            TexasType::OnePair => "One Pair",
            TexasType::TwoPair => "Two Pair",
            TexasType::Three => "Three of a Kind",
            TexasType::Straight => "Straight",
            TexasType::Flush => "Flush",
            TexasType::FullHouse => "Full House",
            TexasType::Four => "Four of a Kind",
            TexasType::StraightFlush => "Straight Flush",
            TexasType::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The value of a 5 cards hand.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TexasValue(u64);

impl TexasValue {
    const CATEGORY_SHIFT: u32 = 20;

    /// Rates exactly 5 distinct cards, jokers are wild.
    pub fn eval(cards: &[PokerCard]) -> Result<TexasValue> {
        let hand: [PokerCard; 5] = cards.try_into().map_err(|_| CardError::InvalidHandSize {
            len: cards.len(),
            min: 5,
            max: 5,
        })?;

        check_distinct(&hand)?;

        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        Ok(best_play(&hand, &deck).0)
    }

    /// The hand category.
    pub fn texas(&self) -> TexasType {
        TexasType::from_u8((self.0 >> Self::CATEGORY_SHIFT) as u8).unwrap_or_default()
    }

    /// The total order score.
    pub fn score(&self) -> u64 {
        self.0
    }

    /// The significant ranks from the most important, zero padded.
    pub fn ranks(&self) -> [u8; 5] {
        let mut ranks = [0; 5];
        for (i, r) in ranks.iter_mut().enumerate() {
            *r = ((self.0 >> (16 - 4 * i)) & 0xF) as u8;
        }

        ranks
    }

    fn pack(texas: TexasType, ranks: &[u8]) -> TexasValue {
        let score = ranks
            .iter()
            .take(5)
            .enumerate()
            .fold((texas as u64) << Self::CATEGORY_SHIFT, |score, (i, r)| {
                score | (*r as u64) << (16 - 4 * i)
            });

        TexasValue(score)
    }
}

impl fmt::Display for TexasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:#08x}", self.texas(), self.0)
    }
}

/// Returns the top of a 5 cards straight in a ranks bitmask.
///
/// The mask uses bits 2..=14 for the ranks and bit 1 for the Ace playing low.
fn straight_top(mask: u16) -> Option<u8> {
    (5..=14u8).rev().find(|top| {
        let window = 0b11111u16 << (top - 4);
        mask & window == window
    })
}

/// Rates 5 cards without jokers, `natural` is false if some cards are wild.
fn rate(hand: &[PokerCard; 5], natural: bool) -> TexasValue {
    let mut counts = [0u8; 15];
    let mut mask = 0u16;
    for card in hand {
        let v = card.rank_value();
        counts[v as usize] += 1;
        mask |= 1 << v;
    }

    if mask & (1 << 14) != 0 {
        mask |= 1 << 1;
    }

    // Ranks groups sorted by count and rank.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for v in (2..=14u8).rev() {
        if counts[v as usize] > 0 {
            groups[num_groups] = (counts[v as usize], v);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_by(|a, b| b.cmp(a));

    let mut ranks = [0u8; 5];
    for (r, g) in ranks.iter_mut().zip(groups.iter()) {
        *r = g.1;
    }

    let flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let straight = straight_top(mask);
    let pattern = (groups[0].0, groups.get(1).map(|g| g.0).unwrap_or(0));

    match (straight, flush, pattern) {
        (Some(14), true, _) if natural => TexasValue::pack(TexasType::RoyalFlush, &[14]),
        (Some(top), true, _) => TexasValue::pack(TexasType::StraightFlush, &[top]),
        (_, _, (4, _)) => TexasValue::pack(TexasType::Four, &ranks),
        (_, _, (3, 2)) => TexasValue::pack(TexasType::FullHouse, &ranks),
        (_, true, _) => TexasValue::pack(TexasType::Flush, &ranks),
        (Some(top), _, _) => TexasValue::pack(TexasType::Straight, &[top]),
        (_, _, (3, _)) => TexasValue::pack(TexasType::Three, &ranks),
        (_, _, (2, 2)) => TexasValue::pack(TexasType::TwoPair, &ranks),
        (_, _, (2, _)) => TexasValue::pack(TexasType::OnePair, &ranks),
        _ => TexasValue::pack(TexasType::HighCard, &ranks),
    }
}

/// Finds the best value for 5 cards trying every substitution for the jokers.
///
/// Returns the value and the cards as played with the jokers replaced.
fn best_play(hand: &[PokerCard; 5], deck: &[PokerCard]) -> (TexasValue, [PokerCard; 5]) {
    let mut wilds = [0usize; 2];
    let mut num_wilds = 0;
    for (pos, card) in hand.iter().enumerate() {
        if card.is_joker() && num_wilds < wilds.len() {
            wilds[num_wilds] = pos;
            num_wilds += 1;
        }
    }

    if num_wilds == 0 {
        return (rate(hand, true), *hand);
    }

    let free = deck
        .iter()
        .filter(|c| !hand.contains(c))
        .copied()
        .collect::<Vec<_>>();

    let mut best = (TexasValue::default(), *hand);
    let mut played = *hand;
    let mut try_play = |played: &[PokerCard; 5]| {
        let value = rate(played, false);
        if value > best.0 {
            best = (value, *played);
        }
    };

    if num_wilds == 1 {
        for card in &free {
            played[wilds[0]] = *card;
            try_play(&played);
        }
    } else {
        for (i, c1) in free.iter().enumerate() {
            for c2 in &free[i + 1..] {
                played[wilds[0]] = *c1;
                played[wilds[1]] = *c2;
                try_play(&played);
            }
        }
    }

    best
}

/// Orders the positions of 5 played cards from the most significant.
fn significance_order(played: &[PokerCard; 5], texas: TexasType) -> [usize; 5] {
    let mut order = [0, 1, 2, 3, 4];

    if texas.is_straight() {
        let wheel = played.iter().any(|c| c.rank_value() == 5)
            && played.iter().any(|c| c.rank_value() == 14)
            && !played.iter().any(|c| c.rank_value() == 13);

        order.sort_by_key(|&i| {
            let v = played[i].rank_value();
            Reverse(if wheel && v == 14 { 1 } else { v })
        });
    } else {
        let count = |v: u8| played.iter().filter(|c| c.rank_value() == v).count();
        order.sort_by_key(|&i| {
            let card = played[i];
            (
                Reverse(count(card.rank_value())),
                Reverse(card.rank_value()),
                card.suit,
            )
        });
    }

    order
}

/// The best 5 cards of a [TexasCards] hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TexasBest {
    /// The best cards from the most significant.
    pub cards: Vec<PokerCard>,
    /// The hand category.
    pub texas: TexasType,
    /// The hand score.
    pub score: u64,
}

/// A Texas Hold'em hand of 5 to 7 cards.
///
/// ```
/// # use cardeval_eval::texas::*;
/// let mut hand = TexasCards::new();
///
/// // A spades, K spades, Q spades, J spades, T spades, A hearts, 4 hearts
/// hand.assign(&[1, 13, 12, 11, 10, 14, 17]).unwrap();
/// assert_eq!(hand.texas(), TexasType::RoyalFlush);
/// assert_eq!(hand.score(), 0xAE0000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TexasCards {
    cards: Vec<PokerCard>,
    best: Vec<PokerCard>,
    substitutes: Vec<(PokerCard, PokerCard)>,
    value: TexasValue,
}

impl TexasCards {
    /// The minimum number of cards in a hand.
    pub const MIN_CARDS: usize = 5;

    /// The maximum number of cards in a hand.
    pub const MAX_CARDS: usize = 7;

    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the cards decoded from `codes` and finds the best hand.
    ///
    /// Returns the number of cards, on error the hand is left empty.
    pub fn assign(&mut self, codes: &[u16]) -> Result<usize> {
        self.reset();
        Self::check_size(codes.len())?;
        let cards = decode_all(codes)?;
        self.assign_cards(&cards)
    }

    /// Assigns the cards and finds the best hand.
    pub fn assign_cards(&mut self, cards: &[PokerCard]) -> Result<usize> {
        self.reset();
        Self::check_size(cards.len())?;
        check_distinct(cards)?;

        self.cards.extend_from_slice(cards);
        if let Err(e) = self.calc_best() {
            self.reset();
            return Err(e);
        }

        debug!("Texas {self}");
        Ok(self.cards.len())
    }

    /// The input cards.
    pub fn cards(&self) -> &[PokerCard] {
        &self.cards
    }

    /// The best 5 cards from the most significant, jokers included as jokers.
    pub fn best(&self) -> &[PokerCard] {
        &self.best
    }

    /// The jokers in the best hand paired with the card they stand for.
    pub fn substitutes(&self) -> &[(PokerCard, PokerCard)] {
        &self.substitutes
    }

    /// The best hand category.
    pub fn texas(&self) -> TexasType {
        self.value.texas()
    }

    /// The best hand score.
    pub fn score(&self) -> u64 {
        self.value.score()
    }

    /// The best hand value.
    pub fn value(&self) -> TexasValue {
        self.value
    }

    /// Returns a copy of the best hand.
    pub fn get_best(&self) -> TexasBest {
        TexasBest {
            cards: self.best.clone(),
            texas: self.texas(),
            score: self.score(),
        }
    }

    /// Clears the hand.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.best.clear();
        self.substitutes.clear();
        self.value = TexasValue::default();
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

    fn calc_best(&mut self) -> Result<()> {
        let deck = Deck::default().into_iter().collect::<Vec<_>>();

        // The best value, the input positions and the played cards.
        let mut best: Option<(TexasValue, [usize; 5], [PokerCard; 5])> = None;
        for_each_ksubset(self.cards.len(), 5, |idx| {
            let mut hand = [PokerCard::SMALL_JOKER; 5];
            for (card, i) in hand.iter_mut().zip(idx) {
                *card = self.cards[*i];
            }

            let (value, played) = best_play(&hand, &deck);
            if best.is_none_or(|b| value > b.0) {
                let mut pos = [0; 5];
                pos.copy_from_slice(idx);
                best = Some((value, pos, played));
            }
        });

        let (value, pos, played) =
            best.ok_or(CardError::InternalInvariant("texas best hand"))?;

        for i in significance_order(&played, value.texas()) {
            let card = self.cards[pos[i]];
            self.best.push(card);
            if card.is_joker() {
                self.substitutes.push((card, played[i]));
            }
        }

        self.value = value;

        if self.best.len() != 5 || value.texas() == TexasType::NoCalc {
            return Err(CardError::InternalInvariant("texas best hand"));
        }

        Ok(())
    }
}

impl fmt::Display for TexasCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        for card in &self.best {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardeval_cards::Suit;

    fn assign(codes: &[u16]) -> TexasCards {
        let mut hand = TexasCards::new();
        hand.assign(codes).unwrap();
        hand
    }

    fn value(codes: &[u16]) -> TexasValue {
        assign(codes).value()
    }

    fn card(code: u16) -> PokerCard {
        PokerCard::decode(code).unwrap()
    }

    #[test]
    fn categories() {
        use TexasType::*;

        // Codes 1..=13 spades, 14..=26 hearts, 27..=39 clubs, 40..=52 diamonds.
        let hands: [(&[u16], TexasType); 10] = [
            (&[1, 10, 11, 12, 13, 6, 8], RoyalFlush),
            (&[1, 2, 3, 4, 5, 6 + 13, 8 + 13], StraightFlush),
            (&[1, 1 + 13, 1 + 26, 1 + 39, 13, 6, 7], Four),
            (&[1, 1 + 13, 1 + 26, 13 + 39, 13, 13 + 26, 7], FullHouse),
            (&[9, 10, 5, 12, 13, 6, 7 + 13], Flush),
            (&[1 + 13, 2 + 13, 3, 4, 5, 7 + 13, 8 + 26], Straight),
            (&[9, 9 + 13, 9 + 39, 12, 13, 6 + 13, 7 + 26], Three),
            (&[9, 9 + 13, 12 + 26, 12, 13, 6 + 13, 7 + 26], TwoPair),
            (&[9, 9 + 13, 1 + 26, 12, 13, 6 + 13, 7 + 26], OnePair),
            (&[1, 9 + 13, 2 + 26, 12, 13, 6 + 13, 7 + 26], HighCard),
        ];

        for (codes, texas) in hands {
            let hand = assign(codes);
            assert_eq!(hand.texas(), texas, "{codes:?}");
            assert_eq!(hand.best().len(), 5);
            assert!(hand.substitutes().is_empty());
        }
    }

    #[test]
    fn steel_wheel() {
        // Codes 14 and 15 are the ace and deuce of hearts.
        let hand = assign(&[1, 2, 3, 4, 5, 14, 15]);
        assert_eq!(hand.texas(), TexasType::StraightFlush);
        assert_eq!(hand.score(), 0x950000);

        let best = hand.best().iter().map(|c| c.code()).collect::<Vec<_>>();
        assert_eq!(best, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn jokers_are_wild() {
        let hand = assign(&[1, 2, 3, 4, 5, 53, 54]);
        assert_eq!(hand.texas(), TexasType::StraightFlush);
        assert_eq!(hand.value().ranks(), [7, 0, 0, 0, 0]);

        assert_eq!(
            hand.best(),
            &[
                PokerCard::BIG_JOKER,
                PokerCard::SMALL_JOKER,
                card(5),
                card(4),
                card(3)
            ]
        );

        assert_eq!(
            hand.substitutes(),
            &[
                (PokerCard::BIG_JOKER, card(7)),
                (PokerCard::SMALL_JOKER, card(6))
            ]
        );

        // A joker and four kings make four of a kind with an ace kicker.
        let hand = assign(&[13, 26, 39, 53, 1 + 13, 7 + 26, 9]);
        assert_eq!(hand.texas(), TexasType::Four);
        assert_eq!(hand.score(), 0x8DE000);
    }

    #[test]
    fn wild_royal_is_straight_flush() {
        let hand = assign(&[10, 11, 12, 13, 53, 20, 30]);
        assert_eq!(hand.texas(), TexasType::StraightFlush);
        assert_eq!(hand.score(), 0x9E0000);

        let royal = value(&[10, 11, 12, 13, 1, 20, 30]);
        assert_eq!(royal.texas(), TexasType::RoyalFlush);
        assert!(royal > hand.value());
    }

    #[test]
    fn four_of_a_kind_kings() {
        let hand = assign(&[13, 26, 39, 52, 1, 2, 20]);
        assert_eq!(hand.texas(), TexasType::Four);
        assert_eq!(hand.value().ranks(), [13, 14, 0, 0, 0]);
        assert_eq!(hand.score() >> 16 & 0xF, 0xD);

        assert!(hand.best()[..4].iter().all(|c| c.number == 13));
        assert_eq!(hand.best()[4], card(1));
    }

    #[test]
    fn score_order() {
        // Each hand beats the next one.
        let hands: [&[u16]; 14] = [
            &[10, 11, 12, 13, 1],                // royal flush
            &[9, 10, 11, 12, 13],                // king high straight flush
            &[1, 2, 3, 4, 5],                    // steel wheel
            &[1, 14, 27, 40, 2],                 // four aces
            &[13, 26, 39, 52, 1],                // four kings ace kicker
            &[13, 26, 39, 52, 12],               // four kings queen kicker
            &[2, 15, 28, 3, 16],                 // deuces full of treys
            &[1, 3, 5, 7, 9],                    // ace high flush
            &[10 + 13, 11, 12, 13, 1],           // broadway
            &[2 + 13, 3, 4, 5, 6],               // six high straight
            &[14, 2, 3, 4, 5 + 26],              // wheel
            &[1, 14, 13, 13 + 13, 12],           // aces and kings
            &[1, 14, 13, 13 + 13, 11 + 26],      // aces and kings, jack kicker
            &[1, 14, 13, 12 + 13, 11 + 26],      // pair of aces
        ];

        let values = hands.iter().map(|h| value(h)).collect::<Vec<_>>();
        for w in values.windows(2) {
            assert!(w[0] > w[1], "{} <= {}", w[0], w[1]);
        }

        let kickers = [
            value(&[1, 14, 13, 12 + 13, 10 + 26]),
            value(&[1, 14, 13, 12 + 13, 9 + 26]),
            value(&[1, 14, 13, 11 + 13, 10 + 26]),
            value(&[1, 3 + 13, 4, 6 + 26, 8 + 39]),
            value(&[1, 3 + 13, 4, 6 + 26, 7 + 39]),
        ];

        for w in kickers.windows(2) {
            assert!(w[0] > w[1], "{} <= {}", w[0], w[1]);
        }
    }

    #[test]
    fn suits_do_not_break_ties() {
        let a = value(&[1, 2 + 13, 4 + 26, 6 + 39, 8]);
        let b = value(&[1 + 13, 2 + 26, 4 + 39, 6, 8 + 13]);
        assert_eq!(a, b);
        assert_eq!(a.texas(), TexasType::HighCard);
        assert_eq!(a.ranks(), [14, 8, 6, 4, 2]);
    }

    #[test]
    fn best_is_argmax() {
        let codes = [9, 9 + 13, 1 + 26, 12, 13, 6 + 13, 7 + 26];
        let hand = assign(&codes);
        let cards = decode_all(&codes).unwrap();

        let mut max = TexasValue::default();
        for_each_ksubset(cards.len(), 5, |idx| {
            let sub = idx.iter().map(|i| cards[*i]).collect::<Vec<_>>();
            max = max.max(TexasValue::eval(&sub).unwrap());
        });

        assert_eq!(hand.value(), max);
        assert_eq!(TexasValue::eval(hand.best()).unwrap(), max);
    }

    #[test]
    fn five_cards_frequencies() {
        let mut counts = [0usize; 11];
        let deck = Deck::default().into_iter().collect::<Vec<_>>();
        Deck::default().for_each(5, |cards| {
            let mut hand = [PokerCard::SMALL_JOKER; 5];
            hand.copy_from_slice(cards);
            let (value, _) = best_play(&hand, &deck);
            counts[value.texas() as usize] += 1;
        });

        assert_eq!(counts[TexasType::NoCalc as usize], 0);
        assert_eq!(counts[TexasType::HighCard as usize], 1_302_540);
        assert_eq!(counts[TexasType::OnePair as usize], 1_098_240);
        assert_eq!(counts[TexasType::TwoPair as usize], 123_552);
        assert_eq!(counts[TexasType::Three as usize], 54_912);
        assert_eq!(counts[TexasType::Straight as usize], 10_200);
        assert_eq!(counts[TexasType::Flush as usize], 5_108);
        assert_eq!(counts[TexasType::FullHouse as usize], 3_744);
        assert_eq!(counts[TexasType::Four as usize], 624);
        assert_eq!(counts[TexasType::StraightFlush as usize], 36);
        assert_eq!(counts[TexasType::RoyalFlush as usize], 4);
    }

    #[test]
    fn invalid_hands() {
        let mut hand = TexasCards::new();

        assert_eq!(
            hand.assign(&[1, 2, 3, 4]).unwrap_err(),
            CardError::InvalidHandSize {
                len: 4,
                min: 5,
                max: 7
            }
        );

        assert!(matches!(
            hand.assign(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Err(CardError::InvalidHandSize { len: 8, .. })
        ));

        assert_eq!(
            hand.assign(&[1, 2, 3, 4, 101]).unwrap_err(),
            CardError::DuplicateCard {
                card: card(1),
                index: 4
            }
        );

        assert_eq!(
            hand.assign(&[1, 2, 3, 4, 55]).unwrap_err(),
            CardError::InvalidCode { code: 55, index: 4 }
        );

        assert_eq!(hand.texas(), TexasType::NoCalc);
        assert!(hand.best().is_empty());
        assert_eq!(hand.get_best(), TexasBest::default());
    }

    #[test]
    fn reassign_resets() {
        let mut hand = TexasCards::new();
        hand.assign(&[1, 2, 3, 4, 5, 53]).unwrap();
        assert!(!hand.substitutes().is_empty());

        hand.assign(&[1, 14, 27, 2, 3 + 13]).unwrap();
        assert_eq!(hand.texas(), TexasType::Three);
        assert!(hand.substitutes().is_empty());
        assert_eq!(hand.cards().len(), 5);

        let best = hand.get_best();
        assert_eq!(best.texas, TexasType::Three);
        assert_eq!(best.score, 0x4E3200);
        assert!(best.cards[..3].iter().all(|c| c.number == 1));
        assert_eq!(best.cards[0].suit, Suit::Spade);
    }

    #[test]
    fn hand_to_string() {
        let hand = assign(&[13, 26, 39, 52, 1]);
        assert_eq!(hand.to_string(), "Four of a Kind 0x8de000 KS KH KC KD AS");
    }
}
