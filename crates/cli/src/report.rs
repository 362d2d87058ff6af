// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Results printing.
use anyhow::Result;
use serde::Serialize;

use cardeval_cards::{Counter, PokerCard, PokerCards, Suit};
use cardeval_eval::{GinRummyCards, TexasBest, TexasCards};

#[derive(Debug, Serialize)]
struct PokerReport<'a> {
    cards: &'a [PokerCard],
    counters: Vec<Counter>,
    jokers: usize,
}

#[derive(Debug, Serialize)]
struct TexasReport<'a> {
    cards: &'a [PokerCard],
    best: TexasBest,
    substitutes: &'a [(PokerCard, PokerCard)],
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn cards_line(cards: &[PokerCard]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the cards and the suit counters.
pub fn poker(hand: &PokerCards, json: bool) -> Result<()> {
    if json {
        return print_json(&PokerReport {
            cards: hand.cards(),
            counters: Suit::suits()
                .chain(Some(Suit::Joker))
                .map(|s| hand[s])
                .collect(),
            jokers: hand.joker_count(),
        });
    }

    println!("{}", cards_line(hand.cards()));
    for suit in Suit::suits().chain(Some(Suit::Joker)) {
        let counter = &hand[suit];
        match counter.run_top(3).filter(|_| !suit.is_joker()) {
            Some(top) => println!("{counter} run to {top}"),
            None => println!("{counter}"),
        }
    }

    Ok(())
}

/// Prints the best Texas hand.
pub fn texas(hand: &TexasCards, json: bool) -> Result<()> {
    if json {
        return print_json(&TexasReport {
            cards: hand.cards(),
            best: hand.get_best(),
            substitutes: hand.substitutes(),
        });
    }

    println!("{} => {hand}", cards_line(hand.cards()));
    for (joker, card) in hand.substitutes() {
        println!("  {joker} as {card}");
    }

    Ok(())
}

/// Prints the Gin Rummy split.
pub fn gin(hand: &GinRummyCards, json: bool) -> Result<()> {
    if json {
        return print_json(&hand.result());
    }

    println!("{} => {hand}", cards_line(hand.cards()));
    if hand.is_gin() {
        println!("  gin");
    } else if hand.can_knock() {
        println!("  knock");
    }

    Ok(())
}
