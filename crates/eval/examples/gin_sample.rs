// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Samples random Gin Rummy hands and prints the deadwood distribution.
//
// ```bash
// $ cargo r --release --example gin_sample -- --samples 100000 --jokers
// ```
use clap::{Parser, value_parser};
use rand::prelude::*;
use std::time::Instant;

use cardeval_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of hands to sample.
    #[clap(long, short, default_value_t = 10_000)]
    samples: usize,
    /// The number of cards for each hand.
    #[clap(long, short, default_value_t = 10, value_parser = value_parser!(u8).range(10..=11))]
    cards: u8,
    /// Deal from a deck with the two jokers.
    #[clap(long, short)]
    jokers: bool,
    /// Meld only contiguous cards.
    #[clap(long, short)]
    freeze: bool,
    /// The random generator seed.
    #[clap(long, default_value_t = 1)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut hand = GinRummyCards::new();

    let now = Instant::now();
    let mut buckets = [0usize; 12];
    let (mut gin, mut knock) = (0, 0);

    for _ in 0..cli.samples {
        let mut deck = if cli.jokers {
            Deck::with_jokers_shuffled(&mut rng)
        } else {
            Deck::new_and_shuffled(&mut rng)
        };

        let codes = deck.deal_codes(cli.cards as usize);
        let Ok(value) = hand.assign(&codes, cli.freeze) else {
            continue;
        };

        buckets[(value as usize / 10).min(buckets.len() - 1)] += 1;
        gin += hand.is_gin() as usize;
        knock += hand.can_knock() as usize;
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total hands      {}", cli.samples);
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", cli.samples as f64 / elapsed);
    println!("Gin:             {gin}");
    println!("Knock:           {knock}\n");

    for (i, count) in buckets.iter().enumerate() {
        let label = if i + 1 == buckets.len() {
            format!("{}+", i * 10)
        } else {
            format!("{}-{}", i * 10, i * 10 + 9)
        };
        println!("{label:<17}{count}");
    }
}
