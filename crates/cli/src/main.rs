// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardeval command line driver.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::prelude::*;

use cardeval_cards::{Deck, PokerCards};
use cardeval_eval::{GinRummyCards, TexasCards, WildPolicy};

mod report;

#[derive(Debug, Parser)]
#[clap(about = "Evaluates card hands given as codes.")]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Log evaluation details.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classifies cards by suit.
    Poker {
        /// Card codes, 1..=54 or 101..=413, 501, 502.
        #[clap(required = true, value_delimiter = ',')]
        codes: Vec<u16>,
    },
    /// Finds the best Texas Hold'em hand of 5 to 7 cards.
    Texas {
        /// Card codes.
        #[clap(required = true, value_delimiter = ',')]
        codes: Vec<u16>,
    },
    /// Splits a 10 or 11 cards Gin Rummy hand into melds and deadwood.
    Gin {
        /// Meld only contiguous cards.
        #[clap(long, short)]
        freeze: bool,
        /// The maximum number of jokers in a meld.
        #[clap(long, default_value_t = 1)]
        wilds: usize,
        /// Card codes.
        #[clap(required = true, value_delimiter = ',')]
        codes: Vec<u16>,
    },
    /// Deals random hands and evaluates them.
    Deal {
        /// The game to deal.
        #[clap(long, short, value_enum, default_value_t = Game::Texas)]
        game: Game,
        /// The number of hands.
        #[clap(long, short, default_value_t = 1)]
        count: usize,
        /// The random generator seed.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Deal from a deck with the two jokers.
        #[clap(long, short)]
        jokers: bool,
        /// Meld only contiguous cards.
        #[clap(long, short)]
        freeze: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Texas,
    Gin,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Poker { codes } => {
            let mut hand = PokerCards::new();
            hand.assign(&codes).context("Invalid poker hand")?;
            report::poker(&hand, cli.json)?;
        }
        Command::Texas { codes } => {
            let mut hand = TexasCards::new();
            hand.assign(&codes).context("Invalid texas hand")?;
            report::texas(&hand, cli.json)?;
        }
        Command::Gin {
            freeze,
            wilds,
            codes,
        } => {
            let policy = WildPolicy {
                max_wilds_per_meld: wilds,
            };

            let mut hand = GinRummyCards::with_policy(policy);
            hand.assign(&codes, freeze).context("Invalid gin hand")?;
            report::gin(&hand, cli.json)?;
        }
        Command::Deal {
            game,
            count,
            seed,
            jokers,
            freeze,
        } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            info!("Dealing {count} {game:?} hands with seed {seed}");

            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..count {
                let mut deck = if jokers {
                    Deck::with_jokers_shuffled(&mut rng)
                } else {
                    Deck::new_and_shuffled(&mut rng)
                };

                match game {
                    Game::Texas => {
                        let mut hand = TexasCards::new();
                        hand.assign(&deck.deal_codes(TexasCards::MAX_CARDS))?;
                        report::texas(&hand, cli.json)?;
                    }
                    Game::Gin => {
                        let mut hand = GinRummyCards::new();
                        hand.assign(&deck.deal_codes(GinRummyCards::MIN_CARDS), freeze)?;
                        report::gin(&hand, cli.json)?;
                    }
                }
            }
        }
    }

    Ok(())
}
