// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em and Gin Rummy hand evaluators.
//!
//! The [texas] module finds the best 5 cards out of 5 to 7 cards and rates
//! them with a totally ordered score:
//!
//! ```
//! # use cardeval_eval::*;
//! let mut hand = TexasCards::new();
//! hand.assign(&[1, 2, 3, 4, 5, 14, 15]).unwrap();
//! assert_eq!(hand.texas(), TexasType::StraightFlush);
//! ```
//!
//! The [gin] module splits a 10 or 11 cards Gin Rummy hand into melds and
//! deadwood with the lowest deadwood value:
//!
//! ```
//! # use cardeval_eval::*;
//! let mut hand = GinRummyCards::new();
//! hand.assign(&[1, 2, 3, 14, 27, 40, 13, 26, 39, 5], false).unwrap();
//! assert_eq!(hand.deadwood_value(), 5);
//! ```
//!
//! Jokers are wild in both evaluators.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod gin;
pub use gin::{GinResult, GinRummyCards, Meld, MeldKind, WildPolicy};

pub mod texas;
pub use texas::{TexasBest, TexasCards, TexasType, TexasValue};

// Reexport cards types.
pub use cardeval_cards::{CardError, Deck, PokerCard, PokerCards, Suit};
