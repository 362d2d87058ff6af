// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card types shared by the cardeval evaluators.
//!
//! Cards are exchanged as 16-bit codes and decoded into [PokerCard] values:
//!
//! ```
//! # use cardeval_cards::{PokerCard, Suit};
//! let ace = PokerCard::decode(1).unwrap();
//! assert_eq!(ace.suit, Suit::Spade);
//! assert_eq!(ace.number, 1);
//!
//! assert!(PokerCard::decode(53).unwrap().is_joker());
//! assert!(PokerCard::decode(55).is_err());
//! ```
//!
//! A [PokerCards] hand keeps the decoded cards together with a [Counter]
//! histogram for each suit:
//!
//! ```
//! # use cardeval_cards::{PokerCards, Suit};
//! let mut hand = PokerCards::new();
//! hand.assign(&[1, 2, 3, 4, 14, 53]).unwrap();
//! assert_eq!(hand[Suit::Spade].n, 4);
//! assert_eq!(hand[Suit::Heart].n, 1);
//! assert_eq!(hand.joker_count(), 1);
//! ```
//!
//! The [Deck] type shuffles and deals cards and iterates k-cards hands:
//!
//! ```
//! # use cardeval_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
pub use card::{PokerCard, Suit, check_distinct, decode_all};

mod counter;
pub use counter::Counter;

mod deck;
pub use deck::{Deck, for_each_ksubset, nck};

pub mod error;
pub use error::{CardError, Result};

mod poker;
pub use poker::PokerCards;
