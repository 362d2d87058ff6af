// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the card evaluators.
use thiserror::Error;

use crate::PokerCard;

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, CardError>;

/// An error raised while decoding or evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card code outside the accepted range.
    #[error("invalid card code {code} at position {index}")]
    InvalidCode {
        /// The rejected code.
        code: u16,
        /// Position of the code in the input.
        index: usize,
    },
    /// The hand length violates the evaluator size contract.
    #[error("invalid hand size {len}, expected {min} to {max} cards")]
    InvalidHandSize {
        /// The input length.
        len: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// Two inputs decode to the same card.
    #[error("duplicate card {card} at position {index}")]
    DuplicateCard {
        /// The repeated card.
        card: PokerCard,
        /// Position of the repetition in the input.
        index: usize,
    },
    /// An output buffer or hand capacity is too small.
    #[error("capacity exceeded, {required} required but {available} available")]
    CapacityExceeded {
        /// The required capacity.
        required: usize,
        /// The available capacity.
        available: usize,
    },
    /// A post-condition check failed, this is a bug.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl CardError {
    /// The negative code used to report this error at the C boundary.
    pub fn code(&self) -> i8 {
        match self {
            CardError::InvalidCode { .. } => -2,
            CardError::InvalidHandSize { .. } => -3,
            CardError::DuplicateCard { .. } => -4,
            CardError::CapacityExceeded { .. } => -5,
            CardError::InternalInvariant(_) => -6,
        }
    }

    /// The input position that caused this error, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            CardError::InvalidCode { index, .. } | CardError::DuplicateCard { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// Returns this error with the position set to `index`.
    pub(crate) fn at(self, index: usize) -> Self {
        match self {
            CardError::InvalidCode { code, .. } => CardError::InvalidCode { code, index },
            CardError::DuplicateCard { card, .. } => CardError::DuplicateCard { card, index },
            e => e,
        }
    }
}

/// Returns an [CardError::InternalInvariant] if the condition doesn't hold.
pub(crate) fn ensure(cond: bool, what: &'static str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(CardError::InternalInvariant(what))
    }
}
