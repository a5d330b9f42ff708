// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator sorts the pool of cards by rank and looks for the hand
//! categories from the strongest to the weakest, the first category found is
//! the hand value:
//!
//! 1. Straight flush
//! 2. Four of a kind
//! 3. Full house
//! 4. Flush
//! 5. Straight
//! 6. Three of a kind
//! 7. Two pair
//! 8. One pair
//! 9. High card
//!
//! A [HandValue] holds the hand rank and the five cards that make the hand, it
//! implements [Ord] so that hands can be compared to find a winner and
//! [Display](std::fmt::Display) for a human readable description.
use thiserror::Error;

#[allow(clippy::module_inception)]
pub mod eval;
pub use eval::{HandRank, HandValue, MIN_CARDS, showdown};

mod detect;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The pool has less than five cards.
    #[error("invalid input: a hand needs at least 5 cards, got {len}")]
    InvalidInput {
        /// The number of cards given.
        len: usize,
    },
}
