// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates pools of 5 or more cards, a player hole cards plus the board,
//! and returns the best five cards hand with its rank. Hand values are totally
//! ordered and can be compared directly to find the winner at showdown:
//!
//! ```
//! # use handrank_eval::*;
//! let board = parse_cards("Qc Jc Tc 7h 2d").unwrap();
//!
//! let mut p1 = parse_cards("Ac Kc").unwrap();
//! p1.extend_from_slice(&board);
//! let v1 = HandValue::eval(&p1).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert_eq!(v1.to_string(), "A Royal Flush.");
//!
//! let mut p2 = parse_cards("Qd Qs").unwrap();
//! p2.extend_from_slice(&board);
//! let v2 = HandValue::eval(&p2).unwrap();
//! assert_eq!(v2.rank(), HandRank::ThreeOfAKind);
//!
//! assert!(v1 > v2);
//! assert_eq!(showdown(&[v1, v2]), vec![0]);
//! ```
//!
//! Evaluation is a pure function of the cards, [par_eval] evaluates many
//! pools using parallel tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, MIN_CARDS, showdown};

mod parallel;
pub use parallel::par_eval;

// Reexport cards types.
pub use handrank_cards::{Card, CardError, Deck, Rank, Suit, parse_cards};
