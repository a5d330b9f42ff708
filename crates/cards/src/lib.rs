// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "Td".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, discarding and sampling cards:
//!
//! ```
//! # use handrank_cards::Deck;
//! let mut rng = rand::rng();
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//!
//! // Deal two cards and throw them in the discard pile.
//! for _ in 0..2 {
//!     let card = deck.deal(&mut rng).unwrap();
//!     deck.discard(card);
//! }
//! assert_eq!(deck.count(), 50);
//!
//! // Put the discards back in the deck.
//! deck.reset(&mut rng);
//! assert_eq!(deck.count(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod deck;
pub use deck::{Card, Deck, Rank, Suit, parse_cards};

/// Errors when building cards from numbers or text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A rank value outside 2..=14.
    #[error("invalid rank value {0}, expected 2..=14")]
    InvalidRank(u8),
    /// A suit value outside 1..=4.
    #[error("invalid suit value {0}, expected 1..=4")]
    InvalidSuit(u8),
    /// A card text that is not a rank letter followed by a suit letter.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}
