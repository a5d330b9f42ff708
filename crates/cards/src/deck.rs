// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxssrrrr|
///   +--------+
///   r = rank of card (deuce=2,trey=3,four=4,...,king=13,ace=14)
///   s = suit of card minus one (clubs=0,spades=1,diamonds=2,hearts=3)
/// ```
///
/// Cards only compare for equality, to order cards by value use [Card::rank].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((suit as u8 - 1) << 4) | rank as u8)
    }

    /// Create a card from its numeric rank (2..=14) and suit (1..=4).
    pub fn from_values(rank: u8, suit: u8) -> Result<Card, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 >> 4 {
            0 => Suit::Clubs,
            1 => Suit::Spades,
            2 => Suit::Diamonds,
            3 => Suit::Hearts,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::try_from(self.0 & 0xf) {
            Ok(rank) => rank,
            Err(_) => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// The card long name, e.g. `Ace of Clubs`.
    pub fn long_desc(&self) -> String {
        format!("{} of {}", self.rank().name(), self.suit().name())
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_values(id & 0xf, (id >> 4) + 1)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a two characters card like `Ac` or `th`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(r).ok_or_else(invalid)?;
        let suit = Suit::from_char(c).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a list of cards separated by spaces or commas, e.g. `"Ac Kd, 2h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric value of this rank, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank English name.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The rank English name in plural form, e.g. "Sixes".
    pub fn plural(&self) -> String {
        match self {
            Rank::Six => "Sixes".to_string(),
            rank => format!("{}s", rank.name()),
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 1,
    /// Spades suit.
    Spades = 2,
    /// Diamonds suit.
    Diamonds = 3,
    /// Hearts suit.
    Hearts = 4,
}

impl Suit {
    /// Returns all suits in value order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts].into_iter()
    }

    /// The numeric value of this suit, 1 for clubs up to 4 for hearts.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The suit English name.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::suits()
            .find(|s| s.value() == value)
            .ok_or(CardError::InvalidSuit(value))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck with its discard pile.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    discards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the top card of the deck.
    ///
    /// Cards are dealt from the front, an unshuffled deck deals `2c` first.
    /// When the deck is empty the discards are shuffled back in first, returns
    /// `None` only if there are no discards either.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            self.reset(rng);
        }

        (!self.cards.is_empty()).then(|| self.cards.remove(0))
    }

    /// Adds a card to the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }

    /// Moves the discards back into the deck and shuffles it.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.cards.append(&mut self.discards);
        self.shuffle(rng);
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Number of cards in the discard pile.
    pub fn discards_count(&self) -> usize {
        self.discards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Returns k random cards from the deck, the deck is not changed.
    pub fn sample<R: Rng>(&self, rng: &mut R, k: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, k).copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self {
            cards,
            discards: Vec::new(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
