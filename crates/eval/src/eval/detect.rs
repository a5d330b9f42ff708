// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detection.
//!
//! All functions in this module expect a pool of at least 5 cards sorted by
//! ascending rank, cards with the same rank keep the order they were given in.
use std::ops::Range;

use super::eval::{HandRank, HandValue};
use crate::{Card, Rank, Suit};

/// Returns the best hand in a sorted pool.
pub(super) fn classify(pool: &[Card]) -> HandValue {
    debug_assert!(pool.len() >= 5);
    debug_assert!(pool.windows(2).all(|w| w[0].rank() <= w[1].rank()));

    straight_flush(pool)
        .or_else(|| four_of_a_kind(pool))
        .or_else(|| full_house(pool))
        .or_else(|| flush(pool))
        .or_else(|| straight(pool))
        .or_else(|| three_of_a_kind(pool))
        .or_else(|| two_pair(pool))
        .or_else(|| one_pair(pool))
        .unwrap_or_else(|| high_card(pool))
}

fn straight_flush(pool: &[Card]) -> Option<HandValue> {
    Suit::suits().find_map(|suit| {
        let cards = suited(pool, suit);
        if cards.len() < 5 {
            return None;
        }

        find_straight(&cards).map(|cards| HandValue::new(HandRank::StraightFlush, cards))
    })
}

fn four_of_a_kind(pool: &[Card]) -> Option<HandValue> {
    let top = find_multiples(pool, 4)?;
    let [kicker] = top_kickers(pool, top - 3..top + 1);
    let cards = [pool[top - 3], pool[top - 2], pool[top - 1], pool[top], kicker];
    Some(HandValue::new(HandRank::FourOfAKind, cards))
}

fn full_house(pool: &[Card]) -> Option<HandValue> {
    let top = find_multiples(pool, 3)?;
    let trips = [pool[top - 2], pool[top - 1], pool[top]];

    // A second three of a kind provides the pair.
    let mut rest = pool.to_vec();
    rest.drain(top - 2..top + 1);
    let pair = find_multiples(&rest, 2)?;

    let cards = [trips[0], trips[1], trips[2], rest[pair - 1], rest[pair]];
    Some(HandValue::new(HandRank::FullHouse, cards))
}

fn flush(pool: &[Card]) -> Option<HandValue> {
    Suit::suits().find_map(|suit| {
        let cards = suited(pool, suit);
        let start = cards.len().checked_sub(5)?;
        let cards = cards[start..].try_into().ok()?;
        Some(HandValue::new(HandRank::Flush, cards))
    })
}

fn straight(pool: &[Card]) -> Option<HandValue> {
    find_straight(pool).map(|cards| HandValue::new(HandRank::Straight, cards))
}

fn three_of_a_kind(pool: &[Card]) -> Option<HandValue> {
    let top = find_multiples(pool, 3)?;
    let [low, high] = top_kickers(pool, top - 2..top + 1);
    let cards = [pool[top - 2], pool[top - 1], pool[top], low, high];
    Some(HandValue::new(HandRank::ThreeOfAKind, cards))
}

fn two_pair(pool: &[Card]) -> Option<HandValue> {
    let high = find_multiples(pool, 2)?;

    let mut rest = pool.to_vec();
    rest.drain(high - 1..high + 1);
    let low = find_multiples(&rest, 2)?;
    let low_pair = [rest[low - 1], rest[low]];

    // With three pairs the kicker can come from the lowest pair.
    rest.drain(low - 1..low + 1);
    let kicker = *rest.last()?;

    let cards = [low_pair[0], low_pair[1], pool[high - 1], pool[high], kicker];
    Some(HandValue::new(HandRank::TwoPair, cards))
}

fn one_pair(pool: &[Card]) -> Option<HandValue> {
    let top = find_multiples(pool, 2)?;
    let [low, mid, high] = top_kickers(pool, top - 1..top + 1);
    let cards = [pool[top - 1], pool[top], low, mid, high];
    Some(HandValue::new(HandRank::OnePair, cards))
}

fn high_card(pool: &[Card]) -> HandValue {
    let top = &pool[pool.len() - 5..];
    let cards = [top[0], top[1], top[2], top[3], top[4]];
    HandValue::new(HandRank::HighCard, cards)
}

/// The cards in the pool with the given suit.
fn suited(pool: &[Card], suit: Suit) -> Vec<Card> {
    pool.iter().copied().filter(|c| c.suit() == suit).collect()
}

/// Returns the index of the top card of the highest rank that appears at
/// least `target` times, the other cards of the same rank are just below it.
pub(super) fn find_multiples(pool: &[Card], target: usize) -> Option<usize> {
    let mut top = pool.len().checked_sub(1)?;

    while top > 0 {
        let rank = pool[top].rank();
        let count = pool[..=top]
            .iter()
            .rev()
            .take_while(|c| c.rank() == rank)
            .count();

        if count >= target {
            return Some(top);
        }

        top = top.checked_sub(count)?;
    }

    None
}

/// Returns the highest straight in the pool with cards in ascending order,
/// the ace is the first card of a five high straight.
pub(super) fn find_straight(pool: &[Card]) -> Option<[Card; 5]> {
    let mut distinct = pool.to_vec();
    distinct.dedup_by_key(|c| c.rank());
    if distinct.len() < 5 {
        return None;
    }

    // The ace plays also below the deuce.
    if let Some(&ace) = distinct.last().filter(|c| c.rank() == Rank::Ace) {
        distinct.insert(0, ace);
    }

    distinct
        .windows(5)
        .rev()
        .find(|w| is_run(w))
        .and_then(|w| w.try_into().ok())
}

/// Checks if the cards have consecutive ranks, an ace in the first position
/// counts as one.
fn is_run(cards: &[Card]) -> bool {
    let low = match cards[0].rank() {
        Rank::Ace => 1,
        rank => rank.value(),
    };

    cards
        .iter()
        .zip(low..)
        .skip(1)
        .all(|(c, value)| c.rank().value() == value)
}

/// Returns the `N` highest cards in the pool that are not in the `used` range,
/// in ascending order.
fn top_kickers<const N: usize>(pool: &[Card], used: Range<usize>) -> [Card; N] {
    let mut rest = pool
        .iter()
        .enumerate()
        .rev()
        .filter(|(idx, _)| !used.contains(idx))
        .map(|(_, c)| *c);

    let mut kickers = [pool[0]; N];
    for slot in kickers.iter_mut().rev() {
        *slot = match rest.next() {
            Some(card) => card,
            None => unreachable!("pool with less than 5 cards"),
        };
    }

    kickers
}
