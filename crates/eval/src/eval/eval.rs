// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value and ranking types.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::{EvalError, detect};
use crate::{Card, Rank};

/// The minimum number of cards needed to evaluate a hand.
pub const MIN_CARDS: usize = 5;

/// The hand rank category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The rank strength, 1 for high card up to 9 for a straight flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Positions in a hand cards that break ties, most significant first.
    fn tie_break_positions(&self) -> &'static [usize] {
        match self {
            HandRank::StraightFlush | HandRank::Straight => &[4],
            HandRank::FourOfAKind => &[0, 4],
            HandRank::FullHouse => &[0, 3],
            HandRank::Flush | HandRank::HighCard => &[4, 3, 2, 1, 0],
            HandRank::ThreeOfAKind => &[0, 4, 3],
            HandRank::TwoPair => &[2, 0, 4],
            HandRank::OnePair => &[0, 4, 3, 2],
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a hand, its rank and the five cards that make it.
///
/// The cards order depends on the rank:
///
/// ```text
///   StraightFlush  ascending, an ace-low straight starts with the ace
///   FourOfAKind    [quad, quad, quad, quad, kicker]
///   FullHouse      [trip, trip, trip, pair, pair]
///   Flush          ascending
///   Straight       ascending, an ace-low straight starts with the ace
///   ThreeOfAKind   [trip, trip, trip, low kicker, high kicker]
///   TwoPair        [low pair, low pair, high pair, high pair, kicker]
///   OnePair        [pair, pair, low kicker, mid kicker, high kicker]
///   HighCard       ascending
/// ```
///
/// Two values compare equal if they have the same rank and the same ranks in
/// their significant positions, suits are ignored.
///
/// Values only come from [HandValue::eval] so they serialize but do not
/// deserialize.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HandValue {
    rank: HandRank,
    cards: [Card; 5],
}

impl HandValue {
    /// Evaluates a pool of at least 5 cards and returns the best hand value.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if cards.len() < MIN_CARDS {
            return Err(EvalError::InvalidInput { len: cards.len() });
        }

        let mut pool = cards.to_vec();
        pool.sort_by_key(|c| c.rank());

        Ok(detect::classify(&pool))
    }

    pub(super) fn new(rank: HandRank, cards: [Card; 5]) -> Self {
        Self { rank, cards }
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards that make this hand.
    pub fn cards(&self) -> [Card; 5] {
        self.cards
    }

    /// The ranks that break ties between hands with the same rank.
    pub fn tie_break(&self) -> impl Iterator<Item = Rank> + '_ {
        self.rank
            .tie_break_positions()
            .iter()
            .map(|&pos| self.cards[pos].rank())
    }

    /// Checks if this hand is a royal flush.
    pub fn is_royal_flush(&self) -> bool {
        self.rank == HandRank::StraightFlush && self.cards[0].rank() == Rank::Ten
    }

    fn rank_at(&self, pos: usize) -> Rank {
        self.cards[pos].rank()
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tie_break().cmp(other.tie_break()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

/// Joins rank names with a plus sign.
fn kickers(ranks: &[Rank]) -> String {
    ranks.iter().map(|r| r.name()).collect::<Vec<_>>().join("+")
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |pos| self.rank_at(pos);

        match self.rank {
            HandRank::StraightFlush if self.is_royal_flush() => write!(f, "A Royal Flush."),
            HandRank::StraightFlush => write!(
                f,
                "A Straight Flush, {} to {}.",
                r(0).name(),
                r(4).name()
            ),
            HandRank::FourOfAKind => write!(
                f,
                "Four of a Kind, {}, {} kicker.",
                r(0).plural(),
                r(4).name()
            ),
            HandRank::FullHouse => write!(
                f,
                "Full House, {} full of {}.",
                r(0).plural(),
                r(3).plural()
            ),
            HandRank::Flush => write!(
                f,
                "A Flush, {} high, {} kickers.",
                r(4).name(),
                kickers(&[r(3), r(2), r(1), r(0)])
            ),
            HandRank::Straight => write!(f, "A Straight, {} to {}.", r(0).name(), r(4).name()),
            HandRank::ThreeOfAKind => write!(
                f,
                "Three of a Kind, {}, {} kickers.",
                r(0).plural(),
                kickers(&[r(4), r(3)])
            ),
            HandRank::TwoPair => write!(
                f,
                "Two Pair, {} and {}, {} kicker.",
                r(2).plural(),
                r(0).plural(),
                r(4).name()
            ),
            HandRank::OnePair => write!(
                f,
                "A Pair of {}, {} kickers.",
                r(0).plural(),
                kickers(&[r(4), r(3), r(2)])
            ),
            HandRank::HighCard => write!(
                f,
                "High Card {}, {} kickers.",
                r(4).name(),
                kickers(&[r(3), r(2), r(1), r(0)])
            ),
        }
    }
}

/// Returns the indices of the best hands, more than one index is a split pot.
pub fn showdown(hands: &[HandValue]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, hv)| *hv == best)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Suit, parse_cards};
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn eval(hand: &str, board: &str) -> HandValue {
        let mut cards = parse_cards(hand).unwrap();
        cards.extend(parse_cards(board).unwrap());
        HandValue::eval(&cards).unwrap()
    }

    fn check(hv: &HandValue, rank: HandRank, cards: &str) {
        assert_eq!(hv.rank(), rank, "{hv:?}");
        assert_eq!(hv.cards().to_vec(), parse_cards(cards).unwrap(), "{hv:?}");
    }

    #[test]
    fn straight_flush() {
        let hv = eval("Ac Kc", "Qc Jc Tc 7h 2d");
        check(&hv, HandRank::StraightFlush, "Tc Jc Qc Kc Ac");
        assert!(hv.is_royal_flush());
        assert_eq!(hv.to_string(), "A Royal Flush.");

        // Hand cards don't play.
        let hv = eval("8c Jh", "3h 6h 7h 5h 4h");
        check(&hv, HandRank::StraightFlush, "3h 4h 5h 6h 7h");
        assert!(!hv.is_royal_flush());
        assert_eq!(hv.to_string(), "A Straight Flush, Three to Seven.");

        // Not a plain flush.
        let hv = eval("2h 3h", "4h 5h 6h 9c Ts");
        check(&hv, HandRank::StraightFlush, "2h 3h 4h 5h 6h");
        assert_eq!(hv.to_string(), "A Straight Flush, Two to Six.");

        // The highest of the suited straights.
        let hv = eval("9h Th", "5h 6h 7h 8h 4h");
        check(&hv, HandRank::StraightFlush, "6h 7h 8h 9h Th");

        // Straight flush and a different suit straight.
        let hv = eval("9d 4s", "5s 6s 7s 8s Td");
        check(&hv, HandRank::StraightFlush, "4s 5s 6s 7s 8s");
    }

    #[test]
    fn wheel_straight_flush() {
        let hv = eval("Ac 5c", "2c 3c 4c Kd Kh");
        check(&hv, HandRank::StraightFlush, "Ac 2c 3c 4c 5c");
        assert!(!hv.is_royal_flush());
        assert_eq!(hv.to_string(), "A Straight Flush, Ace to Five.");

        // Ace of another suit doesn't make a straight flush.
        let hv = eval("Ad 5c", "2c 3c 4c 9c Kh");
        check(&hv, HandRank::Flush, "2c 3c 4c 5c 9c");

        let six_high = eval("6c 5c", "2c 3c 4c Kd Kh");
        assert!(six_high > hv);
        assert!(six_high > eval("Ac 5c", "2c 3c 4c Kd Kh"));
    }

    #[test]
    fn four_of_a_kind() {
        let hv = eval("2c 2s", "2d 2h 9h 3c 4d");
        check(&hv, HandRank::FourOfAKind, "2c 2s 2d 2h 9h");
        assert_eq!(hv.to_string(), "Four of a Kind, Twos, Nine kicker.");

        // Kicker below the quads.
        let hv = eval("Ac Ad", "As Ah Kd 3c 2c");
        check(&hv, HandRank::FourOfAKind, "Ac Ad As Ah Kd");

        // Quads beat the full house on the same pool.
        let hv = eval("9c 9d", "9s 9h Kc Kd Ks");
        check(&hv, HandRank::FourOfAKind, "9c 9d 9s 9h Ks");
        assert_eq!(hv.to_string(), "Four of a Kind, Nines, King kicker.");
    }

    #[test]
    fn full_house() {
        let hv = eval("Kd Kc", "Kh 5c 5d 2s 3h");
        check(&hv, HandRank::FullHouse, "Kd Kc Kh 5c 5d");
        assert_eq!(hv.to_string(), "Full House, Kings full of Fives.");

        // Two three of a kind.
        let hv = eval("4c 4s", "4d Ah As Ac Kd");
        check(&hv, HandRank::FullHouse, "Ah As Ac 4s 4d");
        assert_eq!(hv.to_string(), "Full House, Aces full of Fours.");

        // Trips and two pairs use the highest pair.
        let hv = eval("Qc Qd", "Qh 7c 7d 3s 3h");
        check(&hv, HandRank::FullHouse, "Qc Qd Qh 7c 7d");

        let hv = eval("Kc Ks", "Kh 4c 4d 2s 3h");
        assert_eq!(hv.to_string(), "Full House, Kings full of Fours.");
    }

    #[test]
    fn flush() {
        let hv = eval("2h 5h", "7h 9h Jh Kh 3h");
        check(&hv, HandRank::Flush, "5h 7h 9h Jh Kh");
        assert_eq!(
            hv.to_string(),
            "A Flush, King high, Jack+Nine+Seven+Five kickers."
        );

        // Six cards flush.
        let hv = eval("Tc 3s", "6c 7c 4c Qc Kc");
        check(&hv, HandRank::Flush, "6c 7c Tc Qc Kc");

        // Flush beats a straight.
        let hv = eval("9h 8c", "5h 6h 7d Th Kh");
        check(&hv, HandRank::Flush, "5h 6h 9h Th Kh");
    }

    #[test]
    fn flush_first_suit() {
        // With two flushes the first suit in value order plays.
        let hv = eval("2c 4c 6c 8c Tc", "3d 5d 7d 9d Jd");
        check(&hv, HandRank::Flush, "2c 4c 6c 8c Tc");
    }

    #[test]
    fn straight_flush_first_suit() {
        // Same with two straight flushes, even if the other one is higher.
        let hv = eval("2c 3c 4c 5c 6c", "7d 8d 9d Td Jd");
        check(&hv, HandRank::StraightFlush, "2c 3c 4c 5c 6c");
        assert_eq!(hv.to_string(), "A Straight Flush, Two to Six.");

        let hv = eval("9s Ts Js Qs Ks", "Ah 2h 3h 4h 5h");
        check(&hv, HandRank::StraightFlush, "9s Ts Js Qs Ks");
    }

    #[test]
    fn straight() {
        let hv = eval("Ah 2c", "3d 4s 5h 9c Kd");
        check(&hv, HandRank::Straight, "Ah 2c 3d 4s 5h");
        assert_eq!(hv.to_string(), "A Straight, Ace to Five.");

        let hv = eval("6c 6d", "5h 7s 8h 9c 2d");
        check(&hv, HandRank::Straight, "5h 6c 7s 8h 9c");
        assert_eq!(hv.to_string(), "A Straight, Five to Nine.");

        let hv = eval("Ah Kd", "Qs Jc Tc 2d 3h");
        check(&hv, HandRank::Straight, "Tc Jc Qs Kd Ah");
        assert_eq!(hv.to_string(), "A Straight, Ten to Ace.");

        // The seven high straight over the wheel.
        let hv = eval("2c 3d", "4h 5s 6c 7d Ah");
        check(&hv, HandRank::Straight, "3d 4h 5s 6c 7d");
    }

    #[test]
    fn three_of_a_kind() {
        let hv = eval("7c 7d", "7h Ac 9d 4s 2h");
        check(&hv, HandRank::ThreeOfAKind, "7c 7d 7h 9d Ac");
        assert_eq!(
            hv.to_string(),
            "Three of a Kind, Sevens, Ace+Nine kickers."
        );

        let hv = eval("Ac Ad", "Ah 3c 5d 9s Jh");
        check(&hv, HandRank::ThreeOfAKind, "Ac Ad Ah 9s Jh");
    }

    #[test]
    fn two_pair() {
        let hv = eval("Kc Kd", "4h 4s Ac 9d 2h");
        check(&hv, HandRank::TwoPair, "4h 4s Kc Kd Ac");
        assert_eq!(hv.to_string(), "Two Pair, Kings and Fours, Ace kicker.");

        // Three pairs, the kicker comes from the lowest pair.
        let hv = eval("Qc Qd", "8h 8s 3c 3d 2h");
        check(&hv, HandRank::TwoPair, "8h 8s Qc Qd 3d");
        assert_eq!(hv.to_string(), "Two Pair, Queens and Eights, Three kicker.");
    }

    #[test]
    fn one_pair() {
        let hv = eval("Jc Jd", "Ah 9c 4s 3d 2h");
        check(&hv, HandRank::OnePair, "Jc Jd 4s 9c Ah");
        assert_eq!(hv.to_string(), "A Pair of Jacks, Ace+Nine+Four kickers.");

        let hv = eval("6c 6d", "Ah 9c 4s");
        check(&hv, HandRank::OnePair, "6c 6d 4s 9c Ah");
        assert_eq!(hv.to_string(), "A Pair of Sixes, Ace+Nine+Four kickers.");
    }

    #[test]
    fn high_card() {
        let hv = eval("Ac Kd", "9h 5s 2c 3d 7h");
        check(&hv, HandRank::HighCard, "5s 7h 9h Kd Ac");
        assert_eq!(
            hv.to_string(),
            "High Card Ace, King+Nine+Seven+Five kickers."
        );
    }

    #[test]
    fn hand_serde() {
        for rank in HandRank::ranks() {
            let bytes = bincode::serialize(&rank).unwrap();
            assert_eq!(bincode::deserialize::<HandRank>(&bytes).unwrap(), rank);
        }

        // Variant index followed by the five card ids.
        let hv = eval("Ac Kc", "Qc Jc Tc 7h 2d");
        let bytes = bincode::serialize(&hv).unwrap();
        let mut expected = vec![8, 0, 0, 0];
        expected.extend(hv.cards().map(|c| c.id()));
        assert_eq!(bytes, expected);
    }

    #[test]
    fn invalid_input() {
        let cards = parse_cards("Ac Kd 9h 5s").unwrap();
        let err = HandValue::eval(&cards).unwrap_err();
        assert_eq!(err, EvalError::InvalidInput { len: 4 });
        assert_eq!(
            err.to_string(),
            "invalid input: a hand needs at least 5 cards, got 4"
        );

        assert!(HandValue::eval(&[]).is_err());
        assert!(HandValue::eval(&parse_cards("Ac Kd 9h 5s 2c").unwrap()).is_ok());
    }

    #[test]
    fn large_pool() {
        let hv = eval("Ac Kd 9h 5s", "2c 3d 7h Qs Jc");
        check(&hv, HandRank::HighCard, "9h Jc Qs Kd Ac");

        let hv = eval("Ac Kd 9h 5s", "2c 3d 7h Qs Ad");
        check(&hv, HandRank::OnePair, "Ac Ad 9h Qs Kd");
    }

    #[test]
    fn compare_ranks() {
        let hands = [
            eval("Ac Kd", "9h 5s 2c 3d 7h"),
            eval("Jc Jd", "Ah 9c 4s 3d 2h"),
            eval("Kc Kd", "4h 4s Ac 9d 2h"),
            eval("7c 7d", "7h Ac 9d 4s 2h"),
            eval("Ah 2c", "3d 4s 5h 9c Kd"),
            eval("2h 5h", "7h 9h Jh Kh 3h"),
            eval("Kd Kc", "Kh 5c 5d 2s 3h"),
            eval("2c 2s", "2d 2h 9h 3c 4d"),
            eval("Ac 5c", "2c 3c 4c Kd Kh"),
        ];

        assert!(hands.iter().map(|hv| hv.rank()).eq(HandRank::ranks()));
        assert!(HandRank::ranks().map(|r| r.value()).eq(1..=9));
        assert!(hands.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn compare_same_rank() {
        // Straights by top card, the wheel is the lowest.
        let wheel = eval("Ah 2c", "3d 4s 5h 9c Kd");
        let six_high = eval("6h 2c", "3d 4s 5h 9c Kd");
        let broadway = eval("Ah Kd", "Qs Jc Tc 2d 3h");
        let king_high = eval("9h Kd", "Qs Jc Tc 2d 3h");
        assert!(wheel < six_high);
        assert!(six_high < king_high);
        assert!(king_high < broadway);

        // Quads kicker.
        let q1 = eval("9c 9d", "9s 9h Kc");
        let q2 = eval("9c 9d", "9s 9h Qc");
        assert!(q1 > q2);

        // Full house trips first.
        let f1 = eval("3c 3d", "3h Ac Ad");
        let f2 = eval("2c 2d", "2h Kc Kd");
        assert!(f1 > f2);

        // Flush from the top card down.
        let f1 = eval("Ah 9h", "7h 5h 3h");
        let f2 = eval("Ah 9h", "7h 5h 2h");
        let f3 = eval("Kh Qh", "Jh 9h 7h");
        assert!(f1 > f2);
        assert!(f2 > f3);

        // Three of a kind kickers.
        let t1 = eval("7c 7d", "7h Ac 9d");
        let t2 = eval("7c 7d", "7h Ac 8d");
        assert!(t1 > t2);

        // Two pair, high pair, low pair then kicker.
        let kk44 = eval("Kc Kd", "4h 4s Ac 9d 2h");
        let kk55 = eval("Kh Ks", "5c 5d 2c 3c 7d");
        let qqjj = eval("Qh Qs", "Jc Jd Ac 3c 7d");
        let kk44q = eval("Kc Kd", "4h 4s Qc 9d 2h");
        assert!(kk55 > kk44);
        assert!(kk44 > qqjj);
        assert!(kk44 > kk44q);

        // One pair kickers.
        let p1 = eval("Jc Jd", "Ac 9c 4s 3d 2h");
        let p2 = eval("Jh Js", "Ad 9h 5c 3s 2d");
        assert!(p2 > p1);

        // High card down to the last card.
        let h1 = eval("Ac Kd", "9h 5s 3c");
        let h2 = eval("Ac Kd", "9h 5s 2c");
        assert!(h1 > h2);
    }

    #[test]
    fn split_pot() {
        let h1 = eval("Jc Jd", "Ah 9c 4s 3d 2h");
        let h2 = eval("Jh Js", "Ad 9h 4c 3s 2d");
        assert_eq!(h1, h2);
        assert_eq!(h1.cmp(&h2), Ordering::Equal);
        assert_ne!(h1.cards(), h2.cards());

        // The board plays for both hands.
        let board = "Ac Kd Qh Js 9c";
        let hands = [eval("2c 3d", board), eval("2h 3s", board), eval("4c 2d", board)];
        assert_eq!(showdown(&hands), vec![0, 1, 2]);

        let hands = [eval("2c 3d", board), eval("Th 3s", board), eval("Tc 2d", board)];
        assert_eq!(showdown(&hands), vec![1, 2]);
        assert_eq!(hands[1].rank(), HandRank::Straight);

        assert!(showdown(&[]).is_empty());
    }

    /// Evaluates all 5 cards subsets of a 7 cards pool and returns the best.
    fn best_of_subsets(pool: &[Card]) -> HandValue {
        let mut best = None;
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                let subset = pool
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != i && *idx != j)
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();
                let hv = HandValue::eval(&subset).unwrap();
                if best.is_none_or(|b| hv > b) {
                    best = Some(hv);
                }
            }
        }

        best.unwrap()
    }

    /// Swaps all suits so that a flush stays a flush.
    fn rotate_suits(cards: &[Card]) -> Vec<Card> {
        cards
            .iter()
            .map(|c| {
                let suit = match c.suit() {
                    Suit::Clubs => Suit::Spades,
                    Suit::Spades => Suit::Diamonds,
                    Suit::Diamonds => Suit::Hearts,
                    Suit::Hearts => Suit::Clubs,
                };
                Card::new(c.rank(), suit)
            })
            .collect()
    }

    #[test]
    fn sampled_pools() {
        let mut rng = StdRng::seed_from_u64(101);
        let deck = Deck::default();

        for _ in 0..2_000 {
            let pool = deck.sample(&mut rng, 7);
            let hv = HandValue::eval(&pool).unwrap();

            // Cards are distinct and come from the pool.
            let cards = hv.cards();
            assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 5);
            assert!(cards.iter().all(|c| pool.contains(c)), "{pool:?}");

            // Same value and same cards on a second evaluation.
            let again = HandValue::eval(&pool).unwrap();
            assert_eq!(hv, again);
            assert_eq!(hv.cards(), again.cards());

            // Suits don't change the value.
            let rotated = HandValue::eval(&rotate_suits(&pool)).unwrap();
            assert_eq!(hv.rank(), rotated.rank());
            assert_eq!(hv, rotated);

            // Never weaker than any 5 cards out of the pool.
            assert_eq!(hv, best_of_subsets(&pool), "{pool:?}");
        }
    }
}
