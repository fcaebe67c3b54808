//! Jacks-or-Better hand classification.

pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HAND_SIZE};
use rank_groups::RankGroups;
use std::fmt;
use std::str::FromStr;
use straight_info::StraightInfo;
use suit_info::SuitInfo;

/// Lowest pair rank that pays.
pub const MIN_PAYING_PAIR: Rank = Rank::Jack;

/// Final hand category, strongest first. Declaration order is payout priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Category {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    /// A single pair of Jacks or better.
    OnePair,
    /// Nothing that pays, including pairs below Jacks.
    HighCard,
}

impl Category {
    /// Every category in payout priority.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Stable machine-readable identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Category::RoyalFlush => "royal_flush",
            Category::StraightFlush => "straight_flush",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::Flush => "flush",
            Category::Straight => "straight",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::TwoPair => "two_pair",
            Category::OnePair => "one_pair",
            Category::HighCard => "high_card",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }

    /// Payout multiplier on the stake.
    ///
    /// ```
    /// use video_poker::evaluator::Category;
    ///
    /// assert_eq!(Category::RoyalFlush.payout(), 250);
    /// assert_eq!(Category::HighCard.payout(), 0);
    /// ```
    pub const fn payout(self) -> u32 {
        match self {
            Category::RoyalFlush => 250,
            Category::StraightFlush => 50,
            Category::FourOfAKind => 25,
            Category::FullHouse => 9,
            Category::Flush => 6,
            Category::Straight => 4,
            Category::ThreeOfAKind => 3,
            Category::TwoPair => 2,
            Category::OnePair => 1,
            Category::HighCard => 0,
        }
    }

    pub const fn is_winning(self) -> bool {
        self.payout() > 0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryParseError {
    #[error("unknown category: '{0}'")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == t)
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly {HAND_SIZE} cards to evaluate, got {0}")]
    CardCount(usize),
}

/// Classify exactly five cards.
///
/// ```
/// use video_poker::cards::parse_cards;
/// use video_poker::evaluator::{evaluate, Category, EvalError};
///
/// let cards = parse_cards("Js Jd 5c 2h 9c").unwrap();
/// assert_eq!(evaluate(&cards), Ok(Category::OnePair));
///
/// let cards = parse_cards("9s 9d 5c 2h 4c").unwrap();
/// assert_eq!(evaluate(&cards), Ok(Category::HighCard));
///
/// assert_eq!(evaluate(&cards[..4]), Err(EvalError::CardCount(4)));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Category, EvalError> {
    let five: &[Card; HAND_SIZE] =
        cards.try_into().map_err(|_| EvalError::CardCount(cards.len()))?;
    Ok(classify(five))
}

/// Classify a [`Hand`], which always holds five cards.
pub fn evaluate_hand(hand: &Hand) -> Category {
    classify(hand.cards())
}

/// First matching rule wins, checked in payout priority.
fn classify(cards: &[Card; HAND_SIZE]) -> Category {
    let ranks = cards.map(Card::rank);
    let groups = RankGroups::from_ranks(&ranks);
    let suits = SuitInfo::detect(cards);
    let straight = StraightInfo::detect(&ranks);

    if suits.is_flush && straight.is_broadway {
        return Category::RoyalFlush;
    }
    if suits.is_flush && straight.is_straight {
        return Category::StraightFlush;
    }
    if groups.quad().is_some() {
        return Category::FourOfAKind;
    }
    if groups.has_full_house() {
        return Category::FullHouse;
    }
    if suits.is_flush {
        return Category::Flush;
    }
    if straight.is_straight {
        return Category::Straight;
    }
    if groups.trips().is_some() {
        return Category::ThreeOfAKind;
    }
    match groups.pairs().as_slice() {
        [_, _] => Category::TwoPair,
        [pair] if *pair >= MIN_PAYING_PAIR => Category::OnePair,
        _ => Category::HighCard,
    }
}
