use std::fmt;

use strum_macros::{Display, EnumIter};
use thiserror::Error;

use super::basic::{Card, Rank};

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: expected 5 cards, found {0}")]
    InvalidHandSize(usize),
}

/// Poker hand categories, weakest first. The discriminant is the category index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Category {
    #[strum(to_string = "High Card")]
    HighCard = 1,
    #[strum(to_string = "Pair")]
    Pair = 2,
    #[strum(to_string = "Two Pair")]
    TwoPair = 3,
    #[strum(to_string = "Three of a Kind")]
    ThreeOfAKind = 4,
    #[strum(to_string = "Straight")]
    Straight = 5,
    #[strum(to_string = "Flush")]
    Flush = 6,
    #[strum(to_string = "Full House")]
    FullHouse = 7,
    #[strum(to_string = "Four of a Kind")]
    FourOfAKind = 8,
    #[strum(to_string = "Straight Flush")]
    StraightFlush = 9,
    #[strum(to_string = "Royal Straight Flush")]
    RoyalStraightFlush = 10,
}

impl Category {
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Tiebreaker selectors in pass order.
    pub fn tiebreakers(self) -> &'static [TieBreaker] {
        match self {
            Category::RoyalStraightFlush | Category::Flush | Category::Straight => {
                &[TieBreaker::Highest]
            }
            Category::StraightFlush => &[TieBreaker::StraightFlushTop],
            Category::FourOfAKind | Category::FullHouse | Category::ThreeOfAKind => {
                &[TieBreaker::Middle]
            }
            Category::TwoPair => &[
                TieBreaker::HighPair,
                TieBreaker::LowPair,
                TieBreaker::Kicker,
            ],
            Category::Pair => &[TieBreaker::PairRank, TieBreaker::Kicker],
            Category::HighCard => &[TieBreaker::Highest],
        }
    }
}

/// Picks the card that decides one comparison pass. Every selector works on the
/// ascending rank-sorted hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreaker {
    Highest,
    /// Highest card, except the ace-low straight flush where the five plays top.
    StraightFlushTop,
    /// Any run of three or four equal ranks covers index 2.
    Middle,
    HighPair,
    LowPair,
    PairRank,
    Kicker,
}

impl TieBreaker {
    fn pick(self, sorted: &[Card; HAND_SIZE]) -> Card {
        match self {
            TieBreaker::Highest => sorted[4],
            TieBreaker::StraightFlushTop => {
                if is_wheel(sorted) {
                    sorted[3]
                } else {
                    sorted[4]
                }
            }
            TieBreaker::Middle => sorted[2],
            TieBreaker::HighPair | TieBreaker::PairRank => {
                *paired_cards(sorted).last().unwrap_or(&sorted[4])
            }
            TieBreaker::LowPair => *paired_cards(sorted).first().unwrap_or(&sorted[4]),
            TieBreaker::Kicker => {
                let paired: Vec<Rank> = paired_cards(sorted).iter().map(|c| c.rank).collect();
                sorted
                    .iter()
                    .rev()
                    .find(|card| !paired.contains(&card.rank))
                    .copied()
                    .unwrap_or(sorted[4])
            }
        }
    }
}

/// The second card of every adjacent equal-rank pair, ascending.
fn paired_cards(sorted: &[Card; HAND_SIZE]) -> Vec<Card> {
    sorted
        .windows(2)
        .filter(|w| w[0].rank == w[1].rank)
        .map(|w| w[1])
        .collect()
}

fn rank_list(sorted: &[Card; HAND_SIZE]) -> [u8; HAND_SIZE] {
    std::array::from_fn(|i| sorted[i].rank.value())
}

fn is_wheel(sorted: &[Card; HAND_SIZE]) -> bool {
    sorted[0].rank == Rank::Two && sorted[4].rank == Rank::Ace
}

fn is_flush(sorted: &[Card; HAND_SIZE]) -> bool {
    sorted.iter().all(|card| card.suit == sorted[0].suit)
}

fn is_straight(sorted: &[Card; HAND_SIZE]) -> bool {
    let mut ranks = rank_list(sorted);

    // A-2-3-4-5: the ace plays as one.
    if ranks == [2, 3, 4, 5, 14] {
        ranks[4] = 1;
        ranks.sort_unstable();
    }

    ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

fn is_straight_flush(sorted: &[Card; HAND_SIZE]) -> bool {
    is_straight(sorted) && is_flush(sorted)
}

fn is_royal_straight_flush(sorted: &[Card; HAND_SIZE]) -> bool {
    is_straight_flush(sorted) && sorted[0].rank == Rank::Ten && sorted[4].rank == Rank::Ace
}

fn is_four_of_a_kind(sorted: &[Card; HAND_SIZE]) -> bool {
    let r = rank_list(sorted);
    (r[0] == r[1] && r[1] == r[2] && r[2] == r[3])
        || (r[1] == r[2] && r[2] == r[3] && r[3] == r[4])
}

fn is_full_house(sorted: &[Card; HAND_SIZE]) -> bool {
    let r = rank_list(sorted);
    (r[0] == r[1] && r[2] == r[3] && r[3] == r[4])
        || (r[0] == r[1] && r[1] == r[2] && r[3] == r[4])
}

fn is_three_of_a_kind(sorted: &[Card; HAND_SIZE]) -> bool {
    rank_list(sorted)
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

fn is_two_pair(sorted: &[Card; HAND_SIZE]) -> bool {
    let r = rank_list(sorted);
    (r[0] == r[1] && r[2] == r[3])
        || (r[0] == r[1] && r[3] == r[4])
        || (r[1] == r[2] && r[3] == r[4])
}

fn is_pair(sorted: &[Card; HAND_SIZE]) -> bool {
    rank_list(sorted).windows(2).any(|w| w[0] == w[1])
}

/// A classified five-card hand: its category plus the cards sorted by rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    category: Category,
    sorted: [Card; HAND_SIZE],
}

impl Evaluation {
    pub fn of(cards: &[Card]) -> Result<Self, HandError> {
        let mut sorted: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        sorted.sort();

        Ok(Self {
            category: Self::classify_sorted(&sorted),
            sorted,
        })
    }

    // Precedence order matters: the first predicate that holds wins.
    fn classify_sorted(sorted: &[Card; HAND_SIZE]) -> Category {
        if is_royal_straight_flush(sorted) {
            Category::RoyalStraightFlush
        } else if is_straight_flush(sorted) {
            Category::StraightFlush
        } else if is_four_of_a_kind(sorted) {
            Category::FourOfAKind
        } else if is_full_house(sorted) {
            Category::FullHouse
        } else if is_flush(sorted) {
            Category::Flush
        } else if is_straight(sorted) {
            Category::Straight
        } else if is_three_of_a_kind(sorted) {
            Category::ThreeOfAKind
        } else if is_two_pair(sorted) {
            Category::TwoPair
        } else if is_pair(sorted) {
            Category::Pair
        } else {
            Category::HighCard
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sorted(&self) -> &[Card; HAND_SIZE] {
        &self.sorted
    }

    /// Tiebreaker card for a comparison pass, or `None` once the category runs out of passes.
    pub fn tiebreaker(&self, pass: usize) -> Option<Card> {
        self.category
            .tiebreakers()
            .get(pass)
            .map(|selector| selector.pick(&self.sorted))
    }

    /// Positive when `self` is the stronger hand, negative when weaker, zero on a full tie.
    ///
    /// Categories compare first. Within a category each tiebreaker pass compares ranks
    /// and moves to the next pass only on equal rank. When every pass ties, the suit
    /// index of the final tiebreaker card decides.
    pub fn compare(&self, other: &Evaluation) -> i32 {
        if self.category != other.category {
            return self.category.index() - other.category.index();
        }

        let mut last = None;
        for selector in self.category.tiebreakers() {
            let mine = selector.pick(&self.sorted);
            let theirs = selector.pick(&other.sorted);
            let diff = mine.compare_rank(&theirs);
            if diff != 0 {
                return diff;
            }
            last = Some((mine, theirs));
        }

        last.map_or(0, |(mine, theirs)| {
            i32::from(mine.suit.index()) - i32::from(theirs.suit.index())
        })
    }
}

/// Cards dealt to one seat, with a lazily computed classification.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    evaluation: Option<Evaluation>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            evaluation: None,
        }
    }

    /// Appends a card. Any earlier classification is discarded.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.evaluation = None;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Classifies the hand, reusing the cached result when the cards have not changed.
    pub fn evaluate(&mut self) -> Result<&Evaluation, HandError> {
        let evaluation = match self.evaluation.take() {
            Some(evaluation) => evaluation,
            None => Evaluation::of(&self.cards)?,
        };
        Ok(self.evaluation.insert(evaluation))
    }

    pub fn classify(&mut self) -> Result<Category, HandError> {
        self.evaluate().map(Evaluation::category)
    }

    /// Cached category, if the hand has been classified since its last change.
    pub fn category(&self) -> Option<Category> {
        self.evaluation.as_ref().map(Evaluation::category)
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Compares hand strength, classifying both hands first if needed.
    pub fn compare_to(&mut self, other: &mut Hand) -> Result<i32, HandError> {
        let theirs = other.evaluate()?;
        Ok(self.evaluate()?.compare(theirs))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}", cards.join(" "))
    }
}
