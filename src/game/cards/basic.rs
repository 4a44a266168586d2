use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Invalid rank: {0}")]
    InvalidRank(u8),
    #[error("Invalid suit: {0}")]
    InvalidSuit(u8),
    #[error("Invalid card token: {0:?}")]
    InvalidToken(String),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Diamonds = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamonds => "D",
                Suit::Clubs => "C",
                Suit::Hearts => "H",
                Suit::Spades => "S",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(s.to_string()),
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Suit::iter()
            .find(|suit| suit.index() == index)
            .ok_or(CardError::InvalidSuit(index))
    }
}

/// Card rank. The discriminant is the numeric poker value, so the ace is 14.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(s.to_string()),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::iter()
            .find(|rank| rank.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from its numeric rank (2..=14) and suit index (0..=3).
    pub fn try_new(rank: u8, suit: u8) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Signed rank difference, ignoring suit.
    pub fn compare_rank(&self, other: &Card) -> i32 {
        i32::from(self.rank.value()) - i32::from(other.rank.value())
    }

    pub fn from_string(s: &str) -> Result<Self, CardError> {
        let invalid = || CardError::InvalidToken(s.to_string());

        // Rank is everything but the trailing suit letter, so "10D" splits as "10" + "D".
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|&i| i > 0)
            .ok_or_else(invalid)?;
        let (rank, suit) = s.split_at(split);

        let rank = Rank::try_from(rank).map_err(|_| invalid())?;
        let suit = Suit::try_from(suit).map_err(|_| invalid())?;

        Ok(Self::new(rank, suit))
    }

    /// All 52 cards, suit by suit (D, C, H, S), each suit from two up to ace.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad the combined text, not the rank alone, so width applies to "10D" as a unit.
        f.pad(&format!("{}{}", self.rank, self.suit))
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ordering() {
        let card1 = Card::new(Rank::Three, Suit::Diamonds);
        let card2 = Card::new(Rank::Three, Suit::Spades);
        let card3 = Card::new(Rank::Two, Suit::Diamonds);

        assert!(card2 > card1); // Same rank, higher suit
        assert!(card1 > card3); // Higher rank
        assert!(card2 > card3);
    }

    #[test]
    fn test_compare_rank_is_plain_difference() {
        let ace = Card::new(Rank::Ace, Suit::Diamonds);
        let ten = Card::new(Rank::Ten, Suit::Spades);

        assert_eq!(ace.compare_rank(&ten), 4);
        assert_eq!(ten.compare_rank(&ace), -4);
        assert_eq!(ten.compare_rank(&Card::new(Rank::Ten, Suit::Hearts)), 0);
    }

    #[test]
    fn test_try_new_validates_range() {
        assert_eq!(
            Card::try_new(14, 3),
            Ok(Card::new(Rank::Ace, Suit::Spades))
        );
        assert_eq!(Card::try_new(2, 0), Ok(Card::new(Rank::Two, Suit::Diamonds)));
        assert_eq!(Card::try_new(1, 0), Err(CardError::InvalidRank(1)));
        assert_eq!(Card::try_new(15, 0), Err(CardError::InvalidRank(15)));
        assert_eq!(Card::try_new(10, 4), Err(CardError::InvalidSuit(4)));
    }

    #[test]
    fn test_card_from_string() {
        let king_hearts = Card::from_string("KH").unwrap();
        assert_eq!(king_hearts.rank, Rank::King);
        assert_eq!(king_hearts.suit, Suit::Hearts);

        let ten_diamonds = Card::from_string("10D").unwrap();
        assert_eq!(ten_diamonds.rank, Rank::Ten);
        assert_eq!(ten_diamonds.suit, Suit::Diamonds);

        // Test invalid strings
        assert!(Card::from_string("ZH").is_err()); // Invalid rank
        assert!(Card::from_string("KX").is_err()); // Invalid suit
        assert!(Card::from_string("TD").is_err()); // Ten is written as digits
        assert!(Card::from_string("1D").is_err());
        assert!(Card::from_string("kh").is_err());
        assert!(Card::from_string("K").is_err()); // Too short
        assert!(Card::from_string("").is_err());
    }

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank::Two.to_string(), "2");
        assert_eq!(Rank::Nine.to_string(), "9");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::Jack.to_string(), "J");
        assert_eq!(Rank::Queen.to_string(), "Q");
        assert_eq!(Rank::King.to_string(), "K");
        assert_eq!(Rank::Ace.to_string(), "A");
    }

    #[test]
    fn test_suit_try_from() {
        assert_eq!(Suit::try_from("D"), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from("C"), Ok(Suit::Clubs));
        assert_eq!(Suit::try_from("H"), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from("S"), Ok(Suit::Spades));

        assert!(Suit::try_from("X").is_err());
        assert!(Suit::try_from("").is_err());
        assert_eq!(Suit::try_from(2u8), Ok(Suit::Hearts));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "KH");
        assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2S");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
        assert_eq!(format!("{:>3}", Card::new(Rank::Ace, Suit::Clubs)), " AC");
        assert_eq!(format!("{:>3}", Card::new(Rank::Ten, Suit::Clubs)), "10C");
    }

    #[test]
    fn test_display_round_trips_for_every_card() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);

        for card in cards {
            let parsed: Card = card.to_string().parse().unwrap();
            assert_eq!(card, parsed);
        }
    }

    #[test]
    fn test_serde_uses_display_form() {
        let card = Card::new(Rank::Ten, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"10H\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("\"XX\"").is_err());
    }
}
