use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::game::cards::{Card, CardError};

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid card {token:?} on line {line}: {source}")]
    InvalidCard {
        line: usize,
        token: String,
        #[source]
        source: CardError,
    },
    #[error("Could not read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a deck's order came from. Decides how the deck is laid out when printed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeckSource {
    Shuffled,
    File { path: PathBuf },
    Layout,
}

impl DeckSource {
    /// Cards per printed row: a shuffled deck prints by suit-sized rows, a loaded deck by hand.
    pub fn cards_per_row(&self) -> usize {
        match self {
            DeckSource::Shuffled => 13,
            DeckSource::File { .. } | DeckSource::Layout => 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    duplicate: Option<Card>,
    source: DeckSource,
}

impl Deck {
    /// A full 52-card deck shuffled with the given generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all_cards();
        cards.shuffle(rng);

        Self {
            cards: cards.into(),
            duplicate: None,
            source: DeckSource::Shuffled,
        }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    /// Parses a deck from text: comma-separated card tokens such as `10D` or `AS`,
    /// any number per line, each optionally preceded by one space.
    ///
    /// A card that appears twice is kept in the deck and reported through
    /// [`Deck::duplicate_card`].
    #[instrument(skip(layout))]
    pub fn from_layout(layout: &str) -> Result<Self, DeckError> {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut duplicate = None;

        for (index, line) in layout.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            for token in line.split(',') {
                let card = parse_token(token).map_err(|source| DeckError::InvalidCard {
                    line: index + 1,
                    token: token.to_string(),
                    source,
                })?;

                if !seen.insert(card) {
                    warn!(card = %card, line = index + 1, "Duplicate card in deck layout");
                    duplicate = Some(card);
                }
                cards.push_back(card);
            }
        }

        if cards.len() != DECK_SIZE {
            warn!(count = cards.len(), "Deck layout does not hold 52 cards");
        }
        debug!(count = cards.len(), "Deck layout parsed");

        Ok(Self {
            cards,
            duplicate,
            source: DeckSource::Layout,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading deck file");

        let layout = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut deck = Self::from_layout(&layout)?;
        deck.source = DeckSource::File {
            path: path.to_path_buf(),
        };
        Ok(deck)
    }

    /// Removes and returns the top card.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// A card the source listed more than once, if any.
    pub fn duplicate_card(&self) -> Option<Card> {
        self.duplicate
    }

    pub fn source(&self) -> &DeckSource {
        &self.source
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards right-aligned in three-character columns, comma separated, `per_row` to a line.
pub fn render_rows(cards: &[Card], per_row: usize) -> String {
    cards
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|card| format!("{:>3}", card))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_token(token: &str) -> Result<Card, CardError> {
    let token = token.strip_prefix(' ').unwrap_or(token);
    Card::from_string(token)
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<Card> = self.cards.iter().copied().collect();
        write!(f, "{}", render_rows(&cards, self.source.cards_per_row()))
    }
}
