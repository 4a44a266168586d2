// Public API
pub use cards::{Card, CardError, Category, Evaluation, Hand, HandError, Rank, Suit, TieBreaker};
pub use deck::{Deck, DeckError, DeckSource, DECK_SIZE};
pub use logic::{DealOrder, Game, GameError, RankedHand, SessionReport, HAND_COUNT};
pub use report::{render_duplicate, render_json, render_text};

// Internal modules
mod cards;
mod deck;
mod logic;
mod report;
