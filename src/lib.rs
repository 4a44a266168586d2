// Library crate for the five-hand poker analyzer
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::{Config, OutputFormat};
pub use game::{Card, Category, DealOrder, Deck, Game, Hand, Rank, Suit};
pub use shared::{run, AppError};
