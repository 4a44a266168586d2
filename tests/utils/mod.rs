#![allow(dead_code)]

use std::path::PathBuf;

use fivehand::game::{Card, Hand};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(fivehand::Card::new(fivehand::Rank::$rank, fivehand::Suit::$suit)),*]
    };
}

// ============================================================================
// Layout Helpers
// ============================================================================

/// Parses space-separated card tokens such as `"10D JD QD KD AD"`.
pub fn parse_cards(layout: &str) -> Vec<Card> {
    layout
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect()
}

pub fn hand(layout: &str) -> Hand {
    Hand::from_cards(&parse_cards(layout))
}

/// Six rows of five cards, one row per seat when dealt sequentially.
pub const SIX_HAND_DECK: &str = "\
10D, JD, QD, KD, AD
 9C, 9D, 9H, 9S, 2C
 KC, KH, KS, QS, QH
 2H, 2S, 8C, 8D, 5H
 3D, 5C, 7H, 8S, JC
 4S, 4H, 6C, 6D, 6H
";

// ============================================================================
// Deck Files
// ============================================================================

/// A deck file in the system temp directory, removed on drop.
pub struct DeckFile {
    pub path: PathBuf,
}

impl DeckFile {
    pub fn new(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("fivehand-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for DeckFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
