use crate::game::cards::Card;
use crate::game::deck::{render_rows, Deck, DeckSource};
use crate::game::logic::{RankedHand, SessionReport};

pub const BANNER: &str = "*** P O K E R   H A N D   A N A L Y Z E R ***";

fn card_row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format!("{:>3}", card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn ranked_line(hand: &RankedHand) -> String {
    format!("{} - {}", card_row(&hand.cards), hand.category)
}

fn header(lines: &mut Vec<String>, source: &DeckSource) {
    lines.push(String::new());
    lines.push(BANNER.to_string());
    lines.push(String::new());
    match source {
        DeckSource::Shuffled => {
            lines.push("\n*** USING RANDOMIZED DECK OF CARDS ***\n".to_string());
            lines.push("*** Shuffled 52 card deck".to_string());
        }
        DeckSource::File { path } => {
            lines.push("\n*** USING TEST DECK ***\n".to_string());
            lines.push(format!("*** File: {}", path.display()));
        }
        DeckSource::Layout => {
            lines.push("\n*** USING TEST DECK ***\n".to_string());
        }
    }
}

/// Console layout of a finished session.
pub fn render_text(report: &SessionReport) -> String {
    let per_row = report.source.cards_per_row();

    let mut lines = Vec::new();
    header(&mut lines, &report.source);
    lines.push(render_rows(&report.deck, per_row));

    lines.push("\n*** Here are the six hands...".to_string());
    lines.extend(report.dealt.iter().map(|cards| card_row(cards)));

    if let Some(remaining) = &report.remaining {
        lines.push("\n*** Here is what remains in the deck...".to_string());
        lines.push(render_rows(remaining, per_row));
    }

    lines.push("\n--- WINNING HAND ORDER ---".to_string());
    lines.extend(report.ranking.iter().map(ranked_line));
    lines.push(String::new());
    lines.join("\n")
}

/// Console output for a deck rejected because it lists a card twice.
pub fn render_duplicate(deck: &Deck, duplicate: Card) -> String {
    let mut lines = Vec::new();
    header(&mut lines, deck.source());
    lines.push(deck.to_string());
    lines.push("\n*** ERROR - DUPLICATED CARD FOUND IN DECK ***\n".to_string());
    lines.push(format!("*** DUPLICATE: {} ***", duplicate));
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_json(report: &SessionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
