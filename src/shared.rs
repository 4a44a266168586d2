use thiserror::Error;
use tracing::{info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::{Config, OutputFormat};
use crate::game::{
    render_duplicate, render_json, render_text, Card, DealOrder, Deck, DeckError, Game, GameError,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Duplicate card found in deck: {card}")]
    DuplicateCard {
        card: Card,
        /// Console diagnostic shown in place of the session report.
        report: String,
    },

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fivehand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads the configured deck, plays one session and returns the rendered report.
pub fn run(config: &Config) -> Result<String, AppError> {
    let session_id = Uuid::new_v4();
    let _span = info_span!("session", session_id = %session_id).entered();

    let deck = match (&config.deck, config.seed) {
        (Some(path), _) => Deck::from_file(path)?,
        (None, Some(seed)) => Deck::shuffled_with_seed(seed),
        (None, None) => Deck::shuffled(&mut rand::rng()),
    };
    info!(source = ?deck.source(), cards = deck.len(), "Deck ready");

    if let Some(card) = deck.duplicate_card() {
        return Err(AppError::DuplicateCard {
            card,
            report: render_duplicate(&deck, card),
        });
    }

    let deal_order = config
        .deal
        .unwrap_or_else(|| DealOrder::for_source(deck.source()));
    let report = Game::new(deck, deal_order).play()?;

    match config.format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(render_json(&report)?),
    }
}
