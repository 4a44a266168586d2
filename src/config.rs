use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::game::DealOrder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Deals six five-card poker hands and ranks them from strongest to weakest.
#[derive(Debug, Parser)]
#[command(name = "fivehand", version, about)]
pub struct Config {
    /// Deck file of comma-separated cards (e.g. `10D, JS,AH`). A shuffled deck is used when omitted.
    pub deck: Option<PathBuf>,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override how cards are dealt to the six hands.
    #[arg(long, value_enum)]
    pub deal: Option<DealOrder>,

    /// Seed for a reproducible shuffle; ignored when a deck file is given.
    #[arg(long, env = "FIVEHAND_SEED")]
    pub seed: Option<u64>,
}
