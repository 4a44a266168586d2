// A session deals six five-card hands from one deck and ranks them strongest first.
use crate::game::cards::{Card, Category, Hand, HandError, HAND_SIZE};
use crate::game::deck::{Deck, DeckError, DeckSource};
use serde::Serialize;
use tracing::{debug, info, instrument};

pub const HAND_COUNT: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Duplicate card found in deck: {0}")]
    DuplicateCard(Card),
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("Hand error: {0}")]
    Hand(#[from] HandError),
}

/// How cards leave the deck for the six seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DealOrder {
    /// One card to each seat in turn.
    RoundRobin,
    /// Five consecutive cards to each seat in turn.
    Sequential,
}

impl DealOrder {
    /// Shuffled decks deal round-robin; decks laid out by hand are dealt five at a time.
    pub fn for_source(source: &DeckSource) -> Self {
        match source {
            DeckSource::Shuffled => DealOrder::RoundRobin,
            DeckSource::File { .. } | DeckSource::Layout => DealOrder::Sequential,
        }
    }

    fn seat_for(self, draw: usize) -> usize {
        match self {
            DealOrder::RoundRobin => draw % HAND_COUNT,
            DealOrder::Sequential => draw / HAND_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedHand {
    /// Zero-based seat the hand was dealt to.
    pub seat: usize,
    pub cards: Vec<Card>,
    pub category: Category,
}

/// Everything a finished session shows: the deck as loaded, the deal, and the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub source: DeckSource,
    pub deal_order: DealOrder,
    pub deck: Vec<Card>,
    pub dealt: Vec<Vec<Card>>,
    /// Undealt cards; only reported for shuffled decks.
    pub remaining: Option<Vec<Card>>,
    pub ranking: Vec<RankedHand>,
}

#[derive(Debug)]
pub struct Game {
    deck: Deck,
    hands: Vec<Hand>,
    deal_order: DealOrder,
}

impl Game {
    pub fn new(deck: Deck, deal_order: DealOrder) -> Self {
        Self {
            deck,
            hands: (0..HAND_COUNT).map(|_| Hand::new()).collect(),
            deal_order,
        }
    }

    /// A game dealt in the order that suits the deck's source.
    pub fn with_default_order(deck: Deck) -> Self {
        let deal_order = DealOrder::for_source(deck.source());
        Self::new(deck, deal_order)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Deals 30 cards into the six hands.
    #[instrument(skip(self), fields(deal_order = ?self.deal_order))]
    pub fn deal(&mut self) -> Result<(), GameError> {
        for draw in 0..HAND_COUNT * HAND_SIZE {
            let card = self.deck.draw_card()?;
            let seat = self.deal_order.seat_for(draw);
            debug!(card = %card, seat = seat, "Dealt card");
            self.hands[seat].add_card(card);
        }
        Ok(())
    }

    /// Classifies every hand and orders them strongest first. Hands that tie
    /// completely keep their seat order.
    pub fn rank_hands(&mut self) -> Result<Vec<RankedHand>, GameError> {
        let mut classified = Vec::with_capacity(self.hands.len());
        for (seat, hand) in self.hands.iter_mut().enumerate() {
            let evaluation = hand.evaluate()?.clone();
            debug!(seat = seat, category = %evaluation.category(), "Classified hand");
            classified.push((seat, hand.cards().to_vec(), evaluation));
        }

        classified.sort_by(|(_, _, a), (_, _, b)| b.compare(a).cmp(&0));

        Ok(classified
            .into_iter()
            .map(|(seat, cards, evaluation)| RankedHand {
                seat,
                cards,
                category: evaluation.category(),
            })
            .collect())
    }

    /// Runs the whole session. A deck that listed a card twice is rejected before
    /// any card is dealt.
    pub fn play(mut self) -> Result<SessionReport, GameError> {
        if let Some(card) = self.deck.duplicate_card() {
            return Err(GameError::DuplicateCard(card));
        }

        let source = self.deck.source().clone();
        let deck: Vec<Card> = self.deck.cards().copied().collect();

        self.deal()?;
        let dealt = self.hands.iter().map(|hand| hand.cards().to_vec()).collect();
        let ranking = self.rank_hands()?;

        let remaining = match source {
            DeckSource::Shuffled => Some(self.deck.cards().copied().collect()),
            _ => None,
        };

        if let Some(winner) = ranking.first() {
            info!(seat = winner.seat, category = %winner.category, "Session complete");
        }

        Ok(SessionReport {
            source,
            deal_order: self.deal_order,
            deck,
            dealt,
            remaining,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{Rank, Suit};

    const TEST_DECK: &str = "\
10D,JD,QD,KD,AD
9C,9D,9H,9S,2C
KC,KH,KS,QS,QH
2H,2S,8C,8D,5H
3D,5C,7H,8S,JC
4S,4H,6C,6D,6H
";

    #[test]
    fn test_sequential_deal_keeps_rows_together() {
        let deck = Deck::from_layout(TEST_DECK).unwrap();
        let mut game = Game::with_default_order(deck);
        game.deal().unwrap();

        assert_eq!(game.hands()[0].to_string(), "10D JD QD KD AD");
        assert_eq!(game.hands()[5].to_string(), "4S 4H 6C 6D 6H");
        assert!(game.deck().is_empty());
    }

    #[test]
    fn test_round_robin_deal_spreads_cards() {
        let deck = Deck::from_layout(TEST_DECK).unwrap();
        let mut game = Game::new(deck, DealOrder::RoundRobin);
        game.deal().unwrap();

        assert_eq!(game.hands()[0].to_string(), "10D 9D KS 8D JC");
        assert!(game.hands().iter().all(|hand| hand.len() == HAND_SIZE));
    }

    #[test]
    fn test_deal_fails_on_short_deck() {
        let deck = Deck::from_layout("2D,3D,4D").unwrap();
        let mut game = Game::new(deck, DealOrder::RoundRobin);
        assert!(matches!(
            game.deal(),
            Err(GameError::Deck(DeckError::EmptyDeck))
        ));
    }

    #[test]
    fn test_play_ranks_strongest_first() {
        let deck = Deck::from_layout(TEST_DECK).unwrap();
        let report = Game::with_default_order(deck).play().unwrap();

        let order: Vec<(usize, Category)> = report
            .ranking
            .iter()
            .map(|hand| (hand.seat, hand.category))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, Category::RoyalStraightFlush),
                (1, Category::FourOfAKind),
                (2, Category::FullHouse),
                (5, Category::FullHouse),
                (3, Category::TwoPair),
                (4, Category::HighCard),
            ]
        );
        assert_eq!(report.remaining, None);
        assert_eq!(report.deal_order, DealOrder::Sequential);
    }

    #[test]
    fn test_play_rejects_duplicate_before_dealing() {
        let deck = Deck::from_layout("2D,3D,2D").unwrap();
        match Game::with_default_order(deck).play() {
            Err(GameError::DuplicateCard(card)) => {
                assert_eq!(card, Card::new(Rank::Two, Suit::Diamonds))
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_shuffled_session_reports_remaining_cards() {
        let report = Game::with_default_order(Deck::shuffled_with_seed(42))
            .play()
            .unwrap();

        assert_eq!(report.deal_order, DealOrder::RoundRobin);
        assert_eq!(report.deck.len(), 52);
        assert_eq!(report.remaining.as_ref().map(Vec::len), Some(22));
        assert_eq!(report.ranking.len(), HAND_COUNT);
        assert!(report
            .ranking
            .windows(2)
            .all(|pair| pair[0].category >= pair[1].category));
    }
}
