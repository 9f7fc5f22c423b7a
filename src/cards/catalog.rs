//! The fixed card universe for a configuration.
//!
//! Generated once per game, before the deal, with no randomness: for
//! each configured color suit one card per rank, then one rocket per
//! rocket rank. The catalog exposes two views: every playing card, and
//! the cards eligible as task targets (color cards only — rockets are
//! never tasks).

use crate::core::GameConfig;

use super::card::Card;

/// The full card universe for one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardCatalog {
    playing: Vec<Card>,
    tasks: Vec<Card>,
}

impl CardCatalog {
    /// Enumerate the card universe for `config`.
    ///
    /// Pure function of the configuration: the same config always
    /// produces the same cards in the same order.
    ///
    /// ```
    /// use crew_engine::cards::CardCatalog;
    /// use crew_engine::core::GameConfig;
    ///
    /// let catalog = CardCatalog::generate(&GameConfig::default());
    /// assert_eq!(catalog.playing_cards().len(), 40); // 4 suits x 9 ranks + 4 rockets
    /// assert_eq!(catalog.task_cards().len(), 36);
    /// ```
    #[must_use]
    pub fn generate(config: &GameConfig) -> Self {
        let mut playing = Vec::with_capacity(config.deck_size());
        let mut tasks = Vec::with_capacity(config.task_card_count());

        for suit_index in 0..config.color_suits as u8 {
            for rank in 1..=config.ranks {
                let card = Card::color(suit_index, rank);
                playing.push(card);
                tasks.push(card);
            }
        }
        for rank in 1..=config.rockets {
            playing.push(Card::rocket(rank));
        }

        Self { playing, tasks }
    }

    /// Every card in the deck.
    #[must_use]
    pub fn playing_cards(&self) -> &[Card] {
        &self.playing
    }

    /// Cards eligible as task targets.
    #[must_use]
    pub fn task_cards(&self) -> &[Card] {
        &self.tasks
    }
}
