//! A player's private hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use super::catalog::CardType;

/// Order-irrelevant set of cards held by one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from explicit cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove a card by id, returning it if present.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(pos))
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// One representative card per type, in order of first appearance.
    #[must_use]
    pub fn representatives(&self) -> Vec<Card> {
        let mut seen: SmallVec<[CardType; 8]> = SmallVec::new();
        let mut reps = Vec::new();
        for card in &self.cards {
            if !seen.contains(&card.card_type) {
                seen.push(card.card_type);
                reps.push(*card);
            }
        }
        reps
    }

    /// Number of distinct types held.
    #[must_use]
    pub fn distinct_types(&self) -> usize {
        self.representatives().len()
    }

    /// Whether a legal proposal (two cards of different types) exists.
    #[must_use]
    pub fn can_propose(&self) -> bool {
        self.distinct_types() >= 2
    }
}
