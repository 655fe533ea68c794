//! The shared draw pile.
//!
//! Backed by a persistent `im::Vector` so every match snapshot can hold
//! its own deck without copying it. The top of the deck is the back of
//! the vector.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::catalog::CardType;
use crate::core::GameRng;

/// Ordered sequence of cards. Shrinks monotonically, never refilled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Materialize the standard 38-card deck in catalog order.
    ///
    /// Ids are assigned `0..38` in the order cards are created.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vector::new();
        let mut next_id = 0u32;

        for card_type in CardType::ALL {
            for _ in 0..card_type.copies() {
                cards.push_back(Card::new(CardId::new(next_id), card_type));
                next_id += 1;
            }
        }

        Self { cards }
    }

    /// Build a deck from explicit cards. The last card is drawn first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permute the deck (Fisher–Yates).
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        fisher_yates(&mut self.cards, rng);
    }

    /// Remove up to `n` cards from the top.
    ///
    /// A short or empty draw is not an error; callers inspect the result.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n.min(self.cards.len()));
        for _ in 0..n {
            match self.cards.pop_back() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards of a type still in the deck.
    #[must_use]
    pub fn count_of(&self, card_type: CardType) -> usize {
        self.cards.iter().filter(|c| c.card_type == card_type).count()
    }
}

/// In-place Fisher–Yates over a persistent vector.
///
/// Walks from the back, swapping each slot with a uniformly chosen slot
/// at or before it, so every permutation is equally likely.
pub fn fisher_yates<T: Clone>(items: &mut Vector<T>, rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range_usize(0..i + 1);
        items.swap(i, j);
    }
}
