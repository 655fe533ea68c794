//! Recruited cards.
//!
//! A collection only grows. The per-type count *before* a card is added
//! fixes which movement entry that card yields ("this is my Nth copy"),
//! and later acquisitions never re-derive earlier ones.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::catalog::{CardType, Movement};

/// The result of adding one card to a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquisition {
    /// The card recruited.
    pub card: Card,
    /// 1-based copy number of this type after acquisition.
    pub copy_number: u32,
    /// Movement entry selected by the copy number.
    pub movement: Movement,
}

impl Acquisition {
    /// Evaluate what recruiting `card` would yield without mutating anything.
    #[must_use]
    pub fn preview(card: Card, owned_before: u32) -> Self {
        let copy_number = owned_before + 1;
        Self {
            card,
            copy_number,
            movement: card.card_type.movement_for_copy(copy_number),
        }
    }

    /// Step count, zero for instant entries.
    #[must_use]
    pub fn steps(&self) -> i32 {
        self.movement.steps()
    }
}

/// Append-only multiset of recruited cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    cards: Vector<Card>,
    counts: FxHashMap<CardType, u32>,
}

impl Collection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection by acquiring each card in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut collection = Self::new();
        for card in cards {
            collection.acquire(card);
        }
        collection
    }

    /// Add a card, returning its copy number and movement entry.
    pub fn acquire(&mut self, card: Card) -> Acquisition {
        let acquisition = Acquisition::preview(card, self.count(card.card_type));
        self.cards.push_back(card);
        self.counts.insert(card.card_type, acquisition.copy_number);
        acquisition
    }

    /// Copies of a type recruited so far.
    #[must_use]
    pub fn count(&self, card_type: CardType) -> u32 {
        self.counts.get(&card_type).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
