//! Match snapshots.
//!
//! A `MatchState` is never mutated in place by callers. Every engine
//! transition takes a snapshot by reference and returns a new one with
//! `version` bumped. The deck and collections are `im` vectors, so a
//! snapshot clone shares structure with its predecessor.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::board::{Move, Position};
use crate::cards::{Collection, Deck, Hand};
use crate::core::{Controller, PlayerId, PlayerMap};

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) version: u64,
    pub(crate) half_rounds: u32,
    pub(crate) first: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) deck: Deck,
    pub(crate) hands: PlayerMap<Hand>,
    pub(crate) collections: PlayerMap<Collection>,
    pub(crate) positions: PlayerMap<Position>,
    pub(crate) seats: PlayerMap<Controller>,
    pub(crate) last_moves: Option<PlayerMap<Move>>,
}

impl MatchState {
    /// Incremented by every accepted transition.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Completed propose/choose cycles.
    #[must_use]
    pub fn half_rounds(&self) -> u32 {
        self.half_rounds
    }

    /// Seat that won the coin flip.
    #[must_use]
    pub fn first(&self) -> PlayerId {
        self.first
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn collection(&self, player: PlayerId) -> &Collection {
        &self.collections[player]
    }

    #[must_use]
    pub fn collections(&self) -> &PlayerMap<Collection> {
        &self.collections
    }

    #[must_use]
    pub fn position(&self, player: PlayerId) -> Position {
        self.positions[player]
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Position> {
        &self.positions
    }

    #[must_use]
    pub fn controller(&self, player: PlayerId) -> Controller {
        self.seats[player]
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Controller> {
        &self.seats
    }

    /// Moves applied by the most recent round, if it moved anyone.
    #[must_use]
    pub fn last_moves(&self) -> Option<&PlayerMap<Move>> {
        self.last_moves.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Total cards held anywhere. Constant over a match.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.iter().map(|(_, h)| h.len()).sum::<usize>()
            + self.collections.iter().map(|(_, c)| c.len()).sum::<usize>()
            + usize::from(self.phase.offer().is_some()) * 2
    }

    /// Copy with the next version number.
    pub(crate) fn next_version(&self) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next
    }
}
