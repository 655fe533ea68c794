//! What one seat is allowed to see.

use serde::{Deserialize, Serialize};

use crate::board::{Heading, Position};
use crate::cards::{Card, Collection, Hand};
use crate::core::{PlayerId, PlayerMap};
use crate::rules::Outcome;

/// One seat's observation of a match.
///
/// The opponent's hand is reduced to its size. During a choice the
/// face-down card is only revealed to the seat that proposed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    /// Seat whose decision the match is waiting on.
    pub to_act: Option<PlayerId>,
    pub hand: Hand,
    pub opponent_hand_size: usize,
    pub deck_remaining: usize,
    pub collections: PlayerMap<Collection>,
    pub positions: PlayerMap<Position>,
    pub heading: Heading,
    /// Steps the viewer must travel along its heading to reach the opponent.
    pub distance_to_opponent: u8,
    pub face_up: Option<Card>,
    pub face_down: Option<Card>,
    pub outcome: Option<Outcome>,
}

impl PlayerView {
    #[must_use]
    pub fn mine(&self) -> &Collection {
        &self.collections[self.viewer]
    }

    #[must_use]
    pub fn theirs(&self) -> &Collection {
        &self.collections[self.viewer.opponent()]
    }

    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.to_act == Some(self.viewer)
    }
}
