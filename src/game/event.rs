//! Outbound events for the presentation layer.
//!
//! Events are informational. The authoritative state is always the
//! latest `MatchState`; events only say what changed and in what order,
//! so a renderer can animate the differences.

use serde::{Deserialize, Serialize};

use crate::board::{Move, Position};
use crate::cards::{Card, Collection, Hand};
use crate::core::{Controller, PlayerId, PlayerMap};
use crate::rules::EndReason;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    MatchStarted {
        first: PlayerId,
        seats: PlayerMap<Controller>,
    },
    HandChanged {
        player: PlayerId,
        hand: Hand,
    },
    DeckChanged {
        remaining: usize,
    },
    CollectionChanged {
        player: PlayerId,
        collection: Collection,
    },
    /// The face-down card is hidden from the chooser whenever the
    /// proposer is not a human seat.
    CardsProposed {
        proposer: PlayerId,
        face_up: Card,
        face_down_hidden: bool,
    },
    ChoiceResolved {
        taker: PlayerId,
        controller: Controller,
        taken: Card,
        given: Card,
    },
    PositionsChanged {
        positions: PlayerMap<Position>,
        moves: Option<PlayerMap<Move>>,
    },
    MatchEnded {
        winner: PlayerId,
        reason: EndReason,
        text: String,
    },
}

impl Event {
    /// Short tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Event::MatchStarted { .. } => "match_started",
            Event::HandChanged { .. } => "hand_changed",
            Event::DeckChanged { .. } => "deck_changed",
            Event::CollectionChanged { .. } => "collection_changed",
            Event::CardsProposed { .. } => "cards_proposed",
            Event::ChoiceResolved { .. } => "choice_resolved",
            Event::PositionsChanged { .. } => "positions_changed",
            Event::MatchEnded { .. } => "match_ended",
        }
    }
}
