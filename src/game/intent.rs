//! Inbound intents and their rejection reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::phase::Slot;
use crate::cards::{CardId, CardType};
use crate::core::PlayerId;

/// Two cards from the proposer's hand, one shown and one hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Proposal {
    pub face_up: CardId,
    pub face_down: CardId,
}

impl Proposal {
    #[must_use]
    pub fn new(face_up: CardId, face_down: CardId) -> Self {
        Self { face_up, face_down }
    }

    /// Same pair with the slots swapped.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            face_up: self.face_down,
            face_down: self.face_up,
        }
    }
}

/// A request from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a match. `None` flips a coin for the first proposer.
    StartMatch { first: Option<PlayerId> },
    /// Abandon the current match and start another with a new coin flip.
    Restart,
    /// Human proposer puts two cards on the table.
    ProposePair(Proposal),
    /// Human chooser takes one of the offered cards.
    ChooseCard(Slot),
}

/// A rejected intent. The match state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("no match in progress")]
    NoMatch,
    #[error("the match is over")]
    MatchOver,
    #[error("not waiting for a proposal")]
    NotAwaitingProposal,
    #[error("not waiting for a choice")]
    NotAwaitingChoice,
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("{0} is not controlled by a human")]
    NotHumanSeat(PlayerId),
    #[error("{0} is not in the proposer's hand")]
    UnknownCard(CardId),
    #[error("{0} cannot fill both slots")]
    DuplicateCard(CardId),
    #[error("both cards are {0}; a pair needs two different types")]
    SameType(CardType),
}
