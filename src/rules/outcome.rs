//! Match results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// `by` recruited a third Codebreaker and won.
    ThreeCodebreakers { by: PlayerId },
    /// `by` recruited a third Daredevil and lost.
    ThreeDaredevils { by: PlayerId },
    /// Both spies landed on the same space.
    Collision { tie: bool },
    /// The longer mover swept through the other spy's path.
    Overtake,
    /// The deck ran out and a hand cannot form another proposal.
    /// `distances` are each seat's clockwise distance to the other.
    DeckExhausted { distances: [u8; 2], tie: bool },
    /// The seat about to propose holds fewer than two card types.
    Stalemate {
        stuck: PlayerId,
        distances: [u8; 2],
        tie: bool,
    },
}

impl EndReason {
    /// Stable snake_case tag.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EndReason::ThreeCodebreakers { .. } => "three_codebreakers",
            EndReason::ThreeDaredevils { .. } => "three_daredevils",
            EndReason::Collision { .. } => "collision",
            EndReason::Overtake => "overtake",
            EndReason::DeckExhausted { .. } => "deck_exhausted",
            EndReason::Stalemate { .. } => "stalemate",
        }
    }
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: PlayerId,
    pub reason: EndReason,
}

impl Outcome {
    #[must_use]
    pub fn new(winner: PlayerId, reason: EndReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }

    /// Human-readable explanation for the end-of-match screen.
    #[must_use]
    pub fn describe(&self) -> String {
        let winner = self.winner;
        let loser = self.loser();
        match self.reason {
            EndReason::ThreeCodebreakers { by } => {
                format!("{} collected 3 Codebreakers and wins", by)
            }
            EndReason::ThreeDaredevils { by } => {
                format!("{} collected 3 Daredevils and loses; {} wins", by, winner)
            }
            EndReason::Collision { tie: false } => {
                format!("Spies collided; {} made the bigger move and wins", winner)
            }
            EndReason::Collision { tie: true } => {
                format!("Spies collided; tie goes to the active player, {}", winner)
            }
            EndReason::Overtake => format!("{} caught {}", winner, loser),
            EndReason::DeckExhausted { distances, tie } => {
                closest_text("Deck empty", winner, distances, tie)
            }
            EndReason::Stalemate { stuck, distances, tie } => {
                let lead = format!("{} cannot propose", stuck);
                closest_text(&lead, winner, distances, tie)
            }
        }
    }
}

fn closest_text(lead: &str, winner: PlayerId, distances: [u8; 2], tie: bool) -> String {
    if tie {
        format!(
            "{}; both spies are {} spaces away, tie goes to the active player, {}",
            lead, distances[0], winner
        )
    } else {
        format!(
            "{}; {} is closer ({} vs {} spaces) and wins",
            lead,
            winner,
            distances[winner.index()],
            distances[winner.opponent().index()]
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
