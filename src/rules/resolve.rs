//! Round resolution.
//!
//! Once both seats have recruited their card for the round, resolution
//! runs in a fixed order and stops at the first terminal condition:
//!
//! 1. Instant triggers (3rd Codebreaker wins, 3rd Daredevil loses),
//!    ordered by `TriggerOrder`. No movement happens if one fires.
//! 2. Movement of both seats along their headings.
//! 3. Collision / overtake (see `board::pursuit`).
//! 4. Deck exhaustion: deck empty and a hand below two cards.
//! 5. Stalemate: the next proposer holds fewer than two card types.
//!
//! Resolution cannot fail: its inputs are produced by validated
//! proposals and choices.

use serde::{Deserialize, Serialize};

use super::outcome::{EndReason, Outcome};
use crate::board::{detect_pursuit, Heading, Move, Position, Pursuit, Track};
use crate::cards::{Acquisition, CardType, Hand, Movement};
use crate::core::{PlayerId, PlayerMap, RulesConfig, TriggerOrder};

/// Everything resolution needs about the round just played.
#[derive(Clone, Debug)]
pub struct RoundInput<'a> {
    /// Seat that proposed this round.
    pub active: PlayerId,
    /// What each seat recruited.
    pub acquired: PlayerMap<Acquisition>,
    /// Positions before movement.
    pub positions: PlayerMap<Position>,
    /// Hands after the proposer's replacement draw.
    pub hands: &'a PlayerMap<Hand>,
    /// Cards left in the deck.
    pub deck_remaining: usize,
}

/// What resolution did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResolution {
    /// Moves applied this round; `None` when an instant trigger ended
    /// the match before movement.
    pub moves: Option<PlayerMap<Move>>,
    /// Positions after resolution.
    pub positions: PlayerMap<Position>,
    /// Set when the match is over.
    pub outcome: Option<Outcome>,
}

/// Resolve one round.
#[must_use]
pub fn resolve_round(rules: &RulesConfig, track: &Track, input: &RoundInput<'_>) -> RoundResolution {
    if let Some(outcome) = instant_outcome(rules.trigger_order, input.active, &input.acquired) {
        return RoundResolution {
            moves: None,
            positions: input.positions.clone(),
            outcome: Some(outcome),
        };
    }

    let moves = PlayerMap::new(|p| {
        let heading = Heading::for_seat(rules.convention, p);
        track.step(input.positions[p], input.acquired[p].steps() * heading.sign())
    });
    let positions = moves.map(|_, m| m.to);

    let outcome = pursuit_outcome(track, &moves, input.active, rules)
        .or_else(|| exhaustion_outcome(track, &positions, input))
        .or_else(|| {
            stalemate_outcome(
                track,
                &positions,
                input.hands,
                input.active.opponent(),
                input.active,
            )
        });

    RoundResolution {
        moves: Some(moves),
        positions,
        outcome,
    }
}

/// Step 1: instant win/lose triggers.
#[must_use]
pub fn instant_outcome(
    order: TriggerOrder,
    active: PlayerId,
    acquired: &PlayerMap<Acquisition>,
) -> Option<Outcome> {
    let first = match order {
        TriggerOrder::ActiveFirst => active,
        TriggerOrder::PassiveFirst => active.opponent(),
    };

    [first, first.opponent()].into_iter().find_map(|p| {
        let acq = &acquired[p];
        match (acq.card.card_type, acq.movement) {
            (CardType::Codebreaker, Movement::Win) => {
                Some(Outcome::new(p, EndReason::ThreeCodebreakers { by: p }))
            }
            (CardType::Daredevil, Movement::Lose) => {
                Some(Outcome::new(p.opponent(), EndReason::ThreeDaredevils { by: p }))
            }
            _ => None,
        }
    })
}

fn pursuit_outcome(
    track: &Track,
    moves: &PlayerMap<Move>,
    active: PlayerId,
    rules: &RulesConfig,
) -> Option<Outcome> {
    detect_pursuit(track, moves, active, rules.landing_tie_break).map(|pursuit| match pursuit {
        Pursuit::Collision { winner, tie } => Outcome::new(winner, EndReason::Collision { tie }),
        Pursuit::Overtake { winner } => Outcome::new(winner, EndReason::Overtake),
    })
}

fn exhaustion_outcome(
    track: &Track,
    positions: &PlayerMap<Position>,
    input: &RoundInput<'_>,
) -> Option<Outcome> {
    if input.deck_remaining > 0 {
        return None;
    }
    if input.hands.iter().all(|(_, hand)| hand.len() >= 2) {
        return None;
    }

    let (winner, distances, tie) = closest_seat(track, positions, input.active);
    Some(Outcome::new(winner, EndReason::DeckExhausted { distances, tie }))
}

/// Step 5: `proposer` holds no legal pair.
///
/// After a round `tie_winner` is the seat that was active; at match
/// start it is the first proposer itself.
#[must_use]
pub fn stalemate_outcome(
    track: &Track,
    positions: &PlayerMap<Position>,
    hands: &PlayerMap<Hand>,
    proposer: PlayerId,
    tie_winner: PlayerId,
) -> Option<Outcome> {
    if hands[proposer].can_propose() {
        return None;
    }

    let (winner, distances, tie) = closest_seat(track, positions, tie_winner);
    Some(Outcome::new(
        winner,
        EndReason::Stalemate {
            stuck: proposer,
            distances,
            tie,
        },
    ))
}

/// Each seat's clockwise distance to the other.
///
/// Measured clockwise under every convention, so converging seats are
/// compared on the same scale and the two distances sum to the board
/// size unless the spies share a space.
#[must_use]
pub fn clockwise_distances(track: &Track, positions: &PlayerMap<Position>) -> [u8; 2] {
    let d = PlayerMap::new(|p| track.forward_distance(positions[p], positions[p.opponent()]));
    [d[PlayerId::new(0)], d[PlayerId::new(1)]]
}

/// The strictly closer seat, or `tie_winner` when distances are equal.
fn closest_seat(
    track: &Track,
    positions: &PlayerMap<Position>,
    tie_winner: PlayerId,
) -> (PlayerId, [u8; 2], bool) {
    let distances = clockwise_distances(track, positions);
    match distances[0].cmp(&distances[1]) {
        std::cmp::Ordering::Less => (PlayerId::new(0), distances, false),
        std::cmp::Ordering::Greater => (PlayerId::new(1), distances, false),
        std::cmp::Ordering::Equal => (tie_winner, distances, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Collection};

    fn card(id: u32, card_type: CardType) -> Card {
        Card::new(CardId::new(id), card_type)
    }

    fn acquire(prior: &[CardType], taken: CardType) -> Acquisition {
        let mut collection = Collection::from_cards(
            prior.iter().enumerate().map(|(i, &t)| card(100 + i as u32, t)),
        );
        collection.acquire(card(1, taken))
    }

    #[test]
    fn test_instant_order_policy() {
        // Both seats complete their Codebreakers in the same round.
        let acquired = PlayerMap::new(|_| {
            acquire(&[CardType::Codebreaker, CardType::Codebreaker], CardType::Codebreaker)
        });

        let active_first = instant_outcome(TriggerOrder::ActiveFirst, PlayerId::new(1), &acquired);
        assert_eq!(active_first.map(|o| o.winner), Some(PlayerId::new(1)));

        let passive_first = instant_outcome(TriggerOrder::PassiveFirst, PlayerId::new(1), &acquired);
        assert_eq!(passive_first.map(|o| o.winner), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_no_instant_on_second_copy() {
        let acquired = PlayerMap::new(|_| acquire(&[CardType::Daredevil], CardType::Daredevil));
        assert_eq!(instant_outcome(TriggerOrder::ActiveFirst, PlayerId::new(0), &acquired), None);
    }

    #[test]
    fn test_clockwise_distances() {
        let track = Track::new(14);
        let positions = PlayerMap::new(|p| if p.index() == 0 { Position(1) } else { Position(4) });
        assert_eq!(clockwise_distances(&track, &positions), [3, 11]);
    }
}
