//! Decision policies for AI-controlled seats.
//!
//! A policy sees a `PlayerView` plus, when choosing, the full offer
//! (AI choosers are allowed to read the face-down card). Randomness is
//! always passed in so that a seeded session replays exactly.

use crate::core::GameRng;
use crate::game::{Offer, PlayerView, Proposal, Slot};

/// Decisions for one seat.
pub trait Policy: Send + Sync {
    /// Pick a pair to propose.
    ///
    /// Returns `None` if the hand holds fewer than two card types.
    fn plan_turn(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Proposal>;

    /// Take one card of an offer.
    fn choose_card(&self, view: &PlayerView, offer: &Offer, rng: &mut GameRng) -> Slot;

    /// Label for logs and summaries.
    fn name(&self) -> &'static str;
}

/// Uniform random policy.
///
/// Proposes a uniformly random legal pair with a random orientation and
/// takes a random slot.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn plan_turn(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Proposal> {
        let cards: Vec<_> = view.hand.iter().copied().collect();
        let mut pairs = Vec::new();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                if a.card_type != b.card_type {
                    pairs.push(Proposal::new(a.id, b.id));
                }
            }
        }
        if pairs.is_empty() {
            return None;
        }

        let pair = pairs[rng.gen_range_usize(0..pairs.len())];
        Some(if rng.gen_bool(0.5) { pair } else { pair.flipped() })
    }

    fn choose_card(&self, _view: &PlayerView, _offer: &Offer, rng: &mut GameRng) -> Slot {
        if rng.gen_bool(0.5) {
            Slot::FaceUp
        } else {
            Slot::FaceDown
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
