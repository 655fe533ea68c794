//! Rule-of-thumb AI.
//!
//! ## Choosing
//!
//! Score both offered cards with `evaluate_card_for_ai`, add uniform
//! noise in `[-noise, noise)` to the face-up score, take the face-up
//! card only if it is then strictly better.
//!
//! ## Proposing
//!
//! Take one card per type (first in hand order), score every pair of
//! types with `evaluate_pair` and keep the first strictly best pair.
//! Then decide what to show:
//!
//! - normally the card that is worse for the opponent goes face-up;
//! - with probability `bluff_chance` the better one goes face-up.

use super::config::AiConfig;
use super::policy::Policy;
use super::scoring::{evaluate_card_for_ai, evaluate_card_for_player, evaluate_pair, Perspective};
use crate::cards::Hand;
use crate::core::GameRng;
use crate::game::{Offer, PlayerView, Proposal, Slot};

#[derive(Clone, Debug, Default)]
pub struct HeuristicAi {
    config: AiConfig,
}

impl HeuristicAi {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Take one card of `offer`.
    pub fn choose_card(&self, p: &Perspective<'_>, offer: &Offer, rng: &mut GameRng) -> Slot {
        let up = evaluate_card_for_ai(offer.face_up.card_type, p);
        let down = evaluate_card_for_ai(offer.face_down.card_type, p);
        let noise = (rng.gen_unit() - 0.5) * 2.0 * self.config.noise;

        let slot = if f64::from(up) + noise > f64::from(down) {
            Slot::FaceUp
        } else {
            Slot::FaceDown
        };

        log::trace!(
            "choose: {} = {}, {} = {}, noise {:.2} -> {:?}",
            offer.face_up.card_type,
            up,
            offer.face_down.card_type,
            down,
            noise,
            slot
        );
        slot
    }

    /// Pick and orient a pair from `hand`.
    pub fn plan_turn(&self, hand: &Hand, p: &Perspective<'_>, rng: &mut GameRng) -> Option<Proposal> {
        let reps = hand.representatives();
        if reps.len() < 2 {
            return None;
        }

        let mut best = None;
        let mut best_score = i32::MIN;
        for (i, a) in reps.iter().enumerate() {
            for b in &reps[i + 1..] {
                let score = evaluate_pair(a.card_type, b.card_type, p);
                log::trace!("pair {} + {} scores {}", a.card_type, b.card_type, score);
                if best.is_none() || score > best_score {
                    best_score = score;
                    best = Some((*a, *b));
                }
            }
        }
        let (card1, card2) = best?;

        let val1 = evaluate_card_for_player(card1.card_type, p);
        let val2 = evaluate_card_for_player(card2.card_type, p);
        let bluffing = rng.gen_bool(self.config.bluff_chance);

        let (face_up, face_down) = match (bluffing, val1 > val2) {
            (true, true) | (false, false) => (card1, card2),
            (true, false) | (false, true) => (card2, card1),
        };

        log::trace!(
            "propose {} face-up, {} face-down (score {}, bluff {})",
            face_up,
            face_down,
            best_score,
            bluffing
        );
        Some(Proposal::new(face_up.id, face_down.id))
    }
}

impl Policy for HeuristicAi {
    fn plan_turn(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Proposal> {
        HeuristicAi::plan_turn(self, &view.hand, &Perspective::from_view(view), rng)
    }

    fn choose_card(&self, view: &PlayerView, offer: &Offer, rng: &mut GameRng) -> Slot {
        HeuristicAi::choose_card(self, &Perspective::from_view(view), offer, rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
