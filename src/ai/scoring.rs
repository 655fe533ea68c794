//! Card and pair scoring.
//!
//! All scores are from the AI's point of view. `evaluate_card_for_ai`
//! scores recruiting a card into the AI's own collection;
//! `evaluate_card_for_player` scores the same card landing in the
//! opponent's collection.
//!
//! | Card        | Mine (AI)                                   | Theirs (opponent)       |
//! |-------------|---------------------------------------------|-------------------------|
//! | Codebreaker | 200 if I hold 2, 150 if they hold 2, else 30 + 15n | 200 if they hold 2, else 30 + 15n |
//! | Daredevil   | -200 if I hold 2, -100 if they hold 2, else 3m - 20 | -200 if they hold 2, else 3m - 15 |
//! | Others      | 8m (+50 if m reaches the opponent) or 5m if m < 0, plus bonuses | 6m plus bonuses |

use crate::cards::{CardType, Collection};
use crate::game::PlayerView;

/// What the scorer knows about the board.
#[derive(Clone, Copy, Debug)]
pub struct Perspective<'a> {
    pub mine: &'a Collection,
    pub theirs: &'a Collection,
    /// Steps along the AI's heading to the opponent.
    pub distance: u8,
}

impl<'a> Perspective<'a> {
    #[must_use]
    pub fn new(mine: &'a Collection, theirs: &'a Collection, distance: u8) -> Self {
        Self {
            mine,
            theirs,
            distance,
        }
    }

    #[must_use]
    pub fn from_view(view: &'a PlayerView) -> Self {
        Self::new(view.mine(), view.theirs(), view.distance_to_opponent)
    }
}

/// Steps a card yields as the `copy_number`-th copy, sentinels as 0.
#[must_use]
pub fn expected_movement(card_type: CardType, copy_number: u32) -> i32 {
    card_type.steps_for_copy(copy_number)
}

/// Value of recruiting `card_type` into the AI's collection.
#[must_use]
pub fn evaluate_card_for_ai(card_type: CardType, p: &Perspective<'_>) -> i32 {
    let my_count = p.mine.count(card_type);
    let their_count = p.theirs.count(card_type);

    match card_type {
        CardType::Codebreaker => {
            if my_count == 2 {
                return 200;
            }
            if their_count == 2 {
                return 150;
            }
            30 + 15 * my_count as i32
        }
        CardType::Daredevil => {
            if my_count == 2 {
                return -200;
            }
            if their_count == 2 {
                return -100;
            }
            3 * expected_movement(card_type, my_count + 1) - 20
        }
        _ => {
            let movement = expected_movement(card_type, my_count + 1);
            let mut score = 0;

            if movement > 0 {
                score += 8 * movement;
                if movement >= i32::from(p.distance) {
                    score += 50;
                }
            } else if movement < 0 {
                score += 5 * movement;
            }

            match card_type {
                CardType::DoubleAgent if my_count == 1 => score += 40,
                CardType::DoubleAgent => score -= 10,
                CardType::Sentinel if my_count >= 2 => score += 30,
                _ => {}
            }
            score
        }
    }
}

/// Value of `card_type` landing in the opponent's collection.
#[must_use]
pub fn evaluate_card_for_player(card_type: CardType, p: &Perspective<'_>) -> i32 {
    let count = p.theirs.count(card_type);

    match card_type {
        CardType::Codebreaker => {
            if count == 2 {
                200
            } else {
                30 + 15 * count as i32
            }
        }
        CardType::Daredevil => {
            if count == 2 {
                -200
            } else {
                3 * expected_movement(card_type, count + 1) - 15
            }
        }
        _ => {
            let mut score = 6 * expected_movement(card_type, count + 1);
            match card_type {
                CardType::DoubleAgent if count == 1 => score += 35,
                CardType::Sentinel if count >= 2 => score += 25,
                _ => {}
            }
            score
        }
    }
}

/// Best of "keep `a`, give `b`" and "keep `b`, give `a`".
#[must_use]
pub fn evaluate_pair(a: CardType, b: CardType, p: &Perspective<'_>) -> i32 {
    let keep_a = evaluate_card_for_ai(a, p) - evaluate_card_for_player(b, p);
    let keep_b = evaluate_card_for_ai(b, p) - evaluate_card_for_player(a, p);
    keep_a.max(keep_b)
}
