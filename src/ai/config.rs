//! Heuristic AI parameters.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Half-width of the uniform noise added to the face-up score when
    /// choosing (default: 2.5, so noise lies in `[-2.5, 2.5)`).
    pub noise: f64,

    /// Probability of showing the card that is better for the opponent
    /// face-up (default: 0.25).
    pub bluff_chance: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            noise: 2.5,
            bluff_chance: 0.25,
        }
    }
}

impl AiConfig {
    /// Set the choice noise amplitude. Zero makes choices deterministic.
    #[must_use]
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise.max(0.0);
        self
    }

    /// Set the bluff probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_bluff_chance(mut self, chance: f64) -> Self {
        self.bluff_chance = chance.clamp(0.0, 1.0);
        self
    }
}
