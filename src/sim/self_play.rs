//! AI-versus-AI self-play.
//!
//! Plays seeded matches through a `Session`, exactly as a presentation
//! layer would drive two AI seats, and tallies the results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ai::{AiConfig, HeuristicAi, RandomPolicy};
use crate::core::{ConfigError, PlayerId, PlayerMap, RulesConfig};
use crate::game::{Engine, Intent, Seat, Session};
use crate::rules::Outcome;

/// Which policy plays a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    Heuristic,
    Random,
}

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of matches to play.
    pub matches: usize,

    /// Seed offset (combined with the match index for unique seeds).
    pub seed_offset: u64,

    /// Cap on half-rounds per match. Matches always end well before
    /// the default; the cap only guards against rule changes.
    pub max_half_rounds: u32,

    /// Rules for every match.
    pub rules: RulesConfig,

    /// Heuristic parameters for heuristic seats.
    pub ai: AiConfig,

    /// Policy per seat.
    pub seats: PlayerMap<PolicyKind>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            matches: 100,
            seed_offset: 0,
            max_half_rounds: 64,
            rules: RulesConfig::default(),
            ai: AiConfig::default(),
            seats: PlayerMap::with_value(PolicyKind::Heuristic),
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of matches.
    pub fn with_matches(mut self, matches: usize) -> Self {
        self.matches = matches;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Set the half-round cap.
    pub fn with_max_half_rounds(mut self, max: u32) -> Self {
        self.max_half_rounds = max;
        self
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }

    /// Set the policy of one seat.
    pub fn with_seat(mut self, player: PlayerId, kind: PolicyKind) -> Self {
        self.seats[player] = kind;
        self
    }
}

/// Result of one self-play match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub seed: u64,
    pub first: PlayerId,
    /// `None` if the half-round cap was hit.
    pub outcome: Option<Outcome>,
    pub half_rounds: u32,
}

/// Aggregate over many matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub matches: usize,
    pub wins: PlayerMap<usize>,
    pub first_player_wins: usize,
    pub unfinished: usize,
    pub reasons: FxHashMap<String, usize>,
    pub total_half_rounds: u64,
    pub longest: u32,
}

impl SelfPlaySummary {
    /// Add one match.
    pub fn record(&mut self, record: &MatchRecord) {
        self.matches += 1;
        self.total_half_rounds += u64::from(record.half_rounds);
        self.longest = self.longest.max(record.half_rounds);

        match &record.outcome {
            Some(outcome) => {
                self.wins[outcome.winner] += 1;
                if outcome.winner == record.first {
                    self.first_player_wins += 1;
                }
                *self.reasons.entry(outcome.reason.label().to_string()).or_insert(0) += 1;
            }
            None => self.unfinished += 1,
        }
    }

    #[must_use]
    pub fn mean_half_rounds(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.total_half_rounds as f64 / self.matches as f64
    }

    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.wins[player] as f64 / self.matches as f64
    }

    /// Reason tallies sorted by label.
    #[must_use]
    pub fn sorted_reasons(&self) -> Vec<(&str, usize)> {
        let mut reasons: Vec<_> = self.reasons.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        reasons.sort_unstable();
        reasons
    }
}

/// Runs self-play matches.
#[derive(Clone, Debug)]
pub struct SelfPlayRunner {
    engine: Engine,
    config: SelfPlayConfig,
}

impl SelfPlayRunner {
    /// Validate the rules and build a runner.
    pub fn new(config: SelfPlayConfig) -> Result<Self, ConfigError> {
        let engine = Engine::new(config.rules.clone())?;
        Ok(Self { engine, config })
    }

    #[must_use]
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play one match from `seed`.
    pub fn play_match(&self, seed: u64) -> MatchRecord {
        let seats = PlayerMap::new(|p| match self.config.seats[p] {
            PolicyKind::Heuristic => Seat::ai(HeuristicAi::new(self.config.ai.clone())),
            PolicyKind::Random => Seat::ai(RandomPolicy),
        });
        let mut session = Session::new(self.engine.clone(), seats, seed);

        // Start cannot be rejected on a fresh session.
        if session.handle(Intent::StartMatch { first: None }).is_err() {
            log::warn!("seed {}: match did not start", seed);
        }

        while let Some(state) = session.state() {
            if state.is_over() || state.half_rounds() >= self.config.max_half_rounds {
                break;
            }
            if session.step_ai().is_none() {
                break;
            }
        }

        match session.state() {
            Some(state) => MatchRecord {
                seed,
                first: state.first(),
                outcome: state.phase().outcome().copied(),
                half_rounds: state.half_rounds(),
            },
            None => MatchRecord {
                seed,
                first: PlayerId::new(0),
                outcome: None,
                half_rounds: 0,
            },
        }
    }

    /// Play every configured match.
    pub fn run(&self) -> (Vec<MatchRecord>, SelfPlaySummary) {
        let mut summary = SelfPlaySummary::default();
        let records: Vec<_> = (0..self.config.matches)
            .map(|i| {
                let record = self.play_match(self.config.seed_offset.wrapping_add(i as u64));
                if record.outcome.is_none() {
                    log::warn!(
                        "seed {} unfinished after {} half-rounds",
                        record.seed,
                        record.half_rounds
                    );
                }
                summary.record(&record);
                record
            })
            .collect();

        log::info!(
            "{} matches: {} / {} wins, mean {:.1} half-rounds",
            summary.matches,
            summary.wins[PlayerId::new(0)],
            summary.wins[PlayerId::new(1)],
            summary.mean_half_rounds()
        );
        (records, summary)
    }
}
