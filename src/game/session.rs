//! Intent/event boundary toward a presentation layer.
//!
//! A `Session` holds the latest `MatchState`, the seeded RNG streams and
//! the seat configuration. The table stream flips the coin and shuffles;
//! each seat draws its AI decisions from its own stream. Human seats are driven by `handle(Intent)`; AI
//! seats are driven by `step_ai` (one decision per call, so the caller
//! can pace reveals) or `run_ai` (until a human is needed or the match
//! ends).
//!
//! ```
//! use chase_on::ai::HeuristicAi;
//! use chase_on::core::{PlayerMap, RulesConfig};
//! use chase_on::game::{Engine, Intent, Seat, Session};
//!
//! let engine = Engine::new(RulesConfig::default()).unwrap();
//! let seats = PlayerMap::new(|_| Seat::ai(HeuristicAi::default()));
//! let mut session = Session::new(engine, seats, 42);
//!
//! session.handle(Intent::StartMatch { first: None }).unwrap();
//! session.run_ai();
//! assert!(session.state().unwrap().is_over());
//! ```

use super::engine::{Engine, Transition};
use super::event::Event;
use super::intent::{Intent, IntentError};
use super::phase::Phase;
use super::state::MatchState;
use crate::ai::Policy;
use crate::core::{Controller, GameRng, PlayerId, PlayerMap};

/// Who plays a seat.
pub enum Seat {
    Human,
    Ai(Box<dyn Policy>),
}

impl Seat {
    pub fn ai(policy: impl Policy + 'static) -> Self {
        Seat::Ai(Box::new(policy))
    }

    #[must_use]
    pub fn controller(&self) -> Controller {
        match self {
            Seat::Human => Controller::Human,
            Seat::Ai(_) => Controller::Ai,
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("Human"),
            Seat::Ai(policy) => write!(f, "Ai({})", policy.name()),
        }
    }
}

/// One table: engine, seats, RNG streams and the current snapshot.
#[derive(Debug)]
pub struct Session {
    engine: Engine,
    seats: PlayerMap<Seat>,
    state: Option<MatchState>,
    rng: GameRng,
    seat_rngs: PlayerMap<GameRng>,
}

impl Session {
    /// Create a session. No match is running until `StartMatch`.
    #[must_use]
    pub fn new(engine: Engine, seats: PlayerMap<Seat>, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let seat_rngs = PlayerMap::new(|p| rng.for_context(&format!("seat-{}", p.index())));
        Self {
            engine,
            seats,
            state: None,
            rng,
            seat_rngs,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Latest snapshot.
    #[must_use]
    pub fn state(&self) -> Option<&MatchState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn controllers(&self) -> PlayerMap<Controller> {
        self.seats.map(|_, seat| seat.controller())
    }

    /// Human seat the match is waiting on, if any.
    #[must_use]
    pub fn awaiting_human(&self) -> Option<PlayerId> {
        let player = self.state.as_ref()?.phase().to_act()?;
        matches!(self.seats[player], Seat::Human).then_some(player)
    }

    /// Apply an intent. On error the snapshot is unchanged.
    pub fn handle(&mut self, intent: Intent) -> Result<Vec<Event>, IntentError> {
        let result = self.dispatch(intent);
        if let Err(err) = &result {
            log::warn!("rejected {:?}: {}", intent, err);
        }
        result
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Vec<Event>, IntentError> {
        match intent {
            Intent::StartMatch { first } => Ok(self.start(first)),
            Intent::Restart => {
                if self.state.is_none() {
                    return Err(IntentError::NoMatch);
                }
                log::debug!("restarting match");
                Ok(self.start(None))
            }
            Intent::ProposePair(proposal) => {
                let state = self.state.as_ref().ok_or(IntentError::NoMatch)?;
                let player = match state.phase() {
                    Phase::ProposalPending { active } => *active,
                    Phase::AwaitingChoice { .. } => return Err(IntentError::NotAwaitingProposal),
                    Phase::GameOver(_) => return Err(IntentError::MatchOver),
                };
                self.require_human(player)?;
                let transition = self.engine.propose(state, player, proposal)?;
                Ok(self.commit(transition))
            }
            Intent::ChooseCard(slot) => {
                let state = self.state.as_ref().ok_or(IntentError::NoMatch)?;
                let player = match state.phase() {
                    Phase::AwaitingChoice { active, .. } => active.opponent(),
                    Phase::ProposalPending { .. } => return Err(IntentError::NotAwaitingChoice),
                    Phase::GameOver(_) => return Err(IntentError::MatchOver),
                };
                self.require_human(player)?;
                let transition = self.engine.choose(state, player, slot)?;
                Ok(self.commit(transition))
            }
        }
    }

    /// Perform one AI decision if an AI seat is to act.
    ///
    /// Returns `None` when no match is running, the match is over, or a
    /// human must act.
    pub fn step_ai(&mut self) -> Option<Vec<Event>> {
        let state = self.state.as_ref()?;
        let player = state.phase().to_act()?;
        let Seat::Ai(policy) = &self.seats[player] else {
            return None;
        };
        let view = self.engine.view(state, player);
        let rng = &mut self.seat_rngs[player];

        let result = match *state.phase() {
            Phase::ProposalPending { .. } => {
                let proposal = policy
                    .plan_turn(&view, rng)
                    .or_else(|| self.engine.legal_proposals(state, player).first().copied())?;
                self.engine.propose(state, player, proposal)
            }
            Phase::AwaitingChoice { offer, .. } => {
                let slot = policy.choose_card(&view, &offer, rng);
                self.engine.choose(state, player, slot)
            }
            Phase::GameOver(_) => return None,
        };

        match result {
            Ok(transition) => Some(self.commit(transition)),
            Err(err) => {
                log::warn!("{} policy {} made an illegal move: {}", player, policy.name(), err);
                None
            }
        }
    }

    /// Drive AI seats until a human must act or the match ends.
    pub fn run_ai(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(step) = self.step_ai() {
            events.extend(step);
        }
        events
    }

    fn start(&mut self, first: Option<PlayerId>) -> Vec<Event> {
        let first = first.unwrap_or_else(|| Engine::coin_flip(&mut self.rng));
        let transition = self.engine.start_match(first, self.controllers(), &mut self.rng);
        self.commit(transition)
    }

    fn require_human(&self, player: PlayerId) -> Result<(), IntentError> {
        match self.seats[player] {
            Seat::Human => Ok(()),
            Seat::Ai(_) => Err(IntentError::NotHumanSeat(player)),
        }
    }

    fn commit(&mut self, transition: Transition) -> Vec<Event> {
        for event in &transition.events {
            log::trace!("event {}", event.kind());
        }
        self.state = Some(transition.state);
        transition.events
    }
}
