//! Pure match transitions.
//!
//! `Engine` owns the rules and the track but no match data. Each
//! operation takes the current `MatchState` by reference and either
//! rejects the request with an `IntentError` (the caller keeps its
//! snapshot) or returns a `Transition` holding the next snapshot and the
//! events describing what changed.
//!
//! ## Half-round
//!
//! 1. `propose`: both cards leave the proposer's hand, the proposer
//!    draws its replacements.
//! 2. `choose`: the chooser recruits one card, the proposer recruits
//!    the other, and the round is resolved atomically. If nothing
//!    terminal happened the opponent becomes the proposer.

use super::event::Event;
use super::intent::{IntentError, Proposal};
use super::phase::{Offer, Phase, Slot};
use super::state::MatchState;
use super::view::PlayerView;
use crate::board::{Heading, Position, Track};
use crate::cards::{validate_catalog, Collection, Deck, Hand};
use crate::core::{ConfigError, Controller, GameRng, PlayerId, PlayerMap, RulesConfig};
use crate::rules::{resolve_round, stalemate_outcome, Outcome, RoundInput};

/// Result of an accepted transition.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: MatchState,
    pub events: Vec<Event>,
}

/// Stateless rules driver.
#[derive(Clone, Debug)]
pub struct Engine {
    rules: RulesConfig,
    track: Track,
}

impl Engine {
    /// Validate the rules and the card catalog.
    pub fn new(rules: RulesConfig) -> Result<Self, ConfigError> {
        rules.validate()?;
        validate_catalog()?;
        let track = Track::new(rules.board_size);
        Ok(Self { rules, track })
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Fair coin flip for the first proposer.
    pub fn coin_flip(rng: &mut GameRng) -> PlayerId {
        if rng.gen_bool(0.5) {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        }
    }

    /// Shuffle a fresh deck, deal, and place both spies at home.
    pub fn start_match(
        &self,
        first: PlayerId,
        seats: PlayerMap<Controller>,
        rng: &mut GameRng,
    ) -> Transition {
        let mut deck = Deck::build();
        deck.shuffle(rng);
        self.deal(first, seats, deck)
    }

    /// Deal from `deck` as it stands and place both spies at home.
    ///
    /// Cards are dealt one at a time from the top, alternating, seat 0
    /// first. If `first` cannot propose, the match ends at once.
    pub fn deal(&self, first: PlayerId, seats: PlayerMap<Controller>, mut deck: Deck) -> Transition {
        let mut hands: PlayerMap<Hand> = PlayerMap::with_default();
        for _ in 0..self.rules.starting_hand {
            for player in PlayerId::all() {
                hands[player].extend(deck.draw(1));
            }
        }

        let positions = PlayerMap::new(|p| Position(self.rules.home(p)));

        let mut state = MatchState {
            version: 0,
            half_rounds: 0,
            first,
            phase: Phase::ProposalPending { active: first },
            deck,
            hands,
            collections: PlayerMap::new(|_| Collection::new()),
            positions,
            seats,
            last_moves: None,
        };

        let mut events = vec![
            Event::MatchStarted {
                first,
                seats: state.seats.clone(),
            },
            Event::DeckChanged {
                remaining: state.deck.len(),
            },
        ];
        for player in PlayerId::all() {
            events.push(Event::HandChanged {
                player,
                hand: state.hands[player].clone(),
            });
            events.push(Event::CollectionChanged {
                player,
                collection: state.collections[player].clone(),
            });
        }
        events.push(Event::PositionsChanged {
            positions: state.positions.clone(),
            moves: None,
        });

        log::debug!("match started, {} proposes first", first);

        if let Some(outcome) = stalemate_outcome(
            &self.track,
            &state.positions,
            &state.hands,
            first,
            first,
        ) {
            self.finish(&mut state, &mut events, outcome);
        }

        Transition { state, events }
    }

    /// Put two cards from the active seat's hand on the table.
    pub fn propose(
        &self,
        state: &MatchState,
        player: PlayerId,
        proposal: Proposal,
    ) -> Result<Transition, IntentError> {
        let active = match state.phase {
            Phase::ProposalPending { active } => active,
            Phase::AwaitingChoice { .. } => return Err(IntentError::NotAwaitingProposal),
            Phase::GameOver(_) => return Err(IntentError::MatchOver),
        };
        if player != active {
            return Err(IntentError::NotYourTurn(player));
        }
        if proposal.face_up == proposal.face_down {
            return Err(IntentError::DuplicateCard(proposal.face_up));
        }

        let hand = &state.hands[active];
        let face_up = *hand
            .get(proposal.face_up)
            .ok_or(IntentError::UnknownCard(proposal.face_up))?;
        let face_down = *hand
            .get(proposal.face_down)
            .ok_or(IntentError::UnknownCard(proposal.face_down))?;
        if face_up.card_type == face_down.card_type {
            return Err(IntentError::SameType(face_up.card_type));
        }

        let mut next = state.next_version();
        let hand = &mut next.hands[active];
        hand.remove(face_up.id);
        hand.remove(face_down.id);
        hand.extend(next.deck.draw(self.rules.replacement_draw));

        let offer = Offer::new(face_up, face_down);
        next.phase = Phase::AwaitingChoice { active, offer };

        log::debug!(
            "{} proposes {} face-up, {} face-down ({} left in deck)",
            active,
            face_up,
            face_down,
            next.deck.len()
        );

        let events = vec![
            Event::CardsProposed {
                proposer: active,
                face_up,
                face_down_hidden: next.seats[active] != Controller::Human,
            },
            Event::HandChanged {
                player: active,
                hand: next.hands[active].clone(),
            },
            Event::DeckChanged {
                remaining: next.deck.len(),
            },
        ];

        Ok(Transition { state: next, events })
    }

    /// The chooser takes one offered card; the proposer gets the other.
    /// Resolves the round.
    pub fn choose(
        &self,
        state: &MatchState,
        player: PlayerId,
        slot: Slot,
    ) -> Result<Transition, IntentError> {
        let (active, offer) = match state.phase {
            Phase::AwaitingChoice { active, offer } => (active, offer),
            Phase::ProposalPending { .. } => return Err(IntentError::NotAwaitingChoice),
            Phase::GameOver(_) => return Err(IntentError::MatchOver),
        };
        let chooser = active.opponent();
        if player != chooser {
            return Err(IntentError::NotYourTurn(player));
        }

        let taken = offer.card(slot);
        let given = offer.card(slot.other());

        let mut next = state.next_version();
        let acquired = PlayerMap::new(|p| {
            let card = if p == chooser { taken } else { given };
            next.collections[p].acquire(card)
        });

        let resolution = resolve_round(
            &self.rules,
            &self.track,
            &RoundInput {
                active,
                acquired,
                positions: state.positions.clone(),
                hands: &next.hands,
                deck_remaining: next.deck.len(),
            },
        );

        next.half_rounds += 1;
        next.positions = resolution.positions;
        next.last_moves = resolution.moves.clone();
        next.phase = Phase::ProposalPending { active: chooser };

        log::debug!(
            "{} ({}) takes {}, {} gets {}; positions {} / {}",
            chooser,
            next.seats[chooser],
            taken,
            active,
            given,
            next.positions[PlayerId::new(0)],
            next.positions[PlayerId::new(1)]
        );

        let mut events = vec![Event::ChoiceResolved {
            taker: chooser,
            controller: next.seats[chooser],
            taken,
            given,
        }];
        for p in [chooser, active] {
            events.push(Event::CollectionChanged {
                player: p,
                collection: next.collections[p].clone(),
            });
        }
        events.push(Event::PositionsChanged {
            positions: next.positions.clone(),
            moves: resolution.moves,
        });

        if let Some(outcome) = resolution.outcome {
            self.finish(&mut next, &mut events, outcome);
        }

        Ok(Transition { state: next, events })
    }

    /// Every legal proposal for the active seat, both slot orders.
    #[must_use]
    pub fn legal_proposals(&self, state: &MatchState, player: PlayerId) -> Vec<Proposal> {
        if state.phase != (Phase::ProposalPending { active: player }) {
            return Vec::new();
        }

        let cards: Vec<_> = state.hands[player].iter().copied().collect();
        let mut proposals = Vec::new();
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                if a.card_type != b.card_type {
                    let proposal = Proposal::new(a.id, b.id);
                    proposals.push(proposal);
                    proposals.push(proposal.flipped());
                }
            }
        }
        proposals
    }

    /// Observation for one seat.
    #[must_use]
    pub fn view(&self, state: &MatchState, viewer: PlayerId) -> PlayerView {
        let opponent = viewer.opponent();
        let heading = Heading::for_seat(self.rules.convention, viewer);

        let (face_up, face_down) = match state.phase {
            Phase::AwaitingChoice { active, offer } => {
                let face_down = (active == viewer).then_some(offer.face_down);
                (Some(offer.face_up), face_down)
            }
            _ => (None, None),
        };

        PlayerView {
            viewer,
            to_act: state.phase.to_act(),
            hand: state.hands[viewer].clone(),
            opponent_hand_size: state.hands[opponent].len(),
            deck_remaining: state.deck.len(),
            collections: state.collections.clone(),
            positions: state.positions.clone(),
            heading,
            distance_to_opponent: self.track.chase_distance(
                state.positions[viewer],
                state.positions[opponent],
                heading,
            ),
            face_up,
            face_down,
            outcome: state.phase.outcome().copied(),
        }
    }

    fn finish(&self, state: &mut MatchState, events: &mut Vec<Event>, outcome: Outcome) {
        state.phase = Phase::GameOver(outcome);
        let text = outcome.describe();
        log::info!(
            "match over after {} half-rounds: {}",
            state.half_rounds,
            text
        );
        events.push(Event::MatchEnded {
            winner: outcome.winner,
            reason: outcome.reason,
            text,
        });
    }
}
