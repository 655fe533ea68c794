//! Integration tests for the intent/event boundary.

use chase_on::ai::HeuristicAi;
use chase_on::cards::CardId;
use chase_on::core::{Controller, GameRng, PlayerId, PlayerMap, RulesConfig};
use chase_on::game::{
    Engine, Event, Intent, IntentError, MatchState, Phase, Proposal, Seat, Session, Slot,
};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn human_vs_ai(seed: u64) -> Session {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    let seats = PlayerMap::new(|p| {
        if p == P0 {
            Seat::Human
        } else {
            Seat::ai(HeuristicAi::default())
        }
    });
    Session::new(engine, seats, seed)
}

fn snapshot(session: &Session) -> MatchState {
    session.state().cloned().unwrap()
}

// =============================================================================
// Rejections
// =============================================================================

/// Nothing can happen before a match starts.
#[test]
fn test_no_match_yet() {
    let mut session = human_vs_ai(1);
    assert_eq!(session.handle(Intent::Restart), Err(IntentError::NoMatch));
    assert_eq!(
        session.handle(Intent::ChooseCard(Slot::FaceUp)),
        Err(IntentError::NoMatch)
    );
    assert!(session.state().is_none());
    assert_eq!(session.step_ai(), None);
}

/// Intents decoded from the presentation layer cannot name a missing seat.
#[test]
fn test_decoded_start_with_unknown_seat_is_rejected() {
    let bad = serde_json::from_str::<Intent>(r#"{"StartMatch":{"first":2}}"#);
    assert!(bad.is_err());

    let intent: Intent = serde_json::from_str(r#"{"StartMatch":{"first":1}}"#).unwrap();
    assert_eq!(intent, Intent::StartMatch { first: Some(P1) });

    let mut session = human_vs_ai(2);
    let events = session.handle(intent).unwrap();
    assert!(matches!(events[0], Event::MatchStarted { first: P1, .. }));
    assert_eq!(snapshot(&session).first(), P1);
}

/// Invalid intents are rejected and leave the snapshot untouched.
#[test]
fn test_invalid_intents_leave_state_unchanged() {
    let mut session = human_vs_ai(3);
    session.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
    let before = snapshot(&session);
    if before.is_over() {
        return;
    }
    let hand: Vec<_> = before.hand(P0).iter().copied().collect();

    let rejected = [
        (Intent::ChooseCard(Slot::FaceDown), IntentError::NotAwaitingChoice),
        (
            Intent::ProposePair(Proposal::new(CardId::new(999), hand[0].id)),
            IntentError::UnknownCard(CardId::new(999)),
        ),
        (
            Intent::ProposePair(Proposal::new(hand[0].id, hand[0].id)),
            IntentError::DuplicateCard(hand[0].id),
        ),
    ];
    for (intent, expected) in rejected {
        assert_eq!(session.handle(intent), Err(expected));
        assert_eq!(snapshot(&session), before);
    }
}

/// A pair of the same type is refused.
#[test]
fn test_same_type_pair_rejected() {
    // Find a deal that gives seat 0 two cards of one type.
    for seed in 0..100 {
        let mut session = human_vs_ai(seed);
        session.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
        let before = snapshot(&session);
        if before.is_over() {
            continue;
        }

        let hand: Vec<_> = before.hand(P0).iter().copied().collect();
        let pair = hand.iter().enumerate().find_map(|(i, a)| {
            hand[i + 1..]
                .iter()
                .find(|b| b.card_type == a.card_type)
                .map(|b| (*a, *b))
        });
        if let Some((a, b)) = pair {
            assert_eq!(
                session.handle(Intent::ProposePair(Proposal::new(a.id, b.id))),
                Err(IntentError::SameType(a.card_type))
            );
            assert_eq!(snapshot(&session), before);
            return;
        }
    }
    panic!("no deal with a repeated type in 100 seeds");
}

/// Human intents are refused on AI seats.
#[test]
fn test_ai_seat_refuses_intents() {
    let mut session = human_vs_ai(5);
    session.handle(Intent::StartMatch { first: Some(P1) }).unwrap();
    if snapshot(&session).is_over() {
        return;
    }

    let hand: Vec<_> = snapshot(&session).hand(P1).iter().copied().collect();
    let result = session.handle(Intent::ProposePair(Proposal::new(hand[0].id, hand[1].id)));
    assert_eq!(result, Err(IntentError::NotHumanSeat(P1)));
    assert_eq!(session.awaiting_human(), None);
}

// =============================================================================
// Flow
// =============================================================================

/// Start emits the opening events in order.
#[test]
fn test_start_events() {
    let mut session = human_vs_ai(9);
    let events = session.handle(Intent::StartMatch { first: Some(P0) }).unwrap();

    assert_eq!(
        events[0],
        Event::MatchStarted {
            first: P0,
            seats: PlayerMap::new(|p| if p == P0 { Controller::Human } else { Controller::Ai }),
        }
    );
    assert_eq!(events[1], Event::DeckChanged { remaining: 30 });
    assert!(events.iter().any(|e| matches!(e, Event::PositionsChanged { moves: None, .. })));
}

/// A full human half-round followed by the AI's reply.
#[test]
fn test_human_round_then_ai() {
    let mut session = human_vs_ai(12);
    session.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
    if snapshot(&session).is_over() {
        return;
    }
    assert_eq!(session.awaiting_human(), Some(P0));

    let proposal = session.engine().legal_proposals(&snapshot(&session), P0)[0];
    let events = session.handle(Intent::ProposePair(proposal)).unwrap();
    assert!(matches!(
        events[0],
        Event::CardsProposed { proposer: P0, face_down_hidden: false, .. }
    ));

    // The AI chooses.
    let events = session.step_ai().unwrap();
    assert!(matches!(
        events[0],
        Event::ChoiceResolved { taker: P1, controller: Controller::Ai, .. }
    ));
    let state = snapshot(&session);
    assert_eq!(state.half_rounds(), 1);
    if state.is_over() {
        return;
    }

    // The AI proposes, then waits on the human.
    let events = session.run_ai();
    assert!(matches!(
        events[0],
        Event::CardsProposed { proposer: P1, face_down_hidden: true, .. }
    ));
    assert_eq!(session.awaiting_human(), Some(P0));
    assert_eq!(session.step_ai(), None);

    let events = session.handle(Intent::ChooseCard(Slot::FaceUp)).unwrap();
    assert!(matches!(
        events[0],
        Event::ChoiceResolved { taker: P0, controller: Controller::Human, .. }
    ));
}

/// Restart begins a fresh match from version 0.
#[test]
fn test_restart() {
    let mut session = human_vs_ai(21);
    session.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
    if !snapshot(&session).is_over() {
        let proposal = session.engine().legal_proposals(&snapshot(&session), P0)[0];
        session.handle(Intent::ProposePair(proposal)).unwrap();
    }

    let events = session.handle(Intent::Restart).unwrap();
    assert!(matches!(events[0], Event::MatchStarted { .. }));
    let state = snapshot(&session);
    assert_eq!(state.version(), 0);
    assert_eq!(state.half_rounds(), 0);
    assert_eq!(state.deck().len(), 30);
}

/// AI decisions draw from per-seat streams, so the deal after a restart
/// depends only on the seed.
#[test]
fn test_restart_deal_ignores_ai_decisions() {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    let ai_session = || {
        let seats = PlayerMap::new(|_| Seat::ai(HeuristicAi::default()));
        Session::new(engine.clone(), seats, 31)
    };

    let mut played = ai_session();
    played.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
    played.run_ai();
    played.handle(Intent::Restart).unwrap();

    let mut idle = ai_session();
    idle.handle(Intent::StartMatch { first: Some(P0) }).unwrap();
    idle.handle(Intent::Restart).unwrap();

    assert_eq!(snapshot(&played), snapshot(&idle));
}

/// A finished match refuses further moves.
#[test]
fn test_match_over_rejects() {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    let seats = PlayerMap::new(|_| Seat::ai(HeuristicAi::default()));
    let mut session = Session::new(engine, seats, 4);
    session.handle(Intent::StartMatch { first: None }).unwrap();
    let events = session.run_ai();

    let state = snapshot(&session);
    assert!(state.is_over());
    assert!(matches!(events.last(), Some(Event::MatchEnded { .. })));
    assert_eq!(
        session.handle(Intent::ChooseCard(Slot::FaceUp)),
        Err(IntentError::MatchOver)
    );
    assert_eq!(snapshot(&session), state);
}

// =============================================================================
// Snapshots
// =============================================================================

/// Transitions never touch the snapshot they were given.
#[test]
fn test_transitions_are_pure() {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    let mut rng = GameRng::new(6);
    let start = engine
        .start_match(P1, PlayerMap::with_value(Controller::Ai), &mut rng)
        .state;
    if start.is_over() {
        return;
    }
    let copy = start.clone();

    let proposal = engine.legal_proposals(&start, P1)[0];
    let proposed = engine.propose(&start, P1, proposal).unwrap().state;
    assert_eq!(start, copy);
    assert!(matches!(proposed.phase(), Phase::AwaitingChoice { active: P1, .. }));

    let _ = engine.choose(&proposed, P0, Slot::FaceUp).unwrap();
    assert!(matches!(proposed.phase(), Phase::AwaitingChoice { .. }));
}

/// Snapshots survive a JSON round trip.
#[test]
fn test_snapshot_json_round_trip() {
    let mut session = human_vs_ai(17);
    session.handle(Intent::StartMatch { first: Some(P1) }).unwrap();
    session.run_ai();
    let state = snapshot(&session);

    let json = serde_json::to_string(&state).unwrap();
    let back: MatchState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
