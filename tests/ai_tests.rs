//! Integration tests for AI scoring and decisions.

use chase_on::ai::{
    evaluate_card_for_ai, evaluate_card_for_player, AiConfig, HeuristicAi, Perspective, Policy,
    RandomPolicy,
};
use chase_on::cards::{Card, CardId, CardType, Collection, Hand};
use chase_on::core::{Controller, GameRng, PlayerId, PlayerMap, RulesConfig};
use chase_on::game::{Engine, Phase};

fn collection(types: &[CardType]) -> Collection {
    Collection::from_cards(
        types
            .iter()
            .enumerate()
            .map(|(i, &t)| Card::new(CardId::new(i as u32), t)),
    )
}

// =============================================================================
// Scoring
// =============================================================================

/// Holding two Codebreakers makes a third worth exactly 200, whatever
/// else is on the board; two Daredevils make a third exactly -200.
#[test]
fn test_lethal_scores_ignore_context() {
    let mine = collection(&[
        CardType::Codebreaker,
        CardType::Codebreaker,
        CardType::Daredevil,
        CardType::Daredevil,
        CardType::Sentinel,
    ]);
    let theirs_options = [
        Collection::new(),
        collection(&[CardType::Codebreaker, CardType::Codebreaker]),
        collection(&[CardType::Daredevil, CardType::Daredevil, CardType::Mole]),
    ];

    for theirs in &theirs_options {
        for distance in 1..14 {
            let p = Perspective::new(&mine, theirs, distance);
            assert_eq!(evaluate_card_for_ai(CardType::Codebreaker, &p), 200);
            assert_eq!(evaluate_card_for_ai(CardType::Daredevil, &p), -200);
        }
    }
}

/// A move that reaches the opponent earns the catch bonus.
#[test]
fn test_catch_bonus_threshold() {
    let empty = Collection::new();
    // Sidekick moves 4.
    let reach = Perspective::new(&empty, &empty, 4);
    let short = Perspective::new(&empty, &empty, 5);
    assert_eq!(evaluate_card_for_ai(CardType::Sidekick, &reach), 82);
    assert_eq!(evaluate_card_for_ai(CardType::Sidekick, &short), 32);
}

/// Opponent-side Daredevil score uses the opponent's copy count.
#[test]
fn test_player_daredevil_score() {
    let empty = Collection::new();
    let one = collection(&[CardType::Daredevil]);
    // First copy moves 2, second moves 3.
    assert_eq!(evaluate_card_for_player(CardType::Daredevil, &Perspective::new(&empty, &empty, 7)), -9);
    assert_eq!(evaluate_card_for_player(CardType::Daredevil, &Perspective::new(&empty, &one, 7)), -6);
}

// =============================================================================
// Planning
// =============================================================================

/// No proposal when the hand holds a single type.
#[test]
fn test_plan_turn_needs_two_types() {
    let ai = HeuristicAi::default();
    let empty = Collection::new();
    let p = Perspective::new(&empty, &empty, 7);
    let mut rng = GameRng::new(1);

    let single = Hand::from_cards([
        Card::new(CardId::new(1), CardType::Saboteur),
        Card::new(CardId::new(2), CardType::Saboteur),
    ]);
    assert_eq!(ai.plan_turn(&single, &p, &mut rng), None);
    assert_eq!(ai.plan_turn(&Hand::new(), &p, &mut rng), None);
}

/// Proposals always pair two different types from the hand.
#[test]
fn test_plan_turn_is_legal() {
    let ai = HeuristicAi::default();
    let mine = collection(&[CardType::Enforcer]);
    let theirs = collection(&[CardType::Codebreaker, CardType::Codebreaker]);
    let p = Perspective::new(&mine, &theirs, 6);
    let hand = Hand::from_cards([
        Card::new(CardId::new(1), CardType::Codebreaker),
        Card::new(CardId::new(2), CardType::Codebreaker),
        Card::new(CardId::new(3), CardType::Enforcer),
        Card::new(CardId::new(4), CardType::Mole),
    ]);

    let mut rng = GameRng::new(8);
    for _ in 0..100 {
        let proposal = ai.plan_turn(&hand, &p, &mut rng).unwrap();
        let up = hand.get(proposal.face_up).unwrap();
        let down = hand.get(proposal.face_down).unwrap();
        assert_ne!(up.card_type, down.card_type);
        // Only the first Codebreaker ever represents its type.
        assert_ne!(proposal.face_up, CardId::new(2));
        assert_ne!(proposal.face_down, CardId::new(2));
    }
}

/// Roughly a quarter of proposals are bluffs.
#[test]
fn test_bluff_rate() {
    let ai = HeuristicAi::new(AiConfig::default());
    let empty = Collection::new();
    let p = Perspective::new(&empty, &empty, 7);
    let hand = Hand::from_cards([
        Card::new(CardId::new(1), CardType::Sidekick),
        Card::new(CardId::new(2), CardType::Mole),
    ]);

    let mut rng = GameRng::new(31);
    let bluffs = (0..2000)
        .filter(|_| ai.plan_turn(&hand, &p, &mut rng).unwrap().face_up == CardId::new(1))
        .count();
    assert!((400..=600).contains(&bluffs), "{} bluffs", bluffs);
}

// =============================================================================
// Policies against the engine
// =============================================================================

/// Both policies produce moves the engine accepts.
#[test]
fn test_policies_make_legal_moves() {
    let engine = Engine::new(RulesConfig::default()).unwrap();
    let policies: [Box<dyn Policy>; 2] = [Box::new(HeuristicAi::default()), Box::new(RandomPolicy)];

    for policy in &policies {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let mut state = engine
                .start_match(PlayerId::new(0), PlayerMap::with_value(Controller::Ai), &mut rng)
                .state;

            while !state.is_over() {
                let player = state.phase().to_act().unwrap();
                let view = engine.view(&state, player);
                let next = match *state.phase() {
                    Phase::ProposalPending { .. } => {
                        let proposal = policy.plan_turn(&view, &mut rng).unwrap();
                        engine.propose(&state, player, proposal)
                    }
                    Phase::AwaitingChoice { offer, .. } => {
                        let slot = policy.choose_card(&view, &offer, &mut rng);
                        engine.choose(&state, player, slot)
                    }
                    Phase::GameOver(_) => unreachable!(),
                };
                state = next.unwrap_or_else(|e| panic!("{} rejected: {}", policy.name(), e)).state;
            }
        }
    }
}
