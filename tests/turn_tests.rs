//! Turn lifecycle integration tests.
//!
//! Multi-turn sequences: AP refills, per-turn counters, cooldown progression,
//! and the full aura duration/cooldown cycle.

use grid_tactics::actions::combat::execute_attack;
use grid_tactics::actions::skill::activate_aura;
use grid_tactics::actions::turn::end_turn;
use grid_tactics::{
    ActionError, Archetype, AuraExpiry, Coord, MatchState, Occupant, Team, Unit, UnitId,
    AP_PER_TURN,
};

fn place(state: &mut MatchState, id: u32, team: Team, archetype: Archetype, x: i32, y: i32) {
    state
        .board
        .place(Coord::new(x, y), Occupant::Unit(Unit::new(UnitId(id), team, archetype)));
}

// =============================================================================
// Aura Lifecycle
// =============================================================================

/// The full cycle: activate, 3 owning-team turn-starts of duration, expiry
/// with a 2-turn cooldown, then ready again.
#[test]
fn test_aura_full_lifecycle() {
    let mut state = MatchState::new();
    place(&mut state, 1, Team::Red, Archetype::General, 6, 1);

    activate_aura(&mut state, UnitId(1)).unwrap();
    assert_eq!(state.ap[Team::Red], 4);

    let general = |state: &MatchState| *state.board.unit_at(Coord::new(6, 1)).unwrap();

    // Two full turn cycles: the aura ticks only when red comes back in.
    end_turn(&mut state); // blue in
    let out = end_turn(&mut state); // red in, 3 -> 2
    assert!(out.expired.is_empty());
    end_turn(&mut state);
    end_turn(&mut state); // red in, 2 -> 1
    assert!(general(&state).aura.active);

    // Third red turn-start: the aura drops and goes on cooldown.
    end_turn(&mut state);
    let out = end_turn(&mut state);
    assert_eq!(
        out.expired.as_slice(),
        [AuraExpiry { archetype: Archetype::General, team: Team::Red }]
    );
    assert!(!general(&state).aura.active);
    assert_eq!(general(&state).aura.cooldown, 2);

    assert_eq!(
        activate_aura(&mut state, UnitId(1)),
        Err(ActionError::OnCooldown { remaining: 2 })
    );

    // Two more red turn-starts clear the cooldown.
    end_turn(&mut state);
    end_turn(&mut state);
    end_turn(&mut state);
    end_turn(&mut state);
    assert!(general(&state).aura.ready());
    activate_aura(&mut state, UnitId(1)).unwrap();
}

// =============================================================================
// Counters and Resources
// =============================================================================

/// Attack counters reset across the turn cycle, so a capped archer may fire
/// again next turn.
#[test]
fn test_attack_limit_resets_each_turn() {
    let mut state = MatchState::new();
    place(&mut state, 1, Team::Red, Archetype::Archer, 0, 0);
    place(&mut state, 2, Team::Blue, Archetype::King, 0, 3);

    execute_attack(&mut state, UnitId(1), Coord::new(0, 3)).unwrap();
    execute_attack(&mut state, UnitId(1), Coord::new(0, 3)).unwrap();
    assert_eq!(
        execute_attack(&mut state, UnitId(1), Coord::new(0, 3)),
        Err(ActionError::AttackLimitReached)
    );

    end_turn(&mut state);
    end_turn(&mut state); // red again, counters fresh

    let out = execute_attack(&mut state, UnitId(1), Coord::new(0, 3)).unwrap();
    assert_eq!(out.events[0].amount, 3);
}

/// Both pools refill to the full allotment on every transition.
#[test]
fn test_ap_refills_every_turn() {
    let mut state = MatchState::new();
    place(&mut state, 1, Team::Red, Archetype::Archer, 0, 0);
    place(&mut state, 2, Team::Blue, Archetype::King, 0, 3);

    execute_attack(&mut state, UnitId(1), Coord::new(0, 3)).unwrap();
    assert_eq!(state.ap[Team::Red], 4);

    let out = end_turn(&mut state);
    assert_eq!(out.active_team, Team::Blue);
    assert_eq!(state.ap[Team::Red], AP_PER_TURN);
    assert_eq!(state.ap[Team::Blue], AP_PER_TURN);
}

/// A cannon that fires needs three of its own turn-starts before it can
/// fire again.
#[test]
fn test_cannon_ready_after_three_own_turns() {
    let mut state = MatchState::new();
    place(&mut state, 1, Team::Red, Archetype::Cannon, 0, 0);
    place(&mut state, 2, Team::Blue, Archetype::King, 0, 5);

    execute_attack(&mut state, UnitId(1), Coord::new(0, 5)).unwrap();

    for expected in [2, 1, 0] {
        end_turn(&mut state); // blue in
        end_turn(&mut state); // red in, cooldown ticks
        assert_eq!(
            state.board.unit_at(Coord::new(0, 0)).unwrap().cannon_cooldown,
            expected
        );
    }

    let out = execute_attack(&mut state, UnitId(1), Coord::new(0, 5)).unwrap();
    assert_eq!(out.events[0].amount, 8);
}

// =============================================================================
// Victory
// =============================================================================

/// The first king kill decides the match; a later king kill cannot flip the
/// winner.
#[test]
fn test_winner_never_flips() {
    let mut state = MatchState::new();
    place(&mut state, 1, Team::Red, Archetype::Soldier, 5, 5);
    place(&mut state, 2, Team::Blue, Archetype::King, 5, 6);
    place(&mut state, 3, Team::Blue, Archetype::Soldier, 8, 8);
    place(&mut state, 4, Team::Red, Archetype::King, 8, 9);
    state.board.unit_at_mut(Coord::new(5, 6)).unwrap().hp = 3;
    state.board.unit_at_mut(Coord::new(8, 9)).unwrap().hp = 3;

    execute_attack(&mut state, UnitId(1), Coord::new(5, 6)).unwrap();
    assert!(state.game_over);
    assert_eq!(state.winner, Some(Team::Red));

    // The blue soldier strikes back and kills the red king anyway.
    execute_attack(&mut state, UnitId(3), Coord::new(8, 9)).unwrap();
    assert!(state.board.find_unit(UnitId(4)).is_none());
    assert_eq!(state.winner, Some(Team::Red));
}
