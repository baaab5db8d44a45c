//! The end-of-turn transition.
//!
//! Always succeeds, in a fixed order: flip the active team, refill both AP
//! pools, reset every unit's attack counter, then tick cooldowns and aura
//! durations for the team coming INTO play ("cooldowns drop at the start of
//! your own turn"), and finally advance the turn counter.

use smallvec::SmallVec;

use crate::core::{MatchState, AP_PER_TURN};

use super::{AuraExpiry, TurnOutcome};

/// Cooldown applied to the aura after its duration runs out.
pub const AURA_COOLDOWN: u8 = 2;

/// Apply the end-of-turn transition and report any expired effects.
pub fn end_turn(state: &mut MatchState) -> TurnOutcome {
    let mut expired: SmallVec<[AuraExpiry; 2]> = SmallVec::new();

    state.active_team = state.active_team.opponent();
    state.ap = crate::core::TeamMap::with_value(AP_PER_TURN);

    let incoming = state.active_team;
    for (_, unit) in state.board.units_mut() {
        unit.attacks_used = 0;

        if unit.team != incoming {
            continue;
        }
        unit.cannon_cooldown = unit.cannon_cooldown.saturating_sub(1);

        if unit.aura.active {
            unit.aura.turns_left = unit.aura.turns_left.saturating_sub(1);
            if unit.aura.turns_left == 0 {
                unit.aura.active = false;
                unit.aura.cooldown = AURA_COOLDOWN;
                expired.push(AuraExpiry {
                    archetype: unit.archetype,
                    team: unit.team,
                });
            }
        } else if unit.aura.cooldown > 0 {
            unit.aura.cooldown -= 1;
        }
    }

    state.turn_number += 1;

    TurnOutcome {
        turn_number: state.turn_number,
        active_team: state.active_team,
        expired,
    }
}
