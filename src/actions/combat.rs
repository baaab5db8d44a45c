//! Combat: ranged and melee attacks, splash, and the shared damage primitive.
//!
//! Attacks are "fire and find out": an obstructed shot is not rejected, it
//! redirects to whatever blocks it first, and splash resolves around that
//! impact cell. The blocking occupant may even be an obstacle, in which case
//! the primary hit is a no-op but splash still lands on its neighbors.
//!
//! Validation order is fixed: attacker lookup, target presence, AP, cannon
//! cooldown, archer/mage attack limit, Chebyshev range, line of sight.
//! Nothing mutates until every check has passed.

use smallvec::SmallVec;

use crate::core::{Archetype, Coord, MatchState, Team, UnitId};
use crate::spatial::{in_protection_aura, trace_line_of_sight, LineOfSight};

use super::error::ActionError;
use super::{ensure_ap, ActionResult, AttackOutcome, DamageEvent};

/// Splash damage dealt by a cannon shell to every neighboring unit.
const CANNON_SPLASH: i32 = 3;
/// Cannon cooldown in turns after firing.
const CANNON_COOLDOWN: u8 = 3;
/// Mage splash against enemies / against friends.
const MAGE_SPLASH_ENEMY: i32 = 2;
const MAGE_SPLASH_FRIENDLY: i32 = 1;
/// Per-turn attack cap for archers and mages.
const ATTACK_LIMIT: u8 = 2;

/// Validate and apply one attack.
pub fn execute_attack(state: &mut MatchState, attacker_id: UnitId, target: Coord) -> ActionResult<AttackOutcome> {
    let origin = state.board.find_unit(attacker_id).ok_or(ActionError::UnitNotFound)?;
    let attacker = *state.board.unit_at(origin).ok_or(ActionError::UnitNotFound)?;
    let stats = attacker.stats();

    if state.board.unit_at(target).is_none() {
        return Err(ActionError::NoTarget);
    }
    ensure_ap(state, stats.attack_cost)?;
    if attacker.archetype == Archetype::Cannon && attacker.cannon_cooldown > 0 {
        return Err(ActionError::OnCooldown { remaining: attacker.cannon_cooldown });
    }
    if attacker.archetype.attack_limited() && attacker.attacks_used >= ATTACK_LIMIT {
        return Err(ActionError::AttackLimitReached);
    }
    if origin.chebyshev(target) > stats.range {
        return Err(ActionError::OutOfRange);
    }

    // Everything past this point commits.
    let impact = if attacker.archetype == Archetype::Mage {
        target
    } else {
        match trace_line_of_sight(&state.board, origin, target, &attacker) {
            LineOfSight::Clear => target,
            LineOfSight::Blocked { at } => at,
        }
    };

    let mut events: SmallVec<[DamageEvent; 4]> = SmallVec::new();
    events.extend(apply_damage(state, impact, stats.damage, attacker.team));

    match attacker.archetype {
        Archetype::Mage => {
            for cell in impact.neighbors() {
                let Some(team) = state.board.unit_at(cell).map(|u| u.team) else {
                    continue;
                };
                let splash = if team == attacker.team { MAGE_SPLASH_FRIENDLY } else { MAGE_SPLASH_ENEMY };
                events.extend(apply_damage(state, cell, splash, attacker.team));
            }
        }
        Archetype::Cannon => {
            for cell in impact.neighbors() {
                if state.board.unit_at(cell).is_some() {
                    events.extend(apply_damage(state, cell, CANNON_SPLASH, attacker.team));
                }
            }
            // Point-blank ordnance harms the gunner too.
            if origin.chebyshev(impact) <= 1 {
                events.extend(apply_damage(state, origin, CANNON_SPLASH, attacker.team));
            }
        }
        _ => {}
    }

    // The attacker may have died to its own splash.
    if let Some(unit) = state.board.unit_at_mut(origin) {
        unit.attacks_used += 1;
        if unit.archetype == Archetype::Cannon {
            unit.cannon_cooldown = CANNON_COOLDOWN;
        }
    }

    state.spend_ap(stats.attack_cost);

    Ok(AttackOutcome {
        impact,
        events,
        ap_spent: stats.attack_cost,
        ap_exhausted: state.ap_exhausted(),
    })
}

/// Apply `raw` damage at `at` on behalf of `attacker_team`.
///
/// Teamless occupants (obstacles) and empty cells absorb nothing and emit no
/// event. An enemy of the attacker under an active friendly aura takes half
/// damage, rounded half-up with a floor of 1; the event is flagged shielded
/// only when the dealt amount actually dropped below the raw amount. A unit
/// driven to 0 or below is removed in the same call, and a dead king ends
/// the match in the attacking team's favor.
pub(crate) fn apply_damage(state: &mut MatchState, at: Coord, raw: i32, attacker_team: Team) -> Option<DamageEvent> {
    let target = *state.board.unit_at(at)?;

    let amount = if target.team != attacker_team && in_protection_aura(&state.board, at, target.team) {
        // Half, rounded half-up, never below 1.
        ((raw + 1) / 2).max(1)
    } else {
        raw
    };

    let unit = state.board.unit_at_mut(at)?;
    unit.hp -= amount;
    let hp_after = unit.hp;
    let lethal = hp_after <= 0;

    let event = DamageEvent {
        unit: target.id,
        at,
        amount,
        hp_after,
        shielded: amount != raw,
        lethal,
    };

    if lethal {
        if target.archetype == Archetype::King {
            state.record_victory(attacker_team);
        }
        state.board.remove(at);
    }

    Some(event)
}
