//! The single supported skill: a general's damage-reduction aura.
//!
//! Activation only flips the automaton to active and starts the duration
//! clock; expiry and cooldown ticking are owned by the turn lifecycle.

use crate::core::{Archetype, MatchState, UnitId};

use super::error::ActionError;
use super::{ensure_ap, ActionResult, SkillOutcome};

/// AP cost to raise the aura.
pub const AURA_COST: u8 = 2;
/// Turns the aura stays up once raised.
pub const AURA_DURATION: u8 = 3;

/// Validate and apply an aura activation.
pub fn activate_aura(state: &mut MatchState, unit_id: UnitId) -> ActionResult<SkillOutcome> {
    let at = state.board.find_unit(unit_id).ok_or(ActionError::UnitNotFound)?;
    let unit = state.board.unit_at(at).ok_or(ActionError::UnitNotFound)?;

    if unit.archetype != Archetype::General {
        return Err(ActionError::NoSkill);
    }
    if unit.aura.active {
        return Err(ActionError::AlreadyActive);
    }
    if unit.aura.cooldown > 0 {
        return Err(ActionError::OnCooldown { remaining: unit.aura.cooldown });
    }
    ensure_ap(state, AURA_COST)?;

    state.spend_ap(AURA_COST);
    if let Some(unit) = state.board.unit_at_mut(at) {
        unit.aura.active = true;
        unit.aura.turns_left = AURA_DURATION;
    }

    Ok(SkillOutcome {
        ap_spent: AURA_COST,
        ap_exhausted: state.ap_exhausted(),
    })
}
