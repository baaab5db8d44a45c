//! Movement: basic steps, jumps, and same-team swaps.
//!
//! One entry point handles all three, with swap pre-empting everything else:
//! a destination holding a friendly unit always means "exchange places",
//! even when the caller asked for a jump.

use crate::core::{Board, Coord, MatchState, Team, UnitId};

use super::error::{ActionError, JumpFault};
use super::{ensure_ap, ActionResult, MoveApplied, MoveKind, MoveOutcome};

/// AP cost of a same-team position swap.
pub const SWAP_COST: u8 = 2;
/// AP cost of a jump, fixed regardless of archetype.
pub const JUMP_COST: u8 = 1;

/// Validate and apply one move action.
///
/// AP is drawn from the active team's pool. Rejections leave the state
/// untouched.
pub fn execute_move(
    state: &mut MatchState,
    unit_id: UnitId,
    dest: Coord,
    kind: MoveKind,
) -> ActionResult<MoveOutcome> {
    let origin = state.board.find_unit(unit_id).ok_or(ActionError::UnitNotFound)?;
    if !Board::in_bounds(dest) {
        return Err(ActionError::OutOfBounds);
    }

    // find_unit only returns unit cells.
    let mover_team = state.board.unit_at(origin).map(|u| u.team).ok_or(ActionError::UnitNotFound)?;
    let move_cost = state.board.unit_at(origin).map(|u| u.stats().move_cost).unwrap_or(1);

    // Swap pre-empts jump and basic handling.
    if state.board.unit_at(dest).is_some_and(|u| u.team == mover_team) {
        ensure_ap(state, SWAP_COST)?;
        state.board.swap(origin, dest);
        state.spend_ap(SWAP_COST);
        return Ok(outcome(state, MoveApplied::Swap, SWAP_COST));
    }

    if kind == MoveKind::Jump {
        validate_jump(&state.board, mover_team, origin, dest)?;
        ensure_ap(state, JUMP_COST)?;
        state.board.relocate(origin, dest);
        state.spend_ap(JUMP_COST);
        return Ok(outcome(state, MoveApplied::Jump, JUMP_COST));
    }

    if !state.board.is_empty_cell(dest) {
        return Err(ActionError::Occupied);
    }
    if origin.chebyshev(dest) > 1 {
        return Err(ActionError::TooFar);
    }
    ensure_ap(state, move_cost)?;
    state.board.relocate(origin, dest);
    state.spend_ap(move_cost);
    Ok(outcome(state, MoveApplied::Step, move_cost))
}

/// Check jump legality: a straight 2-3 cell line over a friendly unit onto
/// an empty cell.
///
/// The stepping stone is the cell one signum step from the origin toward
/// the destination.
pub fn validate_jump(board: &Board, team: Team, origin: Coord, dest: Coord) -> Result<(), JumpFault> {
    let dx = dest.x - origin.x;
    let dy = dest.y - origin.y;

    if dx != 0 && dy != 0 {
        return Err(JumpFault::NotStraight);
    }
    let dist = origin.taxicab(dest);
    if !(2..=3).contains(&dist) {
        return Err(JumpFault::BadDistance);
    }
    if !board.is_empty_cell(dest) {
        return Err(JumpFault::LandingOccupied);
    }

    let mid = origin.step_toward(dest);
    if !board.unit_at(mid).is_some_and(|u| u.team == team) {
        return Err(JumpFault::NoSteppingStone);
    }
    Ok(())
}

fn outcome(state: &MatchState, applied: MoveApplied, ap_spent: u8) -> MoveOutcome {
    MoveOutcome {
        applied,
        ap_spent,
        ap_exhausted: state.ap_exhausted(),
    }
}
