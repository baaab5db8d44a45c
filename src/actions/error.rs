//! The rejection taxonomy.
//!
//! Every expected rule violation is a typed, non-fatal error returned from
//! the action boundary. Rejections never mutate state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a jump was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum JumpFault {
    #[error("jump must be a straight horizontal or vertical line")]
    NotStraight,
    #[error("jump distance must be 2 or 3 cells")]
    BadDistance,
    #[error("landing cell is occupied")]
    LandingOccupied,
    #[error("no friendly unit to vault over")]
    NoSteppingStone,
}

/// Why an action was rejected.
///
/// All rejections are local and synchronous; the action that produced one
/// has applied no mutation at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// No unit with the given id is on the board.
    #[error("unit not found on the board")]
    UnitNotFound,

    /// The target coordinate is off-grid.
    #[error("target is outside the board")]
    OutOfBounds,

    /// The destination is not empty where emptiness is required.
    #[error("destination cell is occupied")]
    Occupied,

    /// A basic move exceeds one cell.
    #[error("basic moves are limited to adjacent cells")]
    TooFar,

    /// The jump shape or stepping stone is wrong.
    #[error("invalid jump: {0}")]
    InvalidJump(#[from] JumpFault),

    /// The active team cannot pay for the action.
    #[error("not enough action points ({required} required)")]
    InsufficientAp { required: u8 },

    /// A cannon shot or aura activation is still cooling down.
    #[error("on cooldown ({remaining} turns remaining)")]
    OnCooldown { remaining: u8 },

    /// An archer or mage already attacked twice this turn.
    #[error("attack limit reached for this turn")]
    AttackLimitReached,

    /// The attacked cell is empty or holds a teamless obstacle.
    #[error("no unit at the target cell")]
    NoTarget,

    /// The target exceeds the attacker's range.
    #[error("target is out of range")]
    OutOfRange,

    /// The aura is already running.
    #[error("aura is already active")]
    AlreadyActive,

    /// The unit's archetype has no activatable skill.
    #[error("this unit has no activatable skill")]
    NoSkill,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_payload() {
        let err = ActionError::InsufficientAp { required: 4 };
        assert_eq!(err.to_string(), "not enough action points (4 required)");

        let err = ActionError::OnCooldown { remaining: 2 };
        assert_eq!(err.to_string(), "on cooldown (2 turns remaining)");

        let err = ActionError::from(JumpFault::NoSteppingStone);
        assert_eq!(err.to_string(), "invalid jump: no friendly unit to vault over");
    }

    #[test]
    fn test_serialization() {
        let err = ActionError::InvalidJump(JumpFault::BadDistance);
        let json = serde_json::to_string(&err).unwrap();
        let back: ActionError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
