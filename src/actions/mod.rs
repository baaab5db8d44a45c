//! Action subsystems and their structured results.
//!
//! Each mutating action is validated in full before anything is applied, so
//! every rejection leaves the match state untouched and every success is
//! committed atomically. Successful outcomes carry a stable message key, the
//! AP spent, and an advisory `ap_exhausted` flag the caller may use to
//! auto-end the turn — the engine never forces that transition.

pub mod combat;
pub mod error;
pub mod movement;
pub mod skill;
pub mod turn;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Archetype, Coord, MatchState, Team, UnitId};

pub use error::{ActionError, JumpFault};

/// Shorthand for action results.
pub type ActionResult<T> = Result<T, ActionError>;

/// The move kind a caller requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// One cell in any direction.
    Basic,
    /// A straight 2-3 cell vault over a friendly unit.
    Jump,
}

/// What a successful move actually did.
///
/// A requested move becomes a swap whenever the destination holds a friendly
/// unit, regardless of the requested kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveApplied {
    Step,
    Jump,
    Swap,
}

/// Result of a successful move, jump, or swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub applied: MoveApplied,
    pub ap_spent: u8,
    /// The active team's pool is now exactly 0.
    pub ap_exhausted: bool,
}

impl MoveOutcome {
    /// Stable message key for UI lookup.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self.applied {
            MoveApplied::Step => "move.step",
            MoveApplied::Jump => "move.jump",
            MoveApplied::Swap => "move.swap",
        }
    }
}

/// One damage application, in resolution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEvent {
    /// The damaged unit.
    pub unit: UnitId,
    /// Where the damage landed.
    pub at: Coord,
    /// Damage actually dealt (after any aura reduction).
    pub amount: i32,
    /// Hit points after the hit; non-positive means the unit died.
    pub hp_after: i32,
    /// Whether an aura reduced the damage below its raw value.
    pub shielded: bool,
    /// Whether the hit removed the unit from the board.
    pub lethal: bool,
}

/// Result of a successful attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Where the attack actually landed; differs from the requested target
    /// when the shot was obstructed and redirected.
    pub impact: Coord,
    /// Primary hit first, then splash, then any self-damage.
    pub events: SmallVec<[DamageEvent; 4]>,
    pub ap_spent: u8,
    pub ap_exhausted: bool,
}

impl AttackOutcome {
    /// Stable message key for UI lookup.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        "attack.resolved"
    }
}

/// Result of a successful skill activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOutcome {
    pub ap_spent: u8,
    pub ap_exhausted: bool,
}

impl SkillOutcome {
    /// Stable message key for UI lookup.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        "skill.aura"
    }
}

/// Notification that a timed effect expired during end-of-turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraExpiry {
    pub archetype: Archetype,
    pub team: Team,
}

/// Result of an end-of-turn transition. Always succeeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The turn counter after the transition.
    pub turn_number: u32,
    /// The team now in play.
    pub active_team: Team,
    /// Effects that expired while ticking the incoming team.
    pub expired: SmallVec<[AuraExpiry; 2]>,
}

impl TurnOutcome {
    /// Stable message key for UI lookup.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        "turn.ended"
    }
}

/// An outcome with opaque caller metadata attached.
///
/// The core never interprets the metadata; it exists so a client (the
/// computer-player strategy, a replay recorder) can tag a result with which
/// unit/action/target produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotated<T, M> {
    pub outcome: T,
    pub meta: M,
}

/// Attach metadata to any outcome.
pub trait Annotate: Sized {
    fn annotate<M>(self, meta: M) -> Annotated<Self, M> {
        Annotated { outcome: self, meta }
    }
}

impl<T> Annotate for T {}

/// Check the active team can pay `cost` without spending it.
pub(crate) fn ensure_ap(state: &MatchState, cost: u8) -> ActionResult<()> {
    if state.active_ap() < cost {
        return Err(ActionError::InsufficientAp { required: cost });
    }
    Ok(())
}
