//! Units, archetypes, and the static stat table.
//!
//! The six archetypes differ only in data (the stat table) plus a handful of
//! special-cased behaviors dispatched where they matter:
//!
//! - cannon: attack cooldown, indiscriminate splash, point-blank self-damage
//! - mage: splash, no line-of-sight requirement
//! - archer: may fire over an adjacent ally
//! - archer/mage: at most 2 attacks per turn
//! - general: the protection-aura skill
//!
//! A unit does NOT store its own position. Position is the board coordinate
//! the unit is stored at; [`UnitView`](crate::engine::UnitView) attaches a
//! derived position when a unit is handed to a caller.

use serde::{Deserialize, Serialize};

use super::team::Team;

/// Unique identifier for a unit, stable for the unit's lifetime.
///
/// Allocated sequentially by the engine at match setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A unit's class, determining its static stat block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    King,
    General,
    Soldier,
    Archer,
    Mage,
    Cannon,
}

/// Static per-archetype stats. Shared, never per-instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeStats {
    /// Starting and maximum hit points.
    pub max_hp: i32,
    /// Base damage dealt to the primary attack target.
    pub damage: i32,
    /// Attack range, compared against Chebyshev distance.
    pub range: i32,
    /// Action points consumed by one attack.
    pub attack_cost: u8,
    /// Action points consumed by one basic move.
    pub move_cost: u8,
}

impl Archetype {
    /// All archetypes, in stat-table order.
    pub const ALL: [Archetype; 6] = [
        Archetype::King,
        Archetype::General,
        Archetype::Soldier,
        Archetype::Archer,
        Archetype::Mage,
        Archetype::Cannon,
    ];

    /// The fixed stat table.
    #[must_use]
    pub const fn stats(self) -> ArchetypeStats {
        match self {
            Archetype::King => ArchetypeStats { max_hp: 20, damage: 10, range: 1, attack_cost: 3, move_cost: 1 },
            Archetype::General => ArchetypeStats { max_hp: 15, damage: 5, range: 1, attack_cost: 2, move_cost: 1 },
            Archetype::Soldier => ArchetypeStats { max_hp: 8, damage: 3, range: 1, attack_cost: 2, move_cost: 1 },
            Archetype::Archer => ArchetypeStats { max_hp: 5, damage: 3, range: 5, attack_cost: 2, move_cost: 1 },
            Archetype::Mage => ArchetypeStats { max_hp: 6, damage: 4, range: 4, attack_cost: 2, move_cost: 1 },
            Archetype::Cannon => ArchetypeStats { max_hp: 4, damage: 8, range: 7, attack_cost: 4, move_cost: 2 },
        }
    }

    /// Whether this archetype is capped at 2 attacks per turn.
    #[must_use]
    pub const fn attack_limited(self) -> bool {
        matches!(self, Archetype::Archer | Archetype::Mage)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Archetype::King => "king",
            Archetype::General => "general",
            Archetype::Soldier => "soldier",
            Archetype::Archer => "archer",
            Archetype::Mage => "mage",
            Archetype::Cannon => "cannon",
        };
        write!(f, "{name}")
    }
}

/// The general's aura automaton: inactive-ready, active, or inactive-cooling.
///
/// Transitions are driven once per owning-team turn-start by the turn
/// lifecycle, except activation which is an explicit action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraState {
    /// Whether the aura currently protects nearby allies.
    pub active: bool,
    /// Remaining turns while active.
    pub turns_left: u8,
    /// Remaining cooldown turns while inactive.
    pub cooldown: u8,
}

impl AuraState {
    /// Whether the aura can be activated right now (ignoring AP).
    #[must_use]
    pub fn ready(&self) -> bool {
        !self.active && self.cooldown == 0
    }
}

/// A unit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub team: Team,
    pub archetype: Archetype,
    /// Current hit points. Positive while the unit is on the board.
    pub hp: i32,
    pub max_hp: i32,
    /// Attacks made this turn cycle. Reset at every end-of-turn.
    pub attacks_used: u8,
    /// Turns until a cannon may fire again. Unused by other archetypes.
    pub cannon_cooldown: u8,
    /// Aura skill state. Only ever non-default for generals.
    pub aura: AuraState,
}

impl Unit {
    /// Create a fresh unit at full health.
    #[must_use]
    pub fn new(id: UnitId, team: Team, archetype: Archetype) -> Self {
        let stats = archetype.stats();
        Self {
            id,
            team,
            archetype,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            attacks_used: 0,
            cannon_cooldown: 0,
            aura: AuraState::default(),
        }
    }

    /// This unit's stat block.
    #[must_use]
    pub const fn stats(&self) -> ArchetypeStats {
        self.archetype.stats()
    }
}

/// What a board cell holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Unit(Unit),
    /// Immutable, teamless. Blocks movement, occupancy, and line of sight.
    Obstacle,
}

impl Occupant {
    /// The contained unit, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Occupant::Unit(u) => Some(u),
            Occupant::Obstacle => None,
        }
    }

    /// Mutable access to the contained unit, if any.
    pub fn unit_mut(&mut self) -> Option<&mut Unit> {
        match self {
            Occupant::Unit(u) => Some(u),
            Occupant::Obstacle => None,
        }
    }

    /// The occupant's team. Obstacles are teamless.
    #[must_use]
    pub fn team(&self) -> Option<Team> {
        self.unit().map(|u| u.team)
    }
}
