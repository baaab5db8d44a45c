//! The engine facade: one instance owns one match.
//!
//! `GameEngine` is the single entry point for both external collaborators
//! (a human-input handler and a computer-player strategy): queries never
//! mutate, and each mutating action either commits atomically or returns a
//! typed rejection. Access is single-writer and fully synchronous; a host
//! serving multiple callers serializes them outside the engine.
//!
//! The engine does NOT refuse actions after game over and does not check
//! that an acted unit belongs to the active team; both are deliberate
//! caller responsibilities inherited from the reference rules.

use serde::{Deserialize, Serialize};

use crate::actions::{
    combat, movement, skill, turn, ActionResult, AttackOutcome, MoveKind, MoveOutcome, SkillOutcome,
    TurnOutcome,
};
use crate::core::{Archetype, Board, Coord, MatchState, Occupant, Team, Unit, UnitId};
use crate::setup::{self, MatchSetup};
use crate::spatial::{self, LineOfSight};

/// A unit annotated with its derived board position.
///
/// The position is a view computed at query time, never a source of truth;
/// the board placement alone decides where a unit is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitView {
    pub unit: Unit,
    pub pos: Coord,
}

/// One legal action for a specific unit, as enumerated by
/// [`GameEngine::valid_actions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlannedAction {
    /// Step or jump to `to`.
    Move { kind: MoveKind, to: Coord },
    /// Attack the unit at `at`.
    Attack { at: Coord },
    /// Raise the protection aura.
    Skill,
}

/// The rules engine for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    state: MatchState,
    next_unit_id: u32,
}

impl GameEngine {
    /// Initialize a match: place formations (default or custom) and the
    /// obstacle blocks, red to move with full AP.
    #[must_use]
    pub fn new(setup: MatchSetup) -> Self {
        let mut engine = Self { state: MatchState::new(), next_unit_id: 0 };

        let red = setup.red.unwrap_or_else(setup::default_red);
        let blue = setup.blue.unwrap_or_else(setup::default_blue);
        for placement in red {
            engine.spawn(Team::Red, placement.archetype, placement.at);
        }
        for placement in blue {
            engine.spawn(Team::Blue, placement.archetype, placement.at);
        }
        for at in setup::obstacles() {
            engine.state.board.place(at, Occupant::Obstacle);
        }

        engine
    }

    fn spawn(&mut self, team: Team, archetype: Archetype, at: Coord) {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        self.state.board.place(at, Occupant::Unit(Unit::new(id, team, archetype)));
    }

    // === Queries ===

    /// Read-only access to the full match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The occupant at a cell, if any.
    #[must_use]
    pub fn occupant_at(&self, at: Coord) -> Option<&Occupant> {
        self.state.board.occupant_at(at)
    }

    /// Find a unit's position by id.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<Coord> {
        self.state.board.find_unit(id)
    }

    /// The unit at a cell, annotated with its position.
    #[must_use]
    pub fn unit_view_at(&self, at: Coord) -> Option<UnitView> {
        self.state.board.unit_at(at).map(|u| UnitView { unit: *u, pos: at })
    }

    /// All of one team's units, annotated with positions.
    #[must_use]
    pub fn units_by_team(&self, team: Team) -> Vec<UnitView> {
        self.state
            .board
            .team_units(team)
            .map(|(pos, unit)| UnitView { unit: *unit, pos })
            .collect()
    }

    /// Trace line of sight from a unit to a target cell.
    #[must_use]
    pub fn line_of_sight(&self, attacker: UnitId, target: Coord) -> Option<LineOfSight> {
        let origin = self.state.board.find_unit(attacker)?;
        let unit = self.state.board.unit_at(origin)?;
        Some(spatial::trace_line_of_sight(&self.state.board, origin, target, unit))
    }

    /// Whether a jump from a unit's current cell to `dest` would be legal.
    #[must_use]
    pub fn jump_is_valid(&self, unit: UnitId, dest: Coord) -> bool {
        let Some(origin) = self.state.board.find_unit(unit) else {
            return false;
        };
        let Some(team) = self.state.board.unit_at(origin).map(|u| u.team) else {
            return false;
        };
        movement::validate_jump(&self.state.board, team, origin, dest).is_ok()
    }

    /// Whether a cell is covered by a friendly active aura.
    #[must_use]
    pub fn in_protection_aura(&self, at: Coord, team: Team) -> bool {
        spatial::in_protection_aura(&self.state.board, at, team)
    }

    /// Enumerate the legal actions for one unit, gated on the active team's
    /// AP pool.
    ///
    /// The enumeration is deliberately conservative where the reference
    /// enumerator was: basic steps are offered orthogonally only, and attack
    /// candidates are pre-filtered by taxicab distance (a subset of the
    /// Chebyshev range the engine accepts). Every action returned here is
    /// accepted by the corresponding execute method.
    #[must_use]
    pub fn valid_actions(&self, unit_id: UnitId) -> Vec<PlannedAction> {
        let mut actions = Vec::new();
        let Some(origin) = self.state.board.find_unit(unit_id) else {
            return actions;
        };
        let Some(unit) = self.state.board.unit_at(origin).copied() else {
            return actions;
        };
        let stats = unit.stats();
        let ap = self.state.active_ap();

        // Orthogonal basic steps.
        if ap >= stats.move_cost {
            for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let to = Coord::new(origin.x + dx, origin.y + dy);
                if Board::in_bounds(to) && self.state.board.is_empty_cell(to) {
                    actions.push(PlannedAction::Move { kind: MoveKind::Basic, to });
                }
            }
        }

        // Straight jumps of 2-3 cells, both axes.
        if ap >= movement::JUMP_COST {
            for d in [2, 3, -2, -3] {
                for to in [Coord::new(origin.x + d, origin.y), Coord::new(origin.x, origin.y + d)] {
                    if Board::in_bounds(to)
                        && movement::validate_jump(&self.state.board, unit.team, origin, to).is_ok()
                    {
                        actions.push(PlannedAction::Move { kind: MoveKind::Jump, to });
                    }
                }
            }
        }

        // Attacks on enemy units.
        let attack_gated = (unit.archetype == Archetype::Cannon && unit.cannon_cooldown > 0)
            || (unit.archetype.attack_limited() && unit.attacks_used >= 2);
        if ap >= stats.attack_cost && !attack_gated {
            for (pos, _) in self.state.board.team_units(unit.team.opponent()) {
                if origin.taxicab(pos) > stats.range {
                    continue;
                }
                let clear = unit.archetype == Archetype::Mage
                    || spatial::trace_line_of_sight(&self.state.board, origin, pos, &unit).is_clear();
                if clear {
                    actions.push(PlannedAction::Attack { at: pos });
                }
            }
        }

        // Aura activation.
        if unit.archetype == Archetype::General && ap >= skill::AURA_COST && unit.aura.ready() {
            actions.push(PlannedAction::Skill);
        }

        actions
    }

    // === Mutating actions ===

    /// Move, jump, or swap a unit.
    pub fn execute_move(&mut self, unit: UnitId, dest: Coord, kind: MoveKind) -> ActionResult<MoveOutcome> {
        movement::execute_move(&mut self.state, unit, dest, kind)
    }

    /// Attack a target cell with a unit.
    pub fn execute_attack(&mut self, unit: UnitId, target: Coord) -> ActionResult<AttackOutcome> {
        combat::execute_attack(&mut self.state, unit, target)
    }

    /// Activate a general's protection aura.
    pub fn activate_skill(&mut self, unit: UnitId) -> ActionResult<SkillOutcome> {
        skill::activate_aura(&mut self.state, unit)
    }

    /// End the active team's turn.
    pub fn end_turn(&mut self) -> TurnOutcome {
        turn::end_turn(&mut self.state)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(MatchSetup::default_formations())
    }
}
