//! Heuristic computer player.
//!
//! A [`Controller`] is a pure client of [`GameEngine`]'s query surface: it
//! reads state, scores the legal actions of its own units, and executes the
//! best one. Three tiers:
//!
//! - **Easy** picks a uniformly random legal action.
//! - **Normal** scores attacks (kills and wounded targets first, kings above
//!   all) and forward movement.
//! - **Hard** layers on aura timing, ally clustering, approach-the-enemy
//!   advancement, isolation penalties, and king safety.
//!
//! All randomness comes from a seeded ChaCha8 stream, so the same seed over
//! the same board produces the same decisions. The controller never ends the
//! turn on its own; when it has no legal action it returns `None` and the
//! host decides what to do with the turn.

pub mod rng;

use serde::{Deserialize, Serialize};

use crate::actions::{
    ActionResult, Annotate, Annotated, AttackOutcome, MoveOutcome, SkillOutcome,
};
use crate::core::{Archetype, Coord, Team, UnitId};
use crate::engine::{GameEngine, PlannedAction, UnitView};

pub use rng::StrategyRng;

/// Strength tier of the computer player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// A chosen unit/action pair, not yet executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub unit: UnitId,
    pub action: PlannedAction,
}

/// Metadata the controller attaches to outcomes it produces, so a host can
/// narrate or log what the computer player did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMeta {
    pub unit: UnitId,
    pub archetype: Archetype,
    pub action: PlannedAction,
}

/// The outcome of one executed decision, tagged with what produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved(Annotated<MoveOutcome, ActionMeta>),
    Attacked(Annotated<AttackOutcome, ActionMeta>),
    SkillUsed(Annotated<SkillOutcome, ActionMeta>),
}

const SCORE_FLOOR: f64 = -9999.0;
const JITTER: f64 = 2.0;

const ATTACK_BONUS: f64 = 50.0;
const EXECUTE_HP: i32 = 30;
const EXECUTE_BONUS: f64 = 50.0;
const KING_KILL_BONUS: f64 = 200.0;
const ADVANCE_BONUS: f64 = 5.0;

const AURA_THREAT_RANGE: i32 = 6;
const AURA_TIMELY_BONUS: f64 = 80.0;
const AURA_WASTED_PENALTY: f64 = 50.0;
const CLUSTER_BONUS_PER_ALLY: f64 = 0.5;
const ISOLATION_PENALTY: f64 = 50.0;
const KING_DEPTH_PENALTY_PER_CELL: f64 = 20.0;
const KING_GUARD_PENALTY: f64 = 30.0;
const KING_ENGAGE_BONUS: f64 = 40.0;

/// A seeded heuristic controller for one team.
#[derive(Clone, Debug)]
pub struct Controller {
    team: Team,
    difficulty: Difficulty,
    rng: StrategyRng,
}

impl Controller {
    /// Create a controller for `team` at the given tier.
    #[must_use]
    pub fn new(team: Team, difficulty: Difficulty, seed: u64) -> Self {
        Self { team, difficulty, rng: StrategyRng::new(seed) }
    }

    /// The team this controller plays.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// Pick the next action, or `None` when no unit has a legal one.
    ///
    /// Advances the RNG stream even when scoring is deterministic, so two
    /// controllers with the same seed stay in lockstep only if they see the
    /// same boards in the same order.
    pub fn decide(&mut self, engine: &GameEngine) -> Option<Decision> {
        match self.difficulty {
            Difficulty::Easy => self.decide_random(engine),
            Difficulty::Normal => self.decide_scored(engine, false),
            Difficulty::Hard => self.decide_scored(engine, true),
        }
    }

    /// Decide and execute in one step, tagging the outcome with the decision
    /// that produced it.
    pub fn act(&mut self, engine: &mut GameEngine) -> Option<ActionResult<ActionOutcome>> {
        let decision = self.decide(engine)?;
        let archetype = engine
            .find_unit(decision.unit)
            .and_then(|at| engine.unit_view_at(at))
            .map(|v| v.unit.archetype)?;
        let meta = ActionMeta { unit: decision.unit, archetype, action: decision.action };

        let result = match decision.action {
            PlannedAction::Move { kind, to } => engine
                .execute_move(decision.unit, to, kind)
                .map(|out| ActionOutcome::Moved(out.annotate(meta))),
            PlannedAction::Attack { at } => engine
                .execute_attack(decision.unit, at)
                .map(|out| ActionOutcome::Attacked(out.annotate(meta))),
            PlannedAction::Skill => engine
                .activate_skill(decision.unit)
                .map(|out| ActionOutcome::SkillUsed(out.annotate(meta))),
        };
        Some(result)
    }

    fn decide_random(&mut self, engine: &GameEngine) -> Option<Decision> {
        let mut units = engine.units_by_team(self.team);
        self.rng.shuffle(&mut units);

        for view in units {
            let actions = engine.valid_actions(view.unit.id);
            if !actions.is_empty() {
                let action = actions[self.rng.index(actions.len())];
                return Some(Decision { unit: view.unit.id, action });
            }
        }
        None
    }

    fn decide_scored(&mut self, engine: &GameEngine, hard: bool) -> Option<Decision> {
        let my_units = engine.units_by_team(self.team);
        let enemies = engine.units_by_team(self.team.opponent());

        let mut best: Option<Decision> = None;
        let mut best_score = SCORE_FLOOR;

        for view in &my_units {
            for action in engine.valid_actions(view.unit.id) {
                let mut score = self.score_basic(engine, view, action);
                if hard {
                    score += self.score_positional(view, action, &my_units, &enemies);
                }
                score += self.rng.jitter(JITTER);

                if score > best_score {
                    best_score = score;
                    best = Some(Decision { unit: view.unit.id, action });
                }
            }
        }

        // Tier fallback when nothing scored at all.
        best.or_else(|| {
            if hard {
                self.decide_scored(engine, false)
            } else {
                self.decide_random(engine)
            }
        })
    }

    fn score_basic(&self, engine: &GameEngine, view: &UnitView, action: PlannedAction) -> f64 {
        match action {
            PlannedAction::Attack { at } => {
                let Some(target) = engine.unit_view_at(at) else {
                    return 0.0;
                };
                let mut score = ATTACK_BONUS;
                if target.unit.hp <= EXECUTE_HP {
                    score += EXECUTE_BONUS;
                }
                if target.unit.archetype == Archetype::King {
                    score += KING_KILL_BONUS;
                }
                score
            }
            PlannedAction::Move { to, .. } => {
                // Forward is +y for red, -y for blue.
                let advancing = match self.team {
                    Team::Red => to.y > view.pos.y,
                    Team::Blue => to.y < view.pos.y,
                };
                if advancing {
                    ADVANCE_BONUS
                } else {
                    0.0
                }
            }
            PlannedAction::Skill => 0.0,
        }
    }

    fn score_positional(
        &self,
        view: &UnitView,
        action: PlannedAction,
        my_units: &[UnitView],
        enemies: &[UnitView],
    ) -> f64 {
        match action {
            PlannedAction::Skill => {
                // Raise the aura only when enemies are close enough to matter.
                let min_dist = enemies
                    .iter()
                    .map(|e| view.pos.taxicab(e.pos))
                    .min()
                    .unwrap_or(i32::MAX);
                if min_dist <= AURA_THREAT_RANGE {
                    AURA_TIMELY_BONUS
                } else {
                    -AURA_WASTED_PENALTY
                }
            }
            PlannedAction::Move { to, .. } => {
                let mut score = 0.0;

                let allies_near = my_units
                    .iter()
                    .filter(|a| a.unit.id != view.unit.id && a.pos.chebyshev(to) <= 2)
                    .count();
                score += allies_near as f64 * CLUSTER_BONUS_PER_ALLY;

                let min_enemy_dist = enemies
                    .iter()
                    .map(|e| to.taxicab(e.pos))
                    .min()
                    .unwrap_or(i32::MAX);
                if min_enemy_dist < 30 {
                    score += f64::from(30 - min_enemy_dist);
                }

                if allies_near == 0 {
                    score -= ISOLATION_PENALTY;
                }

                if view.unit.archetype == Archetype::King {
                    score += self.score_king_move(view, to, allies_near, min_enemy_dist);
                }

                score
            }
            PlannedAction::Attack { .. } => 0.0,
        }
    }

    fn score_king_move(
        &self,
        view: &UnitView,
        to: Coord,
        allies_near: usize,
        min_enemy_dist: i32,
    ) -> f64 {
        let mut score = 0.0;
        let healthy = view.unit.hp * 10 >= view.unit.max_hp * 6;

        // The king holds his back ranks unless healthy enough to push to
        // mid-field.
        let limit_y = if healthy { 6 } else { 2 };
        let overreach = match self.team {
            Team::Red => to.y - limit_y,
            Team::Blue => (crate::core::BOARD_ROWS - 1 - limit_y) - to.y,
        };
        if overreach > 0 {
            score -= f64::from(overreach) * KING_DEPTH_PENALTY_PER_CELL;
        }

        if allies_near < 2 {
            score -= KING_GUARD_PENALTY;
        }

        if min_enemy_dist == 1 && healthy {
            score += KING_ENGAGE_BONUS;
        }

        score
    }
}
