//! # grid-tactics
//!
//! A deterministic rules engine for a two-team tactics game on a 13x15 grid.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules Core**: The engine validates and applies actions; it runs
//!    no clock, schedules nothing, and renders nothing. Hosts drive it.
//!
//! 2. **Atomic Actions**: Every mutating action is validated in full before
//!    any state changes. A rejection is a typed error and a no-op.
//!
//! 3. **Advisory Outcomes**: Successful actions return structured outcomes
//!    (message keys, AP accounting, damage events) that inform the caller
//!    without obligating the engine to act on them.
//!
//! ## Architecture
//!
//! - **Sparse Board**: A hash map from occupied cell to occupant; empty
//!   cells are absent, and a unit's position lives only in the board.
//!
//! - **Seeded Strategy**: The computer player is a pure client of the public
//!   query surface with ChaCha8-seeded tie-breaking, so matches replay
//!   exactly from a seed.
//!
//! ## Modules
//!
//! - `core`: Teams, coordinates, units, the board, and match state
//! - `spatial`: Line-of-sight tracing and aura coverage
//! - `actions`: Move/attack/skill/turn subsystems, outcomes, and errors
//! - `engine`: The `GameEngine` facade owning one match
//! - `setup`: Default formations, obstacles, and custom placement
//! - `strategy`: The heuristic computer player

pub mod actions;
pub mod core;
pub mod engine;
pub mod setup;
pub mod spatial;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Archetype, ArchetypeStats, AuraState, Board, Coord, MatchState, Occupant, Team, TeamMap, Unit,
    UnitId, AP_PER_TURN, BOARD_COLS, BOARD_ROWS,
};

pub use crate::actions::{
    ActionError, ActionResult, Annotate, Annotated, AttackOutcome, AuraExpiry, DamageEvent,
    JumpFault, MoveApplied, MoveKind, MoveOutcome, SkillOutcome, TurnOutcome,
};

pub use crate::engine::{GameEngine, PlannedAction, UnitView};

pub use crate::setup::{MatchSetup, Placement};

pub use crate::spatial::{in_protection_aura, trace_line_of_sight, LineOfSight};

pub use crate::strategy::{ActionMeta, ActionOutcome, Controller, Decision, Difficulty};
