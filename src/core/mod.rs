//! Core state model: coordinates, teams, units, the board, and match state.
//!
//! This module is pure data plus invariant-preserving accessors. All rule
//! behavior lives in `spatial` (queries) and `actions` (mutations).

pub mod board;
pub mod coord;
pub mod state;
pub mod team;
pub mod unit;

pub use board::{Board, BOARD_COLS, BOARD_ROWS};
pub use coord::Coord;
pub use state::{MatchState, AP_PER_TURN};
pub use team::{Team, TeamMap};
pub use unit::{Archetype, ArchetypeStats, AuraState, Occupant, Unit, UnitId};
