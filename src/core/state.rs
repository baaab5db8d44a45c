//! Match state: the authoritative snapshot of one match.
//!
//! Holds the board plus the turn/resource bookkeeping:
//! - turn counter (starts at 1, incremented by every end-of-turn)
//! - active team (exactly one at a time)
//! - per-team action-point pools (reset to [`AP_PER_TURN`] at turn start)
//! - game-over flag and winner (set once, never cleared)
//!
//! The state is exclusively owned by one engine instance; there is no
//! internal locking and no internal gating of actions after game over —
//! serializing callers and honoring the flag is the embedder's job.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::team::{Team, TeamMap};

/// Action points granted to each team at the start of every turn.
pub const AP_PER_TURN: u8 = 6;

/// Complete mutable state of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Unit and obstacle placement.
    pub board: Board,
    /// Global turn counter, starting at 1.
    pub turn_number: u32,
    /// The team whose turn it is.
    pub active_team: Team,
    /// Per-team action-point pools. Never negative.
    pub ap: TeamMap<u8>,
    /// Set when a king dies. Never cleared.
    pub game_over: bool,
    /// The winning team, recorded by the first king kill.
    pub winner: Option<Team>,
}

impl MatchState {
    /// A fresh match with an empty board, red to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_number: 1,
            active_team: Team::Red,
            ap: TeamMap::with_value(AP_PER_TURN),
            game_over: false,
            winner: None,
        }
    }

    /// The active team's remaining action points.
    #[must_use]
    pub fn active_ap(&self) -> u8 {
        self.ap[self.active_team]
    }

    /// Whether the active team's pool is exactly empty.
    ///
    /// Advisory signal for auto-ending the turn; the engine never forces
    /// the transition.
    #[must_use]
    pub fn ap_exhausted(&self) -> bool {
        self.active_ap() == 0
    }

    /// Deduct from the active team's pool. Callers check sufficiency first.
    pub(crate) fn spend_ap(&mut self, cost: u8) {
        debug_assert!(self.active_ap() >= cost, "AP spend exceeds pool");
        self.ap[self.active_team] -= cost;
    }

    /// Record a king kill. The first recorded winner is permanent.
    pub(crate) fn record_victory(&mut self, team: Team) {
        self.game_over = true;
        if self.winner.is_none() {
            self.winner = Some(team);
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
