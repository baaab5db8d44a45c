//! The board: a sparse mapping from coordinate to occupant.
//!
//! Keys exist only for occupied cells, so "at most one occupant per
//! coordinate" holds by construction. Dimensions are fixed: 13 columns by
//! 15 rows.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::team::Team;
use super::unit::{Occupant, Unit, UnitId};

/// Number of columns (the x axis).
pub const BOARD_COLS: i32 = 13;
/// Number of rows (the y axis).
pub const BOARD_ROWS: i32 = 15;

/// The authoritative unit/obstacle placement for a match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: FxHashMap<Coord, Occupant>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(at: Coord) -> bool {
        at.x >= 0 && at.x < BOARD_COLS && at.y >= 0 && at.y < BOARD_ROWS
    }

    /// O(1) occupant lookup. `None` means the cell is empty.
    #[must_use]
    pub fn occupant_at(&self, at: Coord) -> Option<&Occupant> {
        self.cells.get(&at)
    }

    /// The unit at a cell, if the cell holds one (not an obstacle).
    #[must_use]
    pub fn unit_at(&self, at: Coord) -> Option<&Unit> {
        self.occupant_at(at).and_then(Occupant::unit)
    }

    /// Mutable access to the unit at a cell.
    pub fn unit_at_mut(&mut self, at: Coord) -> Option<&mut Unit> {
        self.cells.get_mut(&at).and_then(Occupant::unit_mut)
    }

    /// Whether a cell is empty.
    #[must_use]
    pub fn is_empty_cell(&self, at: Coord) -> bool {
        !self.cells.contains_key(&at)
    }

    /// Scan for a unit by id, returning its position.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<Coord> {
        self.cells
            .iter()
            .find(|(_, occ)| occ.unit().is_some_and(|u| u.id == id))
            .map(|(at, _)| *at)
    }

    /// Place an occupant, returning whatever the cell previously held.
    pub fn place(&mut self, at: Coord, occupant: Occupant) -> Option<Occupant> {
        self.cells.insert(at, occupant)
    }

    /// Clear a cell, returning its occupant.
    pub fn remove(&mut self, at: Coord) -> Option<Occupant> {
        self.cells.remove(&at)
    }

    /// Move an occupant from one cell to another (destination must be empty).
    pub fn relocate(&mut self, from: Coord, to: Coord) {
        debug_assert!(self.is_empty_cell(to), "relocate into occupied cell");
        if let Some(occ) = self.cells.remove(&from) {
            self.cells.insert(to, occ);
        }
    }

    /// Exchange the occupants of two cells atomically.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        if a == b {
            return;
        }
        let occ_a = self.cells.remove(&a);
        let occ_b = self.cells.remove(&b);
        if let Some(occ) = occ_a {
            self.cells.insert(b, occ);
        }
        if let Some(occ) = occ_b {
            self.cells.insert(a, occ);
        }
    }

    /// Iterate over all occupied cells.
    pub fn occupants(&self) -> impl Iterator<Item = (Coord, &Occupant)> {
        self.cells.iter().map(|(at, occ)| (*at, occ))
    }

    /// Iterate over all units with their positions.
    pub fn units(&self) -> impl Iterator<Item = (Coord, &Unit)> {
        self.cells
            .iter()
            .filter_map(|(at, occ)| occ.unit().map(|u| (*at, u)))
    }

    /// Iterate mutably over all units.
    pub fn units_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Unit)> {
        self.cells
            .iter_mut()
            .filter_map(|(at, occ)| occ.unit_mut().map(|u| (*at, u)))
    }

    /// Iterate over one team's units with their positions.
    pub fn team_units(&self, team: Team) -> impl Iterator<Item = (Coord, &Unit)> {
        self.units().filter(move |(_, u)| u.team == team)
    }

    /// Number of occupied cells (units and obstacles).
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Archetype;

    fn soldier(id: u32, team: Team) -> Occupant {
        Occupant::Unit(Unit::new(UnitId(id), team, Archetype::Soldier))
    }

    #[test]
    fn test_bounds() {
        assert!(Board::in_bounds(Coord::new(0, 0)));
        assert!(Board::in_bounds(Coord::new(12, 14)));
        assert!(!Board::in_bounds(Coord::new(13, 0)));
        assert!(!Board::in_bounds(Coord::new(0, 15)));
        assert!(!Board::in_bounds(Coord::new(-1, 7)));
    }

    #[test]
    fn test_place_and_lookup() {
        let mut board = Board::new();
        let at = Coord::new(3, 4);
        assert!(board.is_empty_cell(at));

        board.place(at, soldier(1, Team::Red));

        assert!(!board.is_empty_cell(at));
        assert_eq!(board.unit_at(at).unwrap().id, UnitId(1));
        assert!(board.occupant_at(Coord::new(4, 4)).is_none());
    }

    #[test]
    fn test_find_unit() {
        let mut board = Board::new();
        board.place(Coord::new(2, 2), soldier(1, Team::Red));
        board.place(Coord::new(9, 9), soldier(2, Team::Blue));
        board.place(Coord::new(5, 5), Occupant::Obstacle);

        assert_eq!(board.find_unit(UnitId(2)), Some(Coord::new(9, 9)));
        assert_eq!(board.find_unit(UnitId(99)), None);
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::new();
        let from = Coord::new(1, 1);
        let to = Coord::new(1, 2);
        board.place(from, soldier(1, Team::Red));

        board.relocate(from, to);

        assert!(board.is_empty_cell(from));
        assert_eq!(board.unit_at(to).unwrap().id, UnitId(1));
    }

    #[test]
    fn test_swap() {
        let mut board = Board::new();
        let a = Coord::new(1, 1);
        let b = Coord::new(4, 4);
        board.place(a, soldier(1, Team::Red));
        board.place(b, soldier(2, Team::Red));

        board.swap(a, b);

        assert_eq!(board.unit_at(a).unwrap().id, UnitId(2));
        assert_eq!(board.unit_at(b).unwrap().id, UnitId(1));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_team_units() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), soldier(1, Team::Red));
        board.place(Coord::new(1, 0), soldier(2, Team::Red));
        board.place(Coord::new(2, 0), soldier(3, Team::Blue));
        board.place(Coord::new(3, 0), Occupant::Obstacle);

        assert_eq!(board.team_units(Team::Red).count(), 2);
        assert_eq!(board.team_units(Team::Blue).count(), 1);
        assert_eq!(board.units().count(), 3);
        assert_eq!(board.occupied_count(), 4);
    }
}
