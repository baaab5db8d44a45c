//! Spatial query layer: line-of-sight tracing and the protection-aura query.
//!
//! Distance metrics live on [`Coord`] itself; this module holds the queries
//! that need to inspect board contents.
//!
//! ## Line of sight
//!
//! The trace walks the straight segment from origin to destination, sampling
//! at half-cell resolution so the line cannot skip a cell it merely grazes.
//! A sample landing on a half-integer coordinate is ambiguous between two
//! adjacent cells, and both are checked. The origin and destination cells
//! are never treated as obstructions. The first obstructing cell in sample
//! order short-circuits the walk and is reported, because a blocked shot is
//! redirected there rather than rejected (see the combat subsystem).

use crate::core::{Archetype, Board, Coord, Team, Unit};

/// Result of a line-of-sight trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOfSight {
    /// Nothing obstructs the segment.
    Clear,
    /// The segment is obstructed; `at` is the first obstructing cell.
    Blocked { at: Coord },
}

impl LineOfSight {
    /// Whether the trace found no obstruction.
    #[must_use]
    pub const fn is_clear(self) -> bool {
        matches!(self, LineOfSight::Clear)
    }
}

/// Trace the segment from `origin` to `dest` for `attacker`.
///
/// A cell obstructs if it holds any occupant, with one exception: an archer
/// may fire over a friendly unit within Chebyshev distance 1 of the origin.
#[must_use]
pub fn trace_line_of_sight(board: &Board, origin: Coord, dest: Coord, attacker: &Unit) -> LineOfSight {
    let dx = f64::from(dest.x - origin.x);
    let dy = f64::from(dest.y - origin.y);
    let length = (dx * dx + dy * dy).sqrt();

    // Half-cell sampling density.
    #[allow(clippy::cast_possible_truncation)]
    let steps = (length * 2.0).ceil() as i32;

    for i in 1..steps {
        let t = f64::from(i) / f64::from(steps);
        let px = f64::from(origin.x) + dx * t;
        let py = f64::from(origin.y) + dy * t;

        for cell in candidate_cells(px, py) {
            if cell == origin || cell == dest {
                continue;
            }
            let Some(occupant) = board.occupant_at(cell) else {
                continue;
            };

            // Archer exception: an adjacent ally is transparent.
            if attacker.archetype == Archetype::Archer
                && occupant.team() == Some(attacker.team)
                && origin.chebyshev(cell) <= 1
            {
                continue;
            }

            return LineOfSight::Blocked { at: cell };
        }
    }

    LineOfSight::Clear
}

/// The integer cells a sampled point may touch.
///
/// A coordinate within 0.01 of a half-integer sits on a cell boundary and
/// resolves to both adjacent cells; otherwise it rounds to one cell. At most
/// four candidates (both axes ambiguous), in floor-before-ceil order.
fn candidate_cells(px: f64, py: f64) -> impl Iterator<Item = Coord> {
    #[allow(clippy::cast_possible_truncation)]
    fn indices(v: f64) -> (i32, Option<i32>) {
        if (v - v.floor() - 0.5).abs() < 0.01 {
            (v.floor() as i32, Some(v.ceil() as i32))
        } else {
            (v.round() as i32, None)
        }
    }

    let (x0, x1) = indices(px);
    let (y0, y1) = indices(py);

    let xs = [Some(x0), x1];
    let ys = [Some(y0), y1];

    xs.into_iter().flatten().flat_map(move |x| {
        ys.into_iter()
            .flatten()
            .map(move |y| Coord::new(x, y))
    })
}

/// Whether `(at, team)` is inside a friendly general's active aura.
///
/// True if any friendly general with an active aura stands within Chebyshev
/// distance 2 of `at`, excluding the general's own cell.
#[must_use]
pub fn in_protection_aura(board: &Board, at: Coord, team: Team) -> bool {
    board.units().any(|(pos, unit)| {
        unit.archetype == Archetype::General
            && unit.team == team
            && unit.aura.active
            && pos != at
            && pos.chebyshev(at) <= 2
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Occupant, UnitId};

    fn unit(id: u32, team: Team, archetype: Archetype) -> Unit {
        Unit::new(UnitId(id), team, archetype)
    }

    fn place(board: &mut Board, at: Coord, u: Unit) {
        board.place(at, Occupant::Unit(u));
    }

    #[test]
    fn test_clear_line() {
        let board = Board::new();
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert!(los.is_clear());
    }

    #[test]
    fn test_blocked_straight_line() {
        let mut board = Board::new();
        board.place(Coord::new(0, 3), Occupant::Obstacle);
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 3) });
    }

    #[test]
    fn test_first_obstruction_wins() {
        let mut board = Board::new();
        board.place(Coord::new(0, 2), Occupant::Obstacle);
        board.place(Coord::new(0, 4), Occupant::Obstacle);
        let king = unit(1, Team::Red, Archetype::King);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &king);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 2) });
    }

    #[test]
    fn test_endpoints_excluded() {
        let mut board = Board::new();
        place(&mut board, Coord::new(0, 0), unit(1, Team::Red, Archetype::Archer));
        place(&mut board, Coord::new(0, 5), unit(2, Team::Blue, Archetype::Soldier));
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert!(los.is_clear());
    }

    #[test]
    fn test_archer_fires_over_adjacent_ally() {
        let mut board = Board::new();
        place(&mut board, Coord::new(0, 1), unit(2, Team::Red, Archetype::Soldier));
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert!(los.is_clear());
    }

    #[test]
    fn test_archer_blocked_by_distant_ally() {
        let mut board = Board::new();
        place(&mut board, Coord::new(0, 3), unit(2, Team::Red, Archetype::Soldier));
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 3) });
    }

    #[test]
    fn test_archer_blocked_by_adjacent_enemy() {
        let mut board = Board::new();
        place(&mut board, Coord::new(0, 1), unit(2, Team::Blue, Archetype::Soldier));
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 1) });
    }

    #[test]
    fn test_non_archer_blocked_by_adjacent_ally() {
        let mut board = Board::new();
        place(&mut board, Coord::new(0, 1), unit(2, Team::Red, Archetype::Soldier));
        let cannon = unit(1, Team::Red, Archetype::Cannon);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(0, 5), &cannon);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 1) });
    }

    #[test]
    fn test_knight_line_grazes_both_cells() {
        // The segment from (0,0) to (1,2) squeezes between (0,1) and (1,1);
        // half-cell sampling touches both, so either one blocks the shot.
        let archer = unit(1, Team::Red, Archetype::Archer);

        let mut board = Board::new();
        board.place(Coord::new(0, 1), Occupant::Obstacle);
        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(1, 2), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(0, 1) });

        let mut board = Board::new();
        board.place(Coord::new(1, 1), Occupant::Obstacle);
        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(1, 2), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(1, 1) });
    }

    #[test]
    fn test_true_diagonal_blocked() {
        let mut board = Board::new();
        board.place(Coord::new(2, 2), Occupant::Obstacle);
        let archer = unit(1, Team::Red, Archetype::Archer);

        let los = trace_line_of_sight(&board, Coord::new(0, 0), Coord::new(4, 4), &archer);
        assert_eq!(los, LineOfSight::Blocked { at: Coord::new(2, 2) });
    }

    #[test]
    fn test_aura_radius_and_exclusions() {
        let mut board = Board::new();
        let mut general = unit(1, Team::Red, Archetype::General);
        general.aura.active = true;
        let at = Coord::new(6, 6);
        place(&mut board, at, general);

        // Inside radius 2.
        assert!(in_protection_aura(&board, Coord::new(6, 7), Team::Red));
        assert!(in_protection_aura(&board, Coord::new(8, 8), Team::Red));
        // Outside radius 2.
        assert!(!in_protection_aura(&board, Coord::new(6, 9), Team::Red));
        // The general's own cell is excluded.
        assert!(!in_protection_aura(&board, at, Team::Red));
        // Wrong team.
        assert!(!in_protection_aura(&board, Coord::new(6, 7), Team::Blue));
    }

    #[test]
    fn test_inactive_aura_protects_nothing() {
        let mut board = Board::new();
        place(&mut board, Coord::new(6, 6), unit(1, Team::Red, Archetype::General));

        assert!(!in_protection_aura(&board, Coord::new(6, 7), Team::Red));
    }
}
