//! Grid coordinates and distance metrics.
//!
//! Two distance metrics coexist on purpose and must not be unified:
//!
//! - **Chebyshev** (`max(|dx|, |dy|)`): basic-move adjacency, attack range,
//!   splash/cluster radii, and the archer's fire-over-ally check.
//! - **Taxicab** (`|dx| + |dy|`): jump total distance.

use serde::{Deserialize, Serialize};

/// A board coordinate. `x` is the column, `y` the row.
///
/// Signed so that deltas and off-board probes are representable; bounds are
/// enforced by [`crate::core::Board::in_bounds`], not by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.
    #[must_use]
    pub const fn chebyshev(self, other: Coord) -> i32 {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// Taxicab distance: `|dx| + |dy|`.
    #[must_use]
    pub const fn taxicab(self, other: Coord) -> i32 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// The cell one signum step from `self` toward `other`.
    ///
    /// This is the jump midpoint when `other` is 2-3 cells away in a
    /// straight line.
    #[must_use]
    pub const fn step_toward(self, other: Coord) -> Coord {
        Coord {
            x: self.x + (other.x - self.x).signum(),
            y: self.y + (other.y - self.y).signum(),
        }
    }

    /// The 8 neighboring cells, in the fixed splash resolution order
    /// (dx outer, dy inner, center skipped).
    #[must_use]
    pub const fn neighbors(self) -> [Coord; 8] {
        let Coord { x, y } = self;
        [
            Coord::new(x - 1, y - 1),
            Coord::new(x - 1, y),
            Coord::new(x - 1, y + 1),
            Coord::new(x, y - 1),
            Coord::new(x, y + 1),
            Coord::new(x + 1, y - 1),
            Coord::new(x + 1, y),
            Coord::new(x + 1, y + 1),
        ]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebyshev() {
        let a = Coord::new(2, 3);
        assert_eq!(a.chebyshev(Coord::new(2, 3)), 0);
        assert_eq!(a.chebyshev(Coord::new(3, 4)), 1);
        assert_eq!(a.chebyshev(Coord::new(5, 3)), 3);
        assert_eq!(a.chebyshev(Coord::new(0, 8)), 5);
    }

    #[test]
    fn test_taxicab() {
        let a = Coord::new(2, 3);
        assert_eq!(a.taxicab(Coord::new(2, 3)), 0);
        assert_eq!(a.taxicab(Coord::new(3, 4)), 2);
        assert_eq!(a.taxicab(Coord::new(0, 8)), 7);
    }

    #[test]
    fn test_metrics_disagree_on_diagonals() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 3);
        assert_eq!(a.chebyshev(b), 3);
        assert_eq!(a.taxicab(b), 6);
    }

    #[test]
    fn test_step_toward() {
        let a = Coord::new(5, 5);
        assert_eq!(a.step_toward(Coord::new(8, 5)), Coord::new(6, 5));
        assert_eq!(a.step_toward(Coord::new(5, 2)), Coord::new(5, 4));
        assert_eq!(a.step_toward(Coord::new(5, 5)), Coord::new(5, 5));
    }

    #[test]
    fn test_neighbors_order() {
        let n = Coord::new(1, 1).neighbors();
        assert_eq!(n[0], Coord::new(0, 0));
        assert_eq!(n[3], Coord::new(1, 0));
        assert_eq!(n[4], Coord::new(1, 2));
        assert_eq!(n[7], Coord::new(2, 2));
        assert!(!n.contains(&Coord::new(1, 1)));
    }
}
