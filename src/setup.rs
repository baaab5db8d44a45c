//! Match setup: default formations, obstacle blocks, and custom placement.
//!
//! The default formations are documented here and nowhere else. Each team
//! fields 22 units:
//!
//! - the king centered on the back rank
//! - a caster rank of 4 mages + 4 archers flanking the general
//! - a line of 9 soldiers with a cannon on each wing
//! - one vanguard soldier ahead of the line
//!
//! Two 3x2 obstacle blocks sit mid-board regardless of formation.

use serde::{Deserialize, Serialize};

use crate::core::{Archetype, Coord};

/// One unit to place at match setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub archetype: Archetype,
    pub at: Coord,
}

impl Placement {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(archetype: Archetype, x: i32, y: i32) -> Self {
        Self { archetype, at: Coord::new(x, y) }
    }
}

/// Per-team setup: `None` means the default formation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub red: Option<Vec<Placement>>,
    pub blue: Option<Vec<Placement>>,
}

impl MatchSetup {
    /// Both teams in their default formations.
    #[must_use]
    pub fn default_formations() -> Self {
        Self::default()
    }

    /// Override red's formation, keep blue's default.
    #[must_use]
    pub fn with_red(placements: Vec<Placement>) -> Self {
        Self { red: Some(placements), blue: None }
    }

    /// Override blue's formation, keep red's default.
    #[must_use]
    pub fn with_blue(placements: Vec<Placement>) -> Self {
        Self { red: None, blue: Some(placements) }
    }
}

/// Red's default formation (top of the board, low y).
#[must_use]
pub fn default_red() -> Vec<Placement> {
    use Archetype::{Archer, Cannon, General, King, Mage, Soldier};

    let mut units = vec![Placement::new(King, 6, 0)];

    // Caster rank: mage/archer alternating around the general.
    for (x, archetype) in [
        (2, Mage),
        (3, Archer),
        (4, Mage),
        (5, Archer),
        (6, General),
        (7, Mage),
        (8, Archer),
        (9, Mage),
        (10, Archer),
    ] {
        units.push(Placement::new(archetype, x, 1));
    }

    // Soldier line with cannons on the wings.
    units.push(Placement::new(Cannon, 0, 2));
    for x in 2..=10 {
        units.push(Placement::new(Soldier, x, 2));
    }
    units.push(Placement::new(Cannon, 12, 2));

    // Vanguard.
    units.push(Placement::new(Soldier, 6, 3));
    units
}

/// Blue's default formation (bottom of the board, high y).
///
/// Mirrors red with the caster rank's mage/archer alternation flipped.
#[must_use]
pub fn default_blue() -> Vec<Placement> {
    use Archetype::{Archer, Cannon, General, King, Mage, Soldier};

    let mut units = vec![Placement::new(Soldier, 6, 11)];

    units.push(Placement::new(Cannon, 0, 12));
    for x in 2..=10 {
        units.push(Placement::new(Soldier, x, 12));
    }
    units.push(Placement::new(Cannon, 12, 12));

    for (x, archetype) in [
        (2, Archer),
        (3, Mage),
        (4, Archer),
        (5, Mage),
        (6, General),
        (7, Archer),
        (8, Mage),
        (9, Archer),
        (10, Mage),
    ] {
        units.push(Placement::new(archetype, x, 13));
    }

    units.push(Placement::new(King, 6, 14));
    units
}

/// The fixed obstacle cells: two 3x2 stone blocks.
#[must_use]
pub fn obstacles() -> [Coord; 12] {
    [
        // Left block: x in 2..=4, y in 7..=8.
        Coord::new(2, 7),
        Coord::new(3, 7),
        Coord::new(4, 7),
        Coord::new(2, 8),
        Coord::new(3, 8),
        Coord::new(4, 8),
        // Right block: x in 8..=10, y in 6..=7.
        Coord::new(8, 6),
        Coord::new(9, 6),
        Coord::new(10, 6),
        Coord::new(8, 7),
        Coord::new(9, 7),
        Coord::new(10, 7),
    ]
}
