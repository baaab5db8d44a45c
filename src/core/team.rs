//! Team identification and per-team data storage.
//!
//! ## Team
//!
//! Exactly two teams exist for the lifetime of a match: `Red` moves first,
//! `Blue` second. There is no N-team support.
//!
//! ## TeamMap
//!
//! Per-team data storage with O(1) access, indexable by `Team`. Used for the
//! action-point pools and anywhere else both teams carry symmetric state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Moves first, deployed along the low-y edge.
    Red,
    /// Moves second, deployed along the high-y edge.
    Blue,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Both teams, red first.
    #[must_use]
    pub const fn both() -> [Team; 2] {
        [Team::Red, Team::Blue]
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use grid_tactics::core::{Team, TeamMap};
///
/// let mut ap: TeamMap<u8> = TeamMap::with_value(6);
/// ap[Team::Red] -= 2;
///
/// assert_eq!(ap[Team::Red], 4);
/// assert_eq!(ap[Team::Blue], 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    red: T,
    blue: T,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            red: factory(Team::Red),
            blue: factory(Team::Blue),
        }
    }

    /// Create a new TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }

    /// Iterate over (Team, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::Red, &self.red), (Team::Blue, &self.blue)].into_iter()
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Team::Red.opponent(), Team::Blue);
        assert_eq!(Team::Blue.opponent(), Team::Red);
        assert_eq!(Team::Red.opponent().opponent(), Team::Red);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Team::Red), "red");
        assert_eq!(format!("{}", Team::Blue), "blue");
    }

    #[test]
    fn test_team_map_factory() {
        let map = TeamMap::new(|t| match t {
            Team::Red => 1,
            Team::Blue => 2,
        });

        assert_eq!(map[Team::Red], 1);
        assert_eq!(map[Team::Blue], 2);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<u8> = TeamMap::with_value(6);
        map[Team::Blue] = 0;

        assert_eq!(map[Team::Red], 6);
        assert_eq!(map[Team::Blue], 0);
    }

    #[test]
    fn test_team_map_iter() {
        let map = TeamMap::new(|t| t);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Team::Red, &Team::Red), (Team::Blue, &Team::Blue)]);
    }

    #[test]
    fn test_serialization() {
        let team = Team::Blue;
        let json = serde_json::to_string(&team).unwrap();
        assert_eq!(json, "\"blue\"");

        let map: TeamMap<u8> = TeamMap::with_value(6);
        let json = serde_json::to_string(&map).unwrap();
        let back: TeamMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
