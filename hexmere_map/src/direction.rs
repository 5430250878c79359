// Hex edge directions and edge-type classification.
//
// A hex cell has six edges; `HexDirection` names them clockwise from the
// north-east edge. The numeric order matters: it is the index into every
// per-direction array in `cell.rs` (neighbors, roads, walls), and
// `opposite()` relies on the +3 symmetry.
//
// `HexEdgeType` classifies the boundary between two cells by elevation
// difference. Cliffs are impassable to searches; slopes cost more than
// flat ground (see `hexmere_search::pathfinding`).

use serde::{Deserialize, Serialize};

/// One of the six edge directions of a hex cell, clockwise from north-east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HexDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl HexDirection {
    /// All six directions in index order, for iteration.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NorthEast,
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
    ];

    /// Index into per-direction arrays (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back across the same edge.
    pub fn opposite(self) -> HexDirection {
        Self::ALL[(self as usize + 3) % 6]
    }

    /// The previous direction, counter-clockwise (cyclic).
    pub fn previous(self) -> HexDirection {
        Self::ALL[(self as usize + 5) % 6]
    }

    /// The next direction, clockwise (cyclic).
    pub fn next(self) -> HexDirection {
        Self::ALL[(self as usize + 1) % 6]
    }
}

/// Classification of the boundary between two adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexEdgeType {
    /// Equal elevation.
    Flat,
    /// Elevation difference of exactly one step.
    Slope,
    /// Elevation difference of two or more steps. Impassable.
    Cliff,
}

impl HexEdgeType {
    /// Classify the edge between two elevations.
    pub fn between(elevation_a: i32, elevation_b: i32) -> HexEdgeType {
        if elevation_a == elevation_b {
            HexEdgeType::Flat
        } else if (elevation_a - elevation_b).abs() == 1 {
            HexEdgeType::Slope
        } else {
            HexEdgeType::Cliff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        for dir in HexDirection::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(HexDirection::NorthEast.opposite(), HexDirection::SouthWest);
        assert_eq!(HexDirection::East.opposite(), HexDirection::West);
        assert_eq!(HexDirection::SouthEast.opposite(), HexDirection::NorthWest);
    }

    #[test]
    fn next_and_previous_cycle() {
        for dir in HexDirection::ALL {
            assert_eq!(dir.next().previous(), dir);
            assert_eq!(dir.previous().next(), dir);
        }
        // Full clockwise loop returns to the start.
        let mut dir = HexDirection::NorthEast;
        for _ in 0..6 {
            dir = dir.next();
        }
        assert_eq!(dir, HexDirection::NorthEast);
    }

    #[test]
    fn edge_type_classification() {
        assert_eq!(HexEdgeType::between(0, 0), HexEdgeType::Flat);
        assert_eq!(HexEdgeType::between(3, 3), HexEdgeType::Flat);
        assert_eq!(HexEdgeType::between(0, 1), HexEdgeType::Slope);
        assert_eq!(HexEdgeType::between(1, 0), HexEdgeType::Slope);
        assert_eq!(HexEdgeType::between(-1, 0), HexEdgeType::Slope);
        assert_eq!(HexEdgeType::between(0, 2), HexEdgeType::Cliff);
        assert_eq!(HexEdgeType::between(5, 0), HexEdgeType::Cliff);
        assert_eq!(HexEdgeType::between(-2, 1), HexEdgeType::Cliff);
    }
}
