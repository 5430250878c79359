// A single map cell and its compact identifier.
//
// `HexCell` is the graph node: fixed cube coordinate, six neighbor
// links, and the terrain state that determines traversal cost and
// legality (elevation, water, per-edge roads and walls, river
// endpoints). Cells are created once when the grid is built and then
// mutated in place through `HexGrid`'s editing operations — every
// mutation that touches two cells (neighbor links, roads, walls,
// rivers) lives on the grid so the reciprocal half is never forgotten.
//
// Neighbor links are `CellId` indices rather than references, and are
// skipped during serialization: they are derivable from the grid
// dimensions and rebuilt on load (see `save.rs`).
//
// See also: `grid.rs` for construction and editing, `coords.rs` for the
// coordinate type, `hexmere_search` for how this state is read during
// pathfinding.

use crate::coords::HexCoord;
use crate::direction::HexDirection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for a cell: its index in the grid's creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Index into per-cell storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({})", self.0)
    }
}

/// One hex cell: coordinate identity plus mutable terrain state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexCell {
    pub id: CellId,
    /// Fixed at creation, never mutated.
    pub coords: HexCoord,
    /// One link per `HexDirection`; `None` at the grid boundary.
    /// Rebuilt from grid dimensions on load.
    #[serde(skip)]
    pub(crate) neighbors: [Option<CellId>; 6],
    pub(crate) elevation: i32,
    pub(crate) water_level: i32,
    pub(crate) terrain_type: u8,
    /// Road presence per edge, mirrored on the neighbor's opposite edge.
    pub(crate) roads: [bool; 6],
    /// Wall presence per edge, mirrored on the neighbor's opposite edge.
    pub(crate) walls: [bool; 6],
    pub(crate) incoming_river: Option<HexDirection>,
    pub(crate) outgoing_river: Option<HexDirection>,
}

impl HexCell {
    pub(crate) fn new(id: CellId, coords: HexCoord) -> Self {
        Self {
            id,
            coords,
            neighbors: [None; 6],
            elevation: 0,
            water_level: 0,
            terrain_type: 0,
            roads: [false; 6],
            walls: [false; 6],
            incoming_river: None,
            outgoing_river: None,
        }
    }

    /// The adjacent cell across the given edge, if any.
    pub fn neighbor(&self, dir: HexDirection) -> Option<CellId> {
        self.neighbors[dir.index()]
    }

    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    pub fn water_level(&self) -> i32 {
        self.water_level
    }

    pub fn terrain_type(&self) -> u8 {
        self.terrain_type
    }

    /// Submerged cells block traversal entirely.
    pub fn is_underwater(&self) -> bool {
        self.water_level > self.elevation
    }

    pub fn has_road_through_edge(&self, dir: HexDirection) -> bool {
        self.roads[dir.index()]
    }

    pub fn has_roads(&self) -> bool {
        self.roads.iter().any(|&road| road)
    }

    pub fn has_wall_through_edge(&self, dir: HexDirection) -> bool {
        self.walls[dir.index()]
    }

    pub fn incoming_river(&self) -> Option<HexDirection> {
        self.incoming_river
    }

    pub fn outgoing_river(&self) -> Option<HexDirection> {
        self.outgoing_river
    }

    pub fn has_river(&self) -> bool {
        self.incoming_river.is_some() || self.outgoing_river.is_some()
    }

    /// A river source or mouth: water enters or leaves, but not both.
    pub fn has_river_begin_or_end(&self) -> bool {
        self.incoming_river.is_some() != self.outgoing_river.is_some()
    }

    pub fn has_river_through_edge(&self, dir: HexDirection) -> bool {
        self.incoming_river == Some(dir) || self.outgoing_river == Some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> HexCell {
        HexCell::new(CellId(0), HexCoord::from_offset(0, 0))
    }

    #[test]
    fn underwater_iff_water_above_elevation() {
        let mut c = cell();
        assert!(!c.is_underwater());
        c.water_level = 1;
        assert!(c.is_underwater());
        c.elevation = 1;
        assert!(!c.is_underwater());
        c.elevation = 2;
        assert!(!c.is_underwater());
    }

    #[test]
    fn river_through_edge_checks_both_endpoints() {
        let mut c = cell();
        assert!(!c.has_river());
        c.incoming_river = Some(HexDirection::West);
        assert!(c.has_river());
        assert!(c.has_river_begin_or_end());
        assert!(c.has_river_through_edge(HexDirection::West));
        assert!(!c.has_river_through_edge(HexDirection::East));

        c.outgoing_river = Some(HexDirection::East);
        assert!(c.has_river_through_edge(HexDirection::East));
        assert!(!c.has_river_begin_or_end());
    }

    #[test]
    fn new_cell_has_no_neighbors_or_features() {
        let c = cell();
        for dir in HexDirection::ALL {
            assert_eq!(c.neighbor(dir), None);
            assert!(!c.has_road_through_edge(dir));
            assert!(!c.has_wall_through_edge(dir));
        }
        assert!(!c.has_roads());
        assert!(!c.has_river());
    }
}
