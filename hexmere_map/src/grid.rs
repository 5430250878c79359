// The cell grid: storage, neighbor wiring, and editing operations.
//
// `HexGrid` owns every `HexCell` in a flat `Vec` indexed by `CellId`
// (row-major over the rectangular offset layout: `col + row * cell_count_x`).
// Cells are created once, with fixed coordinates and a full symmetric
// neighbor set; afterwards only their terrain state changes.
//
// All cross-cell mutation lives here. `set_neighbor` is the single
// mutator of the adjacency arrays and always writes the reciprocal link,
// so the graph stays symmetric by construction. Roads, walls, and rivers
// are likewise written to both half-edges in one call.
//
// Editing operations preserve terrain legality:
// - Raising or lowering a cell removes rivers that would flow uphill and
//   roads across edges that have become cliffs.
// - `add_road` refuses edges carrying a river or spanning more than one
//   elevation step.
// - `set_outgoing_river` refuses invalid destinations, rewires the
//   neighbor's incoming end, and washes out any road on that edge.
// Illegal requests are silent no-ops, not errors — the map editor on top
// of this model treats them as brush strokes that do nothing.
//
// See also: `cell.rs` for per-cell state, `save.rs` for persistence
// (which rebuilds the skipped neighbor links via `wire_neighbors`),
// `hexmere_search::pathfinding` for the search that reads this graph.

use crate::cell::{CellId, HexCell};
use crate::coords::HexCoord;
use crate::direction::{HexDirection, HexEdgeType};
use crate::layout::HexLayout;
use serde::{Deserialize, Serialize};

/// A rectangular hex map: `cell_count_x` columns by `cell_count_z` rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexGrid {
    layout: HexLayout,
    cell_count_x: i32,
    cell_count_z: i32,
    cells: Vec<HexCell>,
}

impl HexGrid {
    /// Create a grid of flat, dry cells with the full neighbor set wired.
    pub fn new(cell_count_x: i32, cell_count_z: i32, layout: HexLayout) -> Self {
        let cell_count_x = cell_count_x.max(0);
        let cell_count_z = cell_count_z.max(0);
        let mut cells = Vec::with_capacity((cell_count_x * cell_count_z) as usize);
        for row in 0..cell_count_z {
            for col in 0..cell_count_x {
                let id = CellId(cells.len() as u32);
                cells.push(HexCell::new(id, HexCoord::from_offset(col, row)));
            }
        }

        let mut grid = Self {
            layout,
            cell_count_x,
            cell_count_z,
            cells,
        };
        grid.wire_neighbors();
        grid
    }

    /// Wire the symmetric neighbor links from the grid dimensions.
    /// Called from `new` and again after deserialization, since the
    /// links are not persisted.
    pub(crate) fn wire_neighbors(&mut self) {
        for index in 0..self.cells.len() {
            let id = CellId(index as u32);
            let col = index as i32 % self.cell_count_x;
            let row = index as i32 / self.cell_count_x;

            if col > 0 {
                self.set_neighbor(id, HexDirection::West, CellId(id.0 - 1));
            }
            if row > 0 {
                let below = id.0 - self.cell_count_x as u32;
                if row % 2 == 0 {
                    self.set_neighbor(id, HexDirection::SouthEast, CellId(below));
                    if col > 0 {
                        self.set_neighbor(id, HexDirection::SouthWest, CellId(below - 1));
                    }
                } else {
                    self.set_neighbor(id, HexDirection::SouthWest, CellId(below));
                    if col < self.cell_count_x - 1 {
                        self.set_neighbor(id, HexDirection::SouthEast, CellId(below + 1));
                    }
                }
            }
        }
    }

    /// Link two cells across an edge. The reciprocal link is always
    /// written too; this is the only place adjacency is mutated.
    pub fn set_neighbor(&mut self, id: CellId, dir: HexDirection, neighbor: CellId) {
        self.cells[id.index()].neighbors[dir.index()] = Some(neighbor);
        self.cells[neighbor.index()].neighbors[dir.opposite().index()] = Some(id);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_count_x(&self) -> i32 {
        self.cell_count_x
    }

    pub fn cell_count_z(&self) -> i32 {
        self.cell_count_z
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn cell(&self, id: CellId) -> &HexCell {
        &self.cells[id.index()]
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// Look up a cell by cube coordinate. `None` outside the map.
    pub fn get_cell(&self, coords: HexCoord) -> Option<CellId> {
        let row = coords.z();
        if row < 0 || row >= self.cell_count_z {
            return None;
        }
        let col = coords.x() + row / 2;
        if col < 0 || col >= self.cell_count_x {
            return None;
        }
        Some(CellId((col + row * self.cell_count_x) as u32))
    }

    /// Look up the cell containing a world-space point. `None` outside
    /// the map.
    pub fn cell_at_world(&self, wx: f32, wz: f32) -> Option<CellId> {
        self.get_cell(HexCoord::from_world(&self.layout, wx, wz))
    }

    /// Classify the edge between two cells by elevation.
    pub fn edge_type(&self, a: CellId, b: CellId) -> HexEdgeType {
        HexEdgeType::between(self.cell(a).elevation, self.cell(b).elevation)
    }

    /// Classify the edge leaving `id` in `dir`. `None` at the boundary.
    pub fn edge_type_toward(&self, id: CellId, dir: HexDirection) -> Option<HexEdgeType> {
        self.cell(id)
            .neighbor(dir)
            .map(|neighbor| self.edge_type(id, neighbor))
    }

    // -----------------------------------------------------------------
    // Editing operations
    // -----------------------------------------------------------------

    /// Set a cell's elevation, then remove rivers and roads that the new
    /// elevation makes illegal.
    pub fn set_elevation(&mut self, id: CellId, elevation: i32) {
        if self.cells[id.index()].elevation == elevation {
            return;
        }
        self.cells[id.index()].elevation = elevation;
        self.validate_rivers(id);

        for dir in HexDirection::ALL {
            if self.cells[id.index()].roads[dir.index()]
                && self.elevation_difference(id, dir) > 1
            {
                self.set_road(id, dir, false);
            }
        }
    }

    /// Set a cell's water level, then remove rivers the new surface
    /// makes illegal.
    pub fn set_water_level(&mut self, id: CellId, water_level: i32) {
        if self.cells[id.index()].water_level == water_level {
            return;
        }
        self.cells[id.index()].water_level = water_level;
        self.validate_rivers(id);
    }

    pub fn set_terrain_type(&mut self, id: CellId, terrain_type: u8) {
        self.cells[id.index()].terrain_type = terrain_type;
    }

    /// Absolute elevation difference across an edge; 0 at the boundary.
    fn elevation_difference(&self, id: CellId, dir: HexDirection) -> i32 {
        match self.cell(id).neighbor(dir) {
            Some(neighbor) => (self.cell(id).elevation - self.cell(neighbor).elevation).abs(),
            None => 0,
        }
    }

    /// Add a road through an edge. No-op if the edge is missing, already
    /// has a road, carries a river, or spans more than one elevation step.
    pub fn add_road(&mut self, id: CellId, dir: HexDirection) {
        let cell = &self.cells[id.index()];
        if cell.neighbor(dir).is_none()
            || cell.roads[dir.index()]
            || cell.has_river_through_edge(dir)
            || self.elevation_difference(id, dir) > 1
        {
            return;
        }
        self.set_road(id, dir, true);
    }

    /// Remove every road touching the cell.
    pub fn remove_roads(&mut self, id: CellId) {
        for dir in HexDirection::ALL {
            if self.cells[id.index()].roads[dir.index()] {
                self.set_road(id, dir, false);
            }
        }
    }

    fn set_road(&mut self, id: CellId, dir: HexDirection, state: bool) {
        self.cells[id.index()].roads[dir.index()] = state;
        if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
            self.cells[neighbor.index()].roads[dir.opposite().index()] = state;
        }
    }

    /// Add a wall through an edge. Walls at the grid boundary only have
    /// one half; interior walls are mirrored on the neighbor.
    pub fn add_wall(&mut self, id: CellId, dir: HexDirection) {
        self.set_wall(id, dir, true);
    }

    pub fn remove_wall(&mut self, id: CellId, dir: HexDirection) {
        self.set_wall(id, dir, false);
    }

    fn set_wall(&mut self, id: CellId, dir: HexDirection, state: bool) {
        self.cells[id.index()].walls[dir.index()] = state;
        if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
            self.cells[neighbor.index()].walls[dir.opposite().index()] = state;
        }
    }

    /// Start (or redirect) a river leaving `id` through `dir`. No-op if
    /// that river already exists or the destination is invalid. Clears
    /// the previous outgoing river, an incoming river arriving through
    /// the same edge, and the destination's previous incoming river;
    /// washes out any road on the claimed edge.
    pub fn set_outgoing_river(&mut self, id: CellId, dir: HexDirection) {
        if self.cells[id.index()].outgoing_river == Some(dir) {
            return;
        }
        let Some(neighbor) = self.cells[id.index()].neighbor(dir) else {
            return;
        };
        if !self.is_valid_river_destination(id, neighbor) {
            return;
        }

        self.remove_outgoing_river(id);
        if self.cells[id.index()].incoming_river == Some(dir) {
            self.remove_incoming_river(id);
        }
        self.cells[id.index()].outgoing_river = Some(dir);

        self.remove_incoming_river(neighbor);
        self.cells[neighbor.index()].incoming_river = Some(dir.opposite());

        self.set_road(id, dir, false);
    }

    pub fn remove_river(&mut self, id: CellId) {
        self.remove_outgoing_river(id);
        self.remove_incoming_river(id);
    }

    pub fn remove_outgoing_river(&mut self, id: CellId) {
        if let Some(dir) = self.cells[id.index()].outgoing_river.take() {
            if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
                self.cells[neighbor.index()].incoming_river = None;
            }
        }
    }

    pub fn remove_incoming_river(&mut self, id: CellId) {
        if let Some(dir) = self.cells[id.index()].incoming_river.take() {
            if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
                self.cells[neighbor.index()].outgoing_river = None;
            }
        }
    }

    /// Water flows downhill, or onto a cell whose water surface sits at
    /// the source's elevation.
    fn is_valid_river_destination(&self, from: CellId, to: CellId) -> bool {
        self.cell(from).elevation >= self.cell(to).elevation
            || self.cell(from).water_level == self.cell(to).elevation
    }

    /// Remove rivers at `id` that its current elevation and water level
    /// no longer permit.
    fn validate_rivers(&mut self, id: CellId) {
        if let Some(dir) = self.cells[id.index()].outgoing_river {
            if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
                if !self.is_valid_river_destination(id, neighbor) {
                    self.remove_outgoing_river(id);
                }
            }
        }
        if let Some(dir) = self.cells[id.index()].incoming_river {
            if let Some(neighbor) = self.cells[id.index()].neighbor(dir) {
                if !self.is_valid_river_destination(neighbor, id) {
                    self.remove_incoming_river(id);
                }
            }
        }
    }
}
