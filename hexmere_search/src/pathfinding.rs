// Turn-quantized shortest-path search over the cell grid.
//
// `HexPathfinder` runs Dijkstra with a hex-distance heuristic over a
// `HexGrid`, using the bucket queue from `queue.rs` as the frontier. All
// per-cell search state — distance so far, heuristic, phase stamp,
// parent link — lives in parallel vectors here, indexed by `CellId`; the
// grid is never mutated by a search.
//
// ## Search phases
//
// Instead of resetting every cell's state between searches, the
// pathfinder stamps cells with a phase counter that advances by 2 per
// search: cells stamped with the current phase value have been touched
// this search, cells stamped one higher have already been dequeued and
// settled, and anything lower is stale data from an earlier search.
// This keeps repeated queries on a static grid cheap — the cost of a
// search scales with the cells it visits, not with the grid size. Do
// not replace this with a per-search visited reset.
//
// ## Cost model
//
// Per edge, in order: absent, settled, or underwater neighbors are
// skipped; cliff edges are skipped; a road makes the move cost 1 (roads
// pass through walls — a gate); otherwise a wall blocks the edge;
// otherwise flat costs 2 and slopes cost 4. Movement is budgeted in
// turns of `speed` points: when a move crosses a turn boundary, leftover
// points are forfeited and the move is charged from the start of the new
// turn.
//
// The heuristic counts cells (`HexCoord::distance_to`) while edges cost
// 1, 2, or 4, so it is not admissible against true edge costs — the
// search is a deterministic best-effort informed search, not
// guaranteed-shortest A*. This matches the behavior the map model was
// built around and is covered as a characteristic in the scenario tests.
//
// See also: `queue.rs` for the frontier, `hexmere_map::grid` for the
// graph being searched.

use crate::queue::CellPriorityQueue;
use hexmere_map::cell::CellId;
use hexmere_map::direction::{HexDirection, HexEdgeType};
use hexmere_map::grid::HexGrid;

/// Move cost along an edge carrying a road.
const ROAD_MOVE_COST: i32 = 1;
/// Move cost across a flat edge.
const FLAT_MOVE_COST: i32 = 2;
/// Move cost up or down a slope.
const SLOPE_MOVE_COST: i32 = 4;

/// The result of a successful search.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Cell sequence from source to target (inclusive).
    pub cells: Vec<CellId>,
    /// Total turn-quantized cost of the path.
    pub total_cost: i32,
}

/// Reusable search engine. One search runs to completion per
/// `find_path` call; the transient state is owned by this struct and is
/// meaningless outside a call.
#[derive(Clone, Debug)]
pub struct HexPathfinder {
    distance: Vec<i32>,
    heuristic: Vec<i32>,
    search_phase: Vec<u32>,
    path_from: Vec<Option<CellId>>,
    phase: u32,
    frontier: CellPriorityQueue,
}

impl HexPathfinder {
    pub fn new() -> Self {
        Self {
            distance: Vec::new(),
            heuristic: Vec::new(),
            search_phase: Vec::new(),
            path_from: Vec::new(),
            phase: 0,
            frontier: CellPriorityQueue::new(0),
        }
    }

    /// Find a path from `from` to `to` for a mover with `speed` movement
    /// points per turn.
    ///
    /// Returns `None` when no route exists — a normal outcome, distinct
    /// from the zero-length path returned when `from == to`.
    pub fn find_path(
        &mut self,
        grid: &HexGrid,
        from: CellId,
        to: CellId,
        speed: i32,
    ) -> Option<PathResult> {
        debug_assert!(speed > 0, "movement speed must be positive, got {speed}");

        if from == to {
            return Some(PathResult {
                cells: vec![from],
                total_cost: 0,
            });
        }

        self.ensure_capacity(grid.len());
        // Advance by 2: `phase` marks cells touched this search, and the
        // settled stamp below is `phase + 1`.
        self.phase += 2;
        let phase = self.phase;
        self.frontier.clear(grid.len());

        let to_coords = grid.cell(to).coords;

        self.distance[from.index()] = 0;
        self.heuristic[from.index()] = grid.cell(from).coords.distance_to(to_coords);
        self.search_phase[from.index()] = phase;
        self.path_from[from.index()] = None;
        self.frontier.enqueue(from, self.heuristic[from.index()]);

        while let Some(current) = self.frontier.dequeue() {
            self.search_phase[current.index()] += 1;
            if current == to {
                return Some(self.reconstruct(from, to));
            }

            let current_cell = grid.cell(current);
            let current_distance = self.distance[current.index()];
            let current_turn = current_distance / speed;

            for dir in HexDirection::ALL {
                let Some(neighbor) = current_cell.neighbor(dir) else {
                    continue;
                };
                if self.search_phase[neighbor.index()] > phase {
                    continue;
                }
                let neighbor_cell = grid.cell(neighbor);
                if neighbor_cell.is_underwater() {
                    continue;
                }
                let edge =
                    HexEdgeType::between(current_cell.elevation(), neighbor_cell.elevation());
                if edge == HexEdgeType::Cliff {
                    continue;
                }

                let move_cost = if current_cell.has_road_through_edge(dir) {
                    ROAD_MOVE_COST
                } else if current_cell.has_wall_through_edge(dir) {
                    continue;
                } else if edge == HexEdgeType::Flat {
                    FLAT_MOVE_COST
                } else {
                    SLOPE_MOVE_COST
                };

                let mut distance = current_distance + move_cost;
                let turn = distance / speed;
                if turn > current_turn {
                    // The move spills into a new turn: leftover movement
                    // points cannot be carried over, so the move is paid
                    // from the start of that turn.
                    distance = turn * speed + move_cost;
                }

                if self.search_phase[neighbor.index()] < phase {
                    self.search_phase[neighbor.index()] = phase;
                    self.distance[neighbor.index()] = distance;
                    self.path_from[neighbor.index()] = Some(current);
                    self.heuristic[neighbor.index()] =
                        neighbor_cell.coords.distance_to(to_coords);
                    self.frontier
                        .enqueue(neighbor, distance + self.heuristic[neighbor.index()]);
                } else if distance < self.distance[neighbor.index()] {
                    let old_priority =
                        self.distance[neighbor.index()] + self.heuristic[neighbor.index()];
                    self.distance[neighbor.index()] = distance;
                    self.path_from[neighbor.index()] = Some(current);
                    self.frontier.change_priority(
                        neighbor,
                        old_priority,
                        distance + self.heuristic[neighbor.index()],
                    );
                }
            }
        }

        None
    }

    /// Walk the parent links from the target back to the source.
    fn reconstruct(&self, from: CellId, to: CellId) -> PathResult {
        let mut cells = Vec::new();
        let mut current = to;
        loop {
            cells.push(current);
            if current == from {
                break;
            }
            match self.path_from[current.index()] {
                Some(previous) => current = previous,
                None => break,
            }
        }
        cells.reverse();
        PathResult {
            cells,
            total_cost: self.distance[to.index()],
        }
    }

    fn ensure_capacity(&mut self, cell_count: usize) {
        if self.distance.len() < cell_count {
            self.distance.resize(cell_count, 0);
            self.heuristic.resize(cell_count, 0);
            self.search_phase.resize(cell_count, 0);
            self.path_from.resize(cell_count, None);
        }
    }
}

impl Default for HexPathfinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmere_map::coords::HexCoord;
    use hexmere_map::layout::HexLayout;

    fn flat_grid(width: i32, height: i32) -> HexGrid {
        HexGrid::new(width, height, HexLayout::default())
    }

    fn at(grid: &HexGrid, col: i32, row: i32) -> CellId {
        grid.get_cell(HexCoord::from_offset(col, row)).unwrap()
    }

    #[test]
    fn same_cell_is_a_zero_length_path() {
        let grid = flat_grid(3, 3);
        let mut pathfinder = HexPathfinder::new();
        let a = at(&grid, 1, 1);
        let path = pathfinder.find_path(&grid, a, a, 5).unwrap();
        assert_eq!(path.cells, vec![a]);
        assert_eq!(path.total_cost, 0);
    }

    #[test]
    fn straight_row_path() {
        let grid = flat_grid(5, 1);
        let mut pathfinder = HexPathfinder::new();
        let from = at(&grid, 0, 0);
        let to = at(&grid, 4, 0);
        let path = pathfinder.find_path(&grid, from, to, 100).unwrap();
        assert_eq!(path.cells.len(), 5);
        assert_eq!(path.cells.first(), Some(&from));
        assert_eq!(path.cells.last(), Some(&to));
        assert_eq!(path.total_cost, 4 * FLAT_MOVE_COST);
    }

    #[test]
    fn underwater_cells_block_a_corridor() {
        let mut grid = flat_grid(5, 1);
        let mut pathfinder = HexPathfinder::new();
        grid.set_water_level(at(&grid, 2, 0), 1);
        let result = pathfinder.find_path(&grid, at(&grid, 0, 0), at(&grid, 4, 0), 5);
        assert!(result.is_none());
    }

    #[test]
    fn cliffs_are_impassable() {
        let mut grid = flat_grid(5, 1);
        let mut pathfinder = HexPathfinder::new();
        grid.set_elevation(at(&grid, 2, 0), 2);
        let result = pathfinder.find_path(&grid, at(&grid, 0, 0), at(&grid, 4, 0), 5);
        assert!(result.is_none());
    }

    #[test]
    fn slopes_cost_double_flat() {
        let mut grid = flat_grid(3, 1);
        let mut pathfinder = HexPathfinder::new();
        // 0 -> 1 -> 0 elevation profile: two slope moves.
        grid.set_elevation(at(&grid, 1, 0), 1);
        let path = pathfinder
            .find_path(&grid, at(&grid, 0, 0), at(&grid, 2, 0), 100)
            .unwrap();
        assert_eq!(path.total_cost, 2 * SLOPE_MOVE_COST);
    }

    #[test]
    fn walls_block_unless_a_road_gates_through() {
        let mut grid = flat_grid(2, 1);
        let mut pathfinder = HexPathfinder::new();
        let from = at(&grid, 0, 0);
        let to = at(&grid, 1, 0);
        grid.add_wall(from, HexDirection::East);
        assert!(pathfinder.find_path(&grid, from, to, 5).is_none());

        // A road through the walled edge acts as a gate.
        grid.add_road(from, HexDirection::East);
        let path = pathfinder.find_path(&grid, from, to, 5).unwrap();
        assert_eq!(path.total_cost, ROAD_MOVE_COST);
    }

    #[test]
    fn turn_boundary_forfeits_leftover_movement() {
        // Speed 5 on flat ground: moves land at 2, 4, then the third
        // move would reach 6, crossing into turn 1, so it is charged
        // from the turn start: 1 * 5 + 2 = 7.
        let grid = flat_grid(4, 1);
        let mut pathfinder = HexPathfinder::new();
        let path = pathfinder
            .find_path(&grid, at(&grid, 0, 0), at(&grid, 3, 0), 5)
            .unwrap();
        assert_eq!(path.total_cost, 7);
    }

    #[test]
    fn repeated_searches_reuse_state_correctly() {
        let mut grid = flat_grid(6, 6);
        let mut pathfinder = HexPathfinder::new();
        grid.set_elevation(at(&grid, 2, 2), 3);
        grid.set_water_level(at(&grid, 3, 1), 2);

        let from = at(&grid, 0, 0);
        let to = at(&grid, 5, 5);
        let first = pathfinder.find_path(&grid, from, to, 5).unwrap();
        for _ in 0..10 {
            let again = pathfinder.find_path(&grid, from, to, 5).unwrap();
            assert_eq!(again.total_cost, first.total_cost);
            assert_eq!(again.cells, first.cells);
        }
        // Interleave an unrelated query; the original is unaffected.
        pathfinder.find_path(&grid, to, from, 3).unwrap();
        let after = pathfinder.find_path(&grid, from, to, 5).unwrap();
        assert_eq!(after.total_cost, first.total_cost);
    }

    #[test]
    fn path_steps_are_adjacent() {
        let mut grid = flat_grid(8, 8);
        let mut pathfinder = HexPathfinder::new();
        for col in 1..7 {
            grid.set_elevation(at(&grid, col, 3), 4);
        }
        let path = pathfinder
            .find_path(&grid, at(&grid, 0, 0), at(&grid, 7, 7), 5)
            .unwrap();
        for pair in path.cells.windows(2) {
            let step = grid.cell(pair[0]).coords.distance_to(grid.cell(pair[1]).coords);
            assert_eq!(step, 1, "non-adjacent step in {:?}", path.cells);
        }
    }

    #[test]
    fn road_shortcut_beats_open_ground() {
        let mut with_road = flat_grid(5, 1);
        let from = at(&with_road, 0, 0);
        let to = at(&with_road, 4, 0);
        for col in 0..4 {
            with_road.add_road(at(&with_road, col, 0), HexDirection::East);
        }
        let without_road = flat_grid(5, 1);

        let mut pathfinder = HexPathfinder::new();
        let on_road = pathfinder.find_path(&with_road, from, to, 100).unwrap();
        let off_road = pathfinder.find_path(&without_road, from, to, 100).unwrap();
        assert_eq!(on_road.total_cost, 4 * ROAD_MOVE_COST);
        assert_eq!(off_road.total_cost, 4 * FLAT_MOVE_COST);
    }
}
