// Shared helpers for the end-to-end scenario tests.
//
// The scenarios exercise the real map and search crates together:
// build a grid → edit terrain → find paths → verify costs and shapes,
// plus save/load round-trips through the persistence layer. The only
// test-specific code here is the offset-coordinate convenience wrappers;
// everything else uses the same code paths as a real caller.
//
// See also: `tests/search_scenarios.rs` and `tests/persistence.rs`.

use hexmere_map::cell::CellId;
use hexmere_map::coords::HexCoord;
use hexmere_map::grid::HexGrid;
use hexmere_map::layout::HexLayout;

/// A flat, dry grid with default layout.
pub fn flat_grid(width: i32, height: i32) -> HexGrid {
    HexGrid::new(width, height, HexLayout::default())
}

/// Cell lookup by offset coordinates. Panics on out-of-bounds — tests
/// address cells they know exist.
pub fn at(grid: &HexGrid, col: i32, row: i32) -> CellId {
    grid.get_cell(HexCoord::from_offset(col, row))
        .unwrap_or_else(|| panic!("({col},{row}) outside the grid"))
}

/// Hex distance between two cells.
pub fn hex_distance(grid: &HexGrid, a: CellId, b: CellId) -> i32 {
    grid.cell(a).coords.distance_to(grid.cell(b).coords)
}
