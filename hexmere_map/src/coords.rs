// Cube hex coordinates.
//
// `HexCoord` is the identity of a cell: an immutable cube-coordinate
// triple (x, y, z) with the invariant x + y + z = 0, stored compactly as
// (x, z) with y derived. Conversions exist in both directions to the
// rectangular offset grid (column, row — how grids are sized and
// addressed) and to world-space positions (via `HexLayout`).
//
// `distance_to` is the exact hex-grid step count between two cells. The
// pathfinder uses it as a search heuristic; it counts edges, not edge
// costs.
//
// See also: `layout.rs` for the projection constants, `grid.rs` for the
// offset addressing that `from_offset`/`to_offset` feed.

use crate::layout::HexLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cube hex coordinate. Invariant: x + y + z = 0 (y is derived).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    x: i32,
    z: i32,
}

impl HexCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn x(self) -> i32 {
        self.x
    }

    /// Derived from the zero-sum invariant.
    pub fn y(self) -> i32 {
        -self.x - self.z
    }

    pub fn z(self) -> i32 {
        self.z
    }

    /// Convert a rectangular offset position (column, row) to cube
    /// coordinates, undoing the shear of alternating rows.
    pub fn from_offset(col: i32, row: i32) -> Self {
        Self::new(col - row / 2, row)
    }

    /// Inverse of `from_offset`.
    pub fn to_offset(self) -> (i32, i32) {
        (self.x + self.z / 2, self.z)
    }

    /// Inverse-project a world-space point to the nearest cube coordinate.
    ///
    /// All three cube components are rounded independently; if rounding
    /// breaks the zero-sum invariant, the component with the largest
    /// rounding error is recomputed from the other two. When y has the
    /// largest error, x and z are already the best-rounded pair and y is
    /// derived anyway, so no correction is needed. The returned
    /// coordinate always satisfies the invariant.
    pub fn from_world(layout: &HexLayout, wx: f32, wz: f32) -> Self {
        let mut x = wx / (layout.inner_radius() * 2.0);
        let mut y = -x;

        // Every two rows shift the lattice one cell along x.
        let offset = wz / (layout.outer_radius * 3.0);
        x -= offset;
        y -= offset;

        let mut ix = x.round() as i32;
        let iy = y.round() as i32;
        let mut iz = (-x - y).round() as i32;

        if ix + iy + iz != 0 {
            let dx = (x - ix as f32).abs();
            let dy = (y - iy as f32).abs();
            let dz = (-x - y - iz as f32).abs();

            if dx > dy && dx > dz {
                ix = -iy - iz;
            } else if dz > dy {
                iz = -ix - iy;
            }
        }

        Self::new(ix, iz)
    }

    /// Project to the cell-center world position.
    pub fn to_world(self, layout: &HexLayout) -> (f32, f32) {
        let (col, row) = self.to_offset();
        let wx = (col as f32 + row as f32 * 0.5 - (row / 2) as f32) * (layout.inner_radius() * 2.0);
        let wz = row as f32 * (layout.outer_radius * 1.5);
        (wx, wz)
    }

    /// Hex-grid distance: the number of cell steps between two coordinates,
    /// `(|dx| + |dy| + |dz|) / 2`.
    pub fn distance_to(self, other: Self) -> i32 {
        ((self.x - other.x).abs() + (self.y() - other.y()).abs() + (self.z - other.z).abs()) / 2
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y(), self.z)
    }
}
