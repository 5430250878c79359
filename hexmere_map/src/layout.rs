// Projection constants for the hex lattice.
//
// `HexLayout` carries the cell size used to project hex coordinates to
// and from world-space positions. It is passed explicitly to the
// conversion functions in `coords.rs` and stored on the `HexGrid`, so a
// saved map carries its own projection — there is no process-wide
// metrics state.

use serde::{Deserialize, Serialize};

/// Ratio between a hexagon's inner radius (edge midpoint) and outer
/// radius (corner): sqrt(3) / 2.
pub const OUTER_TO_INNER: f32 = 0.866_025_4;

/// Cell size for the hex-to-world projection. Cells are pointy-top:
/// `outer_radius` is the center-to-corner distance, and the derived
/// inner radius is the center-to-edge distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    pub outer_radius: f32,
}

impl HexLayout {
    pub fn new(outer_radius: f32) -> Self {
        Self { outer_radius }
    }

    /// Center-to-edge distance, derived from the outer radius.
    pub fn inner_radius(&self) -> f32 {
        self.outer_radius * OUTER_TO_INNER
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self::new(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_radius_is_derived() {
        let layout = HexLayout::new(10.0);
        assert!((layout.inner_radius() - 8.660_254).abs() < 1e-4);
    }

    #[test]
    fn layout_serialization_roundtrip() {
        let layout = HexLayout::new(4.0);
        let json = serde_json::to_string(&layout).unwrap();
        let restored: HexLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, restored);
    }
}
