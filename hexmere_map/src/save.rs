// Versioned JSON save/load for a whole grid.
//
// A save file is a `SaveFile` wrapper — a format version plus the grid —
// serialized with serde_json. Neighbor links are not persisted (they are
// derivable from the grid dimensions); `from_json` rebuilds them after
// deserialization, so a loaded grid is indistinguishable from a freshly
// constructed one with the same edits applied.
//
// Errors are `std::io::Error`: `InvalidData` for a version mismatch,
// malformed JSON, or a cell count that contradicts the stored
// dimensions; real I/O errors pass through from the filesystem helpers.

use crate::grid::HexGrid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Current save format version. Bump on any breaking layout change.
pub const SAVE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    grid: HexGrid,
}

/// Serialize a grid to a JSON save string.
pub fn to_json(grid: &HexGrid) -> io::Result<String> {
    let save = SaveFile {
        version: SAVE_VERSION,
        grid: grid.clone(),
    };
    Ok(serde_json::to_string(&save)?)
}

/// Deserialize a grid from a JSON save string, rebuilding neighbor links.
pub fn from_json(json: &str) -> io::Result<HexGrid> {
    let save: SaveFile = serde_json::from_str(json)?;
    if save.version != SAVE_VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "unsupported save version {} (expected {SAVE_VERSION})",
                save.version
            ),
        ));
    }

    let mut grid = save.grid;
    let expected = (grid.cell_count_x().max(0) * grid.cell_count_z().max(0)) as usize;
    if grid.len() != expected {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "cell count {} does not match {}x{} dimensions",
                grid.len(),
                grid.cell_count_x(),
                grid.cell_count_z()
            ),
        ));
    }

    grid.wire_neighbors();
    Ok(grid)
}

/// Write a grid to a save file.
pub fn save_to_file<P: AsRef<Path>>(grid: &HexGrid, path: P) -> io::Result<()> {
    fs::write(path, to_json(grid)?)
}

/// Read a grid from a save file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<HexGrid> {
    from_json(&fs::read_to_string(path)?)
}
