// hexmere_search — pathfinding over the Hexmere map model.
//
// Two modules:
// - `queue.rs`:       CellPriorityQueue — an integer-bucketed priority queue
//                     keyed by absolute priority, with in-place decrease-key.
// - `pathfinding.rs`: HexPathfinder — Dijkstra-with-heuristic search with
//                     turn-quantized movement costs and search-phase
//                     versioning that avoids resetting cell state between
//                     searches.
//
// The map crate stays read-only during a search: all transient per-cell
// search state (distances, heuristics, phase stamps, parent links, queue
// links) lives on this side, in parallel vectors indexed by `CellId`.
//
// **Critical constraint: determinism.** A search is a pure function of
// the grid and the (from, to, speed) query. Bucket order within a
// priority is last-in-first-out, so repeated identical queries return
// identical paths, not merely identical costs.

pub mod pathfinding;
pub mod queue;
