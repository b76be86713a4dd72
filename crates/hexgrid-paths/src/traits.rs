use hexgrid_core::{Hex, HexBounds};

/// Edge costs at or above this value mark impassable terrain.
///
/// The sentinel is finite so that `g + h` arithmetic stays well-defined,
/// but edges that reach it are never taken: a cell behind one is
/// unreachable, not merely expensive.
pub const UNREACHABLE_COST: f64 = 1.0e12;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Implementations must enumerate a finite reachable region; searches
/// terminate because the set of settled cells can only grow within it.
pub trait Pather {
    /// Append neighbors of `h` into `buf` (up to six on a hex grid).
    /// The caller clears `buf` before calling.
    fn neighbors(&self, h: Hex, buf: &mut Vec<Hex>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    /// Values at or above [`UNREACHABLE_COST`] mark an edge as impassable.
    fn cost(&self, from: Hex, to: Hex) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`,
    /// ignoring obstacles. Must never overestimate the true cost.
    fn estimate(&self, from: Hex, to: Hex) -> f64;
}

impl Pather for HexBounds {
    /// The six adjacent cells, clipped to the bounds.
    fn neighbors(&self, h: Hex, buf: &mut Vec<Hex>) {
        for n in h.neighbors() {
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}
