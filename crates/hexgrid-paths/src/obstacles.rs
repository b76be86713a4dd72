//! Per-mover obstacle cost tables.

use hexgrid_core::Hex;
use rustc_hash::FxHashMap;

/// How much of an obstacle a cell is to the current mover.
///
/// A bird can fly right over a tree, a snake is not impeded by a swamp, a
/// horse runs fastest when the ground is level and clear. `cost` multiplies
/// the normal traversal time: 2.0 means passing through takes twice as
/// long, `f64::INFINITY` marks the cell as completely impassable. Valid
/// multipliers are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub hex: Hex,
    pub cost: f64,
}

impl Obstacle {
    /// Create an obstacle entry.
    #[inline]
    pub const fn new(hex: Hex, cost: f64) -> Self {
        Self { hex, cost }
    }

    /// An entry marking `hex` as completely impassable.
    #[inline]
    pub const fn impassable(hex: Hex) -> Self {
        Self {
            hex,
            cost: f64::INFINITY,
        }
    }
}

/// Coordinate-indexed view of an ordered obstacle list.
///
/// When a coordinate appears more than once in the source list, the first
/// entry wins — the same resolution a front-to-back scan of the list would
/// produce. Lookup is O(1).
#[derive(Debug, Clone, Default)]
pub struct ObstacleTable {
    multipliers: FxHashMap<Hex, f64>,
}

impl ObstacleTable {
    /// Build a table from an ordered list of entries.
    pub fn new(obstacles: &[Obstacle]) -> Self {
        obstacles.iter().copied().collect()
    }

    /// Traversal-time multiplier for `hex`; 1.0 when unobstructed.
    #[inline]
    pub fn multiplier(&self, hex: Hex) -> f64 {
        self.multipliers.get(&hex).copied().unwrap_or(1.0)
    }

    /// Number of distinct obstructed coordinates.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl FromIterator<Obstacle> for ObstacleTable {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        let mut multipliers = FxHashMap::default();
        for ob in iter {
            multipliers.entry(ob.hex).or_insert(ob.cost);
        }
        Self { multipliers }
    }
}
