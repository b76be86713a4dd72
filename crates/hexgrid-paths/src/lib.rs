//! Pathfinding for hexagonal grids.
//!
//! This crate computes least-cost routes on hex grids where the cost of
//! entering a cell depends on the mover: a bird flies over the tree a horse
//! has to go around. Per-mover terrain interaction is described by an
//! ordered list of [`Obstacle`] entries.
//!
//! - **A\*** least-cost paths ([`find_path`], [`astar_path`])
//! - **Dijkstra** movement-range maps ([`dijkstra_map`])
//!
//! Algorithms reach the grid through the [`Pather`] trait hierarchy, so any
//! cell model with a finite reachable region works; [`MoverPather`] layers
//! an [`ObstacleTable`] over such a grid to give one mover its cost profile.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra movement range |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod dijkstra;
mod navigate;
mod node;
mod obstacles;
mod traits;

pub use astar::astar_path;
pub use dijkstra::{CostMap, PathNode, dijkstra_map};
pub use navigate::{MoverPather, PathError, STEP_COST, find_path};
pub use obstacles::{Obstacle, ObstacleTable};
pub use traits::{AstarPather, Pather, UNREACHABLE_COST, WeightedPather};
