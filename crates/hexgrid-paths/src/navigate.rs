//! Mover-facing navigation over an obstacle table.

use std::fmt;

use hexgrid_core::Hex;

use crate::astar::astar_path;
use crate::obstacles::{Obstacle, ObstacleTable};
use crate::traits::{AstarPather, Pather, UNREACHABLE_COST, WeightedPather};

/// Base traversal time of one step over clear terrain.
pub const STEP_COST: f64 = 1.0;

/// Error returned when navigation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// No route connects the two cells for this mover.
    NotFound { from: Hex, to: Hex },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotFound { from, to } => {
                write!(f, "no path available from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A grid seen through one mover's obstacle table.
///
/// Wraps any cell model with an [`ObstacleTable`] and a base step cost,
/// yielding the full [`AstarPather`] interface for that mover.
pub struct MoverPather<'a, P> {
    grid: &'a P,
    obstacles: ObstacleTable,
    step_cost: f64,
}

impl<'a, P: Pather> MoverPather<'a, P> {
    /// Wrap `grid` with the mover's obstacle list, at the default
    /// [`STEP_COST`].
    pub fn new(grid: &'a P, obstacles: &[Obstacle]) -> Self {
        Self::with_step_cost(grid, obstacles, STEP_COST)
    }

    /// Wrap `grid` with an explicit base step cost.
    pub fn with_step_cost(grid: &'a P, obstacles: &[Obstacle], step_cost: f64) -> Self {
        Self {
            grid,
            obstacles: ObstacleTable::new(obstacles),
            step_cost,
        }
    }
}

impl<P: Pather> Pather for MoverPather<'_, P> {
    fn neighbors(&self, h: Hex, buf: &mut Vec<Hex>) {
        self.grid.neighbors(h, buf);
    }
}

impl<P: Pather> WeightedPather for MoverPather<'_, P> {
    /// One step of base cost, scaled by the obstacle multiplier of the
    /// destination cell. An infinite multiplier makes the edge impassable.
    fn cost(&self, _from: Hex, to: Hex) -> f64 {
        let m = self.obstacles.multiplier(to);
        if m.is_infinite() {
            return UNREACHABLE_COST;
        }
        self.step_cost * m
    }
}

impl<P: Pather> AstarPather for MoverPather<'_, P> {
    /// Straight-line planar distance, scaled to the base step cost.
    ///
    /// Adjacent cell centers project exactly one unit apart, so this never
    /// overestimates as long as obstacle multipliers are ≥ 1.
    fn estimate(&self, from: Hex, to: Hex) -> f64 {
        let (ax, ay) = from.to_plane();
        let (bx, by) = to.to_plane();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt() * self.step_cost
    }
}

/// Navigate a path from `start` to `goal`, avoiding impassable cells.
///
/// `obstacles` describes how the current mover interacts with terrain; its
/// order matters when a coordinate is listed twice (the first entry wins).
/// On success the returned path runs start → goal inclusive. Fails with
/// [`PathError::NotFound`] when no route exists, including the case of an
/// impassable goal.
pub fn find_path<P: Pather>(
    grid: &P,
    start: Hex,
    goal: Hex,
    obstacles: &[Obstacle],
) -> Result<Vec<Hex>, PathError> {
    let pather = MoverPather::new(grid, obstacles);
    match astar_path(&pather, start, goal) {
        Some(path) => Ok(path),
        None => {
            log::debug!("no path available from {start} to {goal}");
            Err(PathError::NotFound {
                from: start,
                to: goal,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid_core::HexBounds;

    /// Total traversal cost of a path under an obstacle list.
    fn path_cost(path: &[Hex], obstacles: &[Obstacle]) -> f64 {
        let table = ObstacleTable::new(obstacles);
        path[1..]
            .iter()
            .map(|&h| STEP_COST * table.multiplier(h))
            .sum()
    }

    #[test]
    fn unobstructed_path_length_matches_hex_distance() {
        let bounds = HexBounds::new(0, 0, 5, 5);
        let start = Hex::new(1, 1);
        for goal in bounds.iter() {
            let path = find_path(&bounds, start, goal, &[]).unwrap();
            assert_eq!(path.len() as i32 - 1, start.distance(goal), "goal {goal}");
        }
    }

    #[test]
    fn single_cell_path() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let c = Hex::new(1, 1);
        assert_eq!(find_path(&bounds, c, c, &[]), Ok(vec![c]));
    }

    #[test]
    fn forced_through_sole_open_neighbor() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(1, 1);
        let open = Hex::new(2, 1);
        let obstacles: Vec<Obstacle> = start
            .neighbors()
            .into_iter()
            .filter(|&n| bounds.contains(n) && n != open)
            .map(Obstacle::impassable)
            .collect();
        let path = find_path(&bounds, start, Hex::new(2, 2), &obstacles).unwrap();
        assert!(path.contains(&open), "path {path:?} skips the open neighbor");
    }

    #[test]
    fn unit_multiplier_changes_nothing() {
        let bounds = HexBounds::new(0, 0, 4, 4);
        let start = Hex::new(0, 0);
        let goal = Hex::new(3, 2);
        let clear = find_path(&bounds, start, goal, &[]).unwrap();
        let with_unit = find_path(
            &bounds,
            start,
            goal,
            &[Obstacle::new(clear[1], 1.0)],
        )
        .unwrap();
        assert_eq!(clear, with_unit);
    }

    #[test]
    fn impassable_goal_fails() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 2);
        let result = find_path(&bounds, start, goal, &[Obstacle::impassable(goal)]);
        assert_eq!(
            result,
            Err(PathError::NotFound {
                from: start,
                to: goal
            })
        );
    }

    #[test]
    fn direct_route_on_three_by_three() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let path = find_path(&bounds, Hex::new(0, 0), Hex::new(2, 0), &[]).unwrap();
        assert_eq!(path, vec![Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0)]);
    }

    #[test]
    fn impassable_between_cell_forces_detour() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let blocked = Hex::new(1, 0);
        let obstacles = [Obstacle::impassable(blocked)];
        let path = find_path(&bounds, start, goal, &obstacles).unwrap();
        assert!(!path.contains(&blocked));
        let clear = find_path(&bounds, start, goal, &[]).unwrap();
        assert!(path_cost(&path, &obstacles) > path_cost(&clear, &[]));
    }

    #[test]
    fn raising_a_multiplier_never_lowers_total_cost() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let mid = Hex::new(1, 0);

        let mut last_cost = 0.0;
        for m in [1.0, 1.5, 2.5, 5.0, 20.0] {
            let obstacles = [Obstacle::new(mid, m)];
            let path = find_path(&bounds, start, goal, &obstacles).unwrap();
            let cost = path_cost(&path, &obstacles);
            assert!(
                cost >= last_cost,
                "cost dropped from {last_cost} to {cost} at multiplier {m}"
            );
            last_cost = cost;
        }
    }

    #[test]
    fn reroutes_only_when_alternative_is_cheaper() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let mid = Hex::new(1, 0);

        // Direct route costs 1.5 + 1 = 2.5, detour costs 3: stay direct.
        let cheap = find_path(&bounds, start, goal, &[Obstacle::new(mid, 1.5)]).unwrap();
        assert!(cheap.contains(&mid));

        // Direct route would cost 5 + 1 = 6: take the 3-cost detour.
        let dear = find_path(&bounds, start, goal, &[Obstacle::new(mid, 5.0)]).unwrap();
        assert!(!dear.contains(&mid));
        assert_eq!(dear.len(), 4);
    }

    #[test]
    fn duplicate_obstacle_first_entry_wins() {
        let bounds = HexBounds::new(0, 0, 3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let mid = Hex::new(1, 0);

        // Benign entry shadows the impassable one that follows it.
        let shadowed = find_path(
            &bounds,
            start,
            goal,
            &[Obstacle::new(mid, 1.0), Obstacle::impassable(mid)],
        )
        .unwrap();
        assert!(shadowed.contains(&mid));

        // Reversed order: the impassable entry wins and forces the detour.
        let blocking = find_path(
            &bounds,
            start,
            goal,
            &[Obstacle::impassable(mid), Obstacle::new(mid, 1.0)],
        )
        .unwrap();
        assert!(!blocking.contains(&mid));
    }

    #[test]
    fn equal_cost_alternatives_resolve_deterministically() {
        let bounds = HexBounds::new(0, 0, 5, 5);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 2);
        let first = find_path(&bounds, start, goal, &[]).unwrap();
        for _ in 0..5 {
            assert_eq!(find_path(&bounds, start, goal, &[]).unwrap(), first);
        }
    }

    #[test]
    fn error_names_the_pair() {
        let err = PathError::NotFound {
            from: Hex::new(0, 0),
            to: Hex::new(2, 1),
        };
        assert_eq!(
            err.to_string(),
            "no path available from (0, 0) to (2, 1)"
        );
    }
}
