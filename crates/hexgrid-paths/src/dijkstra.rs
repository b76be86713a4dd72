//! Dijkstra movement-range maps.

use std::collections::BinaryHeap;
use std::collections::hash_map::Entry;

use hexgrid_core::Hex;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::node::{FrontierRef, Node};
use crate::traits::{UNREACHABLE_COST, WeightedPather};

/// A cell with its accumulated cost from the nearest source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub hex: Hex,
    pub cost: f64,
}

/// Result of a [`dijkstra_map`] query.
///
/// Holds every cell reached within the cost budget. Nodes are listed in
/// settling order: cost-ascending, coordinate order among equal costs.
#[derive(Debug, Clone, Default)]
pub struct CostMap {
    costs: FxHashMap<Hex, f64>,
    nodes: Vec<PathNode>,
}

impl CostMap {
    /// Final cost of reaching `h`, or `None` if it was not reached.
    #[inline]
    pub fn cost_at(&self, h: Hex) -> Option<f64> {
        self.costs.get(&h).copied()
    }

    /// Whether `h` was reached within the budget.
    #[inline]
    pub fn contains(&self, h: Hex) -> bool {
        self.costs.contains_key(&h)
    }

    /// All reached cells in settling order.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Number of reached cells.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Compute a multi-source movement-range map.
///
/// Every source starts at cost 0; expansion stops where the cumulative cost
/// would exceed `max_cost`. The typical caller asks "which cells can this
/// mover reach with its remaining movement budget". All search state is
/// local to the call.
pub fn dijkstra_map<P: WeightedPather>(pather: &P, sources: &[Hex], max_cost: f64) -> CostMap {
    let mut nodes: FxHashMap<Hex, Node> = FxHashMap::default();
    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();

    for &src in sources {
        if let Entry::Vacant(e) = nodes.entry(src) {
            e.insert(Node {
                g: 0.0,
                parent: None,
                open: true,
            });
            open.push(FrontierRef {
                f: OrderedFloat(0.0),
                hex: src,
            });
        }
    }

    let mut map = CostMap::default();
    let mut nbuf: Vec<Hex> = Vec::with_capacity(6);

    while let Some(current) = open.pop() {
        let ch = current.hex;
        let current_g = match nodes.get_mut(&ch) {
            Some(n) if n.open => {
                n.open = false;
                n.g
            }
            _ => continue,
        };

        map.costs.insert(ch, current_g);
        map.nodes.push(PathNode {
            hex: ch,
            cost: current_g,
        });

        nbuf.clear();
        pather.neighbors(ch, &mut nbuf);

        for &nh in nbuf.iter() {
            let step = pather.cost(ch, nh);
            if step >= UNREACHABLE_COST {
                continue;
            }
            let tentative = current_g + step;
            if tentative > max_cost {
                continue;
            }

            match nodes.entry(nh) {
                Entry::Occupied(mut e) => {
                    let n = e.get_mut();
                    if !n.open || tentative >= n.g {
                        continue;
                    }
                    n.g = tentative;
                    n.parent = Some(ch);
                }
                Entry::Vacant(e) => {
                    e.insert(Node {
                        g: tentative,
                        parent: Some(ch),
                        open: true,
                    });
                }
            }

            open.push(FrontierRef {
                f: OrderedFloat(tentative),
                hex: nh,
            });
        }
    }

    map
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            hex: Hex::new(3, 7),
            cost: 4.5,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
