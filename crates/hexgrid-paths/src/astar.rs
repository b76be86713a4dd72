//! A* least-cost search.

use std::collections::BinaryHeap;
use std::collections::hash_map::Entry;

use hexgrid_core::Hex;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::node::{FrontierRef, Node};
use crate::traits::{AstarPather, UNREACHABLE_COST};

/// Compute the least-cost path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints) or `None` if no path
/// exists. Among equal-cost alternatives the result is deterministic:
/// frontier selection orders by priority first, coordinate order second.
///
/// All search state is local to the call; nothing is shared or reused
/// across invocations.
pub fn astar_path<P: AstarPather>(pather: &P, from: Hex, to: Hex) -> Option<Vec<Hex>> {
    if from == to {
        return Some(vec![from]);
    }

    let mut nodes: FxHashMap<Hex, Node> = FxHashMap::default();
    nodes.insert(
        from,
        Node {
            g: 0.0,
            parent: None,
            open: true,
        },
    );

    let mut open: BinaryHeap<FrontierRef> = BinaryHeap::new();
    open.push(FrontierRef {
        f: OrderedFloat(pather.estimate(from, to)),
        hex: from,
    });

    let mut nbuf: Vec<Hex> = Vec::with_capacity(6);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ch = current.hex;

        // Settle the selected cell, skipping stale heap entries left behind
        // by earlier cost improvements.
        let current_g = match nodes.get_mut(&ch) {
            Some(n) if n.open => {
                if ch == to {
                    break 'search true;
                }
                n.open = false;
                n.g
            }
            _ => continue,
        };

        nbuf.clear();
        pather.neighbors(ch, &mut nbuf);

        for &nh in nbuf.iter() {
            let step = pather.cost(ch, nh);
            if step >= UNREACHABLE_COST {
                continue;
            }
            let tentative = current_g + step;

            match nodes.entry(nh) {
                Entry::Occupied(mut e) => {
                    let n = e.get_mut();
                    // Settled cells are final; frontier cells improve only
                    // on a strictly lower cost.
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
                f: OrderedFloat(tentative + pather.estimate(nh, to)),
                hex: nh,
            });
        }
    };

    if !found {
        return None;
    }

    // Reconstruct by walking predecessors back from the goal, then reverse
    // so the path runs start → goal.
    let mut path = Vec::new();
    let mut cur = Some(to);
    while let Some(h) = cur {
        path.push(h);
        cur = nodes.get(&h).and_then(|n| n.parent);
    }
    path.reverse();
    Some(path)
}
