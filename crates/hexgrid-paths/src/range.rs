use hexgrid_core::Axial;
use log::{debug, trace};

use crate::config::SearchConfig;
use crate::node::{PathNode, Search};
use crate::traits::WeightedPather;

/// Every position reachable from `start` with accumulated entry cost at
/// most `budget`, with that cost.
///
/// This is a uniform-cost (Dijkstra) expansion: no heuristic, the frontier
/// is ordered by accumulated cost alone. `start` itself is never part of
/// the result, and a start that cannot be entered (blocked) is still a
/// valid origin. Order of the result is the order positions were first
/// reached.
pub fn range<P: WeightedPather>(
    pather: &P,
    start: Axial,
    budget: f64,
    config: &SearchConfig,
) -> Vec<PathNode> {
    if budget.is_nan() || !pather.contains(start) {
        return Vec::new();
    }

    let mut s = Search::new(start, 0.0);
    let mut nbuf = Vec::with_capacity(6);

    while let Some(ci) = s.pop() {
        let cp = s.nodes[ci].pos;
        let current_g = s.nodes[ci].g;

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if s.closed.contains(&np) {
                continue;
            }
            let tentative = current_g + pather.cost(cp, np);
            if tentative > budget {
                continue;
            }
            s.relax(ci, np, tentative, 0.0);
        }

        if config.exhausted(s.expanded) {
            trace!("range from {start}: stopped after {} expansions", s.expanded);
            break;
        }
    }

    debug!(
        "range from {start} with budget {budget}: {} cells, {} expansions",
        s.nodes.len() - 1,
        s.expanded
    );

    s.nodes
        .iter()
        .skip(1)
        .map(|n| PathNode {
            pos: n.pos,
            cost: n.g,
        })
        .collect()
}
