use hexgrid_core::Axial;
use log::{debug, trace};

use crate::config::SearchConfig;
use crate::node::Search;
use crate::traits::AstarPather;

/// Compute the cheapest path from `from` to `to` using A*.
///
/// Returns the positions after `from` up to and including `to`, so a
/// search from a position to itself yields an empty path. Returns `None`
/// if either endpoint is outside the searchable area, if `to` cannot be
/// reached, or if the expansion cap in `config` runs out first.
pub fn astar<P: AstarPather>(
    pather: &P,
    from: Axial,
    to: Axial,
    config: &SearchConfig,
) -> Option<Vec<Axial>> {
    if !pather.contains(from) || !pather.contains(to) {
        return None;
    }

    let mut s = Search::new(from, pather.estimate(from, to));
    let mut nbuf = Vec::with_capacity(6);

    let found = 'search: loop {
        let Some(ci) = s.pop() else {
            break 'search None;
        };

        let cp = s.nodes[ci].pos;
        if cp == to {
            break 'search Some(ci);
        }
        if config.exhausted(s.expanded) {
            trace!("path {from} -> {to}: stopped after {} expansions", s.expanded);
            break 'search None;
        }

        let current_g = s.nodes[ci].g;
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if s.closed.contains(&np) {
                continue;
            }
            let tentative = current_g + pather.cost(cp, np);
            s.relax(ci, np, tentative, pather.estimate(np, to));
        }
    };

    match found {
        Some(goal) => {
            debug!(
                "path {from} -> {to}: cost {}, {} expansions",
                s.nodes[goal].g, s.expanded
            );
            Some(s.path_to(goal))
        }
        None => {
            debug!("path {from} -> {to}: unreachable, {} expansions", s.expanded);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use hexgrid_core::{Grid, coord};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn cost_of(g: &Grid, path: &[Axial]) -> f64 {
        path.iter().map(|&p| g.get_cell_at(p).unwrap().cost).sum()
    }

    fn assert_walkable(g: &Grid, from: Axial, path: &[Axial]) {
        let mut prev = from;
        for &p in path {
            assert_eq!(coord::distance(prev, p), 1, "{prev} -> {p}");
            assert!(!g.get_cell_at(p).unwrap().blocked);
            prev = p;
        }
    }

    #[test]
    fn same_endpoint_is_empty() {
        let g = Grid::new(2).unwrap();
        let p = Axial::new(1, -1);
        assert_eq!(astar(&g, p, p, &SearchConfig::default()), Some(vec![]));
    }

    #[test]
    fn blocked_start_is_a_valid_origin() {
        let mut g = Grid::new(2).unwrap();
        let start = Axial::new(-1, 0);
        g.set_blocked(start, true).unwrap();
        let cfg = SearchConfig::default();

        assert_eq!(astar(&g, start, start, &cfg), Some(vec![]));

        let to = Axial::new(2, -1);
        let path = astar(&g, start, to, &cfg).unwrap();
        assert_eq!(path.len() as i32, g.get_distance(start, to));
        assert_eq!(path.last(), Some(&to));
        assert_walkable(&g, start, &path);
    }

    #[test]
    fn straight_across_open_grid() {
        let g = Grid::new(2).unwrap();
        let from = Axial::new(-2, 1);
        let to = Axial::new(2, -1);
        let path = astar(&g, from, to, &SearchConfig::default()).unwrap();
        assert_eq!(path.len() as i32, g.get_distance(from, to));
        assert_eq!(path.len(), 4);
        assert_eq!(*path.last().unwrap(), to);
        assert!(!path.contains(&from));
        assert_walkable(&g, from, &path);
    }

    #[test]
    fn detours_around_blocked_center() {
        let mut g = Grid::new(2).unwrap();
        g.set_blocked(Axial::ZERO, true).unwrap();
        let from = Axial::new(-1, 0);
        let to = Axial::new(1, 0);
        let path = astar(&g, from, to, &SearchConfig::default()).unwrap();
        assert_eq!(path.len(), 3);
        assert!(!path.contains(&Axial::ZERO));
        assert_eq!(path[2], to);
        assert_walkable(&g, from, &path);
    }

    #[test]
    fn prefers_cheap_cells_over_short_routes() {
        let mut g = Grid::new(2).unwrap();
        g.set_cost(Axial::ZERO, 10.0).unwrap();
        let from = Axial::new(-1, 0);
        let to = Axial::new(1, 0);
        let path = astar(&g, from, to, &SearchConfig::default()).unwrap();
        assert_eq!(cost_of(&g, &path), 3.0);
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let mut g = Grid::new(3).unwrap();
        let target = Axial::new(2, -1);
        for n in target.neighbors() {
            if g.contains(n) {
                g.set_blocked(n, true).unwrap();
            }
        }
        assert_eq!(astar(&g, Axial::ZERO, target, &SearchConfig::default()), None);
    }

    #[test]
    fn blocked_target_is_unreachable() {
        let mut g = Grid::new(2).unwrap();
        g.set_blocked(Axial::new(1, 0), true).unwrap();
        assert_eq!(
            astar(&g, Axial::ZERO, Axial::new(1, 0), &SearchConfig::default()),
            None
        );
    }

    #[test]
    fn off_grid_endpoints() {
        let g = Grid::new(2).unwrap();
        let cfg = SearchConfig::default();
        assert_eq!(astar(&g, Axial::ZERO, Axial::new(3, 0), &cfg), None);
        assert_eq!(astar(&g, Axial::new(0, -3), Axial::ZERO, &cfg), None);
    }

    #[test]
    fn expansion_cap_gives_up() {
        let g = Grid::new(4).unwrap();
        let cfg = SearchConfig::default().with_max_expansions(2);
        assert_eq!(astar(&g, Axial::new(-4, 0), Axial::new(4, 0), &cfg), None);
        let cfg = SearchConfig::default().with_max_expansions(1000);
        assert!(astar(&g, Axial::new(-4, 0), Axial::new(4, 0), &cfg).is_some());
    }

    #[test]
    fn matches_uniform_cost_search_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut g = Grid::new(4).unwrap();
            let cells: Vec<Axial> = g.iter().map(|c| c.pos).collect();
            for &p in &cells {
                g.set_cost(p, rng.random_range(1..=5) as f64).unwrap();
                if p != Axial::ZERO && rng.random_range(0..10) == 0 {
                    g.set_blocked(p, true).unwrap();
                }
            }

            let cfg = SearchConfig::default();
            let reached = range(&g, Axial::ZERO, f64::MAX, &cfg);
            for n in &reached {
                let path = astar(&g, Axial::ZERO, n.pos, &cfg).unwrap();
                assert_walkable(&g, Axial::ZERO, &path);
                assert_eq!(cost_of(&g, &path), n.cost, "to {}", n.pos);
            }
            for &p in &cells {
                if p != Axial::ZERO && !reached.iter().any(|n| n.pos == p) {
                    assert_eq!(astar(&g, Axial::ZERO, p, &cfg), None);
                }
            }
        }
    }
}
