use hexgrid_core::{Axial, DIRECTIONS, Grid, distance};

/// Minimal search interface — which positions exist and which can be
/// entered from a given one.
pub trait Pather {
    /// Whether `p` is part of the searchable area.
    fn contains(&self, p: Axial) -> bool;

    /// Append the enterable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Axial, buf: &mut Vec<Axial>);
}

/// Pather with weighted moves.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` onto adjacent `to`. Must be `>= 1`.
    fn cost(&self, from: Axial, to: Axial) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Axial, to: Axial) -> f64;
}

impl Pather for Grid {
    #[inline]
    fn contains(&self, p: Axial) -> bool {
        Grid::contains(self, p)
    }

    /// In-grid neighbours that are not blocked, in [`DIRECTIONS`] order.
    fn neighbors(&self, p: Axial, buf: &mut Vec<Axial>) {
        for d in DIRECTIONS {
            let Some(n) = p.checked_add(d) else {
                continue;
            };
            if self.get_cell_at(n).is_some_and(|c| !c.blocked) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Grid {
    /// The entry cost of `to`.
    #[inline]
    fn cost(&self, _from: Axial, to: Axial) -> f64 {
        self.get_cell_at(to).map_or(f64::INFINITY, |c| c.cost)
    }
}

impl AstarPather for Grid {
    /// Hex distance; a lower bound because every cell costs at least 1.
    #[inline]
    fn estimate(&self, from: Axial, to: Axial) -> f64 {
        distance(from, to) as f64
    }
}
