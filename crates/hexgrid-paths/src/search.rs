//! Cell-level search entry points on [`Grid`].

use hexgrid_core::{Axial, Cell, Grid, GridError};

use crate::astar::astar;
use crate::config::SearchConfig;
use crate::range::range;

/// Range and path queries answered in terms of grid [`Cell`]s.
pub trait GridSearch {
    /// Cells reachable from `start` with total entry cost at most
    /// `movement`, excluding `start`. A zero, negative or NaN budget
    /// yields no cells.
    fn get_range(&self, start: Axial, movement: f64) -> Vec<Cell> {
        self.get_range_with(start, movement, &SearchConfig::default())
    }

    /// [`get_range`](Self::get_range) that rejects a negative or NaN
    /// budget instead of returning an empty result.
    fn try_get_range(&self, start: Axial, movement: f64) -> Result<Vec<Cell>, GridError> {
        if movement.is_nan() || movement < 0.0 {
            return Err(GridError::InvalidBudget(movement));
        }
        Ok(self.get_range(start, movement))
    }

    /// [`get_range`](Self::get_range) with explicit search settings.
    fn get_range_with(&self, start: Axial, movement: f64, config: &SearchConfig) -> Vec<Cell>;

    /// The cheapest path from `start` to `end`: the cells after `start` up
    /// to and including `end`. Empty if there is no path, if either end is
    /// off the grid, or if `start == end`.
    fn find_path(&self, start: Axial, end: Axial) -> Vec<Cell> {
        self.find_path_with(start, end, &SearchConfig::default())
    }

    /// [`find_path`](Self::find_path) with explicit search settings.
    fn find_path_with(&self, start: Axial, end: Axial, config: &SearchConfig) -> Vec<Cell>;
}

impl GridSearch for Grid {
    fn get_range_with(&self, start: Axial, movement: f64, config: &SearchConfig) -> Vec<Cell> {
        range(self, start, movement, config)
            .iter()
            .filter_map(|n| self.get_cell_at(n.pos).copied())
            .collect()
    }

    fn find_path_with(&self, start: Axial, end: Axial, config: &SearchConfig) -> Vec<Cell> {
        astar(self, start, end, config)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| self.get_cell_at(p).copied())
            .collect()
    }
}

/// Total entry cost of walking `path`.
pub fn path_cost(path: &[Cell]) -> f64 {
    path.iter().map(|c| c.cost).sum()
}
