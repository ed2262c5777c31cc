//! The [`Grid`] type — a filled hexagon of [`Cell`]s around the origin.
//!
//! A grid of radius `r` owns every lattice point with `|x|, |y|, |z| <= r`
//! in cube terms, `3r² + 3r + 1` cells in all. Cells are stored in a flat
//! vector, column by column along the axial `x` axis, so lookup by
//! coordinate is plain arithmetic.

use log::debug;

use crate::cell::Cell;
use crate::coord::{self, Axial, DIRECTIONS};
use crate::error::{GridError, check_cost};

/// A hexagon-shaped grid of cells centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    radius: i32,
    cells: Vec<Cell>,
    // Index of the first cell of each column, one entry per x in [-r, r].
    columns: Vec<usize>,
}

impl Grid {
    /// Build a grid of the given radius with every cell at cost 1 and
    /// unblocked.
    pub fn new(radius: i32) -> Result<Self, GridError> {
        if radius < 0 {
            return Err(GridError::NegativeRadius(radius));
        }
        let r = radius;
        let n = cell_count(r);
        let mut cells = Vec::with_capacity(n);
        let mut columns = Vec::with_capacity((2 * r + 1) as usize);

        for x in -r..=r {
            columns.push(cells.len());
            for z in -r..=r {
                let y = -x - z;
                if y.abs() <= r {
                    cells.push(Cell::at(Axial::new(x, z)));
                }
            }
        }
        debug_assert_eq!(cells.len(), n);
        debug!("built hex grid of radius {r} with {} cells", cells.len());

        Ok(Self {
            radius,
            cells,
            columns,
        })
    }

    /// The radius this grid was built with.
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells (never true for a constructed grid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `a` lies inside the grid.
    #[inline]
    pub fn contains(&self, a: Axial) -> bool {
        self.idx(a).is_some()
    }

    /// Flat index of `a`, or `None` if outside the grid.
    #[inline]
    fn idx(&self, a: Axial) -> Option<usize> {
        // Widened so coordinates near the i32 limits cannot overflow.
        let (x, y, r) = (a.x as i64, a.y as i64, self.radius as i64);
        if x.abs() > r || y.abs() > r || (x + y).abs() > r {
            return None;
        }
        let col = self.columns[(x + r) as usize];
        let y_min = (-r).max(-x - r);
        Some(col + (y - y_min) as usize)
    }

    /// The cell at `a`, if the grid contains it.
    pub fn get_cell_at(&self, a: Axial) -> Option<&Cell> {
        self.idx(a).map(|i| &self.cells[i])
    }

    fn get_cell_at_mut(&mut self, a: Axial) -> Option<&mut Cell> {
        self.idx(a).map(|i| &mut self.cells[i])
    }

    /// The cells adjacent to `a`, in [`DIRECTIONS`] order. Offsets that fall
    /// outside the grid are skipped, so the result holds 0 to 6 cells.
    pub fn get_neighbors(&self, a: Axial) -> Vec<Cell> {
        DIRECTIONS
            .iter()
            .filter_map(|&d| a.checked_add(d))
            .filter_map(|n| self.get_cell_at(n).copied())
            .collect()
    }

    /// Hex distance between two coordinates, ignoring cost and blocking.
    #[inline]
    pub fn get_distance(&self, a: Axial, b: Axial) -> i32 {
        coord::distance(a, b)
    }

    /// Change the entry cost of the cell at `a`.
    pub fn set_cost(&mut self, a: Axial, cost: f64) -> Result<(), GridError> {
        let cost = check_cost(cost)?;
        let cell = self.get_cell_at_mut(a).ok_or(GridError::OutOfGrid(a))?;
        cell.cost = cost;
        Ok(())
    }

    /// Mark the cell at `a` as blocked or passable.
    pub fn set_blocked(&mut self, a: Axial, blocked: bool) -> Result<(), GridError> {
        let cell = self.get_cell_at_mut(a).ok_or(GridError::OutOfGrid(a))?;
        cell.blocked = blocked;
        Ok(())
    }

    /// Iterator over all cells, column by column.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `3r² + 3r + 1`, the number of hexes within distance `r` of a point.
#[inline]
pub fn cell_count(radius: i32) -> usize {
    let r = radius.max(0) as usize;
    3 * r * r + 3 * r + 1
}
