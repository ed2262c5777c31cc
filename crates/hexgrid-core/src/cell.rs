//! The [`Cell`] type — one hex of the grid with its traversal attributes.

use crate::coord::Axial;
use crate::error::{GridError, check_cost};

/// A hex cell: a fixed position plus the price to enter it and whether it
/// can be entered at all.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Axial,
    pub cost: f64,
    pub blocked: bool,
}

impl Cell {
    /// A cell at `(x, y)` with cost 1, not blocked.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self::at(Axial::new(x, y))
    }

    /// A cell at `pos` with cost 1, not blocked.
    #[inline]
    pub const fn at(pos: Axial) -> Self {
        Self {
            pos,
            cost: 1.0,
            blocked: false,
        }
    }

    /// A cell with explicit attributes. `cost` must be finite and `>= 1`.
    pub fn with_cost(x: i32, y: i32, cost: f64, blocked: bool) -> Result<Self, GridError> {
        Ok(Self {
            pos: Axial::new(x, y),
            cost: check_cost(cost)?,
            blocked,
        })
    }

    /// Set the blocked flag (builder).
    #[inline]
    pub const fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Identity key, shared with [`Axial::key`].
    #[inline]
    pub const fn key(&self) -> (i32, i32) {
        self.pos.key()
    }
}
