//! Errors raised when a caller breaks a grid construction contract.

use thiserror::Error;

use crate::coord::Axial;

/// Contract violations rejected by grid and cell constructors.
///
/// Missing cells and unreachable targets are not errors; lookups return
/// `None` and searches return an empty result instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// A grid radius below zero.
    #[error("grid radius must be non-negative, got {0}")]
    NegativeRadius(i32),
    /// A traversal cost below 1, or not a finite number.
    #[error("cell cost must be a finite number >= 1, got {0}")]
    InvalidCost(f64),
    /// A coordinate that the grid does not contain.
    #[error("coordinate {0} is outside the grid")]
    OutOfGrid(Axial),
    /// A movement budget below zero, or NaN.
    #[error("movement budget must be >= 0, got {0}")]
    InvalidBudget(f64),
}

/// Checks that `cost` is usable as a cell entry cost.
pub(crate) fn check_cost(cost: f64) -> Result<f64, GridError> {
    if cost.is_finite() && cost >= 1.0 {
        Ok(cost)
    } else {
        Err(GridError::InvalidCost(cost))
    }
}
