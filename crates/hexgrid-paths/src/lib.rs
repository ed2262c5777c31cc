//! Movement range and pathfinding over hexagonal grids.
//!
//! Two priority-queue searches share one set of open/closed/visited
//! bookkeeping:
//!
//! - **Range**: budgeted uniform-cost expansion ([`range`],
//!   [`GridSearch::get_range`])
//! - **A\***: cheapest path with hex distance as heuristic ([`astar`],
//!   [`GridSearch::find_path`])
//!
//! Both run on an [`IndexedHeap`], a binary min-heap that re-sorts a queued
//! node in place when a cheaper route to it turns up. Search state belongs
//! to a single call and is dropped when it returns.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | range search |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`hexgrid_core::Grid`] implements all three: blocked cells are never
//! entered, a move costs the entry cost of the destination cell, and the
//! estimate is hex distance.

mod astar;
mod config;
mod heap;
mod node;
mod range;
mod search;
mod traits;

pub use astar::astar;
pub use config::SearchConfig;
pub use heap::IndexedHeap;
pub use hexgrid_core::GridError;
pub use node::PathNode;
pub use range::range;
pub use search::{GridSearch, path_cost};
pub use traits::{AstarPather, Pather, WeightedPather};
