use std::collections::{HashMap, HashSet};

use hexgrid_core::Axial;

use crate::heap::IndexedHeap;

/// A position with the accumulated cost of reaching it, returned from
/// range queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Axial,
    pub cost: f64,
}

// ---------------------------------------------------------------------------
// Internal node and per-search bookkeeping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) pos: Axial,
    /// Arena index of the node this one was reached from. Always an
    /// earlier index, so parent chains terminate.
    pub(crate) parent: Option<usize>,
    pub(crate) g: f64,
    pub(crate) h: f64,
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Open heap, closed set and visited map for one search invocation.
///
/// Nodes live in an arena and are referred to by index; the heap orders
/// those indices by `f`. Everything is dropped when the search returns.
pub(crate) struct Search {
    pub(crate) nodes: Vec<Node>,
    pub(crate) open: IndexedHeap,
    pub(crate) closed: HashSet<Axial>,
    pub(crate) visited: HashMap<Axial, usize>,
    pub(crate) expanded: usize,
}

impl Search {
    /// Start a search at `start` with `g = 0` and heuristic `h`.
    pub(crate) fn new(start: Axial, h: f64) -> Self {
        let mut s = Self {
            nodes: Vec::new(),
            open: IndexedHeap::with_capacity(64),
            closed: HashSet::new(),
            visited: HashMap::new(),
            expanded: 0,
        };
        s.nodes.push(Node {
            pos: start,
            parent: None,
            g: 0.0,
            h,
        });
        s.visited.insert(start, 0);
        s.open.push(0, h);
        s
    }

    /// Take the best open node and close it.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let (ci, _) = self.open.pop_min()?;
        self.closed.insert(self.nodes[ci].pos);
        self.expanded += 1;
        Some(ci)
    }

    /// Offer a route to `pos` through `parent` with cost `g`. Creates and
    /// queues a node for an unvisited position, or rewires and rescores an
    /// existing one if `g` is strictly better. Returns whether anything
    /// changed.
    pub(crate) fn relax(&mut self, parent: usize, pos: Axial, g: f64, h: f64) -> bool {
        match self.visited.get(&pos) {
            Some(&ni) => {
                let n = &mut self.nodes[ni];
                if g >= n.g {
                    return false;
                }
                n.parent = Some(parent);
                n.g = g;
                n.h = h;
                let f = n.f();
                self.open.rescore(ni, f);
                true
            }
            None => {
                let ni = self.nodes.len();
                self.nodes.push(Node {
                    pos,
                    parent: Some(parent),
                    g,
                    h,
                });
                self.visited.insert(pos, ni);
                self.open.push(ni, g + h);
                true
            }
        }
    }

    /// Positions from the root (exclusive) to `idx` (inclusive).
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Axial> {
        let mut path = Vec::new();
        let mut ci = idx;
        while let Some(parent) = self.nodes[ci].parent {
            path.push(self.nodes[ci].pos);
            ci = parent;
        }
        path.reverse();
        path
    }
}
