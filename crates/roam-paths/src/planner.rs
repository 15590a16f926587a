use crate::traits::NodeId;

/// A completed route: the node sequence from start to goal plus the total
/// real-world distance (pairwise map distances scaled by the model's
/// metric scale).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub distance: f32,
}

// ---------------------------------------------------------------------------
// Internal node state for the A* search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) f: f32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq()
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

/// Central coordinator for route searches.
///
/// `RoutePlanner` owns the per-search node state (costs, parent indices,
/// visited flags) in a contiguous arena indexed by [`NodeId`], separate
/// from the road graph itself. A generation counter lazily invalidates the
/// arena between searches, so reusing one planner for many queries needs
/// no reset pass and never leaks state from one search into the next.
pub struct RoutePlanner {
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<NodeId>,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePlanner {
    /// Create a new planner. The node arena grows on first use to match the
    /// model being searched.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a planner with the arena pre-sized for `nodes` graph nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); nodes],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Grow the arena to hold at least `len` nodes. Existing entries are
    /// kept; stale ones are ignored via the generation counter.
    pub(crate) fn ensure_len(&mut self, len: usize) {
        if len > self.nodes.len() {
            self.nodes.resize(len, SearchNode::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_len_grows_but_never_shrinks() {
        let mut planner = RoutePlanner::new();
        planner.ensure_len(10);
        assert_eq!(planner.nodes.len(), 10);
        planner.ensure_len(3);
        assert_eq!(planner.nodes.len(), 10);
        planner.ensure_len(25);
        assert_eq!(planner.nodes.len(), 25);
    }

    #[test]
    fn with_capacity_presizes_arena() {
        let planner = RoutePlanner::with_capacity(42);
        assert_eq!(planner.nodes.len(), 42);
        assert_eq!(planner.generation, 0);
    }

    #[test]
    fn heap_entry_orders_by_ascending_f() {
        use std::collections::BinaryHeap;

        let mut open = BinaryHeap::new();
        open.push(HeapEntry { idx: 0, f: 3.5 });
        open.push(HeapEntry { idx: 1, f: 1.25 });
        open.push(HeapEntry { idx: 2, f: 2.0 });
        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|e| e.idx)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
