use crate::node::NodeMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder {
    estimated_cost: f64,
    cost: f64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the largest cost so that among equally
        // promising nodes the one furthest along is preferred.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.total_cmp(&other.cost),
            s => s,
        }
    }
}

/// Open list of the search, ordered by `f = g + h`. A node that is improved while already
/// queued is simply pushed again; entries that no longer match their node are dropped when
/// they reach the top.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<SmallestCostHolder>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Queues `ix` with the costs it currently has in `nodes`.
    pub fn push(&mut self, nodes: &NodeMap, ix: usize) {
        let node = &nodes[ix];
        self.heap.push(SmallestCostHolder {
            estimated_cost: node.f,
            cost: node.g,
            index: ix,
        });
    }

    /// The open node with the smallest `f`, discarding stale entries on the way.
    pub fn peek(&mut self, nodes: &NodeMap) -> Option<usize> {
        while let Some(top) = self.heap.peek() {
            let node = &nodes[top.index];
            if node.closed || top.cost > node.g {
                self.heap.pop();
            } else {
                return Some(top.index);
            }
        }
        None
    }

    pub fn pop(&mut self, nodes: &NodeMap) -> Option<usize> {
        let ix = self.peek(nodes)?;
        self.heap.pop();
        Some(ix)
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TerrainGrid;
    use crate::terrain::Terrain;
    use grid_util::grid::Grid;

    #[test]
    fn pops_smallest_estimate_first() {
        let grid = TerrainGrid::new(3, 1, Terrain::Flat);
        let mut nodes = NodeMap::new(&grid);
        nodes.open_start(0, 5.0);
        nodes.relax(1, 0, 1.0, 1.0);
        nodes.relax(2, 0, 1.0, 3.0);
        let mut frontier = Frontier::new();
        for ix in [0, 1, 2] {
            frontier.push(&nodes, ix);
        }
        assert_eq!(frontier.pop(&nodes), Some(1));
        assert_eq!(frontier.pop(&nodes), Some(2));
        assert_eq!(frontier.pop(&nodes), Some(0));
        assert_eq!(frontier.pop(&nodes), None);
    }

    #[test]
    fn stale_and_closed_entries_are_skipped() {
        let grid = TerrainGrid::new(3, 1, Terrain::Flat);
        let mut nodes = NodeMap::new(&grid);
        nodes.open_start(0, 0.0);
        let mut frontier = Frontier::new();
        frontier.push(&nodes, 0);
        nodes.relax(1, 0, 4.0, 0.0);
        frontier.push(&nodes, 1);
        nodes.relax(1, 0, 2.0, 0.0);
        frontier.push(&nodes, 1);
        assert_eq!(frontier.len(), 3);

        assert_eq!(frontier.pop(&nodes), Some(0));
        nodes.close(0);
        assert_eq!(frontier.pop(&nodes), Some(1));
        nodes.close(1);
        // The outdated entry for node 1 is left over and must not be returned.
        assert_eq!(frontier.peek(&nodes), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_estimates_prefer_larger_cost() {
        let grid = TerrainGrid::new(3, 1, Terrain::Flat);
        let mut nodes = NodeMap::new(&grid);
        nodes.relax(1, 0, 1.0, 2.0);
        nodes.relax(2, 0, 2.0, 1.0);
        let mut frontier = Frontier::new();
        frontier.push(&nodes, 1);
        frontier.push(&nodes, 2);
        assert_eq!(frontier.peek(&nodes), Some(2));
    }
}
