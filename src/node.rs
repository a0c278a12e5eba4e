use crate::grid::TerrainGrid;
use crate::terrain::Terrain;

/// Predecessor of a node on the best path found so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    Unvisited,
    Start,
    Node(usize),
}

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub terrain: Terrain,
    pub g: f64,
    pub f: f64,
    pub parent: Parent,
    pub closed: bool,
}

/// One [SearchNode] per grid cell, indexed the same way as the [TerrainGrid]. Built fresh for
/// every search; the frontier and closed set only ever hold indices into it.
#[derive(Clone, Debug)]
pub struct NodeMap {
    nodes: Vec<SearchNode>,
}

impl NodeMap {
    pub fn new(grid: &TerrainGrid) -> NodeMap {
        let nodes = grid
            .cells()
            .iter()
            .map(|&terrain| SearchNode {
                terrain,
                g: f64::INFINITY,
                f: f64::INFINITY,
                parent: Parent::Unvisited,
                closed: false,
            })
            .collect();
        NodeMap { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Marks `ix` as the start of the search.
    pub fn open_start(&mut self, ix: usize, h: f64) {
        let node = &mut self.nodes[ix];
        node.g = 0.0;
        node.f = h;
        node.parent = Parent::Start;
    }

    /// Records a cheaper way of reaching `ix` through `parent`. Returns false and leaves the
    /// node untouched if `g` is not an improvement.
    pub fn relax(&mut self, ix: usize, parent: usize, g: f64, h: f64) -> bool {
        let node = &mut self.nodes[ix];
        if g < node.g {
            node.g = g;
            node.f = g + h;
            node.parent = Parent::Node(parent);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self, ix: usize) {
        self.nodes[ix].closed = true;
    }
}

impl std::ops::Index<usize> for NodeMap {
    type Output = SearchNode;

    fn index(&self, ix: usize) -> &SearchNode {
        &self.nodes[ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::grid::Grid;

    #[test]
    fn nodes_start_unvisited() {
        let grid = TerrainGrid::new(3, 2, Terrain::Sand);
        let nodes = NodeMap::new(&grid);
        assert_eq!(nodes.len(), 6);
        assert!(nodes[4].g.is_infinite());
        assert_eq!(nodes[4].parent, Parent::Unvisited);
        assert_eq!(nodes[4].terrain, Terrain::Sand);
    }

    #[test]
    fn relax_only_improves() {
        let grid = TerrainGrid::new(2, 1, Terrain::Flat);
        let mut nodes = NodeMap::new(&grid);
        nodes.open_start(0, 1.0);
        assert_eq!(nodes[0].parent, Parent::Start);
        assert!(nodes.relax(1, 0, 2.0, 0.0));
        assert!(!nodes.relax(1, 0, 2.0, 0.0));
        assert!(nodes.relax(1, 0, 1.0, 0.5));
        assert_eq!(nodes[1].g, 1.0);
        assert_eq!(nodes[1].f, 1.5);
        assert_eq!(nodes[1].parent, Parent::Node(0));
    }
}
