use crate::grid::TerrainGrid;
use crate::node::{NodeMap, Parent};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;

pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Walks the parent links from `goal` back to the start and returns the cells in start to
/// goal order, leaving out the start itself. Every predecessor on the way must have been
/// closed; anything else means the search state is corrupt.
pub(crate) fn reconstruct_path(
    grid: &TerrainGrid,
    nodes: &NodeMap,
    closed: &FxIndexSet<usize>,
    goal: usize,
) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(goal), |&ix| match nodes[ix].parent {
        Parent::Node(parent) => {
            assert!(
                closed.contains(&parent),
                "predecessor {} of {} was never closed",
                parent,
                ix
            );
            Some(parent)
        }
        Parent::Start => None,
        Parent::Unvisited => unreachable!("node {} on the path has no predecessor", ix),
    })
    .filter(|&ix| nodes[ix].parent != Parent::Start)
    .map(|ix| grid.point_from_ix(ix))
    .collect();
    path.reverse();
    path
}
