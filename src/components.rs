use crate::grid::TerrainGrid;
use crate::options::SearchOptions;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the accessible cells of a grid under the movement rules of a set
/// of [SearchOptions]. Answers whether a search can possibly succeed without running it.
#[derive(Clone, Debug)]
pub struct Components {
    accessible: BoolGrid,
    components: UnionFind<usize>,
}

impl Components {
    /// Links every accessible cell to the accessible cells it can move to.
    pub fn generate(grid: &TerrainGrid, options: &SearchOptions) -> Components {
        info!(
            "Generating connected components for a {}x{} grid",
            grid.width(),
            grid.height()
        );
        let mut components = UnionFind::new(grid.width() * grid.height());
        let mut accessible = BoolGrid::new(grid.width(), grid.height(), false);
        for (y, x) in iproduct!(0..grid.height() as i32, 0..grid.width() as i32) {
            let point = Point::new(x, y);
            if !options.accessibility.is_accessible(grid.get_point(point)) {
                continue;
            }
            accessible.set_point(point, true);
            let parent_ix = grid.get_ix_point(&point);
            for (neighbour, _) in grid.neighbourhood_points_and_cost(&point, options) {
                components.union(parent_ix, grid.get_ix_point(&neighbour));
            }
        }
        Components {
            accessible,
            components,
        }
    }

    /// Retrieves the component id of an accessible cell.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        let accessible =
            self.accessible.point_in_bounds(*point) && self.accessible.get_point(*point);
        accessible.then(|| self.components.find(self.accessible.get_ix_point(point)))
    }

    /// Checks if both cells are accessible and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}
