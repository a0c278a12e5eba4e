use grid_util::point::Point;

/// `sqrt(2) - 2`: the correction per diagonal step applied to the Manhattan distance.
const DIAGONAL_DISTANCE: f64 = std::f64::consts::SQRT_2 - 2.0;

/// Estimate of the remaining cost from a cell to the goal.
pub trait Heuristic {
    fn estimate(&self, from: &Point, goal: &Point) -> f64;
}

/// Always 0, turning the search into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}

/// Distance on a 4-connected grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        let (dx, dy) = deltas(from, goal);
        dx + dy
    }
}

/// Distance on an 8-connected grid where a diagonal step counts as `sqrt(2)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octile;

impl Heuristic for Octile {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        let (dx, dy) = deltas(from, goal);
        (dx + dy) + DIAGONAL_DISTANCE * dx.min(dy)
    }
}

/// Another heuristic multiplied by a constant factor.
#[derive(Clone, Copy, Debug)]
pub struct Scaled<H> {
    pub inner: H,
    pub factor: f64,
}

impl<H: Heuristic> Heuristic for Scaled<H> {
    #[inline]
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        self.inner.estimate(from, goal) * self.factor
    }
}

fn deltas(from: &Point, goal: &Point) -> (f64, f64) {
    (
        (from.x - goal.x).abs() as f64,
        (from.y - goal.y).abs() as f64,
    )
}
