use crate::stats::SearchStats;
use grid_util::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Found,
    /// The frontier ran empty before the goal was reached.
    Unreachable,
}

/// One frame of the replay produced by [SearchResult::steps].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceStep {
    Expanded(Point),
    Path(Point),
}

/// Outcome of a single search call. The traces are complete once returned and are never
/// modified afterwards.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub status: SearchStatus,
    /// Cells in the order they were closed.
    pub expanded: Vec<Point>,
    /// Cells from the start (exclusive) to the goal (inclusive). Empty when the goal was not
    /// reached or coincides with the start.
    pub path: Vec<Point>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    pub fn path_cost(&self) -> Option<f64> {
        self.is_found().then_some(self.stats.path_cost)
    }

    /// Replays the search for progressive rendering: every expanded cell in order, followed
    /// by every path cell from start to goal.
    pub fn steps(&self) -> impl Iterator<Item = TraceStep> + '_ {
        self.expanded
            .iter()
            .map(|&p| TraceStep::Expanded(p))
            .chain(self.path.iter().map(|&p| TraceStep::Path(p)))
    }
}
