use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::TerrainGrid;
use crate::heuristic::{Heuristic, Manhattan, Octile, Scaled, Zero};
use crate::node::NodeMap;
use crate::options::{HeuristicMode, SearchOptions};
use crate::path::{reconstruct_path, FxIndexSet};
use crate::result::{SearchResult, SearchStatus};
use crate::stats::SearchStats;
use grid_util::grid::Grid;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Cooperative cancellation flag shared between a running search and whoever wants to stop
/// it. Checked once per expansion.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Best-first search over a [TerrainGrid], generic over the heuristic. With [Zero] this is
/// Dijkstra's algorithm, with [Manhattan] or [Octile] it is A*.
pub struct SearchEngine<'a, H> {
    grid: &'a TerrainGrid,
    options: &'a SearchOptions,
    heuristic: H,
    cancel: Option<&'a CancelToken>,
}

impl<'a, H: Heuristic> SearchEngine<'a, H> {
    pub fn new(grid: &'a TerrainGrid, options: &'a SearchOptions, heuristic: H) -> Self {
        SearchEngine {
            grid,
            options,
            heuristic,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: &'a CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn check_bounds(&self, point: Point) -> Result<usize, SearchError> {
        if self.grid.point_in_bounds(point) {
            Ok(self.grid.get_ix_point(&point))
        } else {
            Err(SearchError::OutOfBounds {
                point,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    /// Searches a path from `start` to `goal`. Invalid input is rejected before anything is
    /// allocated; a goal that cannot be reached is reported through
    /// [SearchStatus::Unreachable].
    pub fn run(&self, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
        self.options.validate()?;
        let start_ix = self.check_bounds(start)?;
        let goal_ix = self.check_bounds(goal)?;

        let algorithm = self.options.heuristic_mode.name();
        debug!(
            "{} from {} to {} on a {}x{} grid",
            algorithm,
            start,
            goal,
            self.grid.width(),
            self.grid.height()
        );
        let timer = Instant::now();

        let mut nodes = NodeMap::new(self.grid);
        let mut frontier = Frontier::new();
        let mut closed: FxIndexSet<usize> = FxIndexSet::default();

        if self.grid.can_move_to(start, self.options) {
            nodes.open_start(start_ix, self.heuristic.estimate(&start, &goal));
            frontier.push(&nodes, start_ix);
        } else {
            info!(
                "Start {} lies on inaccessible {}",
                start,
                self.grid.get_point(start)
            );
        }

        let found = loop {
            if self.cancel.is_some_and(CancelToken::is_cancelled) {
                info!("{} from {} to {} cancelled", algorithm, start, goal);
                return Err(SearchError::Cancelled);
            }
            let Some(ix) = frontier.peek(&nodes) else {
                break false;
            };
            // The goal is accepted as soon as it is the best candidate, before being closed.
            if ix == goal_ix {
                break true;
            }
            frontier.pop(&nodes);
            nodes.close(ix);
            closed.insert(ix);

            let current = self.grid.point_from_ix(ix);
            let g = nodes[ix].g;
            for (neighbour, cost) in self
                .grid
                .neighbourhood_points_and_cost(&current, self.options)
            {
                let n_ix = self.grid.get_ix_point(&neighbour);
                if nodes[n_ix].closed {
                    continue;
                }
                let h = self.heuristic.estimate(&neighbour, &goal);
                if nodes.relax(n_ix, ix, g + cost, h) {
                    frontier.push(&nodes, n_ix);
                }
            }
        };

        let elapsed = timer.elapsed();
        let (status, path, path_cost) = if found {
            let path = reconstruct_path(self.grid, &nodes, &closed, goal_ix);
            (SearchStatus::Found, path, nodes[goal_ix].g)
        } else {
            warn!("No path found from {} to {}", start, goal);
            (SearchStatus::Unreachable, Vec::new(), f64::INFINITY)
        };
        let stats = SearchStats {
            algorithm,
            elapsed,
            expansions: closed.len() + usize::from(found),
            path_cost,
            path_length: path.len(),
        };
        if found {
            info!("{}", stats);
        }
        let expanded = closed.iter().map(|&ix| self.grid.point_from_ix(ix)).collect();
        Ok(SearchResult {
            status,
            expanded,
            path,
            stats,
        })
    }
}

/// Finds a path from `start` to `goal` on `grid`, choosing the heuristic from `options`:
/// none for [HeuristicMode::Dijkstra], octile distance for A* with diagonal moves and
/// Manhattan distance without.
pub fn search(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    options: &SearchOptions,
) -> Result<SearchResult, SearchError> {
    search_inner(grid, start, goal, options, None)
}

/// Like [search], but gives up with [SearchError::Cancelled] once `token` is cancelled.
pub fn search_with_cancel(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    options: &SearchOptions,
    token: &CancelToken,
) -> Result<SearchResult, SearchError> {
    search_inner(grid, start, goal, options, Some(token))
}

fn search_inner(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    options: &SearchOptions,
    token: Option<&CancelToken>,
) -> Result<SearchResult, SearchError> {
    fn run<H: Heuristic>(
        engine: SearchEngine<'_, H>,
        token: Option<&CancelToken>,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, SearchError> {
        match token {
            Some(token) => engine.with_cancel(token).run(start, goal),
            None => engine.run(start, goal),
        }
    }

    let factor = options.heuristic_scale();
    match (options.heuristic_mode, options.allow_diagonal) {
        (HeuristicMode::Dijkstra, _) => {
            run(SearchEngine::new(grid, options, Zero), token, start, goal)
        }
        (HeuristicMode::AStar, true) => run(
            SearchEngine::new(grid, options, Scaled { inner: Octile, factor }),
            token,
            start,
            goal,
        ),
        (HeuristicMode::AStar, false) => run(
            SearchEngine::new(grid, options, Scaled { inner: Manhattan, factor }),
            token,
            start,
            goal,
        ),
    }
}
