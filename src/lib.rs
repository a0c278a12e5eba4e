//! # terrain_pathfinding
//!
//! Shortest paths on a 2D grid of weighted terrain. A single best-first search engine runs
//! both [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), with optional diagonal movement,
//! a heuristic weight and a tie-breaking mode that trades optimality for speed.
//!
//! Besides the path, every search reports the order in which cells were expanded, so that a
//! caller can replay the search step by step.
//!
//! ```
//! use terrain_pathfinding::{search, Point, SearchOptions, TerrainGrid};
//!
//! let grid: TerrainGrid = "...\n.m.\n...".parse().unwrap();
//! let options = SearchOptions::astar(1.0).with_diagonal(true);
//! let result = search(&grid, Point::new(0, 0), Point::new(2, 2), &options).unwrap();
//! assert!(result.is_found());
//! assert_eq!(result.path.last(), Some(&Point::new(2, 2)));
//! ```
pub mod components;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod node;
mod path;
pub mod options;
pub mod result;
pub mod stats;
pub mod terrain;

pub use components::Components;
pub use engine::{search, search_with_cancel, CancelToken, SearchEngine};
pub use error::{ParseError, SearchError};
pub use grid::TerrainGrid;
pub use grid_util::grid::Grid;
pub use grid_util::point::Point;
pub use grid_util::rect::Rect;
pub use options::{HeuristicMode, SearchOptions};
pub use result::{SearchResult, SearchStatus, TraceStep};
pub use stats::SearchStats;
pub use terrain::{Accessibility, Terrain};

/// Extra cost of a diagonal move on top of the weight of the entered cell.
pub const DIAGONAL_SURCHARGE: f64 = 0.5;
/// Heuristic inflation used when tie-breaking is enabled.
pub const TIE_BREAK_FACTOR: f64 = 1.0 + 1.0 / 500.0;
/// Inline capacity of neighbourhood buffers: the largest possible neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
