use core::fmt;
use std::time::Duration;

/// Figures reported for a finished search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchStats {
    /// "Dijkstra" or "A*".
    pub algorithm: &'static str,
    pub elapsed: Duration,
    /// Closed nodes, plus one for the goal when it was reached.
    pub expansions: usize,
    /// `g` of the goal, or infinity when it was not reached.
    pub path_cost: f64,
    pub path_length: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Time taken: {}ms", self.elapsed.as_millis())?;
        writeln!(f, "Ops done: {}", self.expansions)?;
        writeln!(f, "Path cost: {}", self.path_cost)?;
        write!(f, "Path length: {}", self.path_length)
    }
}
