use crate::error::SearchError;
use crate::terrain::Accessibility;
use crate::{DIAGONAL_SURCHARGE, TIE_BREAK_FACTOR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects between uniform-cost search and heuristic-guided search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeuristicMode {
    #[default]
    Dijkstra,
    AStar,
}

impl HeuristicMode {
    pub fn name(self) -> &'static str {
        match self {
            HeuristicMode::Dijkstra => "Dijkstra",
            HeuristicMode::AStar => "A*",
        }
    }
}

/// Parameters of a single search call. Passed by reference into [search](crate::search) and
/// never modified by it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchOptions {
    /// Whether the four diagonal moves are generated in addition to the cardinal ones.
    pub allow_diagonal: bool,
    pub heuristic_mode: HeuristicMode,
    /// Scales the heuristic in [HeuristicMode::AStar]. A weight of 0 behaves like Dijkstra,
    /// weights above 1 give Weighted A*.
    pub heuristic_weight: f64,
    /// Inflates the heuristic by [tie_break_factor](Self::tie_break_factor) so that among
    /// equal cost candidates the one closest to the goal is expanded first. Paths found with
    /// this enabled are not guaranteed to be optimal.
    pub tie_break: bool,
    pub accessibility: Accessibility,
    /// Added on top of the terrain weight for each diagonal move.
    pub diagonal_surcharge: f64,
    pub tie_break_factor: f64,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            allow_diagonal: false,
            heuristic_mode: HeuristicMode::Dijkstra,
            heuristic_weight: 1.0,
            tie_break: false,
            accessibility: Accessibility::default(),
            diagonal_surcharge: DIAGONAL_SURCHARGE,
            tie_break_factor: TIE_BREAK_FACTOR,
        }
    }
}

impl SearchOptions {
    pub fn dijkstra() -> SearchOptions {
        SearchOptions::default()
    }

    pub fn astar(heuristic_weight: f64) -> SearchOptions {
        SearchOptions {
            heuristic_mode: HeuristicMode::AStar,
            heuristic_weight,
            ..SearchOptions::default()
        }
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> SearchOptions {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_heuristic_weight(mut self, heuristic_weight: f64) -> SearchOptions {
        self.heuristic_weight = heuristic_weight;
        self
    }

    pub fn with_tie_break(mut self, tie_break: bool) -> SearchOptions {
        self.tie_break = tie_break;
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> SearchOptions {
        self.accessibility = accessibility;
        self
    }

    /// The factor the raw heuristic estimate is multiplied by.
    pub fn heuristic_scale(&self) -> f64 {
        let mut scale = self.heuristic_weight;
        if self.tie_break {
            scale *= self.tie_break_factor;
        }
        scale
    }

    /// Checks that the numeric options are usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.heuristic_weight.is_finite() || self.heuristic_weight < 0.0 {
            return Err(SearchError::InvalidOption(format!(
                "heuristic weight must be a non-negative number, got {}",
                self.heuristic_weight
            )));
        }
        if !self.diagonal_surcharge.is_finite() || self.diagonal_surcharge < 0.0 {
            return Err(SearchError::InvalidOption(format!(
                "diagonal surcharge must be a non-negative number, got {}",
                self.diagonal_surcharge
            )));
        }
        if !self.tie_break_factor.is_finite() || self.tie_break_factor < 1.0 {
            return Err(SearchError::InvalidOption(format!(
                "tie-break factor must be at least 1, got {}",
                self.tie_break_factor
            )));
        }
        Ok(())
    }
}
