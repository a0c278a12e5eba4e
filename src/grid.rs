use crate::error::{ParseError, SearchError};
use crate::options::SearchOptions;
use crate::terrain::Terrain;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use smallvec::SmallVec;
use std::str::FromStr;

/// A rectangular grid of [Terrain] cells stored row by row, so that the cell at `(x, y)`
/// lives at index `y * width + x`.
#[derive(Clone, Debug, Default)]
pub struct TerrainGrid {
    grid: SimpleGrid<Terrain>,
}

impl TerrainGrid {
    /// Wraps an existing row-major cell array, checking that it holds exactly
    /// `width * height` cells.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Terrain>,
    ) -> Result<TerrainGrid, SearchError> {
        let expected = width
            .checked_mul(height)
            .ok_or(SearchError::DimensionMismatch {
                expected: usize::MAX,
                actual: cells.len(),
            })?;
        if cells.len() != expected {
            return Err(SearchError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(TerrainGrid {
            grid: SimpleGrid {
                width,
                height,
                values: cells,
            },
        })
    }

    pub fn cells(&self) -> &[Terrain] {
        &self.grid.values
    }

    pub fn point_from_ix(&self, ix: usize) -> Point {
        Point::new((ix % self.width()) as i32, (ix / self.width()) as i32)
    }

    /// Whether a search with these options may enter `point`.
    #[inline]
    pub fn can_move_to(&self, point: Point, options: &SearchOptions) -> bool {
        self.point_in_bounds(point) && options.accessibility.is_accessible(self.get_point(point))
    }

    /// The cells reachable in one move from `pos` together with the cost of entering them:
    /// the terrain weight, plus the diagonal surcharge for diagonal moves.
    pub fn neighbourhood_points_and_cost(
        &self,
        pos: &Point,
        options: &SearchOptions,
    ) -> SmallVec<[(Point, f64); N_SMALLVEC_SIZE]> {
        let neighbourhood = if options.allow_diagonal {
            pos.moore_neighborhood()
        } else {
            pos.neumann_neighborhood()
        };
        neighbourhood
            .into_iter()
            .filter(|p| self.can_move_to(*p, options))
            .map(|p| {
                let surcharge = if p.x != pos.x && p.y != pos.y {
                    options.diagonal_surcharge
                } else {
                    0.0
                };
                (p, self.get_point(p).weight() + surcharge)
            })
            .collect()
    }
}

impl Grid<Terrain> for TerrainGrid {
    fn new(width: usize, height: usize, fill: Terrain) -> TerrainGrid {
        TerrainGrid {
            grid: SimpleGrid::new(width, height, fill),
        }
    }
    fn get(&self, x: usize, y: usize) -> Terrain {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: usize, y: usize, terrain: Terrain) {
        self.grid.set(x, y, terrain);
    }
    fn width(&self) -> usize {
        self.grid.width
    }
    fn height(&self) -> usize {
        self.grid.height
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells().chunks(self.width().max(1)) {
            let line: String = row.iter().map(|t| t.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Reads a grid from rows of terrain symbols (see [Terrain::symbol]). Blank lines and
/// surrounding whitespace are ignored.
impl FromStr for TerrainGrid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(ParseError::Empty),
        };
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let terrain =
                    Terrain::from_symbol(symbol).ok_or(ParseError::UnknownSymbol { symbol, x, y })?;
                cells.push(terrain);
            }
        }
        Ok(TerrainGrid {
            grid: SimpleGrid {
                width,
                height: rows.len(),
                values: cells,
            },
        })
    }
}
