use terrain_pathfinding::*;

fn flat_row() -> TerrainGrid {
    TerrainGrid::new(3, 1, Terrain::Flat)
}

#[test]
fn three_cell_corridor() {
    let options = SearchOptions::dijkstra().with_heuristic_weight(0.0);
    let result = search(&flat_row(), Point::new(0, 0), Point::new(2, 0), &options).unwrap();
    assert_eq!(result.status, SearchStatus::Found);
    assert_eq!(result.path, vec![Point::new(1, 0), Point::new(2, 0)]);
    assert_eq!(result.path_cost(), Some(2.0));
    assert_eq!(result.stats.expansions, 3);
}

#[test]
fn three_cell_corridor_with_inaccessible_middle() {
    let mut grid = flat_row();
    grid.set_point(Point::new(1, 0), Terrain::MountainTop);
    let options = SearchOptions::dijkstra().with_heuristic_weight(0.0);
    let result = search(&grid, Point::new(0, 0), Point::new(2, 0), &options).unwrap();
    assert_eq!(result.status, SearchStatus::Unreachable);
    assert!(result.path.is_empty());
    assert_eq!(result.stats.path_length, 0);
}

#[test]
fn diagonal_beats_two_straight_moves() {
    let grid = TerrainGrid::new(2, 2, Terrain::Flat);
    let options = SearchOptions::dijkstra().with_diagonal(true);
    let result = search(&grid, Point::new(0, 0), Point::new(1, 1), &options).unwrap();
    assert_eq!(result.path, vec![Point::new(1, 1)]);
    assert_eq!(result.path_cost(), Some(1.5));

    let straight = search(
        &grid,
        Point::new(0, 0),
        Point::new(1, 1),
        &SearchOptions::dijkstra(),
    )
    .unwrap();
    assert_eq!(straight.path_cost(), Some(2.0));
    assert_eq!(straight.path.len(), 2);
}

#[test]
fn raw_cells_with_wrong_length_are_rejected() {
    let err = TerrainGrid::from_cells(3, 2, vec![Terrain::Flat; 5]).unwrap_err();
    assert_eq!(
        err,
        SearchError::DimensionMismatch {
            expected: 6,
            actual: 5
        }
    );
}

#[test]
fn replay_lists_expansions_then_path() {
    let options = SearchOptions::dijkstra();
    let result = search(&flat_row(), Point::new(0, 0), Point::new(2, 0), &options).unwrap();
    let steps: Vec<TraceStep> = result.steps().collect();
    assert_eq!(
        steps,
        vec![
            TraceStep::Expanded(Point::new(0, 0)),
            TraceStep::Expanded(Point::new(1, 0)),
            TraceStep::Path(Point::new(1, 0)),
            TraceStep::Path(Point::new(2, 0)),
        ]
    );
}

#[test]
fn island_map() {
    // S on the left shore, G on the right shore; the lake in between is not accessible.
    let grid: TerrainGrid = "\
        ssssssss\n\
        s.wwww.s\n\
        s.wDDw.s\n\
        s.wwww.s\n\
        ssffffss\n"
        .parse()
        .unwrap();
    let start = Point::new(1, 2);
    let goal = Point::new(6, 2);
    let dijkstra = search(&grid, start, goal, &SearchOptions::dijkstra()).unwrap();
    let astar = search(&grid, start, goal, &SearchOptions::astar(1.0)).unwrap();
    assert!(dijkstra.is_found());
    assert_eq!(dijkstra.path_cost(), astar.path_cost());
    assert!(astar.stats.expansions <= dijkstra.stats.expansions);
    let lake = Accessibility::default();
    for p in dijkstra.path.iter().chain(dijkstra.expanded.iter()) {
        assert!(lake.is_accessible(grid.get_point(*p)));
    }

    let swimmer = SearchOptions::dijkstra().with_accessibility(Accessibility::all());
    let swim = search(&grid, start, goal, &swimmer).unwrap();
    assert!(swim.path_cost().unwrap() <= dijkstra.path_cost().unwrap());
}
