use terrain_pathfinding::{search, Grid, Point, Rect, SearchOptions, Terrain, TerrainGrid};

// The heuristic weight scales the heuristic, causing nodes that are closer to the goal
// (ignoring terrain) to be evaluated quicker than in normal operation. This is called Weighted
// A* and it can speed up the search at the cost of optimality. Tie-breaking inflates the
// heuristic by a tiny amount, which has a similar effect on maps with many equal cost paths.

fn main() {
    const N: i32 = 30;
    let mut grid = TerrainGrid::new(N as usize, N as usize, Terrain::Flat);
    grid.set_rectangle(&Rect::new(8, 8, 8, 8), Terrain::MountainTop);
    grid.set_rectangle(&Rect::new(0, 3, 6, 6), Terrain::Forest);
    grid.set_rectangle(&Rect::new(10, 0, 6, 6), Terrain::Sand);
    grid.set_rectangle(&Rect::new(18, 20, 4, 10), Terrain::Water);
    println!("{}", grid);
    let start = Point::new(1, 1);
    let end = Point::new(N - 3, N - 3);
    let runs = [
        ("Dijkstra", SearchOptions::dijkstra()),
        ("A*", SearchOptions::astar(1.0)),
        ("Weighted A* (1.3)", SearchOptions::astar(1.3)),
        ("A* with tie-break", SearchOptions::astar(1.0).with_tie_break(true)),
    ];
    for (name, options) in runs {
        let result = search(&grid, start, end, &options.with_diagonal(true)).unwrap();
        println!(
            "{name}: {} expansions, cost {:?}, {} steps",
            result.stats.expansions,
            result.path_cost(),
            result.path.len()
        );
    }
}
