use terrain_pathfinding::{
    search, Grid, Point, Rect, SearchOptions, Terrain, TerrainGrid, TraceStep,
};

// Replays a 4-connected search the way a renderer would: first every expanded cell, then
// the path.
fn main() {
    let mut grid = TerrainGrid::new(10, 10, Terrain::Flat);
    grid.set_rectangle(&Rect::new(1, 1, 2, 2), Terrain::DeepWater);
    grid.set_rectangle(&Rect::new(5, 0, 2, 2), Terrain::Mountain);
    grid.set_rectangle(&Rect::new(0, 5, 2, 2), Terrain::Forest);
    grid.set_rectangle(&Rect::new(8, 8, 2, 2), Terrain::MountainTop);
    let start = Point::new(0, 0);
    let end = Point::new(7, 7);
    let options = SearchOptions::astar(1.0).with_diagonal(false);
    let result = search(&grid, start, end, &options).unwrap();
    for step in result.steps() {
        match step {
            TraceStep::Expanded(p) => println!("expanded {}", p),
            TraceStep::Path(p) => println!("path     {}", p),
        }
    }
    println!("{}", result.stats);
}
