use terrain_pathfinding::{search, Point, SearchOptions, TerrainGrid};

// In this example a path is found on a map with shape
// .....
// .S^..
// .^^^.
// ...E.
// .....
// S marks the start, E marks the end and ^ marks mountain tops, which cannot be crossed.
fn main() {
    let grid: TerrainGrid = "\
        .....\n\
        ..^..\n\
        .^^^.\n\
        .....\n\
        .....\n"
        .parse()
        .unwrap();
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    let result = search(&grid, start, end, &SearchOptions::default()).unwrap();
    if result.is_found() {
        println!("A path has been found:");
        for p in &result.path {
            println!("{:?}", p);
        }
        println!("{}", result.stats);
    }
}
