use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use terrain_pathfinding::{search, Point, SearchOptions, Terrain, TerrainGrid};

const N: usize = 128;
const N_SCENARIOS: usize = 32;

/// Terrain with mostly walkable land so that most scenarios have a path.
fn random_terrain(rng: &mut StdRng) -> TerrainGrid {
    let cells = (0..N * N)
        .map(|_| match rng.gen_range(0..20) {
            0 => Terrain::Water,
            1 => Terrain::MountainTop,
            2..=4 => Terrain::Sand,
            5..=8 => Terrain::Forest,
            9 => Terrain::Mountain,
            _ => Terrain::Flat,
        })
        .collect();
    TerrainGrid::from_cells(N, N, cells).unwrap()
}

fn scenarios(rng: &mut StdRng) -> Vec<(Point, Point)> {
    let mut random_point = || Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
    (0..N_SCENARIOS)
        .map(|_| (random_point(), random_point()))
        .collect()
}

fn terrain_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let grid = random_terrain(&mut rng);
    let scenarios = scenarios(&mut rng);
    for allow_diagonal in [false, true] {
        let diag_str = if allow_diagonal { "8-grid" } else { "4-grid" };
        let solvers = [
            ("Dijkstra", SearchOptions::dijkstra()),
            ("Astar", SearchOptions::astar(1.0)),
            ("Weighted Astar (2.0)", SearchOptions::astar(2.0)),
            ("Astar tie-break", SearchOptions::astar(1.0).with_tie_break(true)),
        ];
        for (solver_name, options) in solvers {
            let options = options.with_diagonal(allow_diagonal);
            c.bench_function(format!("{solver_name} {diag_str}").as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(search(&grid, *start, *end, &options).unwrap());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, terrain_bench);
criterion_main!(benches);
