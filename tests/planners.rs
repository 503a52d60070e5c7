use fuel_pathfinding::neighbors::neighbors;
use fuel_pathfinding::prelude::*;
use fuel_pathfinding::Error;

use nanorand::{Rng, WyRand};
use std::f64::consts::SQRT_2;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn random_grid(rng: &mut WyRand, rows: usize, cols: usize) -> Grid {
    Grid::from_fn(rows, cols, |_| rng.generate_range(1_u32..=9) as f64).unwrap()
}

/// Exhaustively walks every simple path and returns the cheapest Cost.
fn brute_force(
    grid: &Grid,
    start: &Node,
    end: &Node,
    directions: &'static [Position],
    step_cost: &dyn Fn(&Node, &Node) -> f64,
) -> Option<f64> {
    fn walk(
        grid: &Grid,
        current: &Node,
        end: &Node,
        cost: f64,
        on_path: &mut Vec<Position>,
        directions: &'static [Position],
        step_cost: &dyn Fn(&Node, &Node) -> f64,
        best: &mut Option<f64>,
    ) {
        if best.map_or(false, |best| cost >= best + 1e-9) {
            return;
        }
        if current == end {
            *best = Some(cost);
            return;
        }
        for next in neighbors(grid, current, directions) {
            if on_path.contains(&next.position) {
                continue;
            }
            on_path.push(next.position);
            let next_cost = cost + step_cost(current, next);
            walk(grid, next, end, next_cost, on_path, directions, step_cost, best);
            on_path.pop();
        }
    }

    let mut best = None;
    let mut on_path = vec![start.position];
    walk(grid, start, end, 0.0, &mut on_path, directions, step_cost, &mut best);
    best
}

/// Checks that every step of `path` is a legal move along `directions`, ending at `end`.
fn assert_connected(path: &Path, start: &Node, end: &Node, directions: &[Position]) {
    let mut current = start.position;
    for node in path {
        let offset = current - node.position;
        assert!(
            directions.contains(&offset),
            "illegal step from {} to {}",
            current,
            node.position
        );
        current = node.position;
    }
    assert_eq!(current, end.position);
}

#[test]
fn uniform_grid_diagonal() {
    init();
    let grid = Grid::from_fn(3, 3, |_| 1.0).unwrap();
    let (start, end) = (grid[(0, 0)], grid[(2, 2)]);

    let path = UniformCostPlanner::new()
        .find_path(&grid, &start, &end)
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 2);
    assert!(close(path.cost(), 2.0 * SQRT_2));
    assert_connected(&path, &start, &end, UniformCostPlanner::DIRECTIONS);

    let path = AStarPlanner::new()
        .find_path(&grid, &start, &end)
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 4);
    assert!(close(path.cost(), 4.0));
    assert_connected(&path, &start, &end, AStarPlanner::DIRECTIONS);
}

#[test]
fn start_is_end() {
    init();
    let grid = Grid::from_fn(3, 3, |_| 1.0).unwrap();
    let node = grid[(1, 2)];

    let planners: [&dyn PathPlanner; 2] = [&UniformCostPlanner::new(), &AStarPlanner::new()];
    for planner in planners {
        let path = planner.find_path(&grid, &node, &node).unwrap().unwrap();
        assert!(path.is_empty(), "{:?} moved", planner);
        assert_eq!(path.cost(), 0.0);
    }
}

#[test]
fn uniform_cost_is_optimal() {
    init();
    let mut rng = WyRand::new_seed(4);
    let model = CostModel::WeightScaled;

    for (rows, cols) in [(2, 2), (3, 3), (3, 4), (4, 4)] {
        for _ in 0..4 {
            let grid = random_grid(&mut rng, rows, cols);
            let start = grid[(0, 0)];
            let end = grid[(rows - 1, cols - 1)];

            let path = UniformCostPlanner::new()
                .find_path(&grid, &start, &end)
                .unwrap()
                .unwrap();
            let expected = brute_force(&grid, &start, &end, UniformCostPlanner::DIRECTIONS, &|a, b| {
                model.step_cost(a, b)
            })
            .unwrap();

            assert!(
                close(path.cost(), expected),
                "{} != {} on {:?}",
                path.cost(),
                expected,
                grid
            );
            assert!(close(model.path_cost(&start, &path), path.cost()));
            assert_connected(&path, &start, &end, UniformCostPlanner::DIRECTIONS);
        }
    }
}

#[test]
fn a_star_is_optimal() {
    init();
    let mut rng = WyRand::new_seed(11);

    for (rows, cols) in [(2, 3), (3, 3), (4, 3), (4, 4)] {
        for _ in 0..4 {
            let grid = random_grid(&mut rng, rows, cols);
            let start = grid[(rows - 1, 0)];
            let end = grid[(0, cols - 1)];

            let path = AStarPlanner::new()
                .find_path(&grid, &start, &end)
                .unwrap()
                .unwrap();
            let expected =
                brute_force(&grid, &start, &end, AStarPlanner::DIRECTIONS, &|_, b| b.weight)
                    .unwrap();

            assert!(close(path.cost(), expected), "{} != {}", path.cost(), expected);
            assert!(close(
                CostModel::WeightScaled.path_cost(&start, &path),
                path.cost()
            ));
            assert_connected(&path, &start, &end, AStarPlanner::DIRECTIONS);
        }
    }
}

#[test]
fn legacy_geometric_costs() {
    init();
    let mut rng = WyRand::new_seed(23);
    let grid = random_grid(&mut rng, 4, 4);
    let (start, end) = (grid[(0, 3)], grid[(3, 1)]);

    let path = UniformCostPlanner::with_config(PlannerConfig::LEGACY_GEOMETRIC)
        .find_path(&grid, &start, &end)
        .unwrap()
        .unwrap();

    // 2 diagonal + 1 orthogonal step, whatever the weights
    assert_eq!(path.len(), 3);
    assert!(close(path.cost(), 2.0 * SQRT_2 + 1.0));
    assert!(close(
        CostModel::Geometric.path_cost(&start, &path),
        path.cost()
    ));
}

#[test]
fn deterministic() {
    init();
    let mut rng = WyRand::new_seed(99);
    let grid = random_grid(&mut rng, 12, 12);
    let (start, end) = (grid[(0, 5)], grid[(11, 2)]);

    let planners = [
        Planner::from(UniformCostPlanner::new()),
        Planner::from(AStarPlanner::new()),
    ];
    for planner in planners {
        let first = planner.find_path(&grid, &start, &end).unwrap().unwrap();
        for _ in 0..3 {
            let again = planner.find_path(&grid, &start, &end).unwrap().unwrap();
            assert_eq!(first.cost(), again.cost());
            assert_eq!(first.positions(), again.positions());
        }
    }
}

#[test]
fn every_cell_reachable() {
    init();
    let mut rng = WyRand::new_seed(7);
    let grid = random_grid(&mut rng, 5, 6);
    let start = grid[(2, 3)];

    for end in &grid {
        for planner in [Planner::from(UniformCostPlanner::new()), AStarPlanner::new().into()] {
            let path = planner.find_path(&grid, &start, end).unwrap().unwrap();
            assert_eq!(path.is_empty(), *end == start);
            assert!(path.cost() >= 0.0);
            if let Some(last) = path.last() {
                assert_eq!(last, end);
            }
        }
    }
}

#[test]
fn expansion_limit_reports_no_path() {
    init();
    let grid = Grid::from_fn(20, 20, |_| 1.0).unwrap();
    let (start, end) = (grid[(0, 0)], grid[(19, 19)]);

    let config = PlannerConfig::bounded(15);
    assert_eq!(
        UniformCostPlanner::with_config(config).find_path(&grid, &start, &end),
        Ok(None)
    );
    assert_eq!(
        AStarPlanner::with_config(config).find_path(&grid, &start, &end),
        Ok(None)
    );
}

#[test]
fn rejects_nodes_of_other_grids() {
    init();
    let grid = Grid::from_fn(3, 3, |_| 1.0).unwrap();
    let bigger = Grid::from_fn(5, 5, |_| 1.0).unwrap();

    let planners: [&dyn PathPlanner; 2] = [&UniformCostPlanner::new(), &AStarPlanner::new()];
    for planner in planners {
        assert_eq!(
            planner.find_path(&grid, &grid[(0, 0)], &bigger[(4, 4)]),
            Err(Error::NodeNotInGrid {
                position: Position::new(4, 4)
            })
        );
        let negative = Node::new(Position::new(-1, 0), 1.0);
        assert_eq!(
            planner.find_path(&grid, &negative, &grid[(0, 0)]),
            Err(Error::NodeNotInGrid {
                position: Position::new(-1, 0)
            })
        );
    }
}

#[test]
fn shared_grid_batch() {
    init();
    let mut rng = WyRand::new_seed(42);
    let grid = random_grid(&mut rng, 16, 16);
    let queries: Vec<(Node, Node)> = (0..16)
        .map(|i| (grid[(i, 0)], grid[(15 - i, 15)]))
        .collect();

    let planner = Planner::from(UniformCostPlanner::new());
    let results = find_paths(&planner, &grid, &queries);

    assert_eq!(results.len(), queries.len());
    for ((start, end), result) in queries.iter().zip(results) {
        let path = result.unwrap().unwrap();
        let single = planner.find_path(&grid, start, end).unwrap().unwrap();
        assert_eq!(path.cost(), single.cost());
        assert_eq!(path.last(), Some(end));
    }
}
