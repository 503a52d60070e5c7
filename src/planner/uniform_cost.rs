use super::{check_endpoints, PathPlanner};
use crate::neighbors::{neighbors, MOORE_DIRECTIONS};
use crate::search::{best_cost, reconstruct, Element, Frontier};
use crate::{Cost, Error, Grid, Node, Path, PlannerConfig, Position, PositionMap, PositionSet};

use log::{debug, trace, warn};

/// Dijkstra's Algorithm over the 8 neighbors of every Node.
///
/// Steps are priced by the [`CostModel`](crate::CostModel) of the [`PlannerConfig`]. With the
/// default model, diagonal steps cost `sqrt(2)` times the weight of the Node stepped onto and
/// orthogonal steps cost exactly its weight. The resulting Path is always the cheapest one.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::prelude::*;
/// let grid = Grid::from_fn(3, 3, |_| 1.0)?;
/// let (start, end) = (grid[(0, 0)], grid[(2, 2)]);
///
/// let path = UniformCostPlanner::new()
/// 	.find_path(&grid, &start, &end)?
/// 	.expect("every Node of a Grid is reachable");
///
/// assert_eq!(path.positions(), vec![Position::new(1, 1), Position::new(2, 2)]);
/// assert!((path.cost() - 2.0 * 2f64.sqrt()).abs() < 1e-9);
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformCostPlanner {
	config: PlannerConfig,
}

impl UniformCostPlanner {
	/// the offsets Nodes are expanded along: orthogonal and diagonal
	pub const DIRECTIONS: &'static [Position] = &MOORE_DIRECTIONS;

	/// Creates a planner with the default [`PlannerConfig`]
	pub fn new() -> UniformCostPlanner {
		UniformCostPlanner::default()
	}

	/// Creates a planner with a custom [`PlannerConfig`]
	pub fn with_config(config: PlannerConfig) -> UniformCostPlanner {
		UniformCostPlanner { config }
	}

	/// the config this planner was created with
	pub fn config(&self) -> &PlannerConfig {
		&self.config
	}
}

impl PathPlanner for UniformCostPlanner {
	fn find_path(&self, grid: &Grid, start: &Node, end: &Node) -> Result<Option<Path>, Error> {
		check_endpoints(grid, start, end)?;

		let cost_model = self.config.cost_model;
		let mut distances: PositionMap<Cost> = PositionMap::with_capacity(grid.len());
		let mut previous: PositionMap<Position> = PositionMap::with_capacity(grid.len());
		let mut visited = PositionSet::with_capacity(grid.len());
		let mut next = Frontier::with_capacity(grid.len() / 2);

		distances.insert(start.position, 0.0);
		next.push(start.position, 0.0, 0.0);

		let mut expanded = 0;

		while let Some(Element {
			position: current,
			cost: current_cost,
			..
		}) = next.pop()
		{
			visited.insert(current);

			if current == end.position {
				let steps = reconstruct(grid, &previous, start.position, current);
				debug!(
					"uniform cost: reached {} after {} expansions, cost {}",
					current, expanded, current_cost
				);
				return Ok(Some(Path::new(steps, current_cost)));
			}

			if current_cost > best_cost(&distances, current) {
				continue;
			}

			if let Some(limit) = self.config.max_expansions {
				if expanded >= limit {
					warn!(
						"uniform cost: gave up on {} -> {} after {} expansions",
						start.position, end.position, expanded
					);
					return Ok(None);
				}
			}
			expanded += 1;

			let current_node = &grid[current];
			trace!("uniform cost: expanding {} at {}", current, current_cost);

			for other in neighbors(grid, current_node, Self::DIRECTIONS) {
				if visited.contains(&other.position) {
					continue;
				}
				let other_cost = current_cost + cost_model.step_cost(current_node, other);
				if other_cost < best_cost(&distances, other.position) {
					distances.insert(other.position, other_cost);
					previous.insert(other.position, current);
					next.push(other.position, other_cost, other_cost);
				}
			}
		}

		// only reached once every Node connected to `start` has been finalized
		debug!(
			"uniform cost: frontier exhausted, {} unreachable from {}",
			end.position, start.position
		);
		Ok(None)
	}
}
