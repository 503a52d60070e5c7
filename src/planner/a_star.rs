use super::{check_endpoints, PathPlanner};
use crate::neighbors::{neighbors, MANHATTAN_DIRECTIONS};
use crate::search::{best_cost, reconstruct, Element, Frontier};
use crate::{Cost, Error, Grid, Node, Path, PlannerConfig, Position, PositionMap};

use log::{debug, trace, warn};

/// A* over the 4 orthogonal neighbors of every Node.
///
/// Every step costs the weight of the Node stepped onto. The heuristic is the weight of the
/// goal, the same value for every candidate. It never overestimates, so Paths are still the
/// cheapest orthogonal ones, but it does not steer the search towards the goal either: the
/// search expands Nodes in the same order as a plain uniform cost search would.
///
/// The [`CostModel`](crate::CostModel) of the [`PlannerConfig`] is ignored, only
/// `max_expansions` applies.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::prelude::*;
/// let grid = Grid::from_fn(3, 3, |_| 1.0)?;
/// let (start, end) = (grid[(0, 0)], grid[(2, 2)]);
///
/// let path = AStarPlanner::new()
/// 	.find_path(&grid, &start, &end)?
/// 	.expect("every Node of a Grid is reachable");
///
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.cost(), 4.0);
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStarPlanner {
	config: PlannerConfig,
}

impl AStarPlanner {
	/// the offsets Nodes are expanded along: orthogonal only
	pub const DIRECTIONS: &'static [Position] = &MANHATTAN_DIRECTIONS;

	/// Creates a planner with the default [`PlannerConfig`]
	pub fn new() -> AStarPlanner {
		AStarPlanner::default()
	}

	/// Creates a planner with a custom [`PlannerConfig`]
	pub fn with_config(config: PlannerConfig) -> AStarPlanner {
		AStarPlanner { config }
	}

	/// the config this planner was created with
	pub fn config(&self) -> &PlannerConfig {
		&self.config
	}

	/// The estimate for reaching `goal` from `_node`: the weight of `goal`
	pub fn heuristic(_node: &Node, goal: &Node) -> Cost {
		goal.weight
	}
}

impl PathPlanner for AStarPlanner {
	fn find_path(&self, grid: &Grid, start: &Node, end: &Node) -> Result<Option<Path>, Error> {
		check_endpoints(grid, start, end)?;

		let mut g_score: PositionMap<Cost> = PositionMap::with_capacity(grid.len());
		let mut previous: PositionMap<Position> = PositionMap::with_capacity(grid.len());
		let mut next = Frontier::with_capacity(grid.len() / 2);

		g_score.insert(start.position, 0.0);
		next.push(start.position, 0.0, Self::heuristic(start, end));

		let mut expanded = 0;

		while let Some(Element {
			position: current,
			cost: current_cost,
			..
		}) = next.pop()
		{
			if current == end.position {
				let steps = reconstruct(grid, &previous, start.position, current);
				debug!(
					"a*: reached {} after {} expansions, cost {}",
					current, expanded, current_cost
				);
				return Ok(Some(Path::new(steps, current_cost)));
			}

			if current_cost > best_cost(&g_score, current) {
				continue;
			}

			if let Some(limit) = self.config.max_expansions {
				if expanded >= limit {
					warn!(
						"a*: gave up on {} -> {} after {} expansions",
						start.position, end.position, expanded
					);
					return Ok(None);
				}
			}
			expanded += 1;

			let current_node = &grid[current];
			trace!("a*: expanding {} at {}", current, current_cost);

			for other in neighbors(grid, current_node, Self::DIRECTIONS) {
				let other_cost = current_cost + other.weight;
				if other_cost < best_cost(&g_score, other.position) {
					g_score.insert(other.position, other_cost);
					previous.insert(other.position, current);
					next.push(
						other.position,
						other_cost,
						other_cost + Self::heuristic(other, end),
					);
				}
			}
		}

		// only reached once every Node connected to `start` has been expanded
		debug!(
			"a*: frontier exhausted, {} unreachable from {}",
			end.position, start.position
		);
		Ok(None)
	}
}
