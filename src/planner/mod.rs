//! The planners and the [`PathPlanner`] trait they share.

mod uniform_cost;
pub use self::uniform_cost::UniformCostPlanner;

mod a_star;
pub use self::a_star::AStarPlanner;

mod batch;
pub use self::batch::find_paths;

use crate::{Error, Grid, Node, Path};
use std::fmt::Debug;

/// Finds a Path between two Nodes of a [`Grid`].
///
/// Implementations differ in how they may move across the Grid and how steps are priced, but
/// they all agree on the result:
/// - `Ok(Some(path))` if `end` is reachable. `path` excludes `start` and ends with `end`. If
///   `start == end` the Path is empty and has a Cost of `0`.
/// - `Ok(None)` if `end` cannot be reached.
/// - `Err(Error::NodeNotInGrid)` if `start` or `end` are not part of `grid`.
///
/// All state of a search lives inside the call, so one Grid and one planner can serve any
/// number of concurrent searches.
pub trait PathPlanner: Debug {
	/// Searches for the cheapest Path from `start` to `end`
	fn find_path(&self, grid: &Grid, start: &Node, end: &Node) -> Result<Option<Path>, Error>;
}

/// Either of the two planners, for callers that pick a strategy at runtime.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::prelude::*;
/// let grid = Grid::from_fn(3, 3, |_| 1.0)?;
/// let (start, end) = (grid[(0, 0)], grid[(2, 2)]);
///
/// for planner in [Planner::from(UniformCostPlanner::new()), AStarPlanner::new().into()] {
/// 	let path = planner.find_path(&grid, &start, &end)?;
/// 	assert_eq!(path.and_then(|path| path.last().copied()), Some(end));
/// }
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Planner {
	/// see [`UniformCostPlanner`]
	UniformCost(UniformCostPlanner),
	/// see [`AStarPlanner`]
	AStar(AStarPlanner),
}

impl PathPlanner for Planner {
	fn find_path(&self, grid: &Grid, start: &Node, end: &Node) -> Result<Option<Path>, Error> {
		match self {
			Planner::UniformCost(planner) => planner.find_path(grid, start, end),
			Planner::AStar(planner) => planner.find_path(grid, start, end),
		}
	}
}

impl From<UniformCostPlanner> for Planner {
	fn from(planner: UniformCostPlanner) -> Planner {
		Planner::UniformCost(planner)
	}
}

impl From<AStarPlanner> for Planner {
	fn from(planner: AStarPlanner) -> Planner {
		Planner::AStar(planner)
	}
}

fn check_endpoints(grid: &Grid, start: &Node, end: &Node) -> Result<(), Error> {
	for node in [start, end] {
		if !grid.contains(node) {
			return Err(Error::NodeNotInGrid {
				position: node.position,
			});
		}
	}
	Ok(())
}
