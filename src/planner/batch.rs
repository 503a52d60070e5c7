use super::PathPlanner;
use crate::{Error, Grid, Node, Path};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one search per `(start, end)` pair against the same Grid.
///
/// The results are in the same order as `queries`. With the `parallel` feature enabled the
/// searches are spread across the rayon thread pool, otherwise they run one after another.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use fuel_pathfinding::prelude::*;
/// let grid = Grid::from_fn(4, 4, |_| 1.0)?;
/// let queries = [
/// 	(grid[(0, 0)], grid[(3, 3)]),
/// 	(grid[(3, 0)], grid[(0, 3)]),
/// 	(grid[(1, 1)], grid[(1, 1)]),
/// ];
///
/// let paths = find_paths(&UniformCostPlanner::new(), &grid, &queries);
///
/// assert_eq!(paths.len(), 3);
/// assert_eq!(paths[0].as_ref().map(|path| path.as_ref().map(|path| path.len())), Ok(Some(3)));
/// assert_eq!(paths[2].as_ref().map(|path| path.as_ref().map(|path| path.len())), Ok(Some(0)));
/// # Ok::<(), fuel_pathfinding::Error>(())
/// ```
pub fn find_paths<P>(
	planner: &P,
	grid: &Grid,
	queries: &[(Node, Node)],
) -> Vec<Result<Option<Path>, Error>>
where
	P: PathPlanner + Sync + ?Sized,
{
	#[cfg(feature = "parallel")]
	{
		queries
			.par_iter()
			.map(|(start, end)| planner.find_path(grid, start, end))
			.collect()
	}

	#[cfg(not(feature = "parallel"))]
	{
		queries
			.iter()
			.map(|(start, end)| planner.find_path(grid, start, end))
			.collect()
	}
}
