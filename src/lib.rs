#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to plan cheap routes across weighted Grids.
//!
//! ## Introduction
//! A route planner is asked to get from one Cell of a Grid to another while spending as little
//! fuel as possible. Every Cell has a weight that says how expensive it is to enter it: open
//! ground is cheap, rough terrain is expensive. This crate provides two planners for that
//! problem, both built on a priority queue:
//!
//! - [`UniformCostPlanner`]: Dijkstra's Algorithm moving in all 8 directions. Diagonal steps
//!   cost `sqrt(2)` times the weight of the Cell stepped onto.
//! - [`AStarPlanner`]: A* restricted to the 4 orthogonal directions, every step costs the weight
//!   of the Cell stepped onto.
//!
//! Both implement the [`PathPlanner`] trait, so callers can choose the strategy at runtime,
//! either through `&dyn PathPlanner` or the [`Planner`] enum.
//!
//! ## Examples
//! Creating the Grid:
//! ```
//! use fuel_pathfinding::prelude::*;
//!
//! // fuel needed to enter each cell
//! let weights = [
//!     [1.0, 1.0, 1.0, 1.0],
//!     [1.0, 9.0, 9.0, 1.0],
//!     [1.0, 9.0, 1.0, 1.0],
//!     [1.0, 1.0, 1.0, 1.0],
//! ];
//!
//! let grid = Grid::from_fn(4, 4, |pos| weights[pos.x as usize][pos.y as usize])?;
//! # Ok::<(), fuel_pathfinding::Error>(())
//! ```
//! Grids are immutable and validated on construction: they have to be rectangular and every
//! weight has to be finite and greater than zero.
//!
//! ### Pathfinding
//! ```
//! # use fuel_pathfinding::prelude::*;
//! # let weights = [
//! #     [1.0, 1.0, 1.0, 1.0],
//! #     [1.0, 9.0, 9.0, 1.0],
//! #     [1.0, 9.0, 1.0, 1.0],
//! #     [1.0, 1.0, 1.0, 1.0],
//! # ];
//! # let grid = Grid::from_fn(4, 4, |pos| weights[pos.x as usize][pos.y as usize])?;
//! let start = grid[(0, 0)];
//! let goal = grid[(2, 2)];
//!
//! // find_path returns Ok(Some(Path)) on success
//! let path = AStarPlanner::new().find_path(&grid, &start, &goal)?;
//!
//! let path = path.expect("all cells are reachable");
//! assert_eq!(path.last(), Some(&goal));
//! // the start is not part of the Path
//! // the 9s are avoided
//! assert_eq!(path.len(), 6);
//! assert_eq!(path.cost(), 6.0);
//! # Ok::<(), fuel_pathfinding::Error>(())
//! ```
//! An unreachable goal is reported as `Ok(None)`. `Err` is only returned for Nodes that are
//! not part of the Grid.
//!
//! ### Configuration
//! [`PlannerConfig`] selects the [`CostModel`] of the [`UniformCostPlanner`] and can cap the
//! number of expanded Nodes of either planner:
//! ```
//! # use fuel_pathfinding::prelude::*;
//! let grid = Grid::from_fn(50, 50, |_| 1.0)?;
//! let planner = UniformCostPlanner::with_config(PlannerConfig::bounded(10));
//!
//! // gives up long before reaching the far corner
//! assert_eq!(planner.find_path(&grid, &grid[(0, 0)], &grid[(49, 49)])?, None);
//! # Ok::<(), fuel_pathfinding::Error>(())
//! ```
//!
//! ## Logging
//! The planners report finished and abandoned searches through the [`log`] facade. No logger
//! is installed by this crate.

mod position;
pub use self::position::{Position, PositionMap, PositionSet};

mod node;
pub use self::node::Node;

mod grid;
pub use self::grid::Grid;

mod error;
pub use self::error::Error;

mod cost;
pub use self::cost::{Cost, CostModel};

mod config;
pub use self::config::PlannerConfig;

mod path;
pub use self::path::Path;

pub mod neighbors;

mod search;

pub mod planner;
pub use self::planner::{AStarPlanner, PathPlanner, Planner, UniformCostPlanner};

/// The types needed for most route planning
pub mod prelude {
	pub use crate::planner::find_paths;
	pub use crate::{
		AStarPlanner, CostModel, Grid, Node, Path, PathPlanner, Planner, PlannerConfig, Position,
		UniformCostPlanner,
	};
}
