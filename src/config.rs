use crate::CostModel;

/// Options for configuring the planners
///
/// Default options:
/// ```
/// # use fuel_pathfinding::{CostModel, PlannerConfig};
/// assert_eq!(
/// 	PlannerConfig {
/// 		cost_model: CostModel::WeightScaled,
/// 		max_expansions: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
	/// How the Cost of a step is calculated (defaults to [`CostModel::WeightScaled`]).
	///
	/// Only the [`UniformCostPlanner`](crate::UniformCostPlanner) uses this option. The
	/// [`AStarPlanner`](crate::AStarPlanner) moves orthogonally and always pays the weight of
	/// the destination Node.
	pub cost_model: CostModel,
	/// `None` (default): search until the goal is reached or the Grid is exhausted.
	///
	/// `Some(n)`: give up and report that no Path exists after `n` Nodes have been expanded.
	///
	/// Use this to bound the time spent on a single search on large Grids.
	pub max_expansions: Option<usize>,
}

impl PlannerConfig {
	/// a PlannerConfig that reproduces the purely geometric costs of earlier planners
	///
	/// Values:
	/// ```
	/// # use fuel_pathfinding::{CostModel, PlannerConfig};
	/// assert_eq!(
	/// 	PlannerConfig {
	/// 		cost_model: CostModel::Geometric,
	/// 		max_expansions: None,
	/// 	},
	/// 	PlannerConfig::LEGACY_GEOMETRIC
	/// );
	/// ```
	pub const LEGACY_GEOMETRIC: PlannerConfig = PlannerConfig {
		cost_model: CostModel::Geometric,
		max_expansions: None,
	};

	/// Creates a default PlannerConfig that stops after `max_expansions` expanded Nodes
	pub const fn bounded(max_expansions: usize) -> PlannerConfig {
		PlannerConfig {
			cost_model: CostModel::WeightScaled,
			max_expansions: Some(max_expansions),
		}
	}
}

impl Default for PlannerConfig {
	fn default() -> PlannerConfig {
		PlannerConfig {
			cost_model: CostModel::WeightScaled,
			max_expansions: None,
		}
	}
}
