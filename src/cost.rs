use crate::Node;

/// a Type to represent the Cost of traversing a Node
pub type Cost = f64;

/// How the Cost of a single step between two adjacent Nodes is computed.
///
/// Diagonal steps are `sqrt(2)` times as expensive as orthogonal ones in both models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CostModel {
	/// orthogonal steps cost the weight of the destination Node, diagonal steps `sqrt(2)` times
	/// that weight
	#[default]
	WeightScaled,
	/// the pure Euclidean length of the step, ignoring weights.
	///
	/// Matches the behavior of earlier fuel route planners.
	Geometric,
}

impl CostModel {
	/// Returns the Cost of stepping from `from` onto the adjacent Node `to`
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use fuel_pathfinding::{CostModel, Node, Position};
	/// let from = Node::new(Position::new(0, 0), 1.0);
	/// let side = Node::new(Position::new(0, 1), 3.0);
	/// let diagonal = Node::new(Position::new(1, 1), 3.0);
	///
	/// assert_eq!(CostModel::WeightScaled.step_cost(&from, &side), 3.0);
	/// assert_eq!(CostModel::WeightScaled.step_cost(&from, &diagonal), 3.0 * 2f64.sqrt());
	/// assert_eq!(CostModel::Geometric.step_cost(&from, &side), 1.0);
	/// ```
	pub fn step_cost(self, from: &Node, to: &Node) -> Cost {
		let dx = (from.position.x - to.position.x).abs();
		let dy = (from.position.y - to.position.y).abs();
		let scale = if dx == 0 || dy == 0 {
			1.0
		} else {
			std::f64::consts::SQRT_2
		};
		match self {
			CostModel::WeightScaled => scale * to.weight,
			CostModel::Geometric => scale,
		}
	}

	/// Sums the step Costs of walking from `start` along `steps`.
	///
	/// `steps` excludes `start`, the same way the Paths returned by the planners do.
	pub fn path_cost(self, start: &Node, steps: &[Node]) -> Cost {
		let mut current = start;
		let mut total = 0.0;
		for next in steps {
			total += self.step_cost(current, next);
			current = next;
		}
		total
	}
}
